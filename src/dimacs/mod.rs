use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num,
};

use log::warn;

use crate::{problem_builder::ProblemBuilder, solver::Instance, Literal};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("malformed header")]
    MalformedHeader,
    #[error("io error")]
    IO(#[from] io::Error),
    #[error("not a valid value")]
    ParseError(#[from] num::ParseIntError),
}

type Result<T> = std::result::Result<T, DimacsError>;

pub fn parse(filename: &str) -> Result<Instance> {
    let file = File::open(filename)?;
    parse_reader(BufReader::new(&file))
}

pub fn parse_str(input: &str) -> Result<Instance> {
    parse_reader(input.as_bytes())
}

/// Reads a DIMACS CNF problem. Variables are named after their DIMACS index.
pub fn parse_reader<R: BufRead>(buffer: R) -> Result<Instance> {
    let mut words = buffer
        .lines()
        // Filter out lines starting with c - these are comments
        .filter(|l| match l {
            Ok(line) => line.trim_start().chars().next() != Some('c'),
            // Keep errors! We need to terminate ASAP
            _ => true,
        })
        .flat_map(|line| match line {
            Ok(iter) => iter
                .split_ascii_whitespace()
                .map(|w| Ok(w.to_string()))
                .collect::<Vec<Result<String>>>(),
            Err(err) => vec![Err(err.into())],
        });

    let header = DimacsHeader::parse(&mut words)?;

    let mut pb = ProblemBuilder::new();
    let mut current_clause: Vec<Literal> = vec![];

    for mb_word in words {
        let word = mb_word?;
        // Some benchmark files end with a "%" line followed by a stray 0
        if word == "%" {
            break;
        }
        match word.parse::<i64>()? {
            0 => {
                pb.clause(&current_clause);
                current_clause.clear();
            }
            encoded_value => {
                let polarity = encoded_value > 0;
                let value = encoded_value.unsigned_abs();
                current_clause.push(pb.lit(&value.to_string(), polarity));
            }
        }
    }
    if !current_clause.is_empty() {
        pb.clause(&current_clause);
    }

    if pb.clause_count() as u64 != header.clause_count {
        warn!(
            "header declares {} clauses, found {}",
            header.clause_count,
            pb.clause_count()
        );
    }
    Ok(pb.build())
}

#[derive(Debug, Clone)]
struct DimacsHeader {
    #[allow(dead_code)]
    var_count: u64,
    clause_count: u64,
}

impl DimacsHeader {
    fn parse<I>(words: &mut I) -> Result<Self>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut next = || match words.next() {
            Some(x) => x,
            None => Err(DimacsError::MalformedHeader),
        };

        let p = next()?;
        let cnf = next()?;
        if p != "p" || cnf != "cnf" {
            return Err(DimacsError::MalformedHeader);
        }
        let var_count = next()?;
        let clause_count = next()?;
        Ok(Self {
            var_count: var_count.parse::<u64>()?,
            clause_count: clause_count.parse::<u64>()?,
        })
    }
}
