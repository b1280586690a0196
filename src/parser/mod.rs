//! Reads formulas written by hand, either as JSON (`[["a", "b", "!c"], ["!a", "d"]]`) or in
//! infix form (`(a | b | !c) & (!a | d)`). A leading `!` negates a variable.
use std::{fs, io, path::Path};

use crate::{problem_builder::ProblemBuilder, solver::Instance};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("clause {0} is blank; write () for an empty clause")]
    EmptyClause(usize),
    #[error("empty variable name in clause {0}")]
    EmptyVariable(usize),
    #[error("invalid variable name {1:?} in clause {0}")]
    InvalidVariable(usize, String),
    #[error("input must be a list of lists of strings")]
    InvalidJson(#[from] serde_json::Error),
    #[error("io error")]
    IO(#[from] io::Error),
}

type Result<T> = std::result::Result<T, ParseError>;

const NEGATION: char = '!';
const RESERVED: &[char] = &['!', '|', '&', '(', ')', '[', ']', '"', ','];

pub fn parse_formula(input: &str) -> Result<Instance> {
    let trimmed = input.trim();
    if trimmed.starts_with('[') {
        parse_json(trimmed)
    } else {
        parse_infix(trimmed)
    }
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Instance> {
    let contents = fs::read_to_string(path)?;
    parse_formula(&contents)
}

fn parse_json(input: &str) -> Result<Instance> {
    let clauses: Vec<Vec<String>> = serde_json::from_str(input)?;
    build(clauses.iter().map(|c| c.iter().map(String::as_str).collect()))
}

fn parse_infix(input: &str) -> Result<Instance> {
    if input.is_empty() {
        return build(std::iter::empty());
    }
    let clauses = input
        .split('&')
        .enumerate()
        .map(|(ix, clause)| {
            let body = clause.replace(['(', ')'], "");
            let body = body.trim();
            if !body.is_empty() {
                Ok(body.split('|').map(|lit| lit.trim().to_string()).collect())
            } else if clause.contains('(') && clause.contains(')') {
                Ok(vec![])
            } else {
                Err(ParseError::EmptyClause(ix))
            }
        })
        .collect::<Result<Vec<Vec<String>>>>()?;
    build(clauses.iter().map(|c| c.iter().map(String::as_str).collect()))
}

fn build<'a, I>(clauses: I) -> Result<Instance>
where
    I: Iterator<Item = Vec<&'a str>>,
{
    let mut pb = ProblemBuilder::new();
    for (ix, tokens) in clauses.enumerate() {
        let mut literals = Vec::with_capacity(tokens.len());
        for token in tokens {
            let (name, polarity) = parse_literal(ix, token)?;
            literals.push(pb.lit(name, polarity));
        }
        pb.clause(&literals);
    }
    Ok(pb.build())
}

fn parse_literal(clause: usize, token: &str) -> Result<(&str, bool)> {
    let (name, polarity) = match token.strip_prefix(NEGATION) {
        Some(rest) => (rest, false),
        None => (token, true),
    };
    if name.is_empty() {
        return Err(ParseError::EmptyVariable(clause));
    }
    if name.contains(RESERVED) || name.contains(char::is_whitespace) {
        return Err(ParseError::InvalidVariable(clause, name.to_string()));
    }
    Ok((name, polarity))
}
