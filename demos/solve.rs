extern crate itertools;
extern crate tracesat;

use itertools::Itertools;
use tracesat::{dimacs, parser, Instance, Outcome, SolverConfig};
use std::{env, process};

use thiserror::Error;

#[derive(Error, Debug)]
enum Error {
    #[error("failed to parse dimacs input")]
    Dimacs(#[from] dimacs::DimacsError),
    #[error("failed to parse formula")]
    Formula(#[from] parser::ParseError),
    #[error("failed to serialize trace")]
    Json(#[from] serde_json::Error),
}

struct Options {
    path: String,
    show_trace: bool,
    json: bool,
    pure_literals: bool,
}

const USAGE: &str = "solve [--trace] [--json] [--no-pure] [path to .cnf or formula file]";

fn main() {
    env_logger::init();
    let options = match parse_args(env::args().skip(1)) {
        Some(options) => options,
        None => {
            eprintln!("{}", USAGE);
            process::exit(-1);
        }
    };
    match run(&options) {
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("execution failed");
            process::exit(-1);
        }
        Ok(()) => return,
    }
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Option<Options> {
    let mut path = None;
    let mut options = Options {
        path: String::new(),
        show_trace: false,
        json: false,
        pure_literals: true,
    };
    for arg in args {
        match arg.as_str() {
            "--trace" => options.show_trace = true,
            "--json" => options.json = true,
            "--no-pure" => options.pure_literals = false,
            _ if arg.starts_with("--") => return None,
            _ if path.is_none() => path = Some(arg),
            _ => return None,
        }
    }
    options.path = path?;
    Some(options)
}

fn load(path: &str) -> Result<Instance, Error> {
    if path.ends_with(".cnf") {
        Ok(dimacs::parse(path)?)
    } else {
        Ok(parser::parse_file(path)?)
    }
}

fn run(options: &Options) -> Result<(), Error> {
    let instance = load(&options.path)?;
    eprintln!("evaluating {}", instance);

    let config = SolverConfig::default()
        .with_trace(options.show_trace || options.json)
        .with_pure_literal_elimination(options.pure_literals);
    let sol = instance.solve_with(config);

    if options.json {
        println!("{}", sol.trace_json()?);
    } else if options.show_trace {
        for line in sol.trace_lines() {
            println!("{}", line);
        }
    }

    match sol.outcome() {
        Outcome::Unsatisfiable => println!("s UNSATISFIABLE"),
        Outcome::Interrupted => println!("s UNKNOWN"),
        Outcome::Satisfied(assignment) => {
            println!("s SATISFIABLE");
            let verified = instance.check(assignment);
            let solution = sol
                .named_assignment()
                .unwrap_or_default()
                .iter()
                .map(|(name, value)| format!("{}{}", if *value { "" } else { "!" }, name))
                .join(" ");
            println!("v {}", solution);
            println!("c verified: {}", verified);
        }
    }
    eprintln!("{:?}", sol.stats);
    Ok(())
}
