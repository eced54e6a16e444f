//! Provides parsing and validation of command line arguments into
//! the comparison options required by the engine

use crate::{
    engine::Opts as EngineOpts,
    normalize::collapse_whitespace,
    parser::parse_operator,
};

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use colored::*;

pub struct CLI {
    matches: clap::ArgMatches,
}

impl CLI {
    pub fn init() -> Result<CLI> {
        let matches = get_cli_definition().get_matches();
        let cli = CLI { matches };

        Ok(cli)
    }

    pub fn get_engine_options(&self) -> Result<EngineOpts> {
        let (lhs, operator, rhs) = self.get_comparison_triple()?;

        let flags = match parse_operator(&operator) {
            Ok(flags) => flags,
            Err(_) => {
                print_usage();
                return Err(anyhow!("Invalid operator sequence: '{}'", operator));
            }
        };

        Ok(EngineOpts { flags, lhs, rhs })
    }

    /// Routes the two invocation forms onto one (v1, operator, v2) triple.
    /// A single argument is collapsed and split on spaces; three arguments
    /// are collapsed independently. Tokens or arguments past the third are
    /// accepted and dropped.
    fn get_comparison_triple(&self) -> Result<(String, String, String)> {
        let matches = &self.matches;

        let input = match matches.get_one::<String>("input") {
            Some(input) => input,
            None => {
                print_usage();
                return Err(anyhow!("Not enough arguments."));
            }
        };

        let operator = matches.get_one::<String>("operator");
        let version2 = matches.get_one::<String>("version2");

        match (operator, version2) {
            (Some(operator), Some(version2)) => Ok((
                collapse_whitespace(input),
                collapse_whitespace(operator),
                collapse_whitespace(version2),
            )),
            (None, _) => split_combined(input),
            (Some(_), None) => {
                print_usage();
                Err(anyhow!("Not enough arguments."))
            }
        }
    }
}

fn split_combined(raw: &str) -> Result<(String, String, String)> {
    let collapsed = collapse_whitespace(raw);
    let mut tokens = collapsed.split(' ');

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(lhs), Some(operator), Some(rhs)) => {
            Ok((lhs.to_string(), operator.to_string(), rhs.to_string()))
        }
        _ => {
            print_usage();
            Err(anyhow!(
                "Invalid version spec (missing whitespace or token?): '{}'",
                raw
            ))
        }
    }
}

fn get_cli_definition() -> Command {
    Command::new("vercheck")
        .version("0.2.1")
        .about("Compares two version strings with a relational operator")
        .arg(
            Arg::new("input")
                .help("A combined \"<v1> <operator> <v2>\" expression, or the first version")
                .index(1),
        )
        .arg(
            Arg::new("operator")
                .help("The relational operator, built from the characters ><=!")
                .index(2),
        )
        .arg(
            Arg::new("version2")
                .help("The second version")
                .index(3),
        )
        .arg(
            Arg::new("extra")
                .help("Further arguments are accepted and ignored")
                .hide(true)
                .action(ArgAction::Append)
                .num_args(0..)
                .index(4),
        )
}

/// Prints the worked examples block for both invocation forms
fn print_usage() {
    let name = "vercheck";
    let examples = [(">", "0"), (">=", "1"), ("<", "0"), ("<=", "1"), ("!=", "0"), ("=", "1")];

    println!("usage: {} {{\"<v1> <operator> <v2>\" | <v1> <operator> <v2>}}", name);
    println!();

    println!("{}", "{v} execution example:".bold());
    for (operator, output) in examples {
        println!("    {} \"1.2.3 {} 1.2.3\"", name, operator);
        println!("    {}", output);
    }
    println!();

    println!("{}", "{v1} {operator} {v2} execution example:".bold());
    for (operator, output) in examples {
        println!("    {} \"1.2.3\" \"{}\" \"1.2.3\"", name, operator);
        println!("    {}", output);
    }
    println!();
}
