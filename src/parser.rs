//! Operator tokens and version strings have small formats of their own that
//! need to be parsed before a comparison can run.

mod common;
mod operator;
mod version;

use nom::error::convert_error;

use tracing::{event, instrument, Level};

use crate::models::{OperatorFlags, VersionSum};
use crate::normalize::is_blank_str;

use anyhow::{anyhow, Result};

/// Scans an operator token into its flag set. Empty input and input with no
/// recognized operator character at all are rejected; anything else scans.
#[instrument]
pub fn parse_operator(input: &str) -> Result<OperatorFlags> {
    if is_blank_str(input) {
        return Err(anyhow!("Empty operator sequence"));
    }

    let (_, flags) = run_parser(input, operator::operator_flags)?;
    if flags.is_empty() {
        return Err(anyhow!("No operator character in '{}'", input));
    }

    event!(Level::DEBUG, "Parsed operator '{}' to {:?}", input, flags);
    Ok(flags)
}

/// Reduces a version string to its scalar sum. Empty and blank-only input is
/// rejected; trailing input past the last recognized segment is ignored.
#[instrument]
pub fn parse_version_sum(input: &str) -> Result<VersionSum> {
    if is_blank_str(input) {
        return Err(anyhow!("Empty version string"));
    }

    let (rest, sum) = run_parser(input, version::version_sum)?;
    if !rest.is_empty() {
        event!(Level::DEBUG, "Ignoring unparsed version remainder '{}'", rest);
    }

    event!(Level::DEBUG, "Reduced version '{}' to {}", input, sum);
    Ok(sum)
}

/// Runs a parser over the input prefix, folding nom's error structure into a
/// message with some context on where parsing failed. The unconsumed
/// remainder is handed back to the caller, which is what distinguishes these
/// scanners from parsers that must consume their whole input.
fn run_parser<'a, T>(
    input: &'a str,
    parser: impl Fn(&'a str) -> common::VResult<'a, T>,
) -> Result<(&'a str, T)> {
    match parser(input) {
        Ok(parsed) => Ok(parsed),
        Err(e) => match e {
            nom::Err::Error(inner_e) | nom::Err::Failure(inner_e) => {
                let fancy_error = convert_error(input, inner_e);
                Err(anyhow!("Failed to parse: {}", fancy_error))
            }
            _ => Err(anyhow!("Failed to parse: {}", e.to_string())),
        },
    }
}
