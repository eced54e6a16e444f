//! Scans an operator token into a flag set, for example >= or !=
use super::common::VResult;
use nom::{character::complete::anychar, multi::fold_many1};

use crate::models::OperatorFlags;

/// Folds every character of the token into the flag set. Position and
/// repetition are irrelevant and unrecognized characters are skipped, so
/// "=>", ">=" and ">>==" all scan to the same set. Callers decide whether
/// an empty result set is acceptable.
pub fn operator_flags(input: &str) -> VResult<OperatorFlags> {
    fold_many1(anychar, OperatorFlags::empty, |mut flags, c| {
        match c {
            '>' => flags.insert(OperatorFlags::GREATER),
            '<' => flags.insert(OperatorFlags::LESS),
            '=' => flags.insert(OperatorFlags::EQUAL),
            '!' => flags.insert(OperatorFlags::NOT),
            _ => (),
        }
        flags
    })(input)
}
