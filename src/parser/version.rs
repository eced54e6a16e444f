//! Reduces a dotted version string to a flat scalar, for example 1.2.3 to 6
use super::common::VResult;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, satisfy},
    combinator::{map, map_res, value},
    multi::fold_many0,
};

use crate::models::VersionSum;

/// Sums leading segments of the input: digit runs count their numeric value,
/// single letters count their alphabet position, dots separate and count
/// nothing. Scanning stops at the first character that fits none of those,
/// leaving the remainder unconsumed.
pub fn version_sum(input: &str) -> VResult<VersionSum> {
    map(
        fold_many0(segment, || 0u64, |total, part| total.saturating_add(part)),
        VersionSum,
    )(input)
}

fn segment(input: &str) -> VResult<u64> {
    alt((
        map_res(digit1, |digits: &str| digits.parse::<u64>()),
        map(satisfy(|c| c.is_ascii_alphabetic()), letter_value),
        value(0, tag(".")),
    ))(input)
}

// 'a' and 'A' score 1, up through 'z' and 'Z' at 26
fn letter_value(c: char) -> u64 {
    c.to_ascii_lowercase() as u64 - ('a' as u64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of(input: &str) -> u64 {
        let (_, sum) = version_sum(input).unwrap();
        sum.0
    }

    #[test]
    fn test_dotted_fields_are_summed() {
        assert_eq!(sum_of("1.2.3"), 6);
        assert_eq!(sum_of("2022.1"), 2023);
        assert_eq!(sum_of("0"), 0);
    }

    #[test]
    fn test_trailing_zero_fields_do_not_count() {
        assert_eq!(sum_of("1.0"), sum_of("1.0.0"));
        assert_eq!(sum_of("1.0"), 1);
    }

    #[test]
    fn test_letters_score_alphabet_position() {
        assert_eq!(sum_of("1a"), 2);
        assert_eq!(sum_of("1b"), 3);
        assert_eq!(sum_of("1.0a"), 2);
        assert_eq!(sum_of("z"), 26);
    }

    #[test]
    fn test_uppercase_scores_as_lowercase() {
        assert_eq!(sum_of("1.0A"), sum_of("1.0a"));
        assert_eq!(sum_of("Z"), 26);
    }

    #[test]
    fn test_sums_collide_across_field_positions() {
        assert_eq!(sum_of("1.2"), sum_of("2.1"));
    }

    #[test]
    fn test_empty_dot_fields_are_skipped() {
        assert_eq!(sum_of("1..2"), 3);
        assert_eq!(sum_of(".5"), 5);
    }

    #[test]
    fn test_scan_stops_at_foreign_character() {
        let (rest, sum) = version_sum("1.2-rc1").unwrap();
        assert_eq!(sum.0, 3);
        assert_eq!(rest, "-rc1");

        let (rest, sum) = version_sum("1 2").unwrap();
        assert_eq!(sum.0, 1);
        assert_eq!(rest, " 2");

        let (rest, sum) = version_sum("@").unwrap();
        assert_eq!(sum.0, 0);
        assert_eq!(rest, "@");
    }
}
