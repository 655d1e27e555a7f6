use regex::Regex;

use crate::error::MasteryError;
use crate::extract::{RawRecord, extract_raw_records};
use crate::models::{MAX_TOKENS, Record, ScoreSet};

/// Tokens implicitly held once a champion has reached level 6.
const TOKENS_BANKED_AT_LEVEL_SIX: u8 = 2;

/// Converts the token-progress cell into a total token count (0..=5).
///
/// | progress text            | tokens     |
/// |--------------------------|------------|
/// | contains `Max level`     | 5          |
/// | no `token`               | 0          |
/// | `have/3` (level 6 → 7)   | 2 + have   |
/// | `have/2` (level 5 → 6)   | have       |
///
/// Any other `have/max` pair is a `PatternMismatch`.
pub fn count_total_tokens(progress: &str) -> Result<u8, MasteryError> {
    if progress.contains("Max level") {
        return Ok(MAX_TOKENS);
    }
    if !progress.contains("token") {
        return Ok(0);
    }

    let progress_re =
        Regex::new(r"([0-9])/([0-9])").map_err(|error| MasteryError::Internal(error.to_string()))?;
    let captures = progress_re
        .captures(progress)
        .ok_or_else(|| MasteryError::PatternMismatch {
            text: progress.to_string(),
        })?;

    let have = digit_value(&captures[1]);
    let max = digit_value(&captures[2]);
    match (have, max) {
        (have, 3) if have <= 3 => Ok(TOKENS_BANKED_AT_LEVEL_SIX + have),
        (have, 2) if have <= 2 => Ok(have),
        _ => Err(MasteryError::PatternMismatch {
            text: progress.to_string(),
        }),
    }
}

fn digit_value(digit: &str) -> u8 {
    digit.bytes().next().map_or(0, |byte| byte - b'0')
}

fn parse_field<T>(raw: &RawRecord, field: &'static str, value: &str) -> Result<T, MasteryError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|source| MasteryError::InvalidField {
            champion: raw.champion.clone(),
            field,
            value: value.to_string(),
            source,
        })
}

pub fn grade_record(raw: &RawRecord) -> Result<Record, MasteryError> {
    Ok(Record {
        champion: raw.champion.clone(),
        level: parse_field(raw, "level", &raw.level)?,
        points: parse_field(raw, "points", &raw.points)?,
        tokens: count_total_tokens(&raw.token_progress)?,
    })
}

/// Extracts and grades every champion row of one account's page.
pub fn parse_account_scores(document: &str) -> Result<ScoreSet, MasteryError> {
    extract_raw_records(document)?
        .iter()
        .map(grade_record)
        .collect()
}
