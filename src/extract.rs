use regex::Regex;

use crate::error::MasteryError;
use crate::models::{FIELDS_PER_RECORD, TABLE_END_MARKER, TABLE_START_MARKER};

/// One text-elimination step applied to the table region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Remove every occurrence of the exact text.
    Literal(&'static str),
    /// Remove every match of the regular expression.
    Pattern(&'static str),
}

/// Elimination rules in application order.
///
/// Later rules assume earlier ones already fired: the tab must go first, and
/// the generic `td ... data-value` rule only matches once the attributed
/// `<td ...>` openers above it have been consumed.
pub const ELIMINATION_RULES: &[Rule] = &[
    Rule::Literal("\t"),
    Rule::Literal(r#"<td data-value="0">"#),
    Rule::Pattern(r#"<img src="/img/chest\.png" class="chest( notEarned)?">"#),
    Rule::Literal(r#"<div class="progressBar-outer">"#),
    Rule::Literal("<tr>"),
    Rule::Literal("</tr>"),
    Rule::Literal("<td>"),
    Rule::Literal("</td>"),
    Rule::Literal("</div>"),
    Rule::Literal("</a>"),
    Rule::Pattern(r#"<td data-format-time="\d+" data-value="\d+" data-toggle="tooltip">"#),
    Rule::Pattern(r#"<div class="progressBar-inner" style="width: \d+(\.\d+)?%">"#),
    Rule::Pattern(r#"<td class="collapsible" data-value="\d+(\.\d+)?" data-tooltip="tooltip" "#),
    Rule::Pattern(r#"title="\d+/\d+ points \(\d+(\.\d+)?%\)">"#),
    Rule::Pattern(r#"<a href="/champion\?champion=\d+">"#),
    Rule::Pattern(r#"td( class="")?( data-format-number="\d+")? data-value="\d+""#),
    Rule::Pattern(r#"<img class="token( notEarned)?" src="/img/token\.png">"#),
    Rule::Literal(r#" data-tooltip="tooltip" title="#),
    Rule::Pattern(r#"<td class="collapsible"  data-value="\d+">"#),
    Rule::Literal("N/A"),
    Rule::Literal("Mastered"),
    Rule::Literal("<>"),
];

const ENTITY_REPLACEMENTS: &[(&str, &str)] = &[("&#x27;", "'"), ("&amp;", "&")];

/// The four raw fields of one champion row, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub champion: String,
    pub level: String,
    pub points: String,
    pub token_progress: String,
}

enum CompiledRule {
    Literal(&'static str),
    Pattern(Regex),
}

fn compile_rules(rules: &[Rule]) -> Result<Vec<CompiledRule>, MasteryError> {
    rules
        .iter()
        .map(|rule| match *rule {
            Rule::Literal(text) => Ok(CompiledRule::Literal(text)),
            Rule::Pattern(pattern) => Regex::new(pattern)
                .map(CompiledRule::Pattern)
                .map_err(|error| MasteryError::Internal(error.to_string())),
        })
        .collect()
}

/// Returns the text strictly between the table boundary markers.
pub fn table_region(document: &str) -> Result<&str, MasteryError> {
    let (_, after_start) = document.split_once(TABLE_START_MARKER).ok_or_else(|| {
        MasteryError::MalformedDocument(format!("missing table start marker {TABLE_START_MARKER}"))
    })?;
    if after_start.contains(TABLE_START_MARKER) {
        return Err(MasteryError::MalformedDocument(format!(
            "table start marker {TABLE_START_MARKER} appears more than once"
        )));
    }

    let (region, rest) = after_start.split_once(TABLE_END_MARKER).ok_or_else(|| {
        MasteryError::MalformedDocument(format!(
            "missing table end marker {TABLE_END_MARKER} after the table start"
        ))
    })?;
    if rest.contains(TABLE_END_MARKER) {
        return Err(MasteryError::MalformedDocument(format!(
            "table end marker {TABLE_END_MARKER} appears more than once after the table start"
        )));
    }
    Ok(region)
}

/// Runs `rules` over one working copy of `region`, strictly in order.
pub fn apply_rules(region: &str, rules: &[Rule]) -> Result<String, MasteryError> {
    let compiled = compile_rules(rules)?;
    let mut working = region.to_string();

    for (step, rule) in compiled.iter().enumerate() {
        working = match rule {
            CompiledRule::Literal(text) => working.replace(text, ""),
            CompiledRule::Pattern(regex) => regex.replace_all(&working, "").into_owned(),
        };
        tracing::trace!(step, remaining = working.len(), "applied elimination rule");
    }

    Ok(working)
}

fn decode_entities(text: &str) -> String {
    ENTITY_REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

fn split_field_lines(text: &str) -> Result<Vec<String>, MasteryError> {
    let whitespace_re =
        Regex::new(r"\s\s+").map_err(|error| MasteryError::Internal(error.to_string()))?;
    let collapsed = whitespace_re.replace_all(text, "\n");

    Ok(collapsed
        .trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reduces a document to its flat sequence of table field lines.
pub fn extract_field_lines(document: &str) -> Result<Vec<String>, MasteryError> {
    let region = table_region(document)?;
    let stripped = apply_rules(region, ELIMINATION_RULES)?;
    let decoded = decode_entities(&stripped);
    split_field_lines(&decoded)
}

/// Groups field lines into rows of four.
///
/// A trailing group of fewer than four lines is dropped without error.
// TODO: decide whether a partial trailing row should become an error once a
// page that produces one has been captured.
pub fn chunk_records(lines: &[String]) -> Vec<RawRecord> {
    let chunks = lines.chunks_exact(FIELDS_PER_RECORD);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        tracing::debug!(leftover, "dropping trailing partial row");
    }

    chunks
        .map(|chunk| RawRecord {
            champion: chunk[0].clone(),
            level: chunk[1].clone(),
            points: chunk[2].clone(),
            token_progress: chunk[3].clone(),
        })
        .collect()
}

pub fn extract_raw_records(document: &str) -> Result<Vec<RawRecord>, MasteryError> {
    let lines = extract_field_lines(document)?;
    Ok(chunk_records(&lines))
}
