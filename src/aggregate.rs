use crate::models::{Record, ScoreSet};

fn merge_record(combined: &mut Record, incoming: &Record) {
    combined.level = combined.level.max(incoming.level);
    combined.points += incoming.points;
    combined.tokens = combined.tokens.max(incoming.tokens);
}

/// Merges any number of per-account score sets into one.
///
/// Level and tokens take the maximum across accounts, points are summed. A
/// champion missing from an account contributes nothing. Champions appear in
/// the order they are first seen.
pub fn combine_scores<'a, I>(accounts: I) -> ScoreSet
where
    I: IntoIterator<Item = &'a ScoreSet>,
{
    let mut combined = ScoreSet::new();
    for account in accounts {
        for record in account {
            match combined.get_mut(&record.champion) {
                Some(existing) => merge_record(existing, record),
                None => {
                    combined.insert(record.clone());
                }
            }
        }
    }
    combined
}

pub fn merge_scores(left: &ScoreSet, right: &ScoreSet) -> ScoreSet {
    combine_scores([left, right])
}
