use crate::aggregate::combine_scores;
use crate::error::MasteryError;
use crate::grade::parse_account_scores;
use crate::models::{AccountScores, ScoreSet};
use crate::source_scraper::PageSource;
use crate::stats::{MasteryStats, compute_stats};

/// Everything a report is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collation {
    pub accounts: Vec<AccountScores>,
    pub combined: ScoreSet,
    pub stats: MasteryStats,
}

/// Fetches and parses every account in list order, one at a time.
///
/// The first failure aborts the whole run.
pub fn collect_account_scores<S>(
    source: &S,
    accounts: &[String],
) -> Result<Vec<AccountScores>, MasteryError>
where
    S: PageSource + ?Sized,
{
    let mut collected = Vec::with_capacity(accounts.len());
    for account in accounts {
        let page = source.fetch_page(account)?;
        let scores = parse_account_scores(&page)?;
        tracing::debug!(
            account = %account,
            champions = scores.len(),
            points = scores.total_points(),
            "parsed mastery page"
        );
        collected.push(AccountScores {
            account: account.clone(),
            scores,
        });
    }
    Ok(collected)
}

#[must_use]
pub fn collate_scores(accounts: Vec<AccountScores>) -> Collation {
    let combined = combine_scores(accounts.iter().map(|account| &account.scores));
    let stats = compute_stats(&accounts, &combined);
    Collation {
        accounts,
        combined,
        stats,
    }
}

pub fn collate<S>(source: &S, accounts: &[String]) -> Result<Collation, MasteryError>
where
    S: PageSource + ?Sized,
{
    let collected = collect_account_scores(source, accounts)?;
    Ok(collate_scores(collected))
}
