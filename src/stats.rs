use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::models::{AccountScores, MAX_LEVEL, MAX_TOKENS, ScoreSet};

const VISUALIZATION_LINE_WIDTH: usize = 10;

/// Champion counts per mastery level.
///
/// Levels 1..=6 count champions with at least that level. Level 7 counts
/// champions holding all five tokens, regardless of the level field.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ThresholdCounts([usize; MAX_LEVEL as usize]);

impl ThresholdCounts {
    #[must_use]
    pub fn from_scores(combined: &ScoreSet) -> Self {
        let mut counts = [0; MAX_LEVEL as usize];
        for level in 1..MAX_LEVEL {
            counts[usize::from(level - 1)] = combined
                .iter()
                .filter(|record| record.level >= level)
                .count();
        }
        counts[usize::from(MAX_LEVEL - 1)] = combined
            .iter()
            .filter(|record| record.tokens == MAX_TOKENS)
            .count();
        Self(counts)
    }

    /// Count for `level` in 1..=7; anything else is zero.
    #[must_use]
    pub fn get(&self, level: u8) -> usize {
        match level {
            1..=MAX_LEVEL => self.0[usize::from(level - 1)],
            _ => 0,
        }
    }

    /// One digit per champion rank, highest level first, ten digits per line.
    #[must_use]
    pub fn visualization(&self) -> String {
        let mut out = String::new();
        for rank in 1..=self.get(1) {
            let level = (1..=MAX_LEVEL)
                .rev()
                .find(|&level| self.get(level) >= rank)
                .unwrap_or(1);
            out.push(char::from(b'0' + level));
            if rank % VISUALIZATION_LINE_WIDTH == 0 {
                out.push('\n');
            }
        }
        out
    }
}

/// One account's own points and its share of the combined total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountShare {
    pub account: String,
    pub points: u64,
    /// Share in tenths of a percent, rounded half up.
    pub share_per_mille: u64,
}

impl AccountShare {
    #[must_use]
    pub fn new(account: impl Into<String>, points: u64, total_points: u64) -> Self {
        Self {
            account: account.into(),
            points,
            share_per_mille: share_per_mille(points, total_points),
        }
    }

    #[must_use]
    pub fn percent(&self) -> Percent {
        Percent(self.share_per_mille)
    }
}

/// Tenths of a percent, displayed as `70.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(pub u64);

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[must_use]
pub fn share_per_mille(points: u64, total_points: u64) -> u64 {
    if total_points == 0 {
        return 0;
    }
    let numerator = u128::from(points) * 2000 + u128::from(total_points);
    let rounded = numerator / (u128::from(total_points) * 2);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MasteryStats {
    pub total_points: u64,
    /// Sorted by points, highest first; ties keep account order.
    pub account_shares: Vec<AccountShare>,
    pub thresholds: ThresholdCounts,
    pub visualization: String,
}

#[must_use]
pub fn compute_stats(accounts: &[AccountScores], combined: &ScoreSet) -> MasteryStats {
    let total_points = combined.total_points();

    let mut account_shares = accounts
        .iter()
        .map(|account| AccountShare::new(&account.account, account.scores.total_points(), total_points))
        .collect::<Vec<_>>();
    account_shares.sort_by(|left, right| right.points.cmp(&left.points));

    let thresholds = ThresholdCounts::from_scores(combined);
    let visualization = thresholds.visualization();

    MasteryStats {
        total_points,
        account_shares,
        thresholds,
        visualization,
    }
}
