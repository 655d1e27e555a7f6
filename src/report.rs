use std::fmt::Write as _;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{MAX_LEVEL, Record, ScoreSet};
use crate::stats::MasteryStats;

pub const POINTS_PER_BAR_MARK: u64 = 2000;
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Level, name, points and one `*` per token.
    #[default]
    Text,
    /// Level, name and a bar of `X` marks, one per 2000 points.
    Visual,
}

impl DisplayMode {
    #[must_use]
    pub fn from_visual_flag(visual: bool) -> Self {
        if visual { Self::Visual } else { Self::Text }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub display: DisplayMode,
}

/// Records by points, highest first. Equal points keep set order.
#[must_use]
pub fn rank_records(scores: &ScoreSet) -> Vec<&Record> {
    let mut ranked = scores.iter().collect::<Vec<_>>();
    ranked.sort_by(|left, right| right.points.cmp(&left.points));
    ranked
}

fn points_bar(points: u64) -> String {
    let marks = usize::try_from(points / POINTS_PER_BAR_MARK).unwrap_or(usize::MAX);
    if marks == 0 {
        ".".to_string()
    } else {
        "X".repeat(marks)
    }
}

fn render_line(rank: usize, record: &Record, display: DisplayMode) -> String {
    let rank = rank.to_string();
    match display {
        DisplayMode::Text => format!(
            "{rank:<4} Lv{} {:<15}  Points {:<7} {}",
            record.level,
            record.champion,
            record.points,
            "*".repeat(usize::from(record.tokens)),
        ),
        DisplayMode::Visual => format!(
            "{rank:<4} Lv{} {:>15} {}",
            record.level,
            record.champion,
            points_bar(record.points),
        ),
    }
}

#[must_use]
pub fn render_score_list(scores: &ScoreSet, display: DisplayMode) -> String {
    rank_records(scores)
        .into_iter()
        .enumerate()
        .map(|(index, record)| render_line(index + 1, record, display))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_report(
    combined: &ScoreSet,
    stats: &MasteryStats,
    options: &ReportOptions,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push_str(&render_score_list(combined, options.display));
    out.push_str("\n\n");

    let _ = writeln!(out, "Total mastery: {}", stats.total_points);
    out.push('\n');

    out.push_str("Per account:\n");
    let distribution = stats
        .account_shares
        .iter()
        .map(|share| {
            format!(
                "{:<20}{:<10}{}%",
                share.account,
                share.points,
                share.percent()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&distribution);
    out.push_str("\n\n");

    out.push_str("Number of champions with each mastery level earned:\n");
    let levels = (1..=MAX_LEVEL)
        .rev()
        .map(|level| format!("M{level}: {}", stats.thresholds.get(level)))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&levels);
    out.push_str("\n\n");

    out.push_str("This looks like:\n");
    out.push_str(&stats.visualization);
    out.push_str("\n\n");

    let _ = writeln!(
        out,
        "collated mastery as of {}",
        generated_at.format(GENERATED_AT_FORMAT)
    );
    out
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollatedReport<'a> {
    pub generated_at: String,
    pub ranked: Vec<&'a Record>,
    #[serde(flatten)]
    pub stats: &'a MasteryStats,
}

#[must_use]
pub fn collated_report<'a>(
    combined: &'a ScoreSet,
    stats: &'a MasteryStats,
    generated_at: NaiveDateTime,
) -> CollatedReport<'a> {
    CollatedReport {
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        ranked: rank_records(combined),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{
        DisplayMode, ReportOptions, collated_report, rank_records, render_report,
        render_score_list,
    };
    use crate::aggregate::combine_scores;
    use crate::models::{AccountScores, Record, ScoreSet};
    use crate::stats::compute_stats;

    fn set(records: &[(&str, u8, u64, u8)]) -> ScoreSet {
        records
            .iter()
            .map(|&(champion, level, points, tokens)| Record::new(champion, level, points, tokens))
            .collect()
    }

    #[test]
    fn ties_keep_set_order() {
        let scores = set(&[("Zed", 4, 500, 0), ("Ahri", 5, 900, 1), ("Lux", 4, 500, 0)]);
        let ranked = rank_records(&scores)
            .into_iter()
            .map(|record| record.champion.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ranked, vec!["Ahri", "Zed", "Lux"]);
    }

    #[test]
    fn text_mode_line() {
        let scores = set(&[("Ahri", 6, 45_000, 3), ("Zed", 1, 120, 0)]);
        assert_eq!(
            render_score_list(&scores, DisplayMode::Text),
            "1    Lv6 Ahri             Points 45000   ***\n\
             2    Lv1 Zed              Points 120     "
        );
    }

    #[test]
    fn visual_mode_line() {
        let scores = set(&[("Ahri", 6, 9_999, 3), ("Zed", 1, 1_999, 0)]);
        assert_eq!(
            render_score_list(&scores, DisplayMode::Visual),
            "1    Lv6            Ahri XXXX\n\
             2    Lv1             Zed ."
        );
    }

    #[test]
    fn full_report_layout() {
        let accounts = vec![
            AccountScores {
                account: "main".to_string(),
                scores: set(&[("Ahri", 7, 700, 5)]),
            },
            AccountScores {
                account: "smurf".to_string(),
                scores: set(&[("Zed", 2, 300, 0)]),
            },
        ];
        let combined = combine_scores(accounts.iter().map(|account| &account.scores));
        let stats = compute_stats(&accounts, &combined);
        let generated_at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(14, 5, 7))
            .expect("valid timestamp");

        let report = render_report(&combined, &stats, &ReportOptions::default(), generated_at);
        let expected = [
            "1    Lv7 Ahri             Points 700     *****",
            "2    Lv2 Zed              Points 300     ",
            "",
            "Total mastery: 1000",
            "",
            "Per account:",
            "main                700       70.0%",
            "smurf               300       30.0%",
            "",
            "Number of champions with each mastery level earned:",
            "M7: 1",
            "M6: 1",
            "M5: 1",
            "M4: 1",
            "M3: 1",
            "M2: 2",
            "M1: 2",
            "",
            "This looks like:",
            "72",
            "",
            "collated mastery as of 2024-03-09, 14:05:07",
            "",
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn json_view_flattens_stats() {
        let accounts = vec![AccountScores {
            account: "main".to_string(),
            scores: set(&[("Ahri", 5, 100, 1)]),
        }];
        let combined = combine_scores(accounts.iter().map(|account| &account.scores));
        let stats = compute_stats(&accounts, &combined);
        let generated_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");

        let value = serde_json::to_value(collated_report(&combined, &stats, generated_at))
            .expect("serializable");
        assert_eq!(value["total_points"], 100);
        assert_eq!(value["ranked"][0]["champion"], "Ahri");
        assert_eq!(value["thresholds"][4], 1);
        assert_eq!(value["account_shares"][0]["share_per_mille"], 1000);
    }

    #[test]
    fn visual_flag_selects_mode() {
        assert_eq!(DisplayMode::from_visual_flag(true), DisplayMode::Visual);
        assert_eq!(DisplayMode::from_visual_flag(false), DisplayMode::Text);
    }
}
