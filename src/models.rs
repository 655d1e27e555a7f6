use std::collections::HashMap;

use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://championmastery.gg/summoner";
pub const DEFAULT_REGION: &str = "EUW";
pub const DEFAULT_ACCOUNT: &str = "thebausffs";

pub const TABLE_START_MARKER: &str = r#"<tbody id="tbody">"#;
pub const TABLE_END_MARKER: &str = "</tbody>";

/// Field lines per champion row: name, level, points, token progress.
pub const FIELDS_PER_RECORD: usize = 4;

pub const MAX_LEVEL: u8 = 7;
pub const MAX_TOKENS: u8 = 5;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    pub champion: String,
    pub level: u8,
    pub points: u64,
    pub tokens: u8,
}

impl Record {
    pub fn new(champion: impl Into<String>, level: u8, points: u64, tokens: u8) -> Self {
        Self {
            champion: champion.into(),
            level,
            points,
            tokens,
        }
    }
}

/// Champion-keyed records in first-insertion order.
///
/// Order matters: the ranked list breaks point ties by it. Re-inserting a
/// champion replaces its record in place.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScoreSet {
    records: Vec<Record>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ScoreSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: Record) -> Option<Record> {
        if let Some(&position) = self.index.get(&record.champion) {
            return Some(std::mem::replace(&mut self.records[position], record));
        }

        self.index.insert(record.champion.clone(), self.records.len());
        self.records.push(record);
        None
    }

    #[must_use]
    pub fn get(&self, champion: &str) -> Option<&Record> {
        self.index
            .get(champion)
            .map(|&position| &self.records[position])
    }

    pub fn get_mut(&mut self, champion: &str) -> Option<&mut Record> {
        self.index
            .get(champion)
            .map(|&position| &mut self.records[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn total_points(&self) -> u64 {
        self.records.iter().map(|record| record.points).sum()
    }
}

impl FromIterator<Record> for ScoreSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ScoreSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountScores {
    pub account: String,
    pub scores: ScoreSet,
}

#[cfg(test)]
mod tests {
    use super::{Record, ScoreSet};

    #[test]
    fn keeps_first_insertion_position_on_replace() {
        let mut set = ScoreSet::new();
        set.insert(Record::new("Ahri", 5, 30_000, 0));
        set.insert(Record::new("Zed", 4, 12_000, 0));

        let previous = set.insert(Record::new("Ahri", 6, 40_000, 1));
        assert_eq!(previous.map(|record| record.points), Some(30_000));

        let names = set.iter().map(|record| record.champion.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Ahri", "Zed"]);
        assert_eq!(set.get("Ahri").map(|record| record.level), Some(6));
        assert_eq!(set.total_points(), 52_000);
    }

    #[test]
    fn champion_key_is_exact_string() {
        let set = [Record::new("Kai'Sa", 3, 100, 0), Record::new("KaiSa", 2, 50, 0)]
            .into_iter()
            .collect::<ScoreSet>();
        assert_eq!(set.len(), 2);
        assert!(set.get("kai'sa").is_none());
    }
}
