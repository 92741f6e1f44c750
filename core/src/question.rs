use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use hashbrown::HashSet;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Human-readable names of the batch library, batch `n` is `BATCH_NAMES[n - 1]`.
pub const BATCH_NAMES: [&str; 21] = [
    "strange-flood",
    "literate-form",
    "fast-stomach",
    "behave-harbor",
    "market-glove",
    "gusty-stem",
    "sheep-language",
    "volcano-root",
    "general-paste",
    "friction-boot",
    "faulty-purpose",
    "polite-pizzas",
    "earthy-sock",
    "trains-tax",
    "system-bulb",
    "giraffe-book",
    "thumb-grab",
    "tent-shoes",
    "icicle-soap",
    "beef-canvas",
    "sleep-hum",
];

/// How many batches the set selector offers.
pub const OFFERED_BATCHES: u8 = 10;

fn null_as_empty<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub category: String,
    /// Formatted currency label, e.g. `"$400"`. Empty when the source has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    pub question: String,
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub air_date: String,
}

impl QuestionRecord {
    pub fn matches(&self, category: &str, value: &str) -> bool {
        self.category == category && self.value == value
    }

    /// Header line shown above a question: `"SCIENCE for $200 (2020-01-01)"`.
    pub fn details(&self) -> String {
        format!("{} for {} ({})", self.category, self.value, self.air_date)
    }
}

/// Decodes a JSON array of question records.
pub fn parse_payload(payload: &[u8]) -> core::result::Result<Vec<QuestionRecord>, LoadError> {
    serde_json::from_slice(payload).map_err(|err| LoadError::Malformed(err.to_string()))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionSetId {
    #[default]
    Default,
    Batch {
        round: u8,
        batch: u8,
    },
}

impl QuestionSetId {
    pub const fn batch(round: u8, batch: u8) -> Self {
        Self::Batch { round, batch }
    }

    /// Sets the selector offers, default set first.
    pub fn offered() -> impl Iterator<Item = Self> {
        core::iter::once(Self::Default)
            .chain((1..=OFFERED_BATCHES).map(|batch| Self::batch(1, batch)))
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Batch { batch, .. } => {
                let index = usize::from(batch).checked_sub(1)?;
                BATCH_NAMES.get(index).copied()
            }
        }
    }

    pub fn label(self) -> &'static str {
        self.name().unwrap_or("default")
    }

    /// Location of the payload relative to the site root.
    pub fn path(self) -> String {
        match self {
            Self::Default => "api/hello-jeopardy.json".to_string(),
            Self::Batch { round, .. } => format!("api/round/{}/{}.min.json", round, self),
        }
    }
}

impl fmt::Display for QuestionSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Batch { round, batch } => write!(f, "round-{}-batch-{}", round, batch),
        }
    }
}

impl FromStr for QuestionSetId {
    type Err = GameError;

    /// Accepts `default`, `round-1-batch-3`, or a payload path such as
    /// `api/round/1/round-1-batch-3.min.json`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || GameError::UnknownQuestionSet(s.to_string());

        let file = s.rsplit('/').next().unwrap_or(s);
        let stem = file.split('.').next().unwrap_or(file);
        if stem == "default" || stem == "hello-jeopardy" {
            return Ok(Self::Default);
        }

        let (round, batch) = stem
            .strip_prefix("round-")
            .and_then(|rest| rest.split_once("-batch-"))
            .ok_or_else(unknown)?;
        let round: u8 = round.parse().map_err(|_| unknown())?;
        let batch: u8 = batch.parse().map_err(|_| unknown())?;

        if round == 0 || batch == 0 || usize::from(batch) > BATCH_NAMES.len() {
            return Err(unknown());
        }
        Ok(Self::batch(round, batch))
    }
}

/// One loaded question set with its categories derived up front.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionSet {
    id: QuestionSetId,
    records: Vec<QuestionRecord>,
    categories: Vec<String>,
}

impl QuestionSet {
    pub fn new(id: QuestionSetId, records: Vec<QuestionRecord>) -> Self {
        let categories = distinct_categories(&records);
        Self {
            id,
            records,
            categories,
        }
    }

    pub fn id(&self) -> QuestionSetId {
        self.id
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn matching<'a>(
        &'a self,
        category: &str,
        value: &str,
    ) -> impl Iterator<Item = &'a QuestionRecord> {
        self.records
            .iter()
            .filter(move |record| record.matches(category, value))
    }

    pub fn has_match(&self, category: &str, value: &str) -> bool {
        self.matching(category, value).next().is_some()
    }
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(records: &[QuestionRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.category.as_str()))
        .map(|record| record.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;
    use alloc::vec;

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let records = vec![
            record("HISTORY", "$100", "q1"),
            record("SCIENCE", "$200", "q2"),
            record("HISTORY", "$300", "q3"),
            record("ART", "$100", "q4"),
            record("SCIENCE", "$100", "q5"),
        ];

        assert_eq!(distinct_categories(&records), ["HISTORY", "SCIENCE", "ART"]);
    }

    #[test]
    fn set_categories_are_derived_from_records() {
        let set = QuestionSet::new(
            QuestionSetId::batch(1, 4),
            vec![
                record("ART", "$100", "a1"),
                record("MUSIC", "$200", "m2"),
                record("ART", "$300", "a3"),
            ],
        );

        assert_eq!(set.categories(), ["ART", "MUSIC"]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["categories"], serde_json::json!(["ART", "MUSIC"]));
        assert_eq!(json["records"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn parse_payload_reads_air_date_and_null_values() {
        let payload = br#"[
            {"category": "SCIENCE", "value": "$200", "question": "Q1", "answer": "A1", "air_date": "2020-01-01"},
            {"category": "FINAL", "value": null, "question": "Q2", "answer": "A2", "air_date": "2020-01-02", "round": "Final Jeopardy!"}
        ]"#;

        let records = parse_payload(payload).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].details(), "SCIENCE for $200 (2020-01-01)");
        assert_eq!(records[1].value, "");
    }

    #[test]
    fn parse_payload_rejects_non_array() {
        let err = parse_payload(br#"{"category": "SCIENCE"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));

        let err = parse_payload(b"not json").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn set_ids_parse_identifiers_and_paths() {
        assert_eq!("default".parse::<QuestionSetId>().unwrap(), QuestionSetId::Default);
        assert_eq!(
            "round-1-batch-3".parse::<QuestionSetId>().unwrap(),
            QuestionSetId::batch(1, 3)
        );
        assert_eq!(
            "api/round/1/round-1-batch-10.min.json"
                .parse::<QuestionSetId>()
                .unwrap(),
            QuestionSetId::batch(1, 10)
        );
        assert_eq!(
            "api/hello-jeopardy.json".parse::<QuestionSetId>().unwrap(),
            QuestionSetId::Default
        );
        assert!("round-1-batch-22".parse::<QuestionSetId>().is_err());
        assert!("round-x-batch-1".parse::<QuestionSetId>().is_err());
    }

    #[test]
    fn set_id_display_and_path() {
        let id = QuestionSetId::batch(1, 7);
        assert_eq!(id.to_string(), "round-1-batch-7");
        assert_eq!(id.path(), "api/round/1/round-1-batch-7.min.json");
        assert_eq!(QuestionSetId::Default.path(), "api/hello-jeopardy.json");
    }

    #[test]
    fn batch_names_are_one_based() {
        assert_eq!(QuestionSetId::batch(1, 1).name(), Some("strange-flood"));
        assert_eq!(QuestionSetId::batch(1, 10).name(), Some("friction-boot"));
        assert_eq!(QuestionSetId::Default.name(), None);
    }

    #[test]
    fn offered_sets_start_with_default() {
        let offered: Vec<_> = QuestionSetId::offered().collect();
        assert_eq!(offered.len(), 1 + usize::from(OFFERED_BATCHES));
        assert_eq!(offered[0], QuestionSetId::Default);
        assert_eq!(offered[1], QuestionSetId::batch(1, 1));
    }
}
