use alloc::format;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

pub(crate) fn record(category: &str, value: &str, question: &str) -> QuestionRecord {
    QuestionRecord {
        category: category.to_string(),
        value: value.to_string(),
        question: question.to_string(),
        answer: format!("answer to {}", question),
        air_date: "2020-01-01".to_string(),
    }
}

pub(crate) fn set_of(records: Vec<QuestionRecord>) -> QuestionSet {
    QuestionSet::new(QuestionSetId::Default, records)
}

/// `[{SCIENCE, $200, Q1, A1, 2020-01-01}]`
pub(crate) fn science_set() -> QuestionSet {
    set_of(vec![QuestionRecord {
        category: "SCIENCE".to_string(),
        value: "$200".to_string(),
        question: "Q1".to_string(),
        answer: "A1".to_string(),
        air_date: "2020-01-01".to_string(),
    }])
}

/// Replays fixed indices, wrapping around, reduced modulo the requested length.
pub(crate) struct ScriptedRandom {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub(crate) fn new(script: &[usize]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        let value = self.script.get(self.next).copied().unwrap_or(0);
        self.next = (self.next + 1) % self.script.len().max(1);
        value % len
    }
}
