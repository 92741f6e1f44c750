use alloc::string::ToString;
use alloc::vec::Vec;

use crate::*;

/// Picks one record for `category` and `value`. Duplicate clues are kept in the data on
/// purpose, so ties are broken uniformly at random rather than by position.
pub fn select<'a, R: RandomSource>(
    set: &'a QuestionSet,
    category: &str,
    value: &str,
    rng: &mut R,
) -> Result<&'a QuestionRecord> {
    let choices: Vec<&QuestionRecord> = set.matching(category, value).collect();
    rng.choose(choices.as_slice())
        .copied()
        .ok_or_else(|| GameError::NoMatch {
            category: category.to_string(),
            value: value.to_string(),
        })
}

/// Picks any record of the set, ignoring the board.
pub fn select_random<'a, R: RandomSource>(
    set: &'a QuestionSet,
    rng: &mut R,
) -> Result<&'a QuestionRecord> {
    rng.choose(set.records()).ok_or(GameError::EmptyQuestionSet)
}
