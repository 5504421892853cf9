use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::questions::{strategic_questions, QUESTIONS_PER_FOCUS};

/// Fixed category of each strategic statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Operational,
    Tactical,
    Strategic,
}

impl Focus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Tactical => "Tactical",
            Self::Strategic => "Strategic",
        }
    }
}

/// Per-focus counts of affirmed statements, each within `[0, 8]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicScores {
    pub operational: u8,
    pub tactical: u8,
    pub strategic: u8,
}

impl StrategicScores {
    pub const fn total(&self) -> u8 {
        self.operational + self.tactical + self.strategic
    }

    pub const fn out_of(&self) -> u8 {
        QUESTIONS_PER_FOCUS as u8
    }
}

/// Counts `true` answers per the question's fixed focus. Missing keys are
/// treated as false and unknown keys are ignored; total function, no errors.
pub fn score_strategic(answers: &BTreeMap<char, bool>) -> StrategicScores {
    let mut scores = StrategicScores::default();
    for question in strategic_questions() {
        if answers.get(&question.id).copied().unwrap_or(false) {
            match question.focus {
                Focus::Operational => scores.operational += 1,
                Focus::Tactical => scores.tactical += 1,
                Focus::Strategic => scores.strategic += 1,
            }
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_map_scores_zero() {
        let scores = score_strategic(&BTreeMap::new());
        assert_eq!(scores, StrategicScores::default());
    }

    #[test]
    fn bucket_sum_matches_affirmed_count() {
        let mut answers = BTreeMap::new();
        for question in strategic_questions().iter().take(10) {
            answers.insert(question.id, true);
        }
        answers.insert('B', false);

        let affirmed = answers.values().filter(|v| **v).count() as u8;
        let scores = score_strategic(&answers);
        assert_eq!(scores.total(), affirmed);
    }

    #[test]
    fn all_affirmed_fills_every_bucket() {
        let answers: BTreeMap<char, bool> = strategic_questions()
            .iter()
            .map(|question| (question.id, true))
            .collect();
        let scores = score_strategic(&answers);
        assert_eq!(scores.operational, 8);
        assert_eq!(scores.tactical, 8);
        assert_eq!(scores.strategic, 8);
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let mut answers = BTreeMap::new();
        answers.insert('W', true);
        answers.insert('Y', true);
        answers.insert('?', true);
        assert_eq!(score_strategic(&answers), StrategicScores::default());
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut answers = BTreeMap::new();
        answers.insert('A', true);
        answers.insert('C', true);
        assert_eq!(score_strategic(&answers), score_strategic(&answers));
    }
}
