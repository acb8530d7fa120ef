//! Self-report burnout questionnaire.
//!
//! Three questions answered on a 1-5 scale. The score is the answer total
//! as a rounded percentage of the maximum (15), classified with the same
//! bands as the diary-based score.

use serde::{Deserialize, Serialize};

use crate::burnout::{get_risk_level, RiskLevel};
use crate::error::ValidationError;

/// Lowest accepted answer
pub const MIN_ANSWER: u8 = 1;
/// Highest accepted answer
pub const MAX_ANSWER: u8 = 5;

const QUESTION_COUNT: u8 = 3;

/// Question texts, in answer order.
pub const QUESTIONS: [&str; 3] = [
    "How often do you feel exhausted?",
    "How often do you feel detached from work/study?",
    "How satisfied are you with your rest/sleep?",
];

/// Answers to the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    pub exhaustion: u8,
    pub detachment: u8,
    pub rest_satisfaction: u8,
}

/// Questionnaire outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub answers: QuizAnswers,
    /// Percentage of the maximum total (0 to 100)
    pub score: u8,
    pub risk_level: RiskLevel,
}

impl QuizAnswers {
    pub fn new(exhaustion: u8, detachment: u8, rest_satisfaction: u8) -> Self {
        Self {
            exhaustion,
            detachment,
            rest_satisfaction,
        }
    }

    /// Check every answer is on the 1-5 scale.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let named = [
            ("exhaustion", self.exhaustion),
            ("detachment", self.detachment),
            ("rest_satisfaction", self.rest_satisfaction),
        ];
        for (question, value) in named {
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
                return Err(ValidationError::AnswerOutOfRange {
                    question,
                    value,
                    min: MIN_ANSWER,
                    max: MAX_ANSWER,
                });
            }
        }
        Ok(())
    }

    pub fn total(&self) -> u8 {
        self.exhaustion + self.detachment + self.rest_satisfaction
    }

    /// Validate and score the answers.
    pub fn score(&self) -> Result<QuizResult, ValidationError> {
        self.validate()?;
        let max = f64::from(QUESTION_COUNT * MAX_ANSWER);
        let score = (f64::from(self.total()) / max * 100.0).round() as u8;
        Ok(QuizResult {
            answers: *self,
            score,
            risk_level: get_risk_level(score),
        })
    }
}
