//! # EmoDiary Core Library
//!
//! This library provides the business logic behind the EmoDiary wellness
//! journal. The CLI binary and any GUI are thin layers over the same core.
//!
//! ## Architecture
//!
//! - **Burnout engine**: pure, synchronous analysis of the most recent diary
//!   entries into a 0-100 score, risk band, mood distribution, trend and
//!   stress indicators
//! - **Questionnaire**: self-report burnout score from three answers
//! - **History**: summary of recorded scores
//! - **CBT**: static reflection exercises with a guided session
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`get_burnout_analysis`]: the single entry point for dashboards
//! - [`DiaryEntry`]: input record
//! - [`BurnoutAnalysis`]: output record
//! - [`Config`]: application configuration management

pub mod burnout;
pub mod cbt;
pub mod entry;
pub mod error;
pub mod history;
pub mod keywords;
pub mod mood;
pub mod quiz;
pub mod storage;

pub use burnout::{
    analyze_mood_patterns, calculate_burnout_score, get_burnout_analysis, get_mood_trend,
    get_risk_level, get_stress_indicators, score_components, BurnoutAnalysis, MoodPatterns,
    MoodTrendPoint, RiskBand, RiskLevel, ScoreComponents, ANALYSIS_WINDOW,
};
pub use cbt::{exercise_for, CbtExercise, CbtSession, CompletedExercise};
pub use entry::{load_entries, parse_entries, DiaryEntry, EntryId};
pub use error::{ConfigError, CoreError, ValidationError};
pub use history::{ScoreHistory, ScoreSummary};
pub use mood::{Mood, FORM_MOODS, NEGATIVE_MOODS};
pub use quiz::{QuizAnswers, QuizResult};
pub use storage::{Config, OutputFormat};
