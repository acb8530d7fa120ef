//! Risk classification for burnout scores.
//!
//! | Score | Band |
//! |-------|------|
//! | 0-30 | Low |
//! | 31-50 | Moderate |
//! | 51-75 | High |
//! | 76-100 | Critical |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered burnout risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    /// Band containing `score`. Upper bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => RiskBand::Low,
            31..=50 => RiskBand::Moderate,
            51..=75 => RiskBand::High,
            _ => RiskBand::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
            RiskBand::Critical => "Critical",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Low => "#4CAF50",
            RiskBand::Moderate => "#FFC107",
            RiskBand::High => "#FF9800",
            RiskBand::Critical => "#F44336",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskBand::Low => "😊",
            RiskBand::Moderate => "😐",
            RiskBand::High => "😟",
            RiskBand::Critical => "😰",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskBand::Low => "You're doing well! Keep maintaining your mental health.",
            RiskBand::Moderate => "You're showing some signs of stress. Time to take action.",
            RiskBand::High => "Your burnout risk is elevated. Please prioritize self-care.",
            RiskBand::Critical => "Your burnout risk is critical. Seek professional support.",
        }
    }

    /// Suggested next step
    pub fn action(&self) -> &'static str {
        match self {
            RiskBand::Low => "Continue your current routine and self-care practices.",
            RiskBand::Moderate => "Try the Mental Reset exercise or talk to someone you trust.",
            RiskBand::High => "Use the AI coach for support and consider taking a break.",
            RiskBand::Critical => "Please reach out to a mental health professional or counselor.",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk band together with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevel {
    pub level: RiskBand,
    pub color: String,
    pub emoji: String,
    pub message: String,
    pub action: String,
}

impl From<RiskBand> for RiskLevel {
    fn from(band: RiskBand) -> Self {
        Self {
            level: band,
            color: band.color().to_string(),
            emoji: band.emoji().to_string(),
            message: band.message().to_string(),
            action: band.action().to_string(),
        }
    }
}

/// Classify a burnout score. Scores above 100 are treated as critical.
pub fn get_risk_level(score: u8) -> RiskLevel {
    RiskBand::from_score(score).into()
}
