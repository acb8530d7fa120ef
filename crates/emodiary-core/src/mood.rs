//! Mood tags attached to diary entries.
//!
//! The entry form offers six moods. `Confused` is recognised by the burnout
//! engine (it drives the confusion component) but no form currently emits it.
//! Any other tag read from storage is kept verbatim as [`Mood::Other`] so a
//! single odd entry cannot break an analysis, and a missing tag becomes
//! [`Mood::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood recorded with a diary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Excited,
    Anxious,
    Calm,
    /// Counted by the engine, never produced by the entry form.
    Confused,
    /// Entry carried no tag.
    #[default]
    Unknown,
    /// Unrecognised tag, kept as stored.
    Other(String),
}

/// Moods that count towards burnout risk.
pub const NEGATIVE_MOODS: [Mood; 2] = [Mood::Sad, Mood::Anxious];

/// Moods a user can pick when writing an entry, in form order.
pub const FORM_MOODS: [Mood; 6] = [
    Mood::Happy,
    Mood::Sad,
    Mood::Neutral,
    Mood::Excited,
    Mood::Anxious,
    Mood::Calm,
];

impl Mood {
    /// Lowercase tag as stored in entries.
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Excited => "excited",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
            Mood::Confused => "confused",
            Mood::Unknown => "unknown",
            Mood::Other(tag) => tag,
        }
    }

    /// Capitalised label for display.
    pub fn label(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Excited => "Excited",
            Mood::Anxious => "Anxious",
            Mood::Calm => "Calm",
            Mood::Confused => "Confused",
            Mood::Unknown => "Unknown",
            Mood::Other(tag) => tag,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Neutral => "😐",
            Mood::Excited => "🤩",
            Mood::Anxious => "😰",
            Mood::Calm => "😌",
            Mood::Confused => "😕",
            Mood::Unknown | Mood::Other(_) => "❔",
        }
    }

    /// Whether this mood belongs to [`NEGATIVE_MOODS`].
    pub fn is_negative(&self) -> bool {
        NEGATIVE_MOODS.contains(self)
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Mood::Confused)
    }

    /// False for missing and unrecognised tags.
    pub fn is_recognised(&self) -> bool {
        !matches!(self, Mood::Unknown | Mood::Other(_))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is not one of the known moods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mood '{}' (expected happy/sad/neutral/excited/anxious/calm/confused)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "neutral" => Ok(Mood::Neutral),
            "excited" => Ok(Mood::Excited),
            "anxious" => Ok(Mood::Anxious),
            "calm" => Ok(Mood::Calm),
            "confused" => Ok(Mood::Confused),
            "unknown" => Ok(Mood::Unknown),
            _ => Err(UnknownMood(s.to_string())),
        }
    }
}

impl From<String> for Mood {
    fn from(tag: String) -> Self {
        if tag.trim().is_empty() {
            return Mood::Unknown;
        }
        tag.parse().unwrap_or_else(|err: UnknownMood| {
            tracing::warn!(tag = %err.0, "unrecognised mood tag, keeping as is");
            Mood::Other(err.0)
        })
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}
