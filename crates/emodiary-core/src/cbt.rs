//! CBT reflection exercises.
//!
//! One fixed exercise per mood the entry form offers. A [`CbtSession`]
//! walks a user through an exercise prompt by prompt, keeping the responses
//! written so far so they can step back and revise.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::mood::Mood;

/// A titled set of reflection prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CbtExercise {
    pub title: &'static str,
    pub prompts: [&'static str; 3],
}

const HAPPY: CbtExercise = CbtExercise {
    title: "Celebrate Positivity",
    prompts: [
        "What made you feel happy today?",
        "How can you repeat this experience in the future?",
        "Who can you share this joy with?",
    ],
};

const SAD: CbtExercise = CbtExercise {
    title: "Reframing Sadness",
    prompts: [
        "What triggered your sadness?",
        "What evidence challenges the negative thoughts you had?",
        "What small action could lift your mood right now?",
    ],
};

const NEUTRAL: CbtExercise = CbtExercise {
    title: "Mindful Reflection",
    prompts: [
        "What went well today, even if small?",
        "What could you improve tomorrow?",
        "How do you feel about your current balance in life?",
    ],
};

const EXCITED: CbtExercise = CbtExercise {
    title: "Harness Excitement",
    prompts: [
        "What are you most excited about?",
        "How can you channel this energy productively?",
        "What steps will help you sustain this excitement?",
    ],
};

const ANXIOUS: CbtExercise = CbtExercise {
    title: "Challenge Anxious Thoughts",
    prompts: [
        "What specific worry is on your mind?",
        "What evidence supports this worry? What evidence goes against it?",
        "What's a more balanced way to view this situation?",
    ],
};

const CALM: CbtExercise = CbtExercise {
    title: "Strengthen Calmness",
    prompts: [
        "What helped you feel calm today?",
        "How can you bring this calmness into stressful moments?",
        "What routine or habit supports your peace of mind?",
    ],
};

/// Exercise for `mood`, if one exists.
pub fn exercise_for(mood: &Mood) -> Option<&'static CbtExercise> {
    match mood {
        Mood::Happy => Some(&HAPPY),
        Mood::Sad => Some(&SAD),
        Mood::Neutral => Some(&NEUTRAL),
        Mood::Excited => Some(&EXCITED),
        Mood::Anxious => Some(&ANXIOUS),
        Mood::Calm => Some(&CALM),
        Mood::Confused | Mood::Unknown | Mood::Other(_) => None,
    }
}

/// Responses collected by a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedExercise {
    pub mood: Mood,
    pub title: String,
    /// `(prompt, response)` in prompt order
    pub reflections: Vec<(String, String)>,
}

/// In-progress walk through one exercise
#[derive(Debug, Clone)]
pub struct CbtSession {
    mood: Mood,
    exercise: &'static CbtExercise,
    index: usize,
    responses: Vec<Option<String>>,
}

impl CbtSession {
    /// Start the exercise for `mood` at its first prompt.
    pub fn start(mood: Mood) -> Result<Self, ValidationError> {
        let exercise =
            exercise_for(&mood).ok_or_else(|| ValidationError::NoExercise(mood.to_string()))?;
        Ok(Self {
            mood,
            exercise,
            index: 0,
            responses: vec![None; exercise.prompts.len()],
        })
    }

    pub fn exercise(&self) -> &'static CbtExercise {
        self.exercise
    }

    /// Zero-based index of the current prompt
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current_prompt(&self) -> &'static str {
        self.exercise.prompts[self.index]
    }

    /// Response previously saved for the current prompt.
    pub fn current_response(&self) -> Option<&str> {
        self.responses[self.index].as_deref()
    }

    pub fn is_last_prompt(&self) -> bool {
        self.index + 1 == self.exercise.prompts.len()
    }

    /// Percentage of prompts reached, counting the current one.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.exercise.prompts.len() as f64 * 100.0
    }

    fn store(&mut self, response: &str) -> Result<(), ValidationError> {
        if response.trim().is_empty() {
            return Err(ValidationError::EmptyResponse(format!(
                "prompt {} of '{}'",
                self.index + 1,
                self.exercise.title
            )));
        }
        self.responses[self.index] = Some(response.to_string());
        Ok(())
    }

    /// Save a response and move to the next prompt. On the last prompt the
    /// response is saved and the position does not change.
    pub fn submit(&mut self, response: &str) -> Result<(), ValidationError> {
        self.store(response)?;
        if !self.is_last_prompt() {
            self.index += 1;
        }
        Ok(())
    }

    /// Step back one prompt.
    pub fn previous(&mut self) -> Result<(), ValidationError> {
        if self.index == 0 {
            return Err(ValidationError::OutOfBounds {
                collection: "prompts".to_string(),
                index: 0,
                len: self.exercise.prompts.len(),
            });
        }
        self.index -= 1;
        Ok(())
    }

    /// Save the final response and finish.
    ///
    /// Only allowed on the last prompt.
    pub fn complete(mut self, response: &str) -> Result<CompletedExercise, ValidationError> {
        if !self.is_last_prompt() {
            return Err(ValidationError::OutOfBounds {
                collection: "prompts".to_string(),
                index: self.index,
                len: self.exercise.prompts.len(),
            });
        }
        self.store(response)?;

        let reflections = self
            .exercise
            .prompts
            .iter()
            .zip(self.responses)
            .map(|(prompt, response)| (prompt.to_string(), response.unwrap_or_default()))
            .collect();

        Ok(CompletedExercise {
            mood: self.mood,
            title: self.exercise.title.to_string(),
            reflections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::FORM_MOODS;

    #[test]
    fn test_every_form_mood_has_exercise() {
        for mood in FORM_MOODS {
            let exercise = exercise_for(&mood).unwrap();
            assert!(!exercise.title.is_empty());
            assert!(exercise.prompts.iter().all(|p| p.ends_with('?')));
        }
        assert!(exercise_for(&Mood::Confused).is_none());
    }

    #[test]
    fn test_session_walkthrough() {
        let mut session = CbtSession::start(Mood::Anxious).unwrap();
        assert_eq!(session.exercise().title, "Challenge Anxious Thoughts");
        assert_eq!(session.current_prompt(), "What specific worry is on your mind?");
        assert!((session.progress() - 33.333).abs() < 0.01);

        session.submit("The deadline on Friday").unwrap();
        assert_eq!(session.position(), 1);
        session.submit("I have done this before").unwrap();
        assert!(session.is_last_prompt());
        assert_eq!(session.progress(), 100.0);

        let done = session.complete("It is one task among many").unwrap();
        assert_eq!(done.mood, Mood::Anxious);
        assert_eq!(done.reflections.len(), 3);
        assert_eq!(done.reflections[0].1, "The deadline on Friday");
        assert_eq!(done.reflections[2].1, "It is one task among many");
    }

    #[test]
    fn test_blank_response_rejected() {
        let mut session = CbtSession::start(Mood::Sad).unwrap();
        let err = session.submit("   ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyResponse(_)));
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_previous_restores_saved_response() {
        let mut session = CbtSession::start(Mood::Calm).unwrap();
        assert!(session.previous().is_err());

        session.submit("A morning walk").unwrap();
        assert_eq!(session.current_response(), None);
        session.previous().unwrap();
        assert_eq!(session.position(), 0);
        assert_eq!(session.current_response(), Some("A morning walk"));
    }

    #[test]
    fn test_complete_requires_last_prompt() {
        let session = CbtSession::start(Mood::Happy).unwrap();
        let err = session.complete("too early").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfBounds { index: 0, .. }));
    }

    #[test]
    fn test_no_exercise_for_confused() {
        let err = CbtSession::start(Mood::Confused).unwrap_err();
        assert_eq!(err, ValidationError::NoExercise("confused".to_string()));
    }
}
