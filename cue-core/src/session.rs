use crate::CoordinateValidator;
use anyhow::{Result, anyhow, bail};
use cue_types::{AgeRange, ClueWord, Gender, GuessRecord, Language};
use uuid::Uuid;

/// Error shown next to the input control when the buffer fails validation.
pub const INVALID_COORDINATE_MESSAGE: &str =
    "Invalid format. Use Letter (A-P) followed by Number (1-30), e.g., 'H15'.";

/// The stages of a run, in strict forward order. There are no backward
/// transitions; abandoning a session simply leaves it where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LanguageSelect,
    DemographicSelect,
    Explanation,
    Trial { index: usize },
    Feedback { index: usize },
    Complete,
}

/// The whole mutable state of one participant's run: current phase,
/// demographic tuple, clue list, input buffer, in-flight flag, session
/// guess log and the feedback set for the trial just answered.
///
/// The machine validates input and builds guess records, but delivery is
/// the caller's job: `begin_submission` hands out the record, and exactly
/// one of `submission_succeeded` / `submission_failed` must follow before
/// anything else may happen to the trial.
#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    validator: CoordinateValidator,
    user_id: Option<Uuid>,
    language: Option<Language>,
    gender: Option<Gender>,
    age_range: Option<AgeRange>,
    clues: Vec<ClueWord>,
    input: String,
    input_error: Option<String>,
    submitting: bool,
    guess_log: Vec<GuessRecord>,
    feedback: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::LanguageSelect,
            validator: CoordinateValidator::new(),
            user_id: None,
            language: None,
            gender: None,
            age_range: None,
            clues: Vec::new(),
            input: String::new(),
            input_error: None,
            submitting: false,
            guess_log: Vec::new(),
            feedback: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn age_range(&self) -> Option<AgeRange> {
        self.age_range
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn guess_log(&self) -> &[GuessRecord] {
        &self.guess_log
    }

    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// Current position in the trial sequence. Equals the clue count once
    /// the session is complete.
    pub fn trial_index(&self) -> usize {
        match self.phase {
            SessionPhase::Trial { index } | SessionPhase::Feedback { index } => index,
            SessionPhase::Complete => self.clues.len(),
            _ => 0,
        }
    }

    /// The clue currently on display, if a trial or its feedback is active.
    pub fn current_clue(&self) -> Option<&ClueWord> {
        match self.phase {
            SessionPhase::Trial { index } | SessionPhase::Feedback { index } => {
                self.clues.get(index)
            }
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Language selection always succeeds; there is no invalid choice.
    pub fn select_language(&mut self, language: Language) -> Result<()> {
        if self.phase != SessionPhase::LanguageSelect {
            bail!("language can only be chosen at the start of a session");
        }
        self.language = Some(language);
        self.phase = SessionPhase::DemographicSelect;
        Ok(())
    }

    pub fn select_gender(&mut self, gender: Gender) -> Result<()> {
        if self.phase != SessionPhase::DemographicSelect {
            bail!("demographics can only be chosen during the demographic stage");
        }
        self.gender = Some(gender);
        Ok(())
    }

    pub fn select_age_range(&mut self, age_range: AgeRange) -> Result<()> {
        if self.phase != SessionPhase::DemographicSelect {
            bail!("demographics can only be chosen during the demographic stage");
        }
        self.age_range = Some(age_range);
        Ok(())
    }

    /// Gating predicate for the demographic continue action. Not a phase;
    /// the stage simply cannot be left until this holds.
    pub fn demographics_complete(&self) -> bool {
        self.gender.is_some() && self.age_range.is_some()
    }

    pub fn confirm_demographics(&mut self) -> Result<()> {
        if self.phase != SessionPhase::DemographicSelect {
            bail!("not in the demographic stage");
        }
        if !self.demographics_complete() {
            bail!("both gender and age range must be selected");
        }
        self.phase = SessionPhase::Explanation;
        Ok(())
    }

    /// Dismiss the explanation and start the trial loop. This is where the
    /// session proper begins: a fresh participant id is generated and any
    /// prior input, error, feedback and log state is cleared.
    ///
    /// An empty clue list completes the session immediately.
    pub fn begin_trials(&mut self, clues: Vec<ClueWord>) -> Result<()> {
        if self.phase != SessionPhase::Explanation {
            bail!("trials can only start after the explanation stage");
        }
        self.user_id = Some(Uuid::new_v4());
        self.clues = clues;
        self.input.clear();
        self.input_error = None;
        self.submitting = false;
        self.guess_log.clear();
        self.feedback.clear();
        self.phase = if self.clues.is_empty() {
            SessionPhase::Complete
        } else {
            SessionPhase::Trial { index: 0 }
        };
        Ok(())
    }

    /// Replace the input buffer. Any standing validation error is cleared,
    /// matching the clear-on-keystroke behavior of the input control.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.input_error = None;
    }

    /// Validate the buffer and build the guess record for the active trial.
    ///
    /// On success the in-flight flag is raised and the caller owns delivery;
    /// it must report back via `submission_succeeded` or `submission_failed`.
    /// A validation failure records a user-visible error and makes no
    /// record, so no network call can happen for bad input. Re-entrant
    /// calls while a submission is in flight are rejected.
    pub fn begin_submission(&mut self) -> Result<GuessRecord> {
        let index = match self.phase {
            SessionPhase::Trial { index } => index,
            _ => bail!("no trial is awaiting a submission"),
        };
        if self.submitting {
            bail!("a submission is already in flight");
        }

        let coordinate = self.validator.normalize(&self.input);
        if !self.validator.is_valid(&coordinate) {
            self.input_error = Some(INVALID_COORDINATE_MESSAGE.to_string());
            bail!("coordinate {coordinate:?} does not name a board cell");
        }

        let clue = self
            .clues
            .get(index)
            .ok_or_else(|| anyhow!("no clue at trial index {index}"))?;
        let record = GuessRecord {
            user_id: self.user_id.ok_or_else(|| anyhow!("session has no participant id"))?,
            clue_id: clue.id.clone(),
            word: clue.word.clone(),
            clue_category: clue.category.clone(),
            coordinate,
            language: self.language.ok_or_else(|| anyhow!("session has no language"))?,
            gender: self.gender.ok_or_else(|| anyhow!("session has no gender"))?,
            age_range: self
                .age_range
                .ok_or_else(|| anyhow!("session has no age range"))?,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        self.submitting = true;
        Ok(record)
    }

    /// Record an accepted delivery: the guess is appended to the session
    /// log and the trial moves to its feedback stage.
    pub fn submission_succeeded(
        &mut self,
        record: GuessRecord,
        feedback: Vec<String>,
    ) -> Result<()> {
        let index = match self.phase {
            SessionPhase::Trial { index } => index,
            _ => bail!("no trial is awaiting a submission result"),
        };
        if !self.submitting {
            bail!("no submission is in flight");
        }
        self.submitting = false;
        self.input_error = None;
        self.guess_log.push(record);
        self.feedback = feedback;
        self.phase = SessionPhase::Feedback { index };
        Ok(())
    }

    /// Record a failed delivery. The trial stays active with the input
    /// preserved so the participant can resubmit.
    pub fn submission_failed(&mut self, message: impl Into<String>) -> Result<()> {
        if !matches!(self.phase, SessionPhase::Trial { .. }) {
            bail!("no trial is awaiting a submission result");
        }
        if !self.submitting {
            bail!("no submission is in flight");
        }
        self.submitting = false;
        self.input_error = Some(message.into());
        Ok(())
    }

    /// Leave the feedback stage: input, error and feedback are cleared and
    /// the next trial begins, or the session completes after the last clue.
    pub fn advance(&mut self) -> Result<()> {
        let index = match self.phase {
            SessionPhase::Feedback { index } => index,
            _ => bail!("there is no feedback to advance from"),
        };
        self.input.clear();
        self.input_error = None;
        self.feedback.clear();
        let next = index + 1;
        self.phase = if next < self.clues.len() {
            SessionPhase::Trial { index: next }
        } else {
            SessionPhase::Complete
        };
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
