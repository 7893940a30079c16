use serde::{Deserialize, Serialize};

/// One word/category pair shown to the participant during a trial.
/// Identity is the `id` column of the clue feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueWord {
    pub id: String,
    pub word: String,
    pub category: String,
}
