use cue_core::Session;
use cue_types::{AgeRange, ClueWord, Gender, HistoricResponse, Language};

pub fn create_test_clues() -> Vec<ClueWord> {
    vec![
        clue("1", "Fire", "Elements"),
        clue("2", "Ocean", "Elements"),
        clue("3", "Lime", "Fruits"),
    ]
}

pub fn clue(id: &str, word: &str, category: &str) -> ClueWord {
    ClueWord {
        id: id.to_string(),
        word: word.to_string(),
        category: category.to_string(),
    }
}

pub fn historic(clue_id: &str, coordinate: &str) -> HistoricResponse {
    HistoricResponse {
        user_id: "prior-player".to_string(),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        clue_category: "Elements".to_string(),
        clue_id: clue_id.to_string(),
        word: "Fire".to_string(),
        coordinate: coordinate.to_string(),
        language: "english".to_string(),
        gender: "female".to_string(),
        age_range: "20-29".to_string(),
    }
}

/// A session walked through language, demographics and explanation,
/// sitting at the first trial.
pub fn create_started_session() -> Session {
    let mut session = Session::new();
    session.select_language(Language::English).unwrap();
    session.select_gender(Gender::Female).unwrap();
    session.select_age_range(AgeRange::From20To29).unwrap();
    session.confirm_demographics().unwrap();
    session.begin_trials(create_test_clues()).unwrap();
    session
}
