use crate::{AgeRange, Gender, Language};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accepted trial answer, as delivered to the remote collector.
///
/// The collector expects camelCase field names, so the JSON form of this
/// struct is part of the external contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    pub user_id: Uuid,
    pub clue_id: String,
    pub word: String,
    pub clue_category: String,
    pub coordinate: String,
    pub language: Language,
    pub gender: Gender,
    pub age_range: AgeRange,
    pub timestamp: String, // ISO 8601 string
}

/// A previously recorded guess from the aggregate store. Kept as raw
/// column strings; these rows are only ever filtered and sampled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricResponse {
    pub user_id: String,
    pub timestamp: String,
    pub clue_category: String,
    pub clue_id: String,
    pub word: String,
    pub coordinate: String,
    pub language: String,
    pub gender: String,
    pub age_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_record_wire_format() {
        let record = GuessRecord {
            user_id: Uuid::nil(),
            clue_id: "7".to_string(),
            word: "Fire".to_string(),
            clue_category: "Elements".to_string(),
            coordinate: "H15".to_string(),
            language: Language::English,
            gender: Gender::PreferNotToSay,
            age_range: AgeRange::Over70,
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["clueId"], "7");
        assert_eq!(json["clueCategory"], "Elements");
        assert_eq!(json["coordinate"], "H15");
        assert_eq!(json["language"], "english");
        assert_eq!(json["gender"], "prefer-not-to-say");
        assert_eq!(json["ageRange"], "+70");
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_guess_record_round_trip() {
        let record = GuessRecord {
            user_id: Uuid::new_v4(),
            clue_id: "1".to_string(),
            word: "Ocean".to_string(),
            clue_category: "Elements".to_string(),
            coordinate: "B3".to_string(),
            language: Language::Spanish,
            gender: Gender::Female,
            age_range: AgeRange::From20To29,
            timestamp: "2024-06-01T12:00:00+00:00".to_string(),
        };

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: GuessRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.user_id, record.user_id);
        assert_eq!(decoded.language, Language::Spanish);
        assert_eq!(decoded.age_range, AgeRange::From20To29);
    }
}
