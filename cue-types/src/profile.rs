use serde::{Deserialize, Serialize};
use std::fmt;

/// Clue-set language. Doubles as the UI language for prompts and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// Wire form, as recorded in guess submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::English => "english",
        }
    }

    /// Two-letter code used by the language selection stage.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "es" => Some(Language::Spanish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Native-language display name.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender selection from the demographic stage. Closed enumeration;
/// labels are total in both UI languages so no selection can fail to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "prefer-not-to-say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Gender::Female, Language::Spanish) => "Femenino",
            (Gender::Male, Language::Spanish) => "Masculino",
            (Gender::Other, Language::Spanish) => "Otro",
            (Gender::PreferNotToSay, Language::Spanish) => "Prefiero no decirlo",
            (Gender::Female, Language::English) => "Female",
            (Gender::Male, Language::English) => "Male",
            (Gender::Other, Language::English) => "Other",
            (Gender::PreferNotToSay, Language::English) => "Prefer not to say",
        }
    }

    /// Reverse of `label`, accepting labels from either UI language.
    pub fn from_label(label: &str) -> Option<Gender> {
        Gender::ALL.into_iter().find(|gender| {
            Language::ALL
                .into_iter()
                .any(|language| gender.label(language) == label)
        })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket selection, ordered youngest to oldest. The bracket
/// literals serve as labels in both UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "-10")]
    Under10,
    #[serde(rename = "10-19")]
    From10To19,
    #[serde(rename = "20-29")]
    From20To29,
    #[serde(rename = "30-39")]
    From30To39,
    #[serde(rename = "40-49")]
    From40To49,
    #[serde(rename = "50-59")]
    From50To59,
    #[serde(rename = "60-69")]
    From60To69,
    #[serde(rename = "+70")]
    Over70,
}

impl AgeRange {
    pub const ALL: [AgeRange; 8] = [
        AgeRange::Under10,
        AgeRange::From10To19,
        AgeRange::From20To29,
        AgeRange::From30To39,
        AgeRange::From40To49,
        AgeRange::From50To59,
        AgeRange::From60To69,
        AgeRange::Over70,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Under10 => "-10",
            AgeRange::From10To19 => "10-19",
            AgeRange::From20To29 => "20-29",
            AgeRange::From30To39 => "30-39",
            AgeRange::From40To49 => "40-49",
            AgeRange::From50To59 => "50-59",
            AgeRange::From60To69 => "60-69",
            AgeRange::Over70 => "+70",
        }
    }

    pub fn from_label(label: &str) -> Option<AgeRange> {
        AgeRange::ALL.into_iter().find(|range| range.as_str() == label)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("es"), Some(Language::Spanish));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Spanish.as_str(), "spanish");
        assert_eq!(Language::English.as_str(), "english");
    }

    #[test]
    fn test_gender_labels_round_trip() {
        for gender in Gender::ALL {
            for language in Language::ALL {
                let label = gender.label(language);
                assert_eq!(Gender::from_label(label), Some(gender));
            }
        }
        assert_eq!(Gender::from_label("Prefiero no decirlo"), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::from_label("unknown"), None);
    }

    #[test]
    fn test_age_range_labels_round_trip() {
        for range in AgeRange::ALL {
            assert_eq!(AgeRange::from_label(range.as_str()), Some(range));
        }
        assert_eq!(AgeRange::from_label("-10"), Some(AgeRange::Under10));
        assert_eq!(AgeRange::from_label("+70"), Some(AgeRange::Over70));
        assert_eq!(AgeRange::from_label("60+"), None);
    }

    #[test]
    fn test_age_range_ordering() {
        let mut shuffled = [AgeRange::Over70, AgeRange::Under10, AgeRange::From30To39];
        shuffled.sort();
        assert_eq!(
            shuffled,
            [AgeRange::Under10, AgeRange::From30To39, AgeRange::Over70]
        );
    }
}
