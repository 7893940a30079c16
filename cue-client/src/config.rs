use cue_types::Language;
use std::env;

/// Feed and collector endpoints. Defaults point at the production sheets;
/// each can be overridden through the environment for testing or
/// self-hosted data.
///
/// The board feed ships as a local asset next to the binary;
/// `board_feed` also accepts an http(s) URL.
#[derive(Debug, Clone)]
pub struct Config {
    pub clue_feed_base_url: String,
    pub board_feed: String,
    pub historic_feed_url: String,
    pub collector_url: String,
}

const DEFAULT_CLUE_FEED_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQzJK78x6lOSPbDV_L0DLSxAPYCwnOylPAmr2A6lSwnMgqYpo2XZG7oTYG3cYw-OPkrtz8NMG09iUuB/pub";
const DEFAULT_BOARD_FEED: &str = "HC_RGB.csv";
const DEFAULT_HISTORIC_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTTpt6GaiBfYs2KvHCpVyCLgtMLcd3oMlFOn_IcnZwbSB_yapmiUOVhCFtN4uxiuI6Z7rmjXKZ4McKj/pub?output=csv";
const DEFAULT_COLLECTOR_URL: &str = "https://script.google.com/macros/s/AKfycbz2mG4_KGa1onOMMi5Kp2hLE65_YtLh4Evsnq1d6ExNCECE0UcWViW5UUv9lW6RWXsk/exec";

impl Config {
    pub fn new() -> Self {
        Self {
            clue_feed_base_url: env::var("CLUE_FEED_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CLUE_FEED_BASE_URL.to_string()),
            board_feed: env::var("BOARD_FEED")
                .unwrap_or_else(|_| DEFAULT_BOARD_FEED.to_string()),
            historic_feed_url: env::var("HISTORIC_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_HISTORIC_FEED_URL.to_string()),
            collector_url: env::var("COLLECTOR_URL")
                .unwrap_or_else(|_| DEFAULT_COLLECTOR_URL.to_string()),
        }
    }

    /// The published sheet serves one tab per language, addressed by gid.
    pub fn clue_feed_url(&self, language: Language) -> String {
        let gid = match language {
            Language::Spanish => "0",
            Language::English => "1108232040",
        };
        format!(
            "{}?gid={}&single=true&output=csv",
            self.clue_feed_base_url, gid
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_feed_url_selects_language_tab() {
        let config = Config {
            clue_feed_base_url: "https://example.test/pub".to_string(),
            board_feed: String::new(),
            historic_feed_url: String::new(),
            collector_url: String::new(),
        };

        assert_eq!(
            config.clue_feed_url(Language::Spanish),
            "https://example.test/pub?gid=0&single=true&output=csv"
        );
        assert_eq!(
            config.clue_feed_url(Language::English),
            "https://example.test/pub?gid=1108232040&single=true&output=csv"
        );
    }
}
