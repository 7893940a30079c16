use cue_types::HistoricResponse;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// How many prior answers are shown back after a submission.
pub const MAX_FEEDBACK_COORDS: usize = 4;

/// Sample comparison coordinates for a completed trial.
///
/// Candidates are historic responses for the same clue with a non-empty
/// coordinate different from the participant's own answer. Selection is
/// uniform without replacement; fewer than four candidates means all of
/// them are returned, and zero candidates is fine.
pub fn sample_feedback(
    historic: &[HistoricResponse],
    clue_id: &str,
    own_coordinate: &str,
) -> Vec<String> {
    let mut candidates: Vec<&str> = historic
        .iter()
        .filter(|response| {
            response.clue_id == clue_id
                && !response.coordinate.is_empty()
                && response.coordinate != own_coordinate
        })
        .map(|response| response.coordinate.as_str())
        .collect();

    candidates.shuffle(&mut thread_rng());
    candidates
        .into_iter()
        .take(MAX_FEEDBACK_COORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(clue_id: &str, coordinate: &str) -> HistoricResponse {
        HistoricResponse {
            user_id: "u".to_string(),
            timestamp: "t".to_string(),
            clue_category: "Elements".to_string(),
            clue_id: clue_id.to_string(),
            word: "Fire".to_string(),
            coordinate: coordinate.to_string(),
            language: "english".to_string(),
            gender: "other".to_string(),
            age_range: "20-29".to_string(),
        }
    }

    #[test]
    fn test_at_most_four_coordinates() {
        let historic: Vec<HistoricResponse> =
            (1..=10).map(|n| response("1", &format!("A{n}"))).collect();

        let sample = sample_feedback(&historic, "1", "P30");
        assert_eq!(sample.len(), MAX_FEEDBACK_COORDS);
        for coordinate in &sample {
            assert!(historic.iter().any(|r| &r.coordinate == coordinate));
        }
    }

    #[test]
    fn test_own_coordinate_excluded() {
        let historic = vec![
            response("1", "H15"),
            response("1", "H15"),
            response("1", "A1"),
        ];

        for _ in 0..20 {
            let sample = sample_feedback(&historic, "1", "H15");
            assert_eq!(sample, vec!["A1".to_string()]);
        }
    }

    #[test]
    fn test_other_clues_excluded() {
        let historic = vec![response("1", "A1"), response("2", "B2"), response("2", "C3")];

        let sample = sample_feedback(&historic, "2", "P30");
        assert_eq!(sample.len(), 2);
        assert!(!sample.contains(&"A1".to_string()));
    }

    #[test]
    fn test_empty_when_no_other_response_exists() {
        assert!(sample_feedback(&[], "1", "H15").is_empty());

        let only_own = vec![response("1", "H15")];
        assert!(sample_feedback(&only_own, "1", "H15").is_empty());

        let blank_coordinate = vec![response("1", "")];
        assert!(sample_feedback(&blank_coordinate, "1", "H15").is_empty());
    }

    #[test]
    fn test_fewer_candidates_than_cap_returns_all() {
        let historic = vec![response("1", "A1"), response("1", "B2")];
        let mut sample = sample_feedback(&historic, "1", "H15");
        sample.sort();
        assert_eq!(sample, vec!["A1".to_string(), "B2".to_string()]);
    }
}
