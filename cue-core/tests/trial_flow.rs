mod common;

use common::*;
use cue_core::{SessionPhase, sample_feedback};

#[test]
fn test_full_session_walkthrough() {
    let mut session = create_started_session();
    let historic = vec![
        historic("1", "A1"),
        historic("1", "B2"),
        historic("2", "C3"),
    ];

    // Trial 0
    assert_eq!(session.current_clue().unwrap().word, "Fire");
    session.set_input("h15");
    let record = session.begin_submission().unwrap();
    assert_eq!(record.coordinate, "H15");

    let feedback = sample_feedback(&historic, &record.clue_id, &record.coordinate);
    assert_eq!(feedback.len(), 2);
    session.submission_succeeded(record, feedback).unwrap();
    assert_eq!(session.phase(), SessionPhase::Feedback { index: 0 });
    session.advance().unwrap();

    // Trial 1: transient delivery failure keeps the trial alive
    session.set_input("P30");
    let _lost = session.begin_submission().unwrap();
    session.submission_failed("network unreachable").unwrap();
    assert_eq!(session.phase(), SessionPhase::Trial { index: 1 });
    assert_eq!(session.guess_log().len(), 1);

    let record = session.begin_submission().unwrap();
    let feedback = sample_feedback(&historic, &record.clue_id, &record.coordinate);
    assert_eq!(feedback, vec!["C3".to_string()]);
    session.submission_succeeded(record, feedback).unwrap();
    session.advance().unwrap();

    // Trial 2: no comparison data for this clue
    session.set_input("a1");
    let record = session.begin_submission().unwrap();
    let feedback = sample_feedback(&historic, &record.clue_id, &record.coordinate);
    assert!(feedback.is_empty());
    session.submission_succeeded(record, feedback).unwrap();
    session.advance().unwrap();

    assert!(session.is_complete());
    assert_eq!(session.trial_index(), 3);
    assert_eq!(session.guess_log().len(), 3);
}

#[test]
fn test_guess_records_share_session_identity() {
    let mut session = create_started_session();
    let user_id = session.user_id().unwrap();

    for _ in 0..session.clue_count() {
        session.set_input("B7");
        let record = session.begin_submission().unwrap();
        assert_eq!(record.user_id, user_id);
        session.submission_succeeded(record, Vec::new()).unwrap();
        session.advance().unwrap();
    }

    assert!(session.guess_log().iter().all(|r| r.user_id == user_id));
}

#[test]
fn test_trial_order_matches_clue_order() {
    let mut session = create_started_session();
    let expected: Vec<String> = create_test_clues().into_iter().map(|c| c.id).collect();

    let mut answered = Vec::new();
    while !session.is_complete() {
        session.set_input("C10");
        let record = session.begin_submission().unwrap();
        answered.push(record.clue_id.clone());
        session.submission_succeeded(record, Vec::new()).unwrap();
        session.advance().unwrap();
    }

    assert_eq!(answered, expected);
}
