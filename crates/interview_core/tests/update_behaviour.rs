use std::sync::Once;

use interview_core::{update, Effect, InterviewSession, Msg, SessionPhase, DEFAULT_QUESTIONS};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(interview_logging::initialize_for_tests);
}

fn questions(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Question {i}?")).collect()
}

fn send(session: InterviewSession, msg: Msg) -> (InterviewSession, Vec<Effect>) {
    update(session, msg)
}

#[test]
fn new_session_starts_at_first_question() {
    init_logging();
    let session = InterviewSession::new(questions(3));

    assert_eq!(
        session.phase(),
        SessionPhase::Active {
            index: 0,
            recording: false,
            elapsed_seconds: 0
        }
    );
    assert_eq!(session.current_question(), Some("Question 1?"));
    let view = session.view();
    assert_eq!(view.question_number, 1);
    assert_eq!(view.total_questions, 3);
    assert_eq!(view.timer_text, "00:00");
    assert!(!view.finished);
}

#[test]
fn ten_questions_finish_on_tenth_next() {
    init_logging();
    let mut session = InterviewSession::new(questions(10));

    for expected in 1..10 {
        let (next, _) = send(session, Msg::NextQuestion);
        session = next;
        assert_eq!(session.index(), expected);
        assert!(!session.is_finished());
        assert_eq!(
            session.current_question(),
            Some(format!("Question {}?", expected + 1).as_str())
        );
    }

    let (finished, effects) = send(session, Msg::NextQuestion);
    assert!(finished.is_finished());
    assert_eq!(finished.index(), 9);
    assert_eq!(finished.questions(), questions(10).as_slice());
    assert!(effects.is_empty());
    assert!(finished.view().finished);

    let (after, effects) = send(finished.clone(), Msg::ToggleRecording);
    assert_eq!(after, finished);
    assert!(effects.is_empty());
    let (after, effects) = send(finished.clone(), Msg::NextQuestion);
    assert_eq!(after, finished);
    assert!(effects.is_empty());
}

#[test]
fn toggle_recording_starts_and_stops_ticker() {
    init_logging();
    let session = InterviewSession::new(questions(2));

    let (session, effects) = send(session, Msg::ToggleRecording);
    assert!(session.is_recording());
    assert_eq!(
        effects,
        vec![Effect::StartTicker {
            epoch: session.tick_epoch()
        }]
    );

    let (session, effects) = send(session, Msg::ToggleRecording);
    assert!(!session.is_recording());
    assert_eq!(effects, vec![Effect::StopTicker]);
}

#[test]
fn ticks_accumulate_only_while_recording_and_resume_from_retained_value() {
    init_logging();
    let session = InterviewSession::new(questions(2));
    let (mut session, effects) = send(session, Msg::ToggleRecording);
    let Effect::StartTicker { epoch } = effects[0] else {
        panic!("expected StartTicker, got {effects:?}");
    };

    for _ in 0..3 {
        session = send(session, Msg::Tick { epoch }).0;
    }
    assert_eq!(session.elapsed_seconds(), 3);

    let (session, _) = send(session, Msg::ToggleRecording);
    let (session, _) = send(session, Msg::Tick { epoch });
    assert_eq!(session.elapsed_seconds(), 3);

    let (session, effects) = send(session, Msg::ToggleRecording);
    let Effect::StartTicker { epoch } = effects[0] else {
        panic!("expected StartTicker, got {effects:?}");
    };
    let (session, _) = send(session, Msg::Tick { epoch });
    assert_eq!(session.elapsed_seconds(), 4);
    assert_eq!(session.view().timer_text, "00:04");
}

#[test]
fn next_question_resets_timer_and_recording() {
    init_logging();
    let session = InterviewSession::new(questions(3));
    let (mut session, effects) = send(session, Msg::ToggleRecording);
    let Effect::StartTicker { epoch } = effects[0] else {
        panic!("expected StartTicker, got {effects:?}");
    };
    for _ in 0..5 {
        session = send(session, Msg::Tick { epoch }).0;
    }

    let (session, effects) = send(session, Msg::NextQuestion);
    assert_eq!(effects, vec![Effect::StopTicker]);
    assert_eq!(
        session.phase(),
        SessionPhase::Active {
            index: 1,
            recording: false,
            elapsed_seconds: 0
        }
    );

    // Not recording: nothing to cancel, still resets.
    let (session, effects) = send(session, Msg::NextQuestion);
    assert!(effects.is_empty());
    assert_eq!(session.elapsed_seconds(), 0);
    assert!(!session.is_recording());
}

#[test]
fn next_question_while_recording_on_last_question_finishes() {
    init_logging();
    let session = InterviewSession::new(questions(1));
    let (session, _) = send(session, Msg::ToggleRecording);
    let (session, effects) = send(session, Msg::NextQuestion);

    assert_eq!(session.phase(), SessionPhase::Finished { index: 0 });
    assert_eq!(effects, vec![Effect::StopTicker]);
    assert!(!session.is_recording());
}

#[test]
fn dirty_flag_tracks_visible_changes() {
    init_logging();
    let mut session = InterviewSession::new(questions(2));
    assert!(!session.consume_dirty());

    let (mut session, _) = send(session, Msg::ToggleRecording);
    assert!(session.consume_dirty());
    assert!(!session.consume_dirty());

    // Stale tick changes nothing.
    let (mut session, _) = send(session, Msg::Tick { epoch: 0 });
    assert!(!session.consume_dirty());
}

#[test]
fn default_questions_are_used_for_default_session() {
    init_logging();
    let session = InterviewSession::with_default_questions();
    assert_eq!(session.total_questions(), DEFAULT_QUESTIONS.len());
    assert_eq!(session.current_question(), Some(DEFAULT_QUESTIONS[0]));
}
