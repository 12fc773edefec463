use crate::{Effect, InterviewSession, Msg, SessionPhase};

/// Pure update function: applies a message to the session and returns any effects.
///
/// A finished session ignores every message.
pub fn update(mut session: InterviewSession, msg: Msg) -> (InterviewSession, Vec<Effect>) {
    let SessionPhase::Active {
        index,
        recording,
        elapsed_seconds,
    } = session.phase()
    else {
        return (session, Vec::new());
    };

    let effects = match msg {
        Msg::ToggleRecording => {
            let epoch = session.next_epoch();
            session.set_phase(SessionPhase::Active {
                index,
                recording: !recording,
                elapsed_seconds,
            });
            if recording {
                vec![Effect::StopTicker]
            } else {
                vec![Effect::StartTicker { epoch }]
            }
        }
        Msg::NextQuestion => {
            session.next_epoch();
            let next = index + 1;
            if next >= session.total_questions() {
                session.set_phase(SessionPhase::Finished { index });
            } else {
                session.set_phase(SessionPhase::Active {
                    index: next,
                    recording: false,
                    elapsed_seconds: 0,
                });
            }
            if recording {
                vec![Effect::StopTicker]
            } else {
                Vec::new()
            }
        }
        Msg::Tick { epoch } => {
            // A tick from a ticker that was cancelled after it fired is stale.
            if recording && epoch == session.tick_epoch() {
                session.set_phase(SessionPhase::Active {
                    index,
                    recording,
                    elapsed_seconds: elapsed_seconds.saturating_add(1),
                });
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (session, effects)
}
