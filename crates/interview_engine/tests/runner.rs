use std::fmt;

use interview_core::AsyncResult;
use interview_engine::OperationRunner;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Blank;

impl fmt::Display for Blank {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[tokio::test]
async fn run_publishes_loading_then_one_terminal_state() {
    let runner = OperationRunner::<u32>::new();
    assert_eq!(runner.current(), None);
    let rx = runner.subscribe();

    let result = runner.run(async { Ok::<_, String>(7) }).await;

    assert_eq!(result, AsyncResult::Success(7));
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![AsyncResult::Loading, AsyncResult::Success(7)]
    );
    assert_eq!(runner.current(), Some(AsyncResult::Success(7)));
    assert!(!runner.is_loading());
}

#[tokio::test]
async fn failures_carry_their_message() {
    let runner = OperationRunner::<u32>::new();
    let rx = runner.subscribe();

    runner
        .run(async { Err::<u32, _>("Backend not reachable".to_string()) })
        .await;
    let blank = runner.run(async { Err::<u32, _>(Blank) }).await;

    assert_eq!(blank, AsyncResult::Error("Unknown Error".to_string()));
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![
            AsyncResult::Loading,
            AsyncResult::Error("Backend not reachable".to_string()),
            AsyncResult::Loading,
            AsyncResult::Error("Unknown Error".to_string()),
        ]
    );
}

#[tokio::test]
async fn deferred_run_without_commit_publishes_only_the_error() {
    let runner = OperationRunner::<u32>::new();
    let rx = runner.subscribe();

    let result = runner
        .run_deferred(|_commit| async { Err::<u32, _>("Selected file is empty") })
        .await;

    assert_eq!(result, AsyncResult::Error("Selected file is empty".to_string()));
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![result]);
}

#[tokio::test]
async fn deferred_commit_publishes_loading_once() {
    let runner = OperationRunner::<u32>::new();
    let rx = runner.subscribe();
    let observer = runner.clone();

    runner
        .run_deferred(|commit| async move {
            assert!(!commit.is_committed());
            commit.commit();
            commit.commit();
            assert!(commit.is_committed());
            assert!(observer.is_loading());
            Ok::<_, String>(3)
        })
        .await;

    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![AsyncResult::Loading, AsyncResult::Success(3)]
    );
}

#[tokio::test]
async fn launch_publishes_loading_before_returning() {
    let runner = OperationRunner::<String>::new();
    let rx = runner.subscribe();
    let (release, gate) = tokio::sync::oneshot::channel::<()>();

    let handle = runner.launch(async move {
        gate.await.map_err(|err| err.to_string())?;
        Ok::<_, String>("done".to_string())
    });
    assert!(runner.is_loading());
    assert_eq!(rx.try_recv(), Ok(AsyncResult::Loading));

    release.send(()).unwrap();
    let settled = handle.await.unwrap();

    assert_eq!(settled, AsyncResult::Success("done".to_string()));
    assert_eq!(rx.try_recv(), Ok(AsyncResult::Success("done".to_string())));
}

#[tokio::test]
async fn dropped_subscribers_do_not_block_others() {
    let runner = OperationRunner::<u32>::new();
    let gone = runner.subscribe();
    let kept = runner.subscribe();
    drop(gone);

    runner.run(async { Ok::<_, String>(1) }).await;
    runner.run(async { Ok::<_, String>(2) }).await;

    assert_eq!(kept.try_iter().count(), 4);
    assert_eq!(runner.current(), Some(AsyncResult::Success(2)));
}
