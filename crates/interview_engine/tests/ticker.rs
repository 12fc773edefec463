use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use interview_engine::{Ticker, TICK_PERIOD};
use tokio::runtime::Handle;

fn counting(counter: &Arc<AtomicU32>) -> impl FnMut() -> ControlFlow<()> + Send + 'static {
    let counter = Arc::clone(counter);
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    }
}

#[tokio::test(start_paused = true)]
async fn fires_once_per_period_after_the_first_period() {
    let fired = Arc::new(AtomicU32::new(0));
    let _ticker = Ticker::start(&Handle::current(), TICK_PERIOD, counting(&fired));

    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(2_200)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn cancel_before_first_firing_prevents_every_firing() {
    let fired = Arc::new(AtomicU32::new(0));
    let mut ticker = Ticker::start(&Handle::current(), TICK_PERIOD, counting(&fired));

    tokio::time::sleep(Duration::from_millis(500)).await;
    ticker.cancel();
    ticker.cancel();
    assert!(ticker.is_cancelled());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(ticker.is_finished());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_ticker_stops_it() {
    let fired = Arc::new(AtomicU32::new(0));
    let ticker = Ticker::start(&Handle::current(), TICK_PERIOD, counting(&fired));

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    drop(ticker);
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn callback_break_ends_the_task() {
    let fired = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&fired);
    let ticker = Ticker::start(&Handle::current(), TICK_PERIOD, move || {
        if seen.fetch_add(1, Ordering::SeqCst) == 1 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(fired.load(Ordering::SeqCst), 2);
    assert!(ticker.is_finished());
    assert!(!ticker.is_cancelled());
}
