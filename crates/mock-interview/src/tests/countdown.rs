use crate::{AppCommand, CountdownTimer};

use std::time::Duration;

use tokio::sync::mpsc;

/// WHAT: An armed countdown ticks once per period, tagged with its question
/// WHY: The session only accepts ticks for the current question
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_armed_timer_when_time_passes_then_tagged_ticks_each_period() {
    // Given: A timer armed for question 2
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = CountdownTimer::new(Duration::from_secs(1), command_tx);
    timer.arm(2);

    // When: Three periods elapse
    let start = tokio::time::Instant::now();
    let mut ticks = Vec::new();
    for _ in 0..3 {
        ticks.push(command_rx.recv().await.unwrap());
    }

    // Then: Three ticks for question 2, one per second
    assert!(
        ticks
            .iter()
            .all(|t| matches!(t, AppCommand::Tick { question_index: 2 }))
    );
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

/// WHAT: No tick arrives after cancel
/// WHY: Orphaned ticks must not mutate a finished or unmounted session
#[tokio::test(start_paused = true)]
async fn given_cancelled_timer_when_time_passes_then_no_ticks() {
    // Given: An armed timer
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = CountdownTimer::new(Duration::from_secs(1), command_tx);
    timer.arm(0);

    // When: Cancelling before the first period
    timer.cancel();
    tokio::time::sleep(Duration::from_secs(5)).await;

    // Then: Nothing was sent
    assert!(command_rx.try_recv().is_err());
}

/// WHAT: Re-arming replaces the previous countdown
/// WHY: At most one countdown may run at a time
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_rearmed_timer_when_time_passes_then_only_new_question_ticks() {
    // Given: A timer armed for question 0, then re-armed for question 1
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = CountdownTimer::new(Duration::from_secs(1), command_tx);
    timer.arm(0);
    tokio::time::sleep(Duration::from_millis(500)).await;
    timer.arm(1);

    // When: Several periods elapse
    tokio::time::sleep(Duration::from_millis(3200)).await;

    // Then: Only question 1 ticks, three of them
    let mut received = Vec::new();
    while let Ok(command) = command_rx.try_recv() {
        received.push(command);
    }
    assert_eq!(received.len(), 3);
    assert!(
        received
            .iter()
            .all(|t| matches!(t, AppCommand::Tick { question_index: 1 }))
    );
}

/// WHAT: Dropping the timer stops its task
/// WHY: Unmounting the session view must clear the countdown
#[tokio::test(start_paused = true)]
async fn given_dropped_timer_when_time_passes_then_no_ticks() {
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let mut timer = CountdownTimer::new(Duration::from_secs(1), command_tx);
    timer.arm(0);

    drop(timer);
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert!(command_rx.try_recv().is_err());
}
