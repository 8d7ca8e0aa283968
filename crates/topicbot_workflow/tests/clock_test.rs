//! Tests for the periodic cooldown check.

mod test_utils;

use chrono::Duration;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use test_utils::{
    Harness, ManualClock, REVIEW, ReadOnlyStore, RecordingPlatform, SUBMISSION, start_time,
};
use tokio::sync::watch;
use topicbot_core::{CooldownConfig, CooldownState, UserId};
use topicbot_workflow::{
    CooldownClock, SubmissionGate, SuggestionWorkflow, TickOutcome, WorkflowSettings,
};

const PERIOD: StdDuration = StdDuration::from_secs(10);

async fn approved_harness() -> Harness {
    let h = Harness::new(CooldownConfig::new(0, 0, 5)).await;
    let card = h.submit_card("Best board games", 7).await;
    h.workflow.approve(UserId(99), card).await.expect("approve");
    h.platform.clear();
    h
}

#[tokio::test]
async fn test_tick_without_cooldown_is_idle() {
    let h = Harness::new(CooldownConfig::new(0, 0, 5)).await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);

    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Idle);
    assert!(h.platform.calls().is_empty());
}

#[tokio::test]
async fn test_cooldown_elapses_after_deadline() {
    let h = approved_harness().await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);

    h.clock.advance(Duration::seconds(4));
    assert_eq!(
        clock.tick().await.expect("tick"),
        TickOutcome::Waiting {
            remaining: Duration::seconds(1)
        }
    );
    assert!(h.platform.calls().is_empty());

    h.clock.advance(Duration::seconds(2));
    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Elapsed);

    let review = h.platform.sent_to(REVIEW);
    assert_eq!(review.len(), 1);
    assert_eq!(
        review[0].embeds()[0].title().as_deref(),
        Some("Cooldown elapsed")
    );
    let members = h.platform.sent_to(SUBMISSION);
    assert_eq!(members.len(), 1);
    assert_eq!(
        members[0].embeds()[0].title().as_deref(),
        Some("Topic submissions are now open")
    );
    assert_eq!(
        members[0].embeds()[0].description().as_deref(),
        Some("use /topic to submit a new topic")
    );

    assert_eq!(h.store.snapshot().await, CooldownState::open());
    assert!(!h.workflow.snapshot().await.cooldown_active());
    assert_eq!(
        h.workflow.open_submission(UserId(8), SUBMISSION).await,
        SubmissionGate::Open
    );
}

#[tokio::test]
async fn test_elapsed_cooldown_is_announced_once() {
    let h = approved_harness().await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);
    h.clock.advance(Duration::seconds(30));

    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Elapsed);
    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Idle);

    assert_eq!(h.platform.calls().len(), 2);
}

#[tokio::test]
async fn test_tick_never_fires_before_deadline() {
    let h = approved_harness().await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);
    h.clock.advance(Duration::milliseconds(4_999));

    assert!(matches!(
        clock.tick().await.expect("tick"),
        TickOutcome::Waiting { .. }
    ));
    assert!(h.platform.calls().is_empty());
    assert!(h.workflow.snapshot().await.cooldown_active());
}

#[tokio::test]
async fn test_tick_fires_exactly_at_deadline() {
    let h = approved_harness().await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);
    h.clock.advance(Duration::seconds(5));

    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Elapsed);
}

#[tokio::test]
async fn test_restored_deadline_in_the_past_elapses_on_first_tick() {
    let deadline = start_time() - Duration::hours(1);
    let h =
        Harness::with_store_state(CooldownConfig::new(12, 0, 0), CooldownState::until(deadline))
            .await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);

    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Elapsed);
    assert_eq!(h.store.snapshot().await, CooldownState::open());
}

#[tokio::test]
async fn test_unsaved_clear_keeps_cooldown_active() {
    let deadline = start_time() + Duration::seconds(5);
    let platform = Arc::new(RecordingPlatform::new());
    let clock = Arc::new(ManualClock::at(start_time()));
    let workflow = SuggestionWorkflow::restore(
        WorkflowSettings::new(SUBMISSION, REVIEW, CooldownConfig::new(0, 0, 5).window()),
        platform.clone(),
        Arc::new(ReadOnlyStore::with_state(CooldownState::until(deadline))),
        clock.clone(),
    )
    .await;
    let cooldown_clock = CooldownClock::new(workflow.clone(), PERIOD);
    clock.advance(Duration::seconds(6));

    assert!(cooldown_clock.tick().await.is_err());

    assert!(platform.calls().is_empty());
    assert_eq!(
        workflow.snapshot().await.cooldown(),
        CooldownState::until(deadline)
    );
}

#[tokio::test]
async fn test_failed_notification_still_clears_cooldown() {
    let h = approved_harness().await;
    let clock = CooldownClock::new(h.workflow.clone(), PERIOD);
    h.clock.advance(Duration::seconds(6));
    h.platform.fail_from_now_on();

    assert!(clock.tick().await.is_err());

    assert_eq!(h.store.snapshot().await, CooldownState::open());
    assert_eq!(clock.tick().await.expect("tick"), TickOutcome::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_run_ticks_until_shutdown() {
    let h = approved_harness().await;
    h.clock.advance(Duration::seconds(6));
    let (tx, rx) = watch::channel(false);

    let handle = tokio::spawn(CooldownClock::new(h.workflow.clone(), PERIOD).run(rx));
    tokio::time::sleep(PERIOD * 3).await;

    assert_eq!(h.platform.calls().len(), 2);
    assert_eq!(h.store.snapshot().await, CooldownState::open());

    tx.send(true).expect("clock listening");
    handle.await.expect("clock task");
}

#[tokio::test(start_paused = true)]
async fn test_run_stops_when_sender_dropped() {
    let h = Harness::new(CooldownConfig::new(0, 0, 5)).await;
    let (tx, rx) = watch::channel(false);

    let handle = tokio::spawn(CooldownClock::new(h.workflow.clone(), PERIOD).run(rx));
    tokio::time::sleep(PERIOD).await;
    drop(tx);

    handle.await.expect("clock task");
    assert!(h.platform.calls().is_empty());
}
