//! Shared doubles for workflow and clock tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use topicbot_core::{
    ChannelId, ChatPlatform, Clock, CooldownConfig, CooldownState, MessageId, OutgoingMessage,
};
use topicbot_error::{
    PlatformError, PlatformErrorKind, PlatformResult, StorageError, StorageErrorKind,
    StorageResult,
};
use topicbot_state::{CooldownStore, MemoryCooldownStore};
use topicbot_workflow::{SuggestionWorkflow, WorkflowSettings};

pub const SUBMISSION: ChannelId = ChannelId(200);
pub const REVIEW: ChannelId = ChannelId(300);

/// One call made against the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Sent {
        channel: ChannelId,
        id: MessageId,
        message: OutgoingMessage,
    },
    Edited {
        channel: ChannelId,
        id: MessageId,
        update: OutgoingMessage,
    },
    TopicSet {
        channel: ChannelId,
        text: String,
    },
}

/// Platform that records every call and hands out sequential message ids.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    next_id: AtomicU64,
    failing: AtomicBool,
    failing_topics: AtomicBool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent_to(&self, channel: ChannelId) -> Vec<OutgoingMessage> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Sent {
                    channel: to,
                    message,
                    ..
                } if to == channel => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_from_now_on(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Only channel topic updates fail; messages still go through.
    pub fn fail_topic_updates(&self) {
        self.failing_topics.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> PlatformResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(PlatformError::new(PlatformErrorKind::ApiError(
                "503 Service Unavailable".into(),
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn send_message(
        &self,
        channel: ChannelId,
        message: OutgoingMessage,
    ) -> PlatformResult<MessageId> {
        self.check()?;
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.calls.lock().unwrap().push(PlatformCall::Sent {
            channel,
            id,
            message,
        });
        Ok(id)
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        update: OutgoingMessage,
    ) -> PlatformResult<()> {
        self.check()?;
        self.calls.lock().unwrap().push(PlatformCall::Edited {
            channel,
            id: message,
            update,
        });
        Ok(())
    }

    async fn set_channel_topic(&self, channel: ChannelId, text: &str) -> PlatformResult<()> {
        self.check()?;
        if self.failing_topics.load(Ordering::SeqCst) {
            return Err(PlatformError::new(PlatformErrorKind::ApiError(
                "403 Missing Permissions".into(),
            )));
        }
        self.calls.lock().unwrap().push(PlatformCall::TopicSet {
            channel,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Store that loads a fixed state and refuses every save.
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    state: CooldownState,
}

impl ReadOnlyStore {
    pub fn with_state(state: CooldownState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CooldownStore for ReadOnlyStore {
    async fn load(&self) -> CooldownState {
        self.state
    }

    async fn save(&self, _state: &CooldownState) -> StorageResult<()> {
        Err(StorageError::new(StorageErrorKind::FileWrite(
            "read-only filesystem".into(),
        )))
    }
}

/// A fixed, whole-second start time.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Everything a workflow test needs.
pub struct Harness {
    pub workflow: SuggestionWorkflow,
    pub platform: Arc<RecordingPlatform>,
    pub store: MemoryCooldownStore,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub async fn new(cooldown: CooldownConfig) -> Self {
        Self::with_store_state(cooldown, CooldownState::open()).await
    }

    pub async fn with_store_state(cooldown: CooldownConfig, state: CooldownState) -> Self {
        let platform = Arc::new(RecordingPlatform::new());
        let store = MemoryCooldownStore::with_state(state);
        let clock = Arc::new(ManualClock::at(start_time()));
        let workflow = SuggestionWorkflow::restore(
            WorkflowSettings::new(SUBMISSION, REVIEW, cooldown.window()),
            platform.clone(),
            Arc::new(store.clone()),
            clock.clone(),
        )
        .await;
        Self {
            workflow,
            platform,
            store,
            clock,
        }
    }

    /// Submit `topic` as `author` and return the review card id.
    pub async fn submit_card(&self, topic: &str, author: u64) -> MessageId {
        self.workflow
            .submit(topic, topic_author(author), SUBMISSION)
            .await
            .expect("submit");
        let review = self.workflow.snapshot().await;
        *review.review().expect("under review").card()
    }
}

pub fn topic_author(id: u64) -> topicbot_core::UserId {
    topicbot_core::UserId(id)
}
