//! Suggestion lifecycle for the topic suggestion bot.
//!
//! # Architecture
//!
//! - **Desk**: the single owned instance of mutable state, the cooldown
//!   deadline plus the suggestion currently under review, behind one mutex
//! - **SuggestionWorkflow**: Submit / Approve / Deny / RetryPrompt transitions
//! - **CooldownClock**: periodic check that reopens submissions once the
//!   deadline passes
//! - **render**: the texts and embeds the bot posts
//!
//! Every transition holds the desk lock for its whole body, persists a new
//! cooldown state before announcing anything that depends on it, and leaves
//! the desk untouched when persistence fails.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod desk;
pub mod render;
mod workflow;

pub use clock::{CooldownClock, TickOutcome};
pub use desk::{Desk, DeskHandle};
pub use workflow::{SubmissionGate, SuggestionWorkflow, WorkflowSettings};
