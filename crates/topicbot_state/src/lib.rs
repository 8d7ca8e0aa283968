//! State store for the cooldown deadline.
//!
//! The bot persists exactly one record, `{"cooldown": <timestamp | null>}`.
//! It is loaded once at startup and rewritten on every mutation, before any
//! announcement that depends on the new value goes out.
//!
//! - `CooldownStore` - the load/save contract
//! - `JsonCooldownStore` - the durable record file
//! - `MemoryCooldownStore` - volatile store for tests and dry runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json;
mod memory;
mod record;
mod store;

pub use json::JsonCooldownStore;
pub use memory::MemoryCooldownStore;
pub use record::{decode_record, encode_record};
pub use store::CooldownStore;
