//! Repository Layer
//!
//! Document store abstractions and the in-memory implementation.

mod memory;
mod subscription;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use subscription::{SnapshotSender, Subscription};
pub use traits::{DocumentStore, IdentityProvider};
