#![deny(missing_docs)]
//! Ringq is a fixed capacity integer queue, with a small json line
//! protocol for driving it (and a toy bank account) from the command line.

mod account;
pub mod error;
mod queue;
mod session;

pub use account::BankAccount;
pub use queue::{BoundedQueue, QueueState, DEFAULT_CAPACITY};
pub use session::{run, Command, Reply, Session};
