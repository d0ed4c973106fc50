use serde::{Deserialize, Serialize};

use crate::queue::QueueState;

/// A single request, decoded from one line of json.
///
/// ```text
/// {"op": "new", "capacity": 3}
/// {"op": "enqueue", "value": 5}
/// {"op": "dequeue"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Replace the queue with an empty one.
    /// Without a capacity the default capacity is used.
    New {
        /// Capacity of the new queue
        #[serde(default)]
        capacity: Option<i64>,
    },
    /// Insert a value at the back of the queue
    Enqueue {
        /// Value to insert
        value: i32,
    },
    /// Remove the value at the front of the queue
    Dequeue,
    /// Number of values in the queue
    Size,
    /// Is the queue empty
    IsEmpty,
    /// Is the queue full
    IsFull,
    /// Occupancy of the queue
    State,
    /// Deposit into the account
    Deposit {
        /// Amount to deposit
        amount: i64,
    },
    /// Withdraw from the account
    Withdraw {
        /// Amount to withdraw
        amount: i64,
    },
    /// Current account balance
    Balance,
}

/// The outcome of a `Command`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// The command succeeded and has nothing to report
    Ok,
    /// A dequeued value, `None` if the queue was empty
    Value {
        /// The removed value
        value: Option<i32>,
    },
    /// Queue size
    Size {
        /// Number of values in the queue
        size: usize,
    },
    /// Answer to `IsEmpty` / `IsFull`
    Flag {
        /// The answer
        value: bool,
    },
    /// Queue occupancy
    State {
        /// Current state
        state: QueueState,
    },
    /// Account balance
    Balance {
        /// Current balance
        balance: i64,
    },
    /// The command failed
    Error {
        /// Error description
        message: String,
    },
}

impl Reply {
    pub(crate) fn error(err: impl std::fmt::Display) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}
