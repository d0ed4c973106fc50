//! Errors

/// Result type used throughout ringq
pub type Result<T> = std::result::Result<T, Error>;

/// Ringq errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tried to enqueue a value into a queue that is at capacity
    #[error("queue is full (capacity {capacity})")]
    QueueFull {
        /// Capacity of the rejecting queue
        capacity: usize,
    },

    /// A queue can only be created with a positive capacity
    #[error("invalid capacity: {0}")]
    InvalidCapacity(i64),

    /// The storage for a queue could not be allocated
    #[error("failed to allocate storage for {capacity} values")]
    Allocation {
        /// Requested capacity
        capacity: usize,
    },

    /// Deposits and withdrawals must be positive
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),

    /// The balance can not represent the result of the transaction
    #[error("balance overflow: balance {balance}, amount {amount}")]
    BalanceOverflow {
        /// Balance at the time of the transaction
        balance: i64,
        /// Amount of the transaction
        amount: i64,
    },

    /// Tried to withdraw more than the account holds
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the withdrawal
        balance: i64,
        /// Amount that was requested
        requested: i64,
    },

    /// Serde json error
    #[error("malformed json: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Io error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
