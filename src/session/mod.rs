use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub use self::message::{Command, Reply};
use crate::account::BankAccount;
use crate::error::Result;
use crate::queue::BoundedQueue;

mod message;

/// Holds the queue and account that commands operate on.
///
/// ```
/// use ringq::{Command, Reply, Session};
///
/// let mut session = Session::new();
/// session.apply(Command::Enqueue { value: 1 });
/// assert_eq!(session.apply(Command::Dequeue), Reply::Value { value: Some(1) });
/// ```
#[derive(Debug, Default)]
pub struct Session {
    queue: BoundedQueue,
    account: BankAccount,
}

impl Session {
    /// A session with an empty queue of default capacity and an empty account
    pub fn new() -> Self {
        Self::default()
    }

    /// The current queue
    pub fn queue(&self) -> &BoundedQueue {
        &self.queue
    }

    /// The current account
    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    /// Apply a command.
    /// Failures are reported as `Reply::Error` and leave the session as it was.
    pub fn apply(&mut self, command: Command) -> Reply {
        log::debug!("command {command:?}");
        match command {
            Command::New { capacity } => {
                let queue = match capacity {
                    Some(capacity) => BoundedQueue::try_from(capacity),
                    None => Ok(BoundedQueue::default()),
                };
                match queue {
                    Ok(queue) => {
                        self.queue = queue;
                        Reply::Ok
                    }
                    Err(e) => Reply::error(e),
                }
            }
            Command::Enqueue { value } => match self.queue.enqueue(value) {
                Ok(()) => Reply::Ok,
                Err(e) => Reply::error(e),
            },
            Command::Dequeue => Reply::Value {
                value: self.queue.dequeue(),
            },
            Command::Size => Reply::Size {
                size: self.queue.len(),
            },
            Command::IsEmpty => Reply::Flag {
                value: self.queue.is_empty(),
            },
            Command::IsFull => Reply::Flag {
                value: self.queue.is_full(),
            },
            Command::State => Reply::State {
                state: self.queue.state(),
            },
            Command::Deposit { amount } => match self.account.deposit(amount) {
                Ok(()) => Reply::Ok,
                Err(e) => Reply::error(e),
            },
            Command::Withdraw { amount } => match self.account.withdraw(amount) {
                Ok(()) => Reply::Ok,
                Err(e) => Reply::error(e),
            },
            Command::Balance => Reply::Balance {
                balance: self.account.balance(),
            },
        }
    }

    /// Decode a json command, apply it and encode the reply
    pub fn handle_line(&mut self, line: &str) -> Result<String> {
        let command: Command = serde_json::from_str(line)?;
        let reply = self.apply(command);
        Ok(serde_json::to_string(&reply)?)
    }
}

/// Read json commands, one per line, from `reader` and write
/// one json reply per command to `writer`.
///
/// Blank lines are skipped. A line that can not be decoded produces a
/// `Reply::Error` and the next line is read.
pub async fn run<R, W>(reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match session.handle_line(&line) {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("{e}");
                serde_json::to_string(&Reply::error(e))?
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}
