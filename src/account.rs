use crate::error::{Error, Result};

/// A toy bank account holding a single balance
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BankAccount {
    balance: i64,
}

impl BankAccount {
    /// An empty account
    pub fn new() -> Self {
        Self::default()
    }

    /// An account with an opening balance
    pub fn with_balance(balance: i64) -> Self {
        Self { balance }
    }

    /// Current balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// `amount` has to be positive. On error the balance is unchanged.
    pub fn deposit(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }

    /// Withdraw `amount` from the account.
    ///
    /// `amount` has to be positive. If the balance does not cover the amount
    /// nothing is withdrawn and `Error::InsufficientFunds` is returned.
    pub fn withdraw(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(Error::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }
}
