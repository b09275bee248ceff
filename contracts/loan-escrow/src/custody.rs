use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;

/// Moves native value between the two parties of a loan.
///
/// Every transfer is checked against the payer's balance first, keeping
/// `min_retained_balance` on the payer's side.
pub struct Custody<'a> {
    env: &'a Env,
    token: token::Client<'a>,
    min_retained_balance: u64,
}

impl<'a> Custody<'a> {
    pub fn new(env: &'a Env, native_token: &Address, min_retained_balance: u64) -> Self {
        Custody {
            env,
            token: token::Client::new(env, native_token),
            min_retained_balance,
        }
    }

    pub fn ensure_covered(&self, payer: &Address, amount: u64) -> Result<(), Error> {
        let required = i128::from(amount)
            .checked_add(i128::from(self.min_retained_balance))
            .ok_or(Error::Overflow)?;
        let available = self.token.balance(payer);
        if available < required {
            log!(
                self.env,
                "insufficient balance: required {}, available {}",
                required,
                available
            );
            return Err(Error::InsufficientFunds);
        }
        Ok(())
    }

    pub fn transfer(&self, from: &Address, to: &Address, amount: u64) -> Result<(), Error> {
        self.ensure_covered(from, amount)?;
        self.token.transfer(from, to, &i128::from(amount));
        Ok(())
    }
}
