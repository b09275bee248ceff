//! Transition rules of a loan.
//!
//! `Initialized -> Confirmed -> Repaid`. Each rule checks the signer against
//! the identity the record expects, then the current state, and only then
//! mutates the in-memory record and history. Nothing here touches storage or
//! balances; the contract persists the result after custody succeeds.

use soroban_sdk::Address;

use crate::errors::Error;
use crate::storage::{ContractRecord, LoanConfig, LoanState, LoanerHistory, RepaymentSchema};

pub fn authorize(signer: &Address, expected: &Address) -> Result<(), Error> {
    if signer != expected {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Whether a new loan may be written over whatever sits at the loaner's
/// derived address.
pub fn ensure_slot_free(existing: Option<&ContractRecord>) -> Result<(), Error> {
    match existing.map(ContractRecord::state) {
        None | Some(LoanState::Repaid) => Ok(()),
        Some(_) => Err(Error::LoanInFlight),
    }
}

pub fn confirm(
    record: &mut ContractRecord,
    history: &mut LoanerHistory,
    signer: &Address,
    config: &LoanConfig,
) -> Result<(), Error> {
    authorize(signer, &record.owner)?;
    if record.is_confirmed {
        return Err(Error::AlreadyConfirmed);
    }
    if let Some(limit) = config.max_late_paid_loans {
        if history.late_paid_loans > limit {
            return Err(Error::BadLoanerHistory);
        }
    }
    record.is_confirmed = true;
    history.total_loans = history
        .total_loans
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    Ok(())
}

/// Marks the loan repaid at ledger time `now`. Returns `true` when the
/// repayment was late.
pub fn repay(
    record: &mut ContractRecord,
    history: &mut LoanerHistory,
    signer: &Address,
    schema: RepaymentSchema,
    now: u64,
) -> Result<bool, Error> {
    authorize(signer, &record.loaner)?;
    if !record.is_confirmed {
        return Err(Error::NotConfirmed);
    }
    if record.is_paid {
        return Err(Error::AlreadyRepaid);
    }
    record.is_paid = true;

    let late = match schema {
        RepaymentSchema::Tracked => now > record.due_at,
        RepaymentSchema::Simple => false,
    };
    if late {
        record.is_late_paid = true;
        history.late_paid_loans = history
            .late_paid_loans
            .checked_add(1)
            .ok_or(Error::Overflow)?;
    }
    Ok(late)
}
