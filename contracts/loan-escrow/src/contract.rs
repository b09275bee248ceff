use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

use crate::custody::Custody;
use crate::derive::{find_record_address, RecordTag};
use crate::errors::Error;
use crate::events::*;
use crate::lifecycle;
use crate::storage::*;

#[contract]
pub struct LoanEscrow;

#[contractimpl]
impl LoanEscrow {
    /// Deploy-time setup: the admin allowed to change `config`, and the
    /// native asset contract that loans are paid in.
    pub fn __constructor(env: Env, admin: Address, native_token: Address, config: LoanConfig) {
        if let Err(err) = config.validate() {
            panic_with_error!(&env, err);
        }
        write_admin(&env, &admin);
        write_native_token(&env, &native_token);
        write_config(&env, &config);
        bump_instance_ttl(&env);
    }

    /// Opens a loan request from `loaner` to `owner`.
    ///
    /// The loaner signs and pays for the records. Returns the loan's derived
    /// address; the loaner's history record is created on first use.
    pub fn initialize(
        env: Env,
        loaner: Address,
        owner: Address,
        amount: u64,
        due_at: u64,
    ) -> Result<BytesN<32>, Error> {
        bump_instance_ttl(&env);
        loaner.require_auth();
        let config = read_config(&env)?;

        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        if amount < config.min_amount {
            return Err(Error::AmountBelowMinimum);
        }
        if owner == loaner {
            return Err(Error::InvalidCounterparty);
        }
        let now = env.ledger().timestamp();
        if config.enforce_future_due && due_at <= now {
            return Err(Error::InvalidDueDate);
        }

        let (loan, loan_bump) = find_record_address(&env, RecordTag::Loan, &loaner)?;
        if let Err(err) = lifecycle::ensure_slot_free(read_loan(&env, &loan).as_ref()) {
            log!(&env, "loan already in flight for {}", loaner);
            return Err(err);
        }
        let (history, history_bump) = find_record_address(&env, RecordTag::History, &loaner)?;

        let record = ContractRecord {
            owner: owner.clone(),
            loaner: loaner.clone(),
            amount,
            created_at: now,
            due_at,
            is_confirmed: false,
            is_paid: false,
            is_late_paid: false,
            bump: loan_bump,
        };
        write_loan(&env, &loan, &record);
        if read_history(&env, &history).is_none() {
            write_history(&env, &history, &LoanerHistory::new(loaner.clone(), history_bump));
        }

        LoanInitialized {
            loaner,
            owner,
            loan: loan.clone(),
            amount,
            due_at,
        }
        .publish(&env);
        Ok(loan)
    }

    /// The owner releases `amount` to the loaner.
    pub fn loan_confirm(env: Env, signer: Address, loan: BytesN<32>) -> Result<(), Error> {
        bump_instance_ttl(&env);
        signer.require_auth();
        let config = read_config(&env)?;

        let mut record = read_loan(&env, &loan).ok_or(Error::LoanNotFound)?;
        let (history_address, _) = find_record_address(&env, RecordTag::History, &record.loaner)?;
        let mut history = read_history(&env, &history_address).ok_or(Error::HistoryNotFound)?;

        if let Err(err) = lifecycle::confirm(&mut record, &mut history, &signer, &config) {
            log!(&env, "confirm rejected for {}", signer);
            return Err(err);
        }

        let native_token = read_native_token(&env)?;
        Custody::new(&env, &native_token, config.min_retained_balance).transfer(
            &record.owner,
            &record.loaner,
            record.amount,
        )?;

        write_loan(&env, &loan, &record);
        write_history(&env, &history_address, &history);

        LoanConfirmed {
            owner: record.owner,
            loaner: record.loaner,
            loan,
            amount: record.amount,
            total_loans: history.total_loans,
        }
        .publish(&env);
        Ok(())
    }

    /// The loaner returns `amount` to the owner. Repaying after `due_at`
    /// marks the loan late and counts it against the loaner.
    pub fn loan_paid(env: Env, signer: Address, loan: BytesN<32>) -> Result<(), Error> {
        bump_instance_ttl(&env);
        signer.require_auth();
        let config = read_config(&env)?;

        let mut record = read_loan(&env, &loan).ok_or(Error::LoanNotFound)?;
        let (history_address, _) = find_record_address(&env, RecordTag::History, &record.loaner)?;
        let mut history = read_history(&env, &history_address).ok_or(Error::HistoryNotFound)?;

        let now = env.ledger().timestamp();
        let late = match lifecycle::repay(
            &mut record,
            &mut history,
            &signer,
            config.repayment_schema,
            now,
        ) {
            Ok(late) => late,
            Err(err) => {
                log!(&env, "repayment rejected for {}", signer);
                return Err(err);
            }
        };

        let native_token = read_native_token(&env)?;
        Custody::new(&env, &native_token, config.min_retained_balance).transfer(
            &record.loaner,
            &record.owner,
            record.amount,
        )?;

        write_loan(&env, &loan, &record);
        write_history(&env, &history_address, &history);

        LoanRepaid {
            loaner: record.loaner,
            owner: record.owner,
            loan,
            amount: record.amount,
            late,
            late_paid_loans: history.late_paid_loans,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_loan(env: Env, loan: BytesN<32>) -> Option<ContractRecord> {
        read_loan(&env, &loan)
    }

    pub fn get_history(env: Env, history: BytesN<32>) -> Option<LoanerHistory> {
        read_history(&env, &history)
    }

    pub fn loan_state(env: Env, loan: BytesN<32>) -> LoanState {
        read_loan(&env, &loan)
            .map(|record| record.state())
            .unwrap_or(LoanState::Uninitialized)
    }

    pub fn derive_address(
        env: Env,
        tag: RecordTag,
        loaner: Address,
    ) -> Result<(BytesN<32>, u32), Error> {
        find_record_address(&env, tag, &loaner)
    }

    pub fn loan_address(env: Env, loaner: Address) -> Result<BytesN<32>, Error> {
        find_record_address(&env, RecordTag::Loan, &loaner).map(|(address, _)| address)
    }

    pub fn history_address(env: Env, loaner: Address) -> Result<BytesN<32>, Error> {
        find_record_address(&env, RecordTag::History, &loaner).map(|(address, _)| address)
    }

    /// Admin: replace the loan configuration. Applies to every later call,
    /// including loans already in flight.
    pub fn update_config(env: Env, admin: Address, config: LoanConfig) -> Result<(), Error> {
        bump_instance_ttl(&env);
        require_admin(&env, &admin)?;
        config.validate()?;
        write_config(&env, &config);
        ConfigUpdated { admin }.publish(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LoanConfig, Error> {
        read_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, Error> {
        read_native_token(&env)
    }

    pub fn bump_ttl(env: Env) {
        bump_instance_ttl(&env);
    }
}
