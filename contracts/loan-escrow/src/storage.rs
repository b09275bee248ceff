use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::constants::{DEFAULT_MIN_AMOUNT, TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::errors::Error;

// Storage key types for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,       // Address (instance)
    NativeToken, // Address of the native asset contract (instance)
    Config,      // LoanConfig (instance)
    Loan(BytesN<32>),    // ContractRecord at a derived address
    History(BytesN<32>), // LoanerHistory at a derived address
}

/// Which repayment flags a loan carries.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepaymentSchema {
    /// `is_paid` plus `is_late_paid`, with late repayments counted in the
    /// loaner's history.
    Tracked,
    /// Only `is_paid`; repayments are never classified as late.
    Simple,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanConfig {
    pub min_amount: u64,
    /// Balance a payer must keep on top of the transferred amount.
    pub min_retained_balance: u64,
    pub repayment_schema: RepaymentSchema,
    pub enforce_future_due: bool,
    /// Confirm is refused once a loaner's late repayments exceed this.
    pub max_late_paid_loans: Option<u64>,
}

impl Default for LoanConfig {
    fn default() -> Self {
        LoanConfig {
            min_amount: DEFAULT_MIN_AMOUNT,
            min_retained_balance: 0,
            repayment_schema: RepaymentSchema::Tracked,
            enforce_future_due: false,
            max_late_paid_loans: None,
        }
    }
}

impl LoanConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_amount == 0 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanState {
    Uninitialized,
    Initialized,
    Confirmed,
    Repaid,
}

/// A single loan between `owner` (the lender) and `loaner` (the borrower).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractRecord {
    pub owner: Address,
    pub loaner: Address,
    pub amount: u64,
    pub created_at: u64,
    pub due_at: u64,
    pub is_confirmed: bool,
    pub is_paid: bool,
    pub is_late_paid: bool,
    pub bump: u32,
}

impl ContractRecord {
    pub fn state(&self) -> LoanState {
        if self.is_paid {
            LoanState::Repaid
        } else if self.is_confirmed {
            LoanState::Confirmed
        } else {
            LoanState::Initialized
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanerHistory {
    pub loaner: Address,
    pub total_loans: u64,
    pub late_paid_loans: u64,
    pub bump: u32,
}

impl LoanerHistory {
    pub fn new(loaner: Address, bump: u32) -> Self {
        LoanerHistory {
            loaner,
            total_loans: 0,
            late_paid_loans: 0,
            bump,
        }
    }
}

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotConfigured)
}

pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    let stored = read_admin(env)?;
    if stored != *admin {
        return Err(Error::Unauthorized);
    }
    admin.require_auth();
    Ok(())
}

pub fn write_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn read_native_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(Error::NotConfigured)
}

pub fn write_config(env: &Env, config: &LoanConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<LoanConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotConfigured)
}

pub fn read_loan(env: &Env, address: &BytesN<32>) -> Option<ContractRecord> {
    let persistent = env.storage().persistent();
    let key = DataKey::Loan(address.clone());
    let record: Option<ContractRecord> = persistent.get(&key);
    if record.is_some() {
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    record
}

pub fn write_loan(env: &Env, address: &BytesN<32>, record: &ContractRecord) {
    let persistent = env.storage().persistent();
    let key = DataKey::Loan(address.clone());
    persistent.set(&key, record);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_history(env: &Env, address: &BytesN<32>) -> Option<LoanerHistory> {
    let persistent = env.storage().persistent();
    let key = DataKey::History(address.clone());
    let history: Option<LoanerHistory> = persistent.get(&key);
    if history.is_some() {
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    history
}

pub fn write_history(env: &Env, address: &BytesN<32>, history: &LoanerHistory) {
    let persistent = env.storage().persistent();
    let key = DataKey::History(address.clone());
    persistent.set(&key, history);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
