#![no_std]

mod constants;
mod contract;
mod custody;
mod derive;
mod errors;
mod events;
mod lifecycle;
mod storage;

pub use contract::{LoanEscrow, LoanEscrowClient};
pub use derive::RecordTag;
pub use errors::{Error, ErrorKind};
pub use events::{ConfigUpdated, LoanConfirmed, LoanInitialized, LoanRepaid};
pub use storage::{ContractRecord, LoanConfig, LoanState, LoanerHistory, RepaymentSchema};
