use soroban_sdk::{contractevent, Address, BytesN};

/// Emitted when a loaner opens a loan request.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanInitialized {
    #[topic]
    pub loaner: Address,
    #[topic]
    pub owner: Address,
    pub loan: BytesN<32>,
    pub amount: u64,
    pub due_at: u64,
}

/// Emitted when the owner funds the loan.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanConfirmed {
    #[topic]
    pub owner: Address,
    #[topic]
    pub loaner: Address,
    pub loan: BytesN<32>,
    pub amount: u64,
    pub total_loans: u64,
}

/// Emitted when the loaner returns the principal.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanRepaid {
    #[topic]
    pub loaner: Address,
    #[topic]
    pub owner: Address,
    pub loan: BytesN<32>,
    pub amount: u64,
    pub late: bool,
    pub late_paid_loans: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdated {
    #[topic]
    pub admin: Address,
}
