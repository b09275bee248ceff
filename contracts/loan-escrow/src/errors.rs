use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // validation
    InvalidAmount = 1,
    AmountBelowMinimum = 2,
    InvalidDueDate = 3,
    InvalidCounterparty = 4,
    InvalidConfig = 5,
    // authorization
    Unauthorized = 10,
    // lifecycle ordering
    NotConfigured = 20,
    LoanNotFound = 21,
    HistoryNotFound = 22,
    AlreadyConfirmed = 23,
    NotConfirmed = 24,
    AlreadyRepaid = 25,
    BadLoanerHistory = 26,
    // custody
    InsufficientFunds = 30,
    // derived addresses
    LoanInFlight = 40,
    DerivationExhausted = 41,
    Overflow = 50,
}

/// Coarse grouping of [`Error`] codes for callers that only care about the
/// failure class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    State,
    InsufficientFunds,
    DerivationConflict,
    Arithmetic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAmount
            | Error::AmountBelowMinimum
            | Error::InvalidDueDate
            | Error::InvalidCounterparty
            | Error::InvalidConfig => ErrorKind::Validation,
            Error::Unauthorized => ErrorKind::Authorization,
            Error::NotConfigured
            | Error::LoanNotFound
            | Error::HistoryNotFound
            | Error::AlreadyConfirmed
            | Error::NotConfirmed
            | Error::AlreadyRepaid
            | Error::BadLoanerHistory => ErrorKind::State,
            Error::InsufficientFunds => ErrorKind::InsufficientFunds,
            Error::LoanInFlight | Error::DerivationExhausted => ErrorKind::DerivationConflict,
            Error::Overflow => ErrorKind::Arithmetic,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::AmountBelowMinimum.kind(), ErrorKind::Validation);
        assert_eq!(Error::Unauthorized.kind(), ErrorKind::Authorization);
        assert_eq!(Error::AlreadyConfirmed.kind(), ErrorKind::State);
        assert_eq!(Error::NotConfirmed.kind(), ErrorKind::State);
        assert_eq!(Error::InsufficientFunds.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(Error::LoanInFlight.kind(), ErrorKind::DerivationConflict);
        assert_eq!(Error::DerivationExhausted.kind(), ErrorKind::DerivationConflict);
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(Error::InvalidAmount as u32, 1);
        assert_eq!(Error::Unauthorized as u32, 10);
        assert_eq!(Error::InsufficientFunds as u32, 30);
        assert_eq!(Error::LoanInFlight as u32, 40);
    }
}
