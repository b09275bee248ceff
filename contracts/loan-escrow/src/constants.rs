pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;

/// Seed prefixes for the two record kinds.
pub const LOAN_SEED: &[u8] = b"loan";
pub const HISTORY_SEED: &[u8] = b"history";

/// Appended to every derivation preimage so record addresses never alias
/// another hash domain.
pub const DERIVATION_DOMAIN: &[u8] = b"LoanDerivedRecord";
pub const MAX_BUMP: u32 = 255;

pub const DEFAULT_MIN_AMOUNT: u64 = 1;
