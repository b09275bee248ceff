use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::constants::{DERIVATION_DOMAIN, HISTORY_SEED, LOAN_SEED, MAX_BUMP};
use crate::errors::Error;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordTag {
    Loan,
    History,
}

impl RecordTag {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            RecordTag::Loan => LOAN_SEED,
            RecordTag::History => HISTORY_SEED,
        }
    }
}

/// Computes the storage address of a record owned by `loaner`.
///
/// Hashes `tag || xdr(loaner) || bump || xdr(this contract) || domain` for
/// `bump` counting down from 255 and returns the first digest that lands in
/// the canonical half of the key space, together with the bump that produced
/// it. Pure: same inputs give the same address on every call.
pub fn find_record_address(
    env: &Env,
    tag: RecordTag,
    loaner: &Address,
) -> Result<(BytesN<32>, u32), Error> {
    search(env, tag, loaner, is_canonical)
}

fn search<F>(
    env: &Env,
    tag: RecordTag,
    loaner: &Address,
    accept: F,
) -> Result<(BytesN<32>, u32), Error>
where
    F: Fn(&[u8; 32]) -> bool,
{
    let mut seeds = Bytes::from_slice(env, tag.seed());
    seeds.append(&loaner.clone().to_xdr(env));
    let program = env.current_contract_address().to_xdr(env);

    for bump in (0..=MAX_BUMP).rev() {
        let mut preimage = seeds.clone();
        preimage.push_back(bump as u8);
        preimage.append(&program);
        preimage.extend_from_slice(DERIVATION_DOMAIN);
        let digest = env.crypto().sha256(&preimage).to_array();
        if accept(&digest) {
            return Ok((BytesN::from_array(env, &digest), bump));
        }
    }
    Err(Error::DerivationExhausted)
}

// High bit of the last byte clear.
fn is_canonical(digest: &[u8; 32]) -> bool {
    digest[31] & 0x80 == 0
}
