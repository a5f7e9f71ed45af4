use soroban_sdk::{Address, BytesN, Env, String};

use crate::error::VotingError;

/// Strkey of the all-zero ed25519 account, used wherever an address must
/// not be "null".
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

pub fn require_address(env: &Env, address: &Address) -> Result<(), VotingError> {
    if *address == null_address(env) {
        return Err(VotingError::NullAddress);
    }
    Ok(())
}

pub fn require_name(name: &String) -> Result<(), VotingError> {
    if name.len() == 0 {
        return Err(VotingError::EmptyName);
    }
    Ok(())
}

pub fn require_symbol(symbol: &String) -> Result<(), VotingError> {
    if symbol.len() == 0 {
        return Err(VotingError::EmptySymbol);
    }
    Ok(())
}

pub fn require_hashed_nin(hashed_nin: &BytesN<32>) -> Result<(), VotingError> {
    if hashed_nin.to_array() == [0u8; 32] {
        return Err(VotingError::ZeroHashedNin);
    }
    Ok(())
}
