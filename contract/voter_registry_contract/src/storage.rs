use soroban_sdk::{contracttype, BytesN};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    VoterCount,
    Voter(BytesN<32>), // HashedNIN -> Voter
}
