use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Party {
    pub name: String,
    pub symbol: String,
    /// Only this identity may register candidates for the party.
    pub admin: Address,
    pub exists: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub party_id: u32,
    pub campaign_id: u32,
    pub exists: bool,
}

/// Stored under the off-chain digest of the voter's national ID number,
/// never under the address itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub address: Address,
    pub registered: bool,
}
