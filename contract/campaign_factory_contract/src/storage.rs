use soroban_sdk::{contracttype, BytesN, String, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    VoterRegistry,
    CandidateRegistry,
    CampaignCount,
    Campaign(u32),
    CandidateVotes(u32, u32), // (CampaignID, CandidateID) -> count
    Voted(u32, BytesN<32>),    // (CampaignID, HashedNIN) -> true once voted
}

/// Lifecycle of a campaign. `Active -> Ended` is the only transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Ended,
    // Declared for compatibility, never assigned.
    Cancelled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub start_time: u64,
    pub end_time: u64,
    pub status: CampaignStatus,
    /// Always equal to the sum of the campaign's per-candidate counts.
    pub total_votes: u64,
}

/// Parallel arrays: `vote_counts[i]` belongs to `candidate_ids[i]`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignResults {
    pub candidate_ids: Vec<u32>,
    pub vote_counts: Vec<u64>,
}
