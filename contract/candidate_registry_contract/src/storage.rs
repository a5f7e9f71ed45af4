use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    PartyRegistry,
    CandidateCount,
    Candidate(u32),
    CampaignCandidates(u32), // CampaignID -> candidate ids in registration order
}
