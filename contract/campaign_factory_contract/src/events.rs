use soroban_sdk::{contracttype, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u32,
    pub name: String,
    pub start_time: u64,
    pub end_time: u64,
}

/// Carries no voter identity, only what was voted for.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub campaign_id: u32,
    pub candidate_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignEndedEvent {
    pub campaign_id: u32,
    pub total_votes: u64,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish(
        (
            Symbol::new(env, "vote_cast"),
            event.campaign_id,
            event.candidate_id,
        ),
        event,
    );
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_ended"), event.campaign_id),
        event,
    );
}
