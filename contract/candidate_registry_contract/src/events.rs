use soroban_sdk::{contracttype, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateRegisteredEvent {
    pub candidate_id: u32,
    pub name: String,
    pub party_id: u32,
    pub campaign_id: u32,
}

pub fn emit_candidate_registered(env: &Env, event: CandidateRegisteredEvent) {
    env.events().publish(
        (
            Symbol::new(env, "candidate_registered"),
            event.candidate_id,
            event.campaign_id,
        ),
        event,
    );
}
