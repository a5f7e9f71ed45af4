use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegisteredEvent {
    pub hashed_nin: BytesN<32>,
    pub voter_address: Address,
}

pub fn emit_voter_registered(env: &Env, event: VoterRegisteredEvent) {
    env.events().publish(
        (Symbol::new(env, "voter_registered"), event.hashed_nin.clone()),
        event,
    );
}
