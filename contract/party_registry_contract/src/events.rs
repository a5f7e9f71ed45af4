use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyRegisteredEvent {
    pub party_id: u32,
    pub name: String,
    pub symbol: String,
    pub admin: Address,
}

pub fn emit_party_registered(env: &Env, event: PartyRegisteredEvent) {
    env.events().publish(
        (Symbol::new(env, "party_registered"), event.party_id),
        event,
    );
}
