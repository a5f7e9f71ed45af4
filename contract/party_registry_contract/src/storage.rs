use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    PartyCount,
    Party(u32),
}
