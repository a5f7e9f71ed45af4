#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage::DataKey;
use voting_shared::access::{self, Role};
use voting_shared::ttl::{extend_instance, extend_persistent};
use voting_shared::validation::{require_address, require_name, require_symbol};

pub use voting_shared::{Party, VotingError};

#[contract]
pub struct PartyRegistry;

#[contractimpl]
impl PartyRegistry {
    /// Initialize the registry and make `admin` its first system admin.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(VotingError::AlreadyInitialized);
        }
        require_address(&env, &admin)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::PartyCount, &0u32);
        access::assign(&env, Role::SystemAdmin, &admin);
        extend_instance(&env);

        Ok(())
    }

    /// Register a party. Names and symbols are not required to be unique.
    pub fn register_party(
        env: Env,
        caller: Address,
        name: String,
        symbol: String,
        admin: Address,
    ) -> Result<u32, VotingError> {
        access::require_role(&env, &caller, Role::SystemAdmin)?;
        require_name(&name)?;
        require_symbol(&symbol)?;
        require_address(&env, &admin)?;

        let party_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PartyCount)
            .unwrap_or(0);

        let party = Party {
            name: name.clone(),
            symbol: symbol.clone(),
            admin: admin.clone(),
            exists: true,
        };

        env.storage().persistent().set(&DataKey::Party(party_id), &party);
        env.storage()
            .instance()
            .set(&DataKey::PartyCount, &(party_id + 1));

        extend_persistent(&env, &DataKey::Party(party_id));
        extend_instance(&env);

        log!(&env, "party registered", party_id, admin.clone());
        events::emit_party_registered(
            &env,
            events::PartyRegisteredEvent {
                party_id,
                name,
                symbol,
                admin,
            },
        );

        Ok(party_id)
    }

    pub fn get_party(env: Env, party_id: u32) -> Result<Party, VotingError> {
        env.storage()
            .persistent()
            .get::<_, Party>(&DataKey::Party(party_id))
            .filter(|party| party.exists)
            .ok_or(VotingError::PartyNotFound)
    }

    pub fn party_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::PartyCount)
            .unwrap_or(0)
    }

    /// Grant the global party-admin capability.
    ///
    /// This is independent of the `admin` field on each party record, which
    /// is what candidate registration checks.
    pub fn assign_party_admin(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), VotingError> {
        require_address(&env, &account)?;
        access::grant_role(&env, &caller, Role::PartyAdmin, &account)
    }

    pub fn revoke_party_admin(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), VotingError> {
        access::revoke_role(&env, &caller, Role::PartyAdmin, &account)
    }

    pub fn is_party_admin(env: Env, account: Address) -> bool {
        access::has_role(&env, Role::PartyAdmin, &account)
    }

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VotingError> {
        access::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VotingError> {
        access::revoke_role(&env, &caller, role, &account)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }
}
