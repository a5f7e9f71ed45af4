#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};
use storage::DataKey;
use voting_shared::access::{self, Role};
use voting_shared::pausable;
use voting_shared::ttl::{extend_instance, extend_persistent};
use voting_shared::validation::{require_address, require_hashed_nin};

pub use voting_shared::{Voter, VotingError};

#[contract]
pub struct VoterRegistry;

#[contractimpl]
impl VoterRegistry {
    /// Initialize the registry. `admin` becomes both system admin and the
    /// first registrar.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(VotingError::AlreadyInitialized);
        }
        require_address(&env, &admin)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::VoterCount, &0u32);
        access::assign(&env, Role::SystemAdmin, &admin);
        access::assign(&env, Role::Registrar, &admin);
        extend_instance(&env);

        Ok(())
    }

    /// Register a voter under its hashed NIN. A key can be registered once.
    pub fn register_voter(
        env: Env,
        caller: Address,
        hashed_nin: BytesN<32>,
        voter_address: Address,
    ) -> Result<(), VotingError> {
        access::require_role(&env, &caller, Role::Registrar)?;
        pausable::require_not_paused(&env)?;
        require_hashed_nin(&hashed_nin)?;
        require_address(&env, &voter_address)?;

        let key = DataKey::Voter(hashed_nin.clone());
        if env.storage().persistent().has(&key) {
            return Err(VotingError::VoterAlreadyRegistered);
        }

        let voter = Voter {
            address: voter_address.clone(),
            registered: true,
        };
        env.storage().persistent().set(&key, &voter);

        let count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::VoterCount)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::VoterCount, &(count + 1));

        extend_persistent(&env, &key);
        extend_instance(&env);

        log!(&env, "voter registered", voter_address.clone());
        events::emit_voter_registered(
            &env,
            events::VoterRegisteredEvent {
                hashed_nin,
                voter_address,
            },
        );

        Ok(())
    }

    /// True iff `hashed_nin` is registered to exactly `voter_address`.
    pub fn validate_voter(env: Env, hashed_nin: BytesN<32>, voter_address: Address) -> bool {
        match env
            .storage()
            .persistent()
            .get::<_, Voter>(&DataKey::Voter(hashed_nin))
        {
            Some(voter) => voter.registered && voter.address == voter_address,
            None => false,
        }
    }

    pub fn get_voter(env: Env, hashed_nin: BytesN<32>) -> Result<Voter, VotingError> {
        env.storage()
            .persistent()
            .get::<_, Voter>(&DataKey::Voter(hashed_nin))
            .filter(|voter| voter.registered)
            .ok_or(VotingError::VoterNotFound)
    }

    pub fn is_registered(env: Env, hashed_nin: BytesN<32>) -> bool {
        env.storage().persistent().has(&DataKey::Voter(hashed_nin))
    }

    pub fn voter_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::VoterCount)
            .unwrap_or(0)
    }

    /// Block registration. Lookups keep working.
    pub fn pause(env: Env, caller: Address) -> Result<(), VotingError> {
        pausable::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), VotingError> {
        pausable::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
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
