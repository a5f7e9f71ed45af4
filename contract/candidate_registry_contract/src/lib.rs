#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use storage::DataKey;
use voting_shared::readers::resolve;
use voting_shared::ttl::{extend_instance, extend_persistent};
use voting_shared::validation::{require_address, require_name};
use voting_shared::PartyReaderClient;

pub use voting_shared::{Candidate, VotingError};

#[contract]
pub struct CandidateRegistry;

#[contractimpl]
impl CandidateRegistry {
    /// Wire the registry to the party registry it authorizes against.
    pub fn initialize(env: Env, party_registry: Address) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::PartyRegistry) {
            return Err(VotingError::AlreadyInitialized);
        }
        require_address(&env, &party_registry)?;

        env.storage()
            .instance()
            .set(&DataKey::PartyRegistry, &party_registry);
        env.storage().instance().set(&DataKey::CandidateCount, &0u32);
        extend_instance(&env);

        Ok(())
    }

    /// Register a candidate for `party_id` in `campaign_id`.
    ///
    /// `caller` must be the admin recorded on the party. The campaign is not
    /// looked up: candidates may be attached to a campaign that does not
    /// exist yet or has already ended.
    pub fn register_candidate(
        env: Env,
        caller: Address,
        name: String,
        party_id: u32,
        campaign_id: u32,
    ) -> Result<u32, VotingError> {
        caller.require_auth();
        require_name(&name)?;

        let parties = PartyReaderClient::new(&env, &Self::party_registry(env.clone())?);
        let party = resolve(
            parties.try_get_party(&party_id),
            VotingError::PartyNotFound,
        )?;
        if party.admin != caller {
            return Err(VotingError::NotPartyAdmin);
        }

        let candidate_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CandidateCount)
            .unwrap_or(0);

        let candidate = Candidate {
            id: candidate_id,
            name: name.clone(),
            party_id,
            campaign_id,
            exists: true,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Candidate(candidate_id), &candidate);

        let list_key = DataKey::CampaignCandidates(campaign_id);
        let mut ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&list_key)
            .unwrap_or_else(|| Vec::new(&env));
        ids.push_back(candidate_id);
        env.storage().persistent().set(&list_key, &ids);

        env.storage()
            .instance()
            .set(&DataKey::CandidateCount, &(candidate_id + 1));

        extend_persistent(&env, &DataKey::Candidate(candidate_id));
        extend_persistent(&env, &list_key);
        extend_instance(&env);

        log!(&env, "candidate registered", candidate_id, party_id, campaign_id);
        events::emit_candidate_registered(
            &env,
            events::CandidateRegisteredEvent {
                candidate_id,
                name,
                party_id,
                campaign_id,
            },
        );

        Ok(candidate_id)
    }

    pub fn get_candidate(env: Env, candidate_id: u32) -> Result<Candidate, VotingError> {
        env.storage()
            .persistent()
            .get::<_, Candidate>(&DataKey::Candidate(candidate_id))
            .filter(|candidate| candidate.exists)
            .ok_or(VotingError::CandidateNotFound)
    }

    pub fn get_candidates_by_campaign(env: Env, campaign_id: u32) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::CampaignCandidates(campaign_id))
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn candidate_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CandidateCount)
            .unwrap_or(0)
    }

    pub fn party_registry(env: Env) -> Result<Address, VotingError> {
        env.storage()
            .instance()
            .get(&DataKey::PartyRegistry)
            .ok_or(VotingError::NotInitialized)
    }
}
