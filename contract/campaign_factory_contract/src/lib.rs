#![no_std]

mod events;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};
use voting_shared::access::{self, Role};
use voting_shared::guard::ReentrancyGuard;
use voting_shared::pausable;
use voting_shared::readers::resolve;
use voting_shared::ttl::{extend_instance, extend_persistent};
use voting_shared::validation::{require_address, require_hashed_nin, require_name};
use voting_shared::{CandidateReaderClient, VoterReaderClient};

use storage::DataKey;

pub use storage::{Campaign, CampaignResults, CampaignStatus};
pub use voting_shared::VotingError;

#[contract]
pub struct CampaignFactory;

#[contractimpl]
impl CampaignFactory {
    /// Initialize the factory with its admin and the registries it reads
    /// voters and candidates from.
    pub fn initialize(
        env: Env,
        admin: Address,
        voter_registry: Address,
        candidate_registry: Address,
    ) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(VotingError::AlreadyInitialized);
        }
        require_address(&env, &admin)?;
        require_address(&env, &voter_registry)?;
        require_address(&env, &candidate_registry)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .set(&DataKey::VoterRegistry, &voter_registry);
        env.storage()
            .instance()
            .set(&DataKey::CandidateRegistry, &candidate_registry);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        access::assign(&env, Role::SystemAdmin, &admin);
        extend_instance(&env);

        Ok(())
    }

    /// Create a campaign accepting votes during `[start_time, end_time]`.
    ///
    /// The window is not compared with the current ledger time.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: String,
        start_time: u64,
        end_time: u64,
    ) -> Result<u32, VotingError> {
        access::require_role(&env, &caller, Role::SystemAdmin)?;
        pausable::require_not_paused(&env)?;
        require_name(&name)?;
        if end_time <= start_time {
            return Err(VotingError::InvalidTimeRange);
        }

        let mut count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0);
        count += 1;

        let campaign = Campaign {
            id: count,
            name: name.clone(),
            start_time,
            end_time,
            status: CampaignStatus::Active,
            total_votes: 0,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Campaign(count), &campaign);
        env.storage().instance().set(&DataKey::CampaignCount, &count);

        extend_persistent(&env, &DataKey::Campaign(count));
        extend_instance(&env);

        log!(&env, "campaign created", count, start_time, end_time);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: count,
                name,
                start_time,
                end_time,
            },
        );

        Ok(count)
    }

    /// Cast the vote of the voter registered under `hashed_nin`.
    ///
    /// Every check, including both cross-registry reads, runs before any
    /// state is written. A hashed NIN votes at most once per campaign.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        campaign_id: u32,
        candidate_id: u32,
        hashed_nin: BytesN<32>,
    ) -> Result<(), VotingError> {
        voter.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        pausable::require_not_paused(&env)?;

        let mut campaign = load_campaign(&env, campaign_id)?;
        if campaign.status != CampaignStatus::Active {
            return Err(VotingError::CampaignNotActive);
        }
        let now = env.ledger().timestamp();
        if now < campaign.start_time || now > campaign.end_time {
            return Err(VotingError::OutsideVotingWindow);
        }
        require_hashed_nin(&hashed_nin)?;

        let voted_key = DataKey::Voted(campaign_id, hashed_nin.clone());
        if env.storage().persistent().has(&voted_key) {
            return Err(VotingError::AlreadyVoted);
        }

        let voters = VoterReaderClient::new(&env, &registry(&env, DataKey::VoterRegistry)?);
        let record = resolve(
            voters.try_get_voter(&hashed_nin),
            VotingError::VoterNotFound,
        )?;
        if record.address != voter {
            return Err(VotingError::VoterIdentityMismatch);
        }

        let candidates =
            CandidateReaderClient::new(&env, &registry(&env, DataKey::CandidateRegistry)?);
        let candidate = resolve(
            candidates.try_get_candidate(&candidate_id),
            VotingError::CandidateNotFound,
        )?;
        if candidate.campaign_id != campaign_id {
            return Err(VotingError::CandidateNotInCampaign);
        }

        let votes_key = DataKey::CandidateVotes(campaign_id, candidate_id);
        let votes: u64 = env.storage().persistent().get(&votes_key).unwrap_or(0);
        env.storage().persistent().set(&votes_key, &(votes + 1));

        campaign.total_votes += 1;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);
        env.storage().persistent().set(&voted_key, &true);

        extend_persistent(&env, &votes_key);
        extend_persistent(&env, &voted_key);
        extend_persistent(&env, &DataKey::Campaign(campaign_id));
        extend_instance(&env);

        log!(&env, "vote cast", campaign_id, candidate_id);
        events::emit_vote_cast(
            &env,
            events::VoteCastEvent {
                campaign_id,
                candidate_id,
            },
        );

        Ok(())
    }

    /// Votes recorded for the pair, 0 when either id is unknown.
    pub fn get_candidate_votes(env: Env, campaign_id: u32, candidate_id: u32) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::CandidateVotes(campaign_id, candidate_id))
            .unwrap_or(0)
    }

    /// Close voting. There is no way back to `Active`.
    pub fn end_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), VotingError> {
        access::require_role(&env, &caller, Role::SystemAdmin)?;

        let mut campaign = load_campaign(&env, campaign_id)?;
        if campaign.status != CampaignStatus::Active {
            return Err(VotingError::CampaignNotActive);
        }

        campaign.status = CampaignStatus::Ended;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &DataKey::Campaign(campaign_id));
        extend_instance(&env);

        log!(&env, "campaign ended", campaign_id, campaign.total_votes);
        events::emit_campaign_ended(
            &env,
            events::CampaignEndedEvent {
                campaign_id,
                total_votes: campaign.total_votes,
            },
        );

        Ok(())
    }

    /// Vote counts for every candidate registered under the campaign, in
    /// registration order.
    pub fn get_campaign_results(
        env: Env,
        campaign_id: u32,
    ) -> Result<CampaignResults, VotingError> {
        let candidates =
            CandidateReaderClient::new(&env, &registry(&env, DataKey::CandidateRegistry)?);
        let candidate_ids = candidates.get_candidates_by_campaign(&campaign_id);

        let mut vote_counts: Vec<u64> = Vec::new(&env);
        for candidate_id in candidate_ids.iter() {
            vote_counts.push_back(Self::get_candidate_votes(
                env.clone(),
                campaign_id,
                candidate_id,
            ));
        }

        Ok(CampaignResults {
            candidate_ids,
            vote_counts,
        })
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, VotingError> {
        load_campaign(&env, campaign_id)
    }

    pub fn has_voted(env: Env, campaign_id: u32, hashed_nin: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Voted(campaign_id, hashed_nin))
    }

    pub fn campaign_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0)
    }

    /// Block campaign creation and voting.
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

fn load_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, VotingError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(VotingError::CampaignNotFound)
}

fn registry(env: &Env, key: DataKey) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&key)
        .ok_or(VotingError::NotInitialized)
}
