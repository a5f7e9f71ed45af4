#![cfg(test)]

use super::*;
use candidate_registry_contract::{CandidateRegistry, CandidateRegistryClient};
use party_registry_contract::{PartyRegistry, PartyRegistryClient};
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger},
    Address, BytesN, Env, Map, String, Symbol, TryFromVal, Val,
};
use voter_registry_contract::{VoterRegistry, VoterRegistryClient};
use voting_shared::guard::GuardKey;
use voting_shared::testutils::find_event;
use voting_shared::ttl::TTL_INSTANCE;
use voting_shared::validation::null_address;
use voting_shared::ErrorKind;

const START: u64 = 1_000;
const END: u64 = START + 100;

struct Election<'a> {
    env: Env,
    admin: Address,
    party_admin: Address,
    party_id: u32,
    voters: VoterRegistryClient<'a>,
    candidates: CandidateRegistryClient<'a>,
    factory: CampaignFactoryClient<'a>,
}

fn hashed_nin(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

fn setup<'a>() -> Election<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let party_admin = Address::generate(&env);

    let parties = PartyRegistryClient::new(&env, &env.register(PartyRegistry, ()));
    parties.initialize(&admin);
    let party_id = parties.register_party(
        &admin,
        &String::from_str(&env, "Unity Party"),
        &String::from_str(&env, "UP"),
        &party_admin,
    );

    let candidates = CandidateRegistryClient::new(&env, &env.register(CandidateRegistry, ()));
    candidates.initialize(&parties.address);

    let voters = VoterRegistryClient::new(&env, &env.register(VoterRegistry, ()));
    voters.initialize(&admin);

    let factory = CampaignFactoryClient::new(&env, &env.register(CampaignFactory, ()));
    factory.initialize(&admin, &voters.address, &candidates.address);

    Election {
        env,
        admin,
        party_admin,
        party_id,
        voters,
        candidates,
        factory,
    }
}

impl Election<'_> {
    fn campaign(&self, name: &str) -> u32 {
        self.factory
            .create_campaign(&self.admin, &String::from_str(&self.env, name), &START, &END)
    }

    fn candidate(&self, name: &str, campaign_id: u32) -> u32 {
        self.candidates.register_candidate(
            &self.party_admin,
            &String::from_str(&self.env, name),
            &self.party_id,
            &campaign_id,
        )
    }

    fn voter(&self, seed: u8) -> (Address, BytesN<32>) {
        let address = Address::generate(&self.env);
        let nin = hashed_nin(&self.env, seed);
        self.voters.register_voter(&self.admin, &nin, &address);
        (address, nin)
    }

    fn at(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    fn sum_of_counts(&self, campaign_id: u32) -> u64 {
        self.factory
            .get_campaign_results(&campaign_id)
            .vote_counts
            .iter()
            .sum()
    }
}

#[test]
fn test_vote_once_then_reject_repeat_and_unregistered() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);

    e.at(START + 1);
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);

    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 1);
    assert_eq!(e.factory.get_candidate_votes(&campaign_id, &c1), 1);
    assert!(e.factory.has_voted(&campaign_id, &nin));

    let repeat = e.factory.try_cast_vote(&voter, &campaign_id, &c1, &nin);
    assert_eq!(repeat, Err(Ok(VotingError::AlreadyVoted)));
    assert_eq!(VotingError::AlreadyVoted.kind(), ErrorKind::State);

    let stranger = Address::generate(&e.env);
    let unregistered = e
        .factory
        .try_cast_vote(&stranger, &campaign_id, &c1, &hashed_nin(&e.env, 2));
    assert_eq!(unregistered, Err(Ok(VotingError::VoterNotFound)));

    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 1);
    assert_eq!(e.factory.get_candidate_votes(&campaign_id, &c1), 1);
}

#[test]
fn test_total_votes_matches_candidate_counts() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let c2 = e.candidate("Grace", campaign_id);
    e.at(START + 10);

    let picks = [c1, c2, c2, c1, c2];
    for (i, pick) in picks.iter().enumerate() {
        let (voter, nin) = e.voter(i as u8 + 1);
        e.factory.cast_vote(&voter, &campaign_id, pick, &nin);

        let total = e.factory.get_campaign(&campaign_id).total_votes;
        assert_eq!(total, i as u64 + 1);
        assert_eq!(total, e.sum_of_counts(campaign_id));
    }

    let results = e.factory.get_campaign_results(&campaign_id);
    assert_eq!(results.candidate_ids, Vec::from_array(&e.env, [c1, c2]));
    assert_eq!(results.vote_counts, Vec::from_array(&e.env, [2u64, 3u64]));
}

#[test]
fn test_same_voter_may_vote_in_each_campaign() {
    let e = setup();
    let first = e.campaign("Presidential");
    let second = e.campaign("Senate");
    let c1 = e.candidate("Ada", first);
    let c2 = e.candidate("Grace", second);
    let (voter, nin) = e.voter(1);
    e.at(START);

    e.factory.cast_vote(&voter, &first, &c1, &nin);
    e.factory.cast_vote(&voter, &second, &c2, &nin);

    assert!(e.factory.has_voted(&first, &nin));
    assert!(e.factory.has_voted(&second, &nin));
    assert_eq!(e.factory.get_candidate_votes(&first, &c1), 1);
    assert_eq!(e.factory.get_candidate_votes(&second, &c2), 1);
}

#[test]
fn test_voting_window_is_inclusive() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (early, early_nin) = e.voter(1);
    let (late, late_nin) = e.voter(2);
    let (first, first_nin) = e.voter(3);
    let (last, last_nin) = e.voter(4);

    e.at(START - 1);
    assert_eq!(
        e.factory.try_cast_vote(&early, &campaign_id, &c1, &early_nin),
        Err(Ok(VotingError::OutsideVotingWindow))
    );

    e.at(START);
    e.factory.cast_vote(&first, &campaign_id, &c1, &first_nin);

    e.at(END);
    e.factory.cast_vote(&last, &campaign_id, &c1, &last_nin);

    e.at(END + 1);
    assert_eq!(
        e.factory.try_cast_vote(&late, &campaign_id, &c1, &late_nin),
        Err(Ok(VotingError::OutsideVotingWindow))
    );

    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 2);
    assert!(!e.factory.has_voted(&campaign_id, &early_nin));
    assert!(!e.factory.has_voted(&campaign_id, &late_nin));
}

#[test]
fn test_ended_campaign_rejects_votes_and_second_end() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);

    e.factory.end_campaign(&e.admin, &campaign_id);
    assert_eq!(
        e.factory.get_campaign(&campaign_id).status,
        CampaignStatus::Ended
    );

    e.at(START + 1);
    assert_eq!(
        e.factory.try_cast_vote(&voter, &campaign_id, &c1, &nin),
        Err(Ok(VotingError::CampaignNotActive))
    );
    assert_eq!(
        e.factory.try_end_campaign(&e.admin, &campaign_id),
        Err(Ok(VotingError::CampaignNotActive))
    );
    assert_eq!(
        e.factory.try_end_campaign(&e.admin, &77),
        Err(Ok(VotingError::CampaignNotFound))
    );
}

#[test]
fn test_end_campaign_requires_system_admin() {
    let e = setup();
    let campaign_id = e.campaign("General");

    assert_eq!(
        e.factory.try_end_campaign(&e.party_admin, &campaign_id),
        Err(Ok(VotingError::Unauthorized))
    );
    assert_eq!(
        e.factory.get_campaign(&campaign_id).status,
        CampaignStatus::Active
    );
}

#[test]
fn test_cross_campaign_vote_is_rejected() {
    let e = setup();
    let campaign_a = e.campaign("A");
    let campaign_b = e.campaign("B");
    let candidate_of_a = e.candidate("Ada", campaign_a);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    let result = e
        .factory
        .try_cast_vote(&voter, &campaign_b, &candidate_of_a, &nin);
    assert_eq!(result, Err(Ok(VotingError::CandidateNotInCampaign)));

    assert_eq!(e.factory.get_candidate_votes(&campaign_b, &candidate_of_a), 0);
    assert_eq!(e.factory.get_campaign(&campaign_b).total_votes, 0);
    assert!(!e.factory.has_voted(&campaign_b, &nin));
}

#[test]
fn test_only_the_registered_identity_may_vote() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    let impostor = Address::generate(&e.env);
    e.at(START + 1);

    assert_eq!(
        e.factory.try_cast_vote(&impostor, &campaign_id, &c1, &nin),
        Err(Ok(VotingError::VoterIdentityMismatch))
    );
    assert!(!e.factory.has_voted(&campaign_id, &nin));

    // the real voter is still free to vote
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);
}

#[test]
fn test_cast_vote_rejects_bad_references() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    assert_eq!(
        e.factory.try_cast_vote(&voter, &99, &c1, &nin),
        Err(Ok(VotingError::CampaignNotFound))
    );
    assert_eq!(
        e.factory.try_cast_vote(&voter, &campaign_id, &42, &nin),
        Err(Ok(VotingError::CandidateNotFound))
    );
    assert_eq!(
        e.factory
            .try_cast_vote(&voter, &campaign_id, &c1, &hashed_nin(&e.env, 0)),
        Err(Ok(VotingError::ZeroHashedNin))
    );
}

#[test]
fn test_candidate_for_missing_campaign_is_accepted() {
    let e = setup();

    // candidates may be registered before their campaign exists
    let early = e.candidate("Ada", 1);
    let campaign_id = e.campaign("General");
    assert_eq!(campaign_id, 1);

    let (voter, nin) = e.voter(1);
    e.at(START + 1);
    e.factory.cast_vote(&voter, &campaign_id, &early, &nin);
    assert_eq!(e.factory.get_candidate_votes(&campaign_id, &early), 1);
}

#[test]
fn test_create_campaign_rules() {
    let e = setup();

    assert_eq!(e.campaign("First"), 1);
    assert_eq!(e.campaign("Second"), 2);
    assert_eq!(e.factory.campaign_count(), 2);

    let campaign = e.factory.get_campaign(&2);
    assert_eq!(campaign.id, 2);
    assert_eq!(campaign.start_time, START);
    assert_eq!(campaign.end_time, END);
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert_eq!(campaign.total_votes, 0);

    let name = String::from_str(&e.env, "Bad");
    assert_eq!(
        e.factory
            .try_create_campaign(&e.admin, &String::from_str(&e.env, ""), &START, &END),
        Err(Ok(VotingError::EmptyName))
    );
    assert_eq!(
        e.factory.try_create_campaign(&e.admin, &name, &END, &END),
        Err(Ok(VotingError::InvalidTimeRange))
    );
    assert_eq!(
        e.factory.try_create_campaign(&e.admin, &name, &END, &START),
        Err(Ok(VotingError::InvalidTimeRange))
    );
    assert_eq!(
        e.factory.try_create_campaign(&e.party_admin, &name, &START, &END),
        Err(Ok(VotingError::Unauthorized))
    );

    // windows in the past are accepted
    e.at(END * 10);
    assert_eq!(e.campaign("Historic"), 3);
    assert_eq!(
        e.factory.try_get_campaign(&4),
        Err(Ok(VotingError::CampaignNotFound))
    );
}

#[test]
fn test_pause_blocks_creation_and_voting() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    assert_eq!(
        e.factory.try_pause(&e.party_admin),
        Err(Ok(VotingError::Unauthorized))
    );
    e.factory.pause(&e.admin);
    assert!(e.factory.is_paused());

    assert_eq!(
        e.factory.try_cast_vote(&voter, &campaign_id, &c1, &nin),
        Err(Ok(VotingError::ContractPaused))
    );
    assert_eq!(
        e.factory.try_create_campaign(
            &e.admin,
            &String::from_str(&e.env, "Other"),
            &START,
            &END
        ),
        Err(Ok(VotingError::ContractPaused))
    );

    e.factory.unpause(&e.admin);
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);
    assert_eq!(e.factory.get_candidate_votes(&campaign_id, &c1), 1);
}

#[test]
fn test_paused_voter_registry_does_not_block_voting() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    e.voters.pause(&e.admin);
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);
    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 1);
}

#[test]
fn test_unknown_pairs_and_empty_results() {
    let e = setup();
    let campaign_id = e.campaign("General");

    assert_eq!(e.factory.get_candidate_votes(&campaign_id, &5), 0);
    assert_eq!(e.factory.get_candidate_votes(&404, &0), 0);
    assert!(!e.factory.has_voted(&campaign_id, &hashed_nin(&e.env, 1)));

    let results = e.factory.get_campaign_results(&campaign_id);
    assert!(results.candidate_ids.is_empty());
    assert!(results.vote_counts.is_empty());
}

#[test]
fn test_initialize_rules() {
    let e = setup();

    assert_eq!(
        e.factory
            .try_initialize(&e.admin, &e.voters.address, &e.candidates.address),
        Err(Ok(VotingError::AlreadyInitialized))
    );

    let fresh = CampaignFactoryClient::new(&e.env, &e.env.register(CampaignFactory, ()));
    assert_eq!(
        fresh.try_initialize(&e.admin, &null_address(&e.env), &e.candidates.address),
        Err(Ok(VotingError::NullAddress))
    );
    assert_eq!(
        fresh.try_initialize(&e.admin, &e.voters.address, &null_address(&e.env)),
        Err(Ok(VotingError::NullAddress))
    );
}

#[test]
fn test_vote_cast_event_carries_no_voter_identity() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);

    let (topics, data) = find_event(&e.env, "vote_cast").unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(u32::try_from_val(&e.env, &topics.get(1).unwrap()), Ok(campaign_id));
    assert_eq!(u32::try_from_val(&e.env, &topics.get(2).unwrap()), Ok(c1));

    let payload = Map::<Symbol, Val>::try_from_val(&e.env, &data).unwrap();
    assert_eq!(
        payload.keys(),
        Vec::from_array(
            &e.env,
            [
                Symbol::new(&e.env, "campaign_id"),
                Symbol::new(&e.env, "candidate_id"),
            ]
        )
    );
    assert_eq!(
        events::VoteCastEvent::try_from_val(&e.env, &data).unwrap(),
        events::VoteCastEvent {
            campaign_id,
            candidate_id: c1,
        }
    );

    for value in topics.iter().chain(payload.values().iter()) {
        assert!(Address::try_from_val(&e.env, &value).is_err());
        assert!(BytesN::<32>::try_from_val(&e.env, &value).is_err());
    }
}

#[test]
fn test_campaign_lifecycle_publishes_events() {
    let e = setup();

    let campaign_id = e.campaign("General");
    let (topics, data) = find_event(&e.env, "campaign_created").unwrap();
    assert_eq!(u32::try_from_val(&e.env, &topics.get(1).unwrap()), Ok(campaign_id));
    assert_eq!(
        events::CampaignCreatedEvent::try_from_val(&e.env, &data).unwrap(),
        events::CampaignCreatedEvent {
            campaign_id,
            name: String::from_str(&e.env, "General"),
            start_time: START,
            end_time: END,
        }
    );

    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);

    e.factory.end_campaign(&e.admin, &campaign_id);
    let (topics, data) = find_event(&e.env, "campaign_ended").unwrap();
    assert_eq!(u32::try_from_val(&e.env, &topics.get(1).unwrap()), Ok(campaign_id));
    assert_eq!(
        events::CampaignEndedEvent::try_from_val(&e.env, &data).unwrap(),
        events::CampaignEndedEvent {
            campaign_id,
            total_votes: 1,
        }
    );
}

#[test]
fn test_held_vote_lock_rejects_cast_vote() {
    let e = setup();
    let campaign_id = e.campaign("General");
    let c1 = e.candidate("Ada", campaign_id);
    let (voter, nin) = e.voter(1);
    e.at(START + 1);

    e.env.as_contract(&e.factory.address, || {
        e.env.storage().temporary().set(&GuardKey::Locked, &true);
    });
    assert_eq!(
        e.factory.try_cast_vote(&voter, &campaign_id, &c1, &nin),
        Err(Ok(VotingError::ReentrantCall))
    );
    assert!(!e.factory.has_voted(&campaign_id, &nin));
    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 0);

    e.env.as_contract(&e.factory.address, || {
        e.env.storage().temporary().remove(&GuardKey::Locked);
    });
    e.factory.cast_vote(&voter, &campaign_id, &c1, &nin);
    assert_eq!(e.factory.get_campaign(&campaign_id).total_votes, 1);
}

#[test]
fn test_end_campaign_extends_instance_ttl() {
    let e = setup();
    let campaign_id = e.campaign("General");

    e.env.ledger().with_mut(|li| li.sequence_number += 10_000);
    let before = e
        .env
        .as_contract(&e.factory.address, || e.env.storage().instance().get_ttl());
    assert!(before < TTL_INSTANCE);

    e.factory.end_campaign(&e.admin, &campaign_id);
    let after = e
        .env
        .as_contract(&e.factory.address, || e.env.storage().instance().get_ttl());
    assert_eq!(after, TTL_INSTANCE);
}
