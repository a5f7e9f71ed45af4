//! Read-only handles onto the other registries.
//!
//! Only lookups are exposed, so a registry holding one of these clients can
//! never mutate the store it points at.

use soroban_sdk::{contractclient, BytesN, Env, Vec};

use crate::error::VotingError;
use crate::types::{Candidate, Party, Voter};

#[contractclient(name = "PartyReaderClient")]
pub trait PartyReader {
    fn get_party(env: Env, party_id: u32) -> Result<Party, VotingError>;
}

#[contractclient(name = "CandidateReaderClient")]
pub trait CandidateReader {
    fn get_candidate(env: Env, candidate_id: u32) -> Result<Candidate, VotingError>;
    fn get_candidates_by_campaign(env: Env, campaign_id: u32) -> Vec<u32>;
}

#[contractclient(name = "VoterReaderClient")]
pub trait VoterReader {
    fn get_voter(env: Env, hashed_nin: BytesN<32>) -> Result<Voter, VotingError>;
}

/// Flattens the result of a `try_*` cross-registry call.
///
/// A contract error raised by the callee is passed through unchanged. Any
/// host-level failure (conversion or invocation) is reported as `missing`.
pub fn resolve<T, C, I>(
    result: Result<Result<T, C>, Result<VotingError, I>>,
    missing: VotingError,
) -> Result<T, VotingError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(missing),
    }
}
