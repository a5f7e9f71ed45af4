use soroban_sdk::contracterror;

/// Errors returned by every registry entry point.
///
/// Codes are grouped by [`ErrorKind`] in blocks of ten so that an off-chain
/// caller can classify a failure from the code alone.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // Authorization
    Unauthorized = 1,
    NotPartyAdmin = 2,
    VoterIdentityMismatch = 3,

    // Validation
    EmptyName = 10,
    EmptySymbol = 11,
    NullAddress = 12,
    ZeroHashedNin = 13,
    InvalidTimeRange = 14,
    CandidateNotInCampaign = 15,

    // Not found
    PartyNotFound = 20,
    CandidateNotFound = 21,
    VoterNotFound = 22,
    CampaignNotFound = 23,

    // Lifecycle state
    NotInitialized = 30,
    AlreadyInitialized = 31,
    ContractPaused = 32,
    NotPaused = 33,
    VoterAlreadyRegistered = 34,
    CampaignNotActive = 35,
    OutsideVotingWindow = 36,
    AlreadyVoted = 37,
    ReentrantCall = 38,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Caller lacks the required role or identity match.
    Authorization,
    /// Malformed, empty or zero input.
    Validation,
    /// Referenced party, candidate, voter or campaign does not exist.
    NotFound,
    /// Operation is invalid for the current lifecycle state.
    State,
}

impl VotingError {
    pub fn kind(self) -> ErrorKind {
        match self as u32 {
            1..=9 => ErrorKind::Authorization,
            10..=19 => ErrorKind::Validation,
            20..=29 => ErrorKind::NotFound,
            _ => ErrorKind::State,
        }
    }
}
