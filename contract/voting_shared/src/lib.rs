//! Building blocks shared by the voting registries.
//!
//! Every registry owns its own storage. What lives here is the vocabulary
//! they have in common: record types that cross contract boundaries, the
//! error taxonomy, the capability table, the pause gate, the reentrancy
//! guard and the read-only clients used for cross-registry lookups.

#![no_std]

pub mod access;
pub mod error;
pub mod events;
pub mod guard;
pub mod pausable;
pub mod readers;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
pub mod ttl;
pub mod types;
pub mod validation;

pub use access::Role;
pub use error::{ErrorKind, VotingError};
pub use readers::{CandidateReaderClient, PartyReaderClient, VoterReaderClient};
pub use types::{Candidate, Party, Voter};
