use soroban_sdk::{contracttype, Env};

use crate::error::VotingError;

#[contracttype]
#[derive(Clone)]
pub enum GuardKey {
    Locked,
}

/// Reentrancy lock held in temporary storage for the lifetime of the value.
///
/// A second [`ReentrancyGuard::acquire`] while the first guard is alive fails
/// with [`VotingError::ReentrantCall`]. The lock is released on drop, on both
/// the success and the error path.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, VotingError> {
        if env.storage().temporary().has(&GuardKey::Locked) {
            return Err(VotingError::ReentrantCall);
        }
        env.storage().temporary().set(&GuardKey::Locked, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&GuardKey::Locked);
    }
}
