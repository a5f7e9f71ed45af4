//! Pause gate toggled by a system admin.
//!
//! The gate only blocks the operations that consult [`require_not_paused`];
//! lookups stay available while paused.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::access::{require_role, Role};
use crate::error::VotingError;
use crate::events::{self, PauseToggledEvent};

#[contracttype]
#[derive(Clone)]
pub enum GateKey {
    Paused,
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&GateKey::Paused)
        .unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), VotingError> {
    if is_paused(env) {
        return Err(VotingError::ContractPaused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), VotingError> {
    require_role(env, caller, Role::SystemAdmin)?;
    require_not_paused(env)?;

    env.storage().instance().set(&GateKey::Paused, &true);
    log!(env, "paused by", caller.clone());
    events::emit_paused(
        env,
        PauseToggledEvent {
            account: caller.clone(),
        },
    );
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), VotingError> {
    require_role(env, caller, Role::SystemAdmin)?;
    if !is_paused(env) {
        return Err(VotingError::NotPaused);
    }

    env.storage().instance().set(&GateKey::Paused, &false);
    log!(env, "unpaused by", caller.clone());
    events::emit_unpaused(
        env,
        PauseToggledEvent {
            account: caller.clone(),
        },
    );
    Ok(())
}
