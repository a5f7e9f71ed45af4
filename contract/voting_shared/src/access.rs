//! Capability table: `(Role, Address) -> granted`.
//!
//! Each registry keeps its own table in persistent storage. Gated entry
//! points call [`require_role`] before touching state.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::error::VotingError;
use crate::events;
use crate::ttl::extend_persistent;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Grants and revokes roles, toggles pause gates, creates records.
    SystemAdmin,
    /// Global capability handed out by the party registry.
    PartyAdmin,
    /// May add voter records.
    Registrar,
}

#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    Grant(Role, Address),
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&AccessKey::Grant(role, account.clone()))
        .unwrap_or(false)
}

/// Checks that `caller` signed the invocation and holds `role`.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), VotingError> {
    caller.require_auth();
    if !has_role(env, role, caller) {
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

/// Ungated write used while initializing a registry.
pub fn assign(env: &Env, role: Role, account: &Address) {
    let key = AccessKey::Grant(role, account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), VotingError> {
    require_role(env, caller, Role::SystemAdmin)?;
    if has_role(env, role, account) {
        return Ok(());
    }

    assign(env, role, account);
    log!(env, "role granted", role, account.clone());
    events::emit_role_granted(
        env,
        events::RoleGrantedEvent {
            role,
            account: account.clone(),
            sender: caller.clone(),
        },
    );
    Ok(())
}

pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), VotingError> {
    require_role(env, caller, Role::SystemAdmin)?;
    if !has_role(env, role, account) {
        return Ok(());
    }

    env.storage()
        .persistent()
        .remove(&AccessKey::Grant(role, account.clone()));
    log!(env, "role revoked", role, account.clone());
    events::emit_role_revoked(
        env,
        events::RoleRevokedEvent {
            role,
            account: account.clone(),
            sender: caller.clone(),
        },
    );
    Ok(())
}
