use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::access::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub account: Address,
}

pub fn emit_role_granted(env: &Env, event: RoleGrantedEvent) {
    env.events().publish(
        (Symbol::new(env, "role_granted"), event.role),
        event,
    );
}

pub fn emit_role_revoked(env: &Env, event: RoleRevokedEvent) {
    env.events().publish(
        (Symbol::new(env, "role_revoked"), event.role),
        event,
    );
}

pub fn emit_paused(env: &Env, event: PauseToggledEvent) {
    env.events().publish((Symbol::new(env, "paused"),), event);
}

pub fn emit_unpaused(env: &Env, event: PauseToggledEvent) {
    env.events().publish((Symbol::new(env, "unpaused"),), event);
}
