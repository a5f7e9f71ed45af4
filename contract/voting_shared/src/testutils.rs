#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Events as _;
use soroban_sdk::{Env, Symbol, TryFromVal, Val, Vec};

/// Topics and payload of the most recent event whose first topic is `name`.
pub fn find_event(env: &Env, name: &str) -> Option<(Vec<Val>, Val)> {
    let name = Symbol::new(env, name);
    let mut found = None;
    for (_, topics, data) in env.events().all().iter() {
        let matches = topics
            .get(0)
            .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
            .map_or(false, |symbol| symbol == name);
        if matches {
            found = Some((topics, data));
        }
    }
    found
}
