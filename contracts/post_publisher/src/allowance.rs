//! # Allowances
//!
//! Owner-side configuration of who may post what. Every write re-reads the
//! project owner from the registry; nothing about ownership is cached here.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::events::{self, AllowanceSet};
use crate::interfaces::ProjectRegistryClient;
use crate::packing::MAX_PACKED_PRICE;
use crate::storage;
use crate::types::{AllowedPost, Allowance, PublisherConfig};
use crate::Error;

/// Panic with `Error::Unauthorized` unless `caller` owns `project_id`.
pub fn require_project_owner(env: &Env, config: &PublisherConfig, project_id: u64, caller: &Address) {
    let registry = ProjectRegistryClient::new(env, &config.registry);
    if registry.owner_of(&project_id) != *caller {
        panic_with_error!(env, Error::Unauthorized);
    }
}

/// Resolve an optional collection to a concrete one, falling back to the
/// project's default collection.
pub fn resolve_collection(
    env: &Env,
    config: &PublisherConfig,
    project_id: u64,
    collection: Option<Address>,
) -> Address {
    match collection {
        Some(collection) => collection,
        None => ProjectRegistryClient::new(env, &config.registry).default_collection_of(&project_id),
    }
}

/// Validate and store a batch of posting criteria for `project_id`.
///
/// The owner check happens once; every policy is validated before it is
/// written, and a failure on any of them aborts the whole call.
pub fn set_allowances(
    env: &Env,
    config: &PublisherConfig,
    project_id: u64,
    caller: &Address,
    policies: &Vec<AllowedPost>,
) {
    require_project_owner(env, config, project_id, caller);

    for policy in policies.iter() {
        validate_policy(env, &policy);

        let collection = resolve_collection(env, config, project_id, policy.collection.clone());
        let allowance = Allowance {
            minimum_price: policy.minimum_price,
            minimum_supply: policy.minimum_supply,
            maximum_supply: policy.maximum_supply,
            allowed_posters: policy.allowed_posters.clone(),
        };
        storage::save_allowance(env, project_id, &collection, policy.category, &allowance);

        events::emit_allowance_set(
            env,
            AllowanceSet {
                project_id,
                collection,
                category: policy.category,
                minimum_price: policy.minimum_price,
                minimum_supply: policy.minimum_supply,
                maximum_supply: policy.maximum_supply,
                allowed_posters: policy.allowed_posters,
                caller: caller.clone(),
            },
        );
    }
}

/// Close a category. Content already bound to slots is unaffected.
pub fn remove_allowance(
    env: &Env,
    config: &PublisherConfig,
    project_id: u64,
    caller: &Address,
    collection: Option<Address>,
    category: u32,
) {
    require_project_owner(env, config, project_id, caller);

    let collection = resolve_collection(env, config, project_id, collection);
    if storage::remove_allowance(env, project_id, &collection, category) {
        events::emit_allowance_removed(env, project_id, collection, category, caller.clone());
    }
}

fn validate_policy(env: &Env, policy: &AllowedPost) {
    if policy.minimum_supply == 0 {
        panic_with_error!(env, Error::InvalidMinimumSupply);
    }
    if policy.minimum_price < 0 || policy.minimum_price as u128 > MAX_PACKED_PRICE {
        panic_with_error!(env, Error::InvalidMinimumPrice);
    }
    if policy.maximum_supply != 0 && policy.maximum_supply < policy.minimum_supply {
        panic_with_error!(env, Error::MaxSupplyBelowMinimum);
    }
}
