//! # Batch settlement
//!
//! Turns a batch of posts into (a) the slots the collection must create,
//! (b) the slot id each post mints from, and (c) the total price.
//!
//! Settlement runs in two phases so that nothing is written until the whole
//! batch is known to be valid:
//!
//! 1. [`plan`] reads storage only. It validates every post, assigns ids to
//!    fresh content and reserves their bindings in memory.
//! 2. [`apply`] creates the slots in one collection call, checks the id space
//!    moved as planned, then commits the bindings.
//!
//! A panic anywhere after `apply` (e.g. insufficient payment) still rolls the
//! bindings and the collection back with the rest of the invocation.

use soroban_sdk::{panic_with_error, Address, BytesN, Env, Map, Vec};

use crate::content;
use crate::interfaces::CollectionClient;
use crate::storage;
use crate::types::{Allowance, Post, SlotSpec};
use crate::validator;
use crate::Error;

/// Largest batch accepted by `submit_posts`.
pub const MAX_POSTS_PER_BATCH: u32 = 50;

/// Everything `submit_posts` needs after validation.
#[derive(Clone, Debug)]
pub struct SettlementPlan {
    /// First id the collection will assign.
    pub starting_slot_id: u32,
    /// Slots to create, one per fresh content id, in post order.
    pub slots: Vec<SlotSpec>,
    /// Slot id to mint for each post, in post order.
    pub slot_ids: Vec<u32>,
    /// Bindings reserved for fresh content, committed by [`apply`].
    pub pending: Map<BytesN<32>, u32>,
    pub total_price: i128,
}

/// Validate `posts` and lay out slot creation and minting.
///
/// `starting_slot_id` is one past the collection's current maximum.
pub fn plan(
    env: &Env,
    project_id: u64,
    collection: &Address,
    posts: &Vec<Post>,
    poster: &Address,
    starting_slot_id: u32,
) -> SettlementPlan {
    if posts.is_empty() {
        panic_with_error!(env, Error::EmptyBatch);
    }
    if posts.len() > MAX_POSTS_PER_BATCH {
        panic_with_error!(env, Error::TooManyPosts);
    }

    let mut slots: Vec<SlotSpec> = Vec::new(env);
    let mut slot_ids: Vec<u32> = Vec::new(env);
    let mut pending: Map<BytesN<32>, u32> = Map::new(env);
    let mut allowances: Map<u32, Allowance> = Map::new(env);
    let mut next_slot_id = starting_slot_id;
    let mut total_price: i128 = 0;

    for post in posts.iter() {
        validator::check_post_shape(env, &post);

        total_price = match total_price.checked_add(post.price) {
            Some(total) => total,
            None => panic_with_error!(env, Error::Overflow),
        };

        let (existing, is_new) =
            content::resolve_in_batch(env, project_id, collection, &pending, &post.content_id);
        if !is_new {
            slot_ids.push_back(existing);
            continue;
        }

        let allowance = match allowances.get(post.category) {
            Some(allowance) => allowance,
            None => {
                let allowance = storage::load_allowance(env, project_id, collection, post.category);
                allowances.set(post.category, allowance.clone());
                allowance
            }
        };
        validator::check_fresh_post(env, &allowance, &post, poster);

        let slot_id = next_slot_id;
        next_slot_id = match next_slot_id.checked_add(1) {
            Some(id) => id,
            None => panic_with_error!(env, Error::Overflow),
        };

        slots.push_back(SlotSpec {
            price: post.price,
            initial_supply: post.quantity,
            content_id: post.content_id.clone(),
            category: post.category,
            voting_units: 0,
            use_voting_units: false,
            reserve_frequency: 0,
            transfers_pausable: false,
        });
        pending.set(post.content_id.clone(), slot_id);
        slot_ids.push_back(slot_id);
    }

    SettlementPlan {
        starting_slot_id,
        slots,
        slot_ids,
        pending,
        total_price,
    }
}

/// Read the collection's id space and plan the batch against it.
pub fn plan_for_collection(
    env: &Env,
    project_id: u64,
    collection: &Address,
    posts: &Vec<Post>,
    poster: &Address,
) -> SettlementPlan {
    let current_max = CollectionClient::new(env, collection).max_slot_id();
    let starting_slot_id = match current_max.checked_add(1) {
        Some(id) => id,
        None => panic_with_error!(env, Error::Overflow),
    };
    plan(env, project_id, collection, posts, poster, starting_slot_id)
}

/// Create the planned slots and commit the content bindings.
///
/// Panics with `AtomicBatchFailure` if the collection rejects the slots or
/// ends up with a different maximum id than planned.
pub fn apply(env: &Env, project_id: u64, collection: &Address, plan: &SettlementPlan) {
    if plan.slots.is_empty() {
        return;
    }

    let client = CollectionClient::new(env, collection);
    match client.try_create_slots(&plan.slots) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(env, Error::AtomicBatchFailure),
    }

    // `slots` is non-empty, so this cannot underflow.
    let expected_max = plan.starting_slot_id + plan.slots.len() - 1;
    if client.max_slot_id() != expected_max {
        panic_with_error!(env, Error::AtomicBatchFailure);
    }

    content::commit(env, project_id, collection, &plan.pending);
}
