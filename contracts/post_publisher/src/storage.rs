//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! publisher:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type              | Description                       |
//! |-----------|-------------------|-----------------------------------|
//! | `Config`  | `PublisherConfig` | Registry, payment token, fee setup |
//! | `Paused`  | `bool`            | Emergency stop flag               |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                                   | Type             | Description                 |
//! |---------------------------------------|------------------|-----------------------------|
//! | `Allowance(project, collection, cat)` | `AllowanceEntry` | Packed posting criteria     |
//! | `ContentSlot(project, collection, id)`| `u32`            | Slot bound to the content   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Allowance encoding
//!
//! A policy with no maximum supply and no allow-list is stored as a single
//! 32-byte word (`Packed`). Anything richer uses `Extended`. Reads accept both.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::packing;
use crate::types::{Allowance, AllowanceEntry, PublisherConfig};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys except roles (see `rbac::RbacKey`).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Publisher configuration (Instance).
    Config,
    /// Emergency stop flag (Instance).
    Paused,
    /// Posting criteria keyed by project, collection and category (Persistent).
    Allowance(u64, Address, u32),
    /// Slot id bound to a piece of content within a project's collection (Persistent).
    ContentSlot(u64, Address, BytesN<32>),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Read the publisher configuration, `None` before `init`.
pub fn get_config(env: &Env) -> Option<PublisherConfig> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PublisherConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Allowances
// ─────────────────────────────────────────────────────────

/// Encode and persist an allowance.
///
/// Policies without a maximum supply or allow-list are stored in the legacy
/// single-word form. The caller has already checked the price fits 104 bits.
pub fn save_allowance(
    env: &Env,
    project_id: u64,
    collection: &Address,
    category: u32,
    allowance: &Allowance,
) {
    let key = DataKey::Allowance(project_id, collection.clone(), category);
    let entry = encode_allowance(env, allowance);
    env.storage().persistent().set(&key, &entry);
    bump_persistent(env, &key);
}

/// Load and decode an allowance. Unset keys read as the closed, all-zero
/// allowance.
pub fn load_allowance(env: &Env, project_id: u64, collection: &Address, category: u32) -> Allowance {
    let key = DataKey::Allowance(project_id, collection.clone(), category);
    match env.storage().persistent().get::<_, AllowanceEntry>(&key) {
        Some(entry) => {
            bump_persistent(env, &key);
            decode_allowance(env, &entry)
        }
        None => Allowance {
            minimum_price: 0,
            minimum_supply: 0,
            maximum_supply: 0,
            allowed_posters: Vec::new(env),
        },
    }
}

/// Delete an allowance. Returns `false` if none was stored.
pub fn remove_allowance(env: &Env, project_id: u64, collection: &Address, category: u32) -> bool {
    let key = DataKey::Allowance(project_id, collection.clone(), category);
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().remove(&key);
    true
}

pub fn encode_allowance(env: &Env, allowance: &Allowance) -> AllowanceEntry {
    let price = allowance.minimum_price as u128;
    if allowance.maximum_supply == 0 && allowance.allowed_posters.is_empty() {
        let word = packing::pack_legacy(price, allowance.minimum_supply);
        AllowanceEntry::Packed(BytesN::from_array(env, &word))
    } else {
        let word = packing::pack(price, allowance.minimum_supply, allowance.maximum_supply);
        AllowanceEntry::Extended(
            BytesN::from_array(env, &word),
            allowance.allowed_posters.clone(),
        )
    }
}

pub fn decode_allowance(env: &Env, entry: &AllowanceEntry) -> Allowance {
    match entry {
        AllowanceEntry::Packed(word) => {
            let (price, minimum_supply) = packing::unpack_legacy(&word.to_array());
            Allowance {
                minimum_price: price as i128,
                minimum_supply,
                maximum_supply: 0,
                allowed_posters: Vec::new(env),
            }
        }
        AllowanceEntry::Extended(word, posters) => {
            let (price, minimum_supply, maximum_supply) = packing::unpack(&word.to_array());
            Allowance {
                minimum_price: price as i128,
                minimum_supply,
                maximum_supply,
                allowed_posters: posters.clone(),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────
// Content bindings
// ─────────────────────────────────────────────────────────

/// Slot id bound to `content_id` in `collection` of `project_id`, or 0 if
/// unbound.
pub fn get_content_slot(
    env: &Env,
    project_id: u64,
    collection: &Address,
    content_id: &BytesN<32>,
) -> u32 {
    let key = DataKey::ContentSlot(project_id, collection.clone(), content_id.clone());
    match env.storage().persistent().get(&key) {
        Some(slot_id) => {
            bump_persistent(env, &key);
            slot_id
        }
        None => 0,
    }
}

/// Bind `content_id` to `slot_id`. Bindings are write-once; the settlement
/// engine only calls this for content that resolved as new.
pub fn bind_content_slot(
    env: &Env,
    project_id: u64,
    collection: &Address,
    content_id: &BytesN<32>,
    slot_id: u32,
) {
    let key = DataKey::ContentSlot(project_id, collection.clone(), content_id.clone());
    env.storage().persistent().set(&key, &slot_id);
    bump_persistent(env, &key);
}
