//! Content identity index: which slot a piece of content already lives in.
//!
//! Bindings are scoped to a (project, collection) pair. The same content
//! posted into a second collection is fresh there.

use soroban_sdk::{Address, BytesN, Env, Map};

use crate::storage;

/// Look up the slot bound to `content_id`. Returns `(slot_id, is_new)`;
/// `slot_id` is 0 when `is_new`. Never writes.
pub fn resolve(
    env: &Env,
    project_id: u64,
    collection: &Address,
    content_id: &BytesN<32>,
) -> (u32, bool) {
    let slot_id = storage::get_content_slot(env, project_id, collection, content_id);
    (slot_id, slot_id == 0)
}

/// Like [`resolve`], but also sees bindings reserved earlier in the same
/// batch and not yet committed.
pub fn resolve_in_batch(
    env: &Env,
    project_id: u64,
    collection: &Address,
    pending: &Map<BytesN<32>, u32>,
    content_id: &BytesN<32>,
) -> (u32, bool) {
    if let Some(slot_id) = pending.get(content_id.clone()) {
        return (slot_id, false);
    }
    resolve(env, project_id, collection, content_id)
}

/// Persist every binding reserved during a batch.
pub fn commit(env: &Env, project_id: u64, collection: &Address, pending: &Map<BytesN<32>, u32>) {
    for (content_id, slot_id) in pending.iter() {
        storage::bind_content_slot(env, project_id, collection, &content_id, slot_id);
    }
}
