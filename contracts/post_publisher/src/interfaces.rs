//! # Collaborator interfaces
//!
//! Contracts the publisher calls but does not own. Each trait generates a
//! typed client (`*Client`) through `#[contractclient]`; tests register mock
//! contracts exposing the same functions.
//!
//! | Client                  | Used by                          |
//! |-------------------------|----------------------------------|
//! | `ProjectRegistryClient` | owner checks, default collection, treasury lookup |
//! | `CollectionClient`      | slot id space, slot creation     |
//! | `TreasuryClient`        | payments (and the mint they carry) |

use soroban_sdk::{contractclient, Address, Env, String, Vec};

use crate::types::{PayMetadata, SlotSpec};

/// Project ownership and wiring.
#[contractclient(name = "ProjectRegistryClient")]
pub trait ProjectRegistry {
    /// Current owner of `project_id`. Read on every owner-gated call.
    fn owner_of(env: Env, project_id: u64) -> Address;

    /// Collection a project mints into when none is named explicitly.
    fn default_collection_of(env: Env, project_id: u64) -> Address;

    /// Treasury accepting `token` payments for `project_id`.
    fn primary_treasury_of(env: Env, project_id: u64, token: Address) -> Address;
}

/// Tiered NFT collection.
#[contractclient(name = "CollectionClient")]
pub trait Collection {
    /// Highest slot id created so far; 0 for an empty collection.
    fn max_slot_id(env: Env) -> u32;

    /// Create `slots` with ids `max_slot_id() + 1 ..` in list order.
    fn create_slots(env: Env, slots: Vec<SlotSpec>);
}

/// Project treasury.
#[contractclient(name = "TreasuryClient")]
pub trait Treasury {
    /// Credit a payment of `amount` `token` to `project_id`.
    ///
    /// The tokens have already been transferred to the treasury when this is
    /// called. `metadata.slot_ids` are minted to `beneficiary` from
    /// `metadata.collection`. Returns the number of project tokens issued.
    fn pay(
        env: Env,
        project_id: u64,
        token: Address,
        amount: i128,
        beneficiary: Address,
        min_returned_tokens: i128,
        prefer_claimed: bool,
        memo: String,
        metadata: PayMetadata,
    ) -> i128;
}
