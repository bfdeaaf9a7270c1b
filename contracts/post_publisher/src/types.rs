//! # Types
//!
//! Shared data structures used across all modules of the post publisher.
//!
//! ## Design decisions
//!
//! ### Typed allowances, packed storage
//!
//! Callers and internal modules only ever see [`Allowance`]. The storage layer
//! converts it to an [`AllowanceEntry`] (one packed word, optionally with an
//! allow-list) on write and back on read; see [`crate::packing`].
//!
//! ### Collaborator payloads
//!
//! [`SlotSpec`] and [`PayMetadata`] cross the contract boundary into the
//! collection and treasury contracts, so they are `#[contracttype]` as well.

use soroban_sdk::{contracttype, Address, BytesN, Vec};

/// Posting criteria a project owner configures for one category of one
/// collection. This is the input of `set_allowances`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowedPost {
    /// Target collection; `None` means the project's default collection.
    pub collection: Option<Address>,
    pub category: u32,
    /// Floor on the per-post price, at most 2^104 - 1.
    pub minimum_price: i128,
    /// Must be non-zero; zero is the "closed category" marker.
    pub minimum_supply: u32,
    /// Zero means unbounded.
    pub maximum_supply: u32,
    /// Empty means any poster may post.
    pub allowed_posters: Vec<Address>,
}

/// Decoded allowance for a (project, collection, category) triple.
///
/// An all-zero value with an empty allow-list is what an unset key reads as.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allowance {
    pub minimum_price: i128,
    pub minimum_supply: u32,
    pub maximum_supply: u32,
    pub allowed_posters: Vec<Address>,
}

impl Allowance {
    /// A category is open for fresh posts only with a non-zero minimum supply.
    pub fn is_open(&self) -> bool {
        self.minimum_supply > 0
    }

    /// Whether `poster` passes the allow-list. An empty list admits everyone.
    pub fn admits(&self, poster: &Address) -> bool {
        if self.allowed_posters.is_empty() {
            return true;
        }
        for allowed in self.allowed_posters.iter() {
            if &allowed == poster {
                return true;
            }
        }
        false
    }
}

/// Stored form of an allowance.
///
/// `Packed` is the legacy single-word record (price + minimum supply).
/// `Extended` carries the same word with the maximum supply populated, plus
/// the allow-list. Both decode to [`Allowance`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllowanceEntry {
    Packed(BytesN<32>),
    Extended(BytesN<32>, Vec<Address>),
}

/// A single requested mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    /// Digest of the off-chain content metadata; the dedup key.
    pub content_id: BytesN<32>,
    /// Initial supply of the slot if the post creates one.
    pub quantity: u32,
    /// Amount the poster pays for this post.
    pub price: i128,
    pub category: u32,
}

/// A slot the collection is asked to create.
///
/// The collection assigns ids sequentially in list order, starting one past
/// its current maximum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotSpec {
    pub price: i128,
    pub initial_supply: u32,
    pub content_id: BytesN<32>,
    pub category: u32,
    pub voting_units: u32,
    pub use_voting_units: bool,
    pub reserve_frequency: u32,
    pub transfers_pausable: bool,
}

/// Metadata attached to a treasury payment.
///
/// For the project payment, `collection` and `slot_ids` tell the treasury
/// which slots to mint for the beneficiary, in post order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayMetadata {
    /// Project credited as the referrer of the payment.
    pub referral: u64,
    pub collection: Option<Address>,
    pub slot_ids: Vec<u32>,
}

/// Contract-wide configuration, written at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublisherConfig {
    /// Project registry contract (ownership, default collection, treasuries).
    pub registry: Address,
    /// Token every post is paid in.
    pub payment_token: Address,
    /// Project that receives the publishing fee.
    pub fee_project_id: u64,
    /// `fee = total_price / fee_divisor`; never zero.
    pub fee_divisor: u32,
}
