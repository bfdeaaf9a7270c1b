//! # Post Publisher Contract
//!
//! Lets a project owner hand out narrow, revocable minting rights to third
//! parties ("posters"), and lets posters pay to publish content-addressed NFTs
//! into the project's existing collections.
//!
//! | Phase          | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`PostPublisher::init`]                               |
//! | Role admin     | `grant_role`, `revoke_role`, `transfer_super_admin`   |
//! | Configuration  | `set_fee_divisor`, `pause`, `unpause`                 |
//! | Allowances     | `set_allowances`, `remove_allowance`                  |
//! | Posting        | [`PostPublisher::submit_posts`]                       |
//! | Queries        | `config`, `allowance_of`, `extended_allowance_of`, `slot_of`, `slots_for`, `role_of`, `has_role`, `is_paused` |
//!
//! ## Architecture
//!
//! ```text
//! submit_posts
//!   ├── settlement::plan      (validator + content index, storage reads only)
//!   ├── fees::compute_fee / fees::split
//!   ├── settlement::apply     (collection.create_slots, commit bindings)
//!   ├── fees::route           (token transfers + treasury.pay with mint metadata)
//!   └── events::emit_posts_submitted
//! ```
//!
//! Every step runs inside one invocation; any panic rolls back all of them.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, BytesN, Env, Vec,
};

mod allowance;
mod content;
pub mod events;
mod fees;
pub mod interfaces;
pub mod packing;
pub mod rbac;
mod settlement;
mod storage;
mod types;
mod validator;

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod test_events;

pub use rbac::Role;
pub use types::{
    Allowance, AllowanceEntry, AllowedPost, PayMetadata, Post, PublisherConfig, SlotSpec,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MissingRole = 3,
    Unauthorized = 4,
    InvalidMinimumSupply = 5,
    InvalidMinimumPrice = 6,
    MaxSupplyBelowMinimum = 7,
    InvalidFeeDivisor = 8,
    UnauthorizedCategory = 9,
    PosterNotAllowed = 10,
    InsufficientPrice = 11,
    InsufficientSupply = 12,
    SupplyTooLarge = 13,
    AtomicBatchFailure = 14,
    InsufficientAmount = 15,
    InvalidAmount = 16,
    EmptyContentId = 17,
    EmptyBatch = 18,
    TooManyPosts = 19,
    Overflow = 20,
    ProtocolPaused = 21,
}

#[contract]
pub struct PostPublisher;

#[contractimpl]
impl PostPublisher {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the publisher and set the first SuperAdmin.
    ///
    /// Must be called exactly once immediately after deployment.
    ///
    /// - `registry` resolves project owners, default collections and treasuries.
    /// - `payment_token` is the token posts are paid in.
    /// - `fee_divisor` must be non-zero (`20` takes a 5% fee).
    pub fn init(
        env: Env,
        super_admin: Address,
        registry: Address,
        payment_token: Address,
        fee_project_id: u64,
        fee_divisor: u32,
    ) {
        super_admin.require_auth();
        if storage::has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if fee_divisor == 0 {
            panic_with_error!(&env, Error::InvalidFeeDivisor);
        }
        rbac::init_super_admin(&env, &super_admin);
        storage::set_config(
            &env,
            &PublisherConfig {
                registry,
                payment_token,
                fee_project_id,
                fee_divisor,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant `role` to `target`. Only `SuperAdmin` can grant `SuperAdmin`.
    pub fn grant_role(env: Env, caller: Address, target: Address, role: Role) {
        rbac::grant_role(&env, &caller, &target, role);
    }

    /// Revoke any role from `target`. Cannot remove the SuperAdmin.
    pub fn revoke_role(env: Env, caller: Address, target: Address) {
        rbac::revoke_role(&env, &caller, &target);
    }

    pub fn transfer_super_admin(env: Env, current_super_admin: Address, new_super_admin: Address) {
        rbac::transfer_super_admin(&env, &current_super_admin, &new_super_admin);
    }

    pub fn role_of(env: Env, address: Address) -> Option<Role> {
        rbac::role_of(&env, address)
    }

    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, address, role)
    }

    // ─────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────

    /// Change the fee divisor. `caller` must hold `SuperAdmin` or `Admin`.
    ///
    /// A divisor of zero is rejected with `Error::InvalidFeeDivisor`.
    pub fn set_fee_divisor(env: Env, caller: Address, fee_divisor: u32) {
        caller.require_auth();
        rbac::require_admin_or_above(&env, &caller);
        if fee_divisor == 0 {
            panic_with_error!(&env, Error::InvalidFeeDivisor);
        }

        let mut config = Self::load_config(&env);
        let old_divisor = config.fee_divisor;
        config.fee_divisor = fee_divisor;
        storage::set_config(&env, &config);

        events::emit_fee_divisor_updated(&env, old_divisor, fee_divisor, caller);
    }

    pub fn config(env: Env) -> PublisherConfig {
        Self::load_config(&env)
    }

    /// Halt allowance writes and posting.
    pub fn pause(env: Env, caller: Address) {
        caller.require_auth();
        rbac::require_admin_or_above(&env, &caller);
        storage::set_paused(&env, true);
        events::emit_protocol_paused(&env, caller);
    }

    pub fn unpause(env: Env, caller: Address) {
        caller.require_auth();
        rbac::require_admin_or_above(&env, &caller);
        storage::set_paused(&env, false);
        events::emit_protocol_unpaused(&env, caller);
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Allowances
    // ─────────────────────────────────────────────────────────

    /// Configure posting criteria for `project_id`.
    ///
    /// `caller` must authorize and be the project's current owner in the
    /// registry. A policy without a collection applies to the project's
    /// default collection. Fails on the first invalid policy, writing none.
    pub fn set_allowances(env: Env, project_id: u64, caller: Address, policies: Vec<AllowedPost>) {
        Self::require_not_paused(&env);
        caller.require_auth();
        let config = Self::load_config(&env);
        allowance::set_allowances(&env, &config, project_id, &caller, &policies);
    }

    /// Close a category for new content. Owner only.
    pub fn remove_allowance(
        env: Env,
        project_id: u64,
        caller: Address,
        collection: Option<Address>,
        category: u32,
    ) {
        Self::require_not_paused(&env);
        caller.require_auth();
        let config = Self::load_config(&env);
        allowance::remove_allowance(&env, &config, project_id, &caller, collection, category);
    }

    /// `(minimum_price, minimum_supply)` for a category; zeros if unset.
    pub fn allowance_of(env: Env, project_id: u64, collection: Address, category: u32) -> (i128, u32) {
        let allowance = storage::load_allowance(&env, project_id, &collection, category);
        (allowance.minimum_price, allowance.minimum_supply)
    }

    /// Full allowance including maximum supply and allow-list.
    pub fn extended_allowance_of(
        env: Env,
        project_id: u64,
        collection: Address,
        category: u32,
    ) -> Allowance {
        storage::load_allowance(&env, project_id, &collection, category)
    }

    // ─────────────────────────────────────────────────────────
    // Content index
    // ─────────────────────────────────────────────────────────

    /// Slot bound to `content_id` within `collection` of `project_id`, or 0.
    pub fn slot_of(env: Env, project_id: u64, collection: Address, content_id: BytesN<32>) -> u32 {
        content::resolve(&env, project_id, &collection, &content_id).0
    }

    /// [`Self::slot_of`] for many content ids, in the same order.
    pub fn slots_for(
        env: Env,
        project_id: u64,
        collection: Address,
        content_ids: Vec<BytesN<32>>,
    ) -> Vec<u32> {
        let mut slot_ids = Vec::new(&env);
        for content_id in content_ids.iter() {
            slot_ids.push_back(content::resolve(&env, project_id, &collection, &content_id).0);
        }
        slot_ids
    }

    // ─────────────────────────────────────────────────────────
    // Posting
    // ─────────────────────────────────────────────────────────

    /// Publish `posts` into `collection` (or the project's default collection)
    /// and mint one of each to `nft_beneficiary`.
    ///
    /// Fresh content creates a new slot, subject to the category's allowance.
    /// Content already bound to a slot in this project's collection re-mints
    /// that slot without constraint checks. `amount` of the payment token is
    /// taken from `poster` and must cover the summed post prices plus the fee; the fee
    /// project's share is credited to `fee_beneficiary`.
    pub fn submit_posts(
        env: Env,
        poster: Address,
        project_id: u64,
        collection: Option<Address>,
        posts: Vec<Post>,
        nft_beneficiary: Address,
        fee_beneficiary: Address,
        amount: i128,
    ) {
        Self::require_not_paused(&env);
        poster.require_auth();

        let config = Self::load_config(&env);
        let collection = allowance::resolve_collection(&env, &config, project_id, collection);

        let plan = settlement::plan_for_collection(&env, project_id, &collection, &posts, &poster);

        let disbursement = match fees::compute_fee(
            project_id,
            config.fee_project_id,
            config.fee_divisor,
            plan.total_price,
        )
        .and_then(|fee| fees::split(amount, plan.total_price, fee))
        {
            Ok(disbursement) => disbursement,
            Err(err) => panic_with_error!(&env, err),
        };

        settlement::apply(&env, project_id, &collection, &plan);

        fees::route(
            &env,
            &config,
            project_id,
            &collection,
            &poster,
            &disbursement,
            &plan.slot_ids,
            &nft_beneficiary,
            &fee_beneficiary,
        );

        events::emit_posts_submitted(
            &env,
            events::PostsSubmitted {
                project_id,
                collection,
                posts,
                slot_ids: plan.slot_ids,
                nft_beneficiary,
                fee_beneficiary,
                total_price: plan.total_price,
                fee: disbursement.fee,
                caller: poster,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_not_paused(env: &Env) {
        if storage::is_paused(env) {
            panic_with_error!(env, Error::ProtocolPaused);
        }
    }

    fn load_config(env: &Env) -> PublisherConfig {
        match storage::get_config(env) {
            Some(config) => config,
            None => panic_with_error!(env, Error::NotInitialized),
        }
    }
}
