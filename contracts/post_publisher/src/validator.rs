//! # Post validation
//!
//! Checks a fresh post against the category's allowance. Repeats never get
//! here: content that already has a slot is re-minted without constraint
//! checks, because the category may have been changed or closed since.
//!
//! Check order is fixed and observable through the returned error:
//!
//! 1. category open (`UnauthorizedCategory`)
//! 2. poster on the allow-list (`PosterNotAllowed`)
//! 3. price floor (`InsufficientPrice`)
//! 4. minimum supply (`InsufficientSupply`)
//! 5. maximum supply (`SupplyTooLarge`)

use soroban_sdk::{panic_with_error, Address, Env};

use crate::types::{Allowance, Post};
use crate::Error;

/// Shape checks applied to every post, fresh or repeat.
pub fn check_post_shape(env: &Env, post: &Post) {
    if post.content_id.to_array() == [0u8; 32] {
        panic_with_error!(env, Error::EmptyContentId);
    }
    if post.price < 0 {
        panic_with_error!(env, Error::InvalidAmount);
    }
}

/// Return the first constraint `post` violates under `allowance`, if any.
pub fn fresh_post_violation(allowance: &Allowance, post: &Post, poster: &Address) -> Option<Error> {
    if !allowance.is_open() {
        return Some(Error::UnauthorizedCategory);
    }
    if !allowance.admits(poster) {
        return Some(Error::PosterNotAllowed);
    }
    if post.price < allowance.minimum_price {
        return Some(Error::InsufficientPrice);
    }
    if post.quantity < allowance.minimum_supply {
        return Some(Error::InsufficientSupply);
    }
    if allowance.maximum_supply != 0 && post.quantity > allowance.maximum_supply {
        return Some(Error::SupplyTooLarge);
    }
    None
}

/// Panic with the first violated constraint.
pub fn check_fresh_post(env: &Env, allowance: &Allowance, post: &Post, poster: &Address) {
    if let Some(err) = fresh_post_violation(allowance, post, poster) {
        panic_with_error!(env, err);
    }
}
