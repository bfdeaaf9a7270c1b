//! # RBAC: role-based access control
//!
//! Guards the publisher's own configuration (fee divisor, pause switch).
//! Project-level permissions are not roles: allowances are gated on the
//! registry's project owner instead.
//!
//! ```text
//! SuperAdmin
//!     └── Admin
//! ```
//!
//! ## Storage layout
//!
//! - `RbacKey::SuperAdmin` → `Address`: the one and only super-admin.
//! - `RbacKey::Role(addr)` → `Role`: the role held by `addr`, if any.
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger |
//! |--------------------|---------|
//! | `role_set`         | Role granted or replaced |
//! | `role_del`         | Role revoked |
//!
//! ## Threat model notes
//!
//! - `Admin` cannot escalate to `SuperAdmin`; only `SuperAdmin` may grant that role.
//! - `SuperAdmin` cannot be removed via `revoke_role`; use `transfer_super_admin`.
//! - An address holds **at most one role** at a time; granting a new role replaces the old one.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::Error;

/// The set of roles that can be assigned to an address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Full control: manages admins, transfers itself, configures the publisher.
    SuperAdmin,
    /// Configures the fee divisor and may pause posting.
    Admin,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    /// Maps an address → its current Role (if any).
    Role(Address),
    /// The one and only SuperAdmin address.
    SuperAdmin,
}

// ─────────────────────────────────────────────────────────
// Storage helpers (private)
// ─────────────────────────────────────────────────────────

fn store_role(env: &Env, address: &Address, role: &Role) {
    env.storage()
        .persistent()
        .set(&RbacKey::Role(address.clone()), role);
}

fn clear_role(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&RbacKey::Role(address.clone()));
}

/// Read the role for `address`, returning `None` if unassigned.
pub fn get_role(env: &Env, address: &Address) -> Option<Role> {
    env.storage()
        .persistent()
        .get(&RbacKey::Role(address.clone()))
}

/// Read the SuperAdmin address, returning `None` before init.
pub fn get_super_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&RbacKey::SuperAdmin)
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the initial SuperAdmin. Panics with `Error::AlreadyInitialized` if
/// called again.
pub fn init_super_admin(env: &Env, super_admin: &Address) {
    if env.storage().persistent().has(&RbacKey::SuperAdmin) {
        soroban_sdk::panic_with_error!(env, Error::AlreadyInitialized);
    }
    env.storage()
        .persistent()
        .set(&RbacKey::SuperAdmin, super_admin);
    store_role(env, super_admin, &Role::SuperAdmin);

    emit(env, symbol_short!("role_set"), super_admin, &Role::SuperAdmin, None);
}

// ─────────────────────────────────────────────────────────
// Role assignment
// ─────────────────────────────────────────────────────────

/// Grant `role` to `target`.
///
/// - `caller` must authorize and hold `SuperAdmin` or `Admin`.
/// - Only `SuperAdmin` can grant `SuperAdmin`.
/// - The SuperAdmin cannot be demoted through this path.
pub fn grant_role(env: &Env, caller: &Address, target: &Address, role: Role) {
    caller.require_auth();
    match role {
        Role::SuperAdmin => require_role(env, caller, &Role::SuperAdmin),
        Role::Admin => require_admin_or_above(env, caller),
    }

    if let Some(Role::SuperAdmin) = get_role(env, target) {
        if role != Role::SuperAdmin {
            soroban_sdk::panic_with_error!(env, Error::MissingRole);
        }
    }

    store_role(env, target, &role);
    emit(env, symbol_short!("role_set"), target, &role, Some(caller.clone()));
}

/// Revoke any role from `target`. A no-op for addresses without a role.
pub fn revoke_role(env: &Env, caller: &Address, target: &Address) {
    caller.require_auth();
    require_admin_or_above(env, caller);

    if get_super_admin(env).as_ref() == Some(target) {
        soroban_sdk::panic_with_error!(env, Error::MissingRole);
    }

    if get_role(env, target).is_some() {
        clear_role(env, target);
        emit_revoke(env, target, Some(caller.clone()));
    }
}

/// Hand the SuperAdmin role to `new`. The only way to remove a SuperAdmin.
pub fn transfer_super_admin(env: &Env, current: &Address, new: &Address) {
    current.require_auth();
    require_role(env, current, &Role::SuperAdmin);

    clear_role(env, current);
    emit_revoke(env, current, Some(current.clone()));

    env.storage().persistent().set(&RbacKey::SuperAdmin, new);
    store_role(env, new, &Role::SuperAdmin);
    emit(
        env,
        symbol_short!("role_set"),
        new,
        &Role::SuperAdmin,
        Some(current.clone()),
    );
}

// ─────────────────────────────────────────────────────────
// Access guards
// ─────────────────────────────────────────────────────────

/// Assert that `address` holds exactly `required_role`.
pub fn require_role(env: &Env, address: &Address, required_role: &Role) {
    match get_role(env, address) {
        Some(ref r) if r == required_role => {}
        _ => soroban_sdk::panic_with_error!(env, Error::MissingRole),
    }
}

/// Assert that `address` is the SuperAdmin or an Admin.
pub fn require_admin_or_above(env: &Env, address: &Address) {
    match get_role(env, address) {
        Some(Role::SuperAdmin) | Some(Role::Admin) => {}
        None => soroban_sdk::panic_with_error!(env, Error::MissingRole),
    }
}

// ─────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────

pub fn role_of(env: &Env, address: Address) -> Option<Role> {
    get_role(env, &address)
}

pub fn has_role(env: &Env, address: Address, role: Role) -> bool {
    get_role(env, &address).map(|r| r == role).unwrap_or(false)
}

// ─────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────

/// Topic: `(role_set, target_address, role_name_symbol)`
/// Data:  `Option<caller_address>`
fn emit(env: &Env, event: Symbol, target: &Address, role: &Role, by: Option<Address>) {
    let role_sym = match role {
        Role::SuperAdmin => symbol_short!("supadmin"),
        Role::Admin => symbol_short!("admin"),
    };
    env.events().publish((event, target.clone(), role_sym), by);
}

fn emit_revoke(env: &Env, target: &Address, by: Option<Address>) {
    env.events()
        .publish((symbol_short!("role_del"), target.clone()), by);
}
