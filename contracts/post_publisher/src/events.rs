use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

use crate::types::Post;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceSet {
    pub project_id: u64,
    pub collection: Address,
    pub category: u32,
    pub minimum_price: i128,
    pub minimum_supply: u32,
    pub maximum_supply: u32,
    pub allowed_posters: Vec<Address>,
    pub caller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceRemoved {
    pub project_id: u64,
    pub collection: Address,
    pub category: u32,
    pub caller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostsSubmitted {
    pub project_id: u64,
    pub collection: Address,
    pub posts: Vec<Post>,
    pub slot_ids: Vec<u32>,
    pub nft_beneficiary: Address,
    pub fee_beneficiary: Address,
    pub total_price: i128,
    pub fee: i128,
    pub caller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeDivisorUpdated {
    pub old_divisor: u32,
    pub new_divisor: u32,
    pub caller: Address,
}

pub fn emit_allowance_set(env: &Env, data: AllowanceSet) {
    let topics = (symbol_short!("allow_set"), data.project_id);
    env.events().publish(topics, data);
}

pub fn emit_allowance_removed(
    env: &Env,
    project_id: u64,
    collection: Address,
    category: u32,
    caller: Address,
) {
    let topics = (symbol_short!("allow_del"), project_id);
    let data = AllowanceRemoved {
        project_id,
        collection,
        category,
        caller,
    };
    env.events().publish(topics, data);
}

pub fn emit_posts_submitted(env: &Env, data: PostsSubmitted) {
    let topics = (symbol_short!("posted"), data.project_id);
    env.events().publish(topics, data);
}

pub fn emit_fee_divisor_updated(env: &Env, old_divisor: u32, new_divisor: u32, caller: Address) {
    let topics = (symbol_short!("fee_set"),);
    let data = FeeDivisorUpdated {
        old_divisor,
        new_divisor,
        caller,
    };
    env.events().publish(topics, data);
}

pub fn emit_protocol_paused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("paused"),), caller);
}

pub fn emit_protocol_unpaused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unpaused"),), caller);
}
