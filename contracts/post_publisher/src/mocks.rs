//! Test doubles for the registry, collection and treasury contracts, plus a
//! fixture wiring them to a freshly initialised publisher.

extern crate std;

use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token, Address, BytesN, Env,
    String, Vec,
};

use crate::types::{AllowedPost, PayMetadata, Post, SlotSpec};
use crate::{PostPublisher, PostPublisherClient};

pub const FEE_PROJECT_ID: u64 = 1;
pub const PROJECT_ID: u64 = 2;
pub const FEE_DIVISOR: u32 = 20;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum MockKey {
    Owner(u64),
    DefaultCollection(u64),
    Treasury(u64),
    MaxSlotId,
    Slots,
    Failing,
    Misnumbering,
    Payments,
}

// ─────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────

#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn set_project(
        env: Env,
        project_id: u64,
        owner: Address,
        default_collection: Address,
        treasury: Address,
    ) {
        let store = env.storage().instance();
        store.set(&MockKey::Owner(project_id), &owner);
        store.set(&MockKey::DefaultCollection(project_id), &default_collection);
        store.set(&MockKey::Treasury(project_id), &treasury);
    }

    pub fn set_owner(env: Env, project_id: u64, owner: Address) {
        env.storage().instance().set(&MockKey::Owner(project_id), &owner);
    }

    pub fn owner_of(env: Env, project_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Owner(project_id))
            .expect("unknown project")
    }

    pub fn default_collection_of(env: Env, project_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::DefaultCollection(project_id))
            .expect("unknown project")
    }

    pub fn primary_treasury_of(env: Env, project_id: u64, _token: Address) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Treasury(project_id))
            .expect("unknown project")
    }
}

// ─────────────────────────────────────────────────────────
// Collection
// ─────────────────────────────────────────────────────────

#[contract]
pub struct MockCollection;

#[contractimpl]
impl MockCollection {
    pub fn max_slot_id(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::MaxSlotId).unwrap_or(0)
    }

    pub fn create_slots(env: Env, slots: Vec<SlotSpec>) {
        let store = env.storage().instance();
        if store.get(&MockKey::Failing).unwrap_or(false) {
            panic!("collection rejected slots");
        }
        let mut created: Vec<SlotSpec> = store.get(&MockKey::Slots).unwrap_or(Vec::new(&env));
        created.append(&slots);
        store.set(&MockKey::Slots, &created);

        let mut max: u32 = store.get(&MockKey::MaxSlotId).unwrap_or(0);
        max += slots.len();
        if store.get(&MockKey::Misnumbering).unwrap_or(false) {
            max += 1;
        }
        store.set(&MockKey::MaxSlotId, &max);
    }

    /// Slots created through `create_slots`, in creation order.
    pub fn slots(env: Env) -> Vec<SlotSpec> {
        env.storage()
            .instance()
            .get(&MockKey::Slots)
            .unwrap_or(Vec::new(&env))
    }

    pub fn set_max_slot_id(env: Env, max: u32) {
        env.storage().instance().set(&MockKey::MaxSlotId, &max);
    }

    pub fn set_failing(env: Env, failing: bool) {
        env.storage().instance().set(&MockKey::Failing, &failing);
    }

    pub fn set_misnumbering(env: Env, misnumbering: bool) {
        env.storage().instance().set(&MockKey::Misnumbering, &misnumbering);
    }
}

// ─────────────────────────────────────────────────────────
// Treasury
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub project_id: u64,
    pub amount: i128,
    pub beneficiary: Address,
    pub metadata: PayMetadata,
}

#[contract]
pub struct MockTreasury;

#[contractimpl]
impl MockTreasury {
    pub fn pay(
        env: Env,
        project_id: u64,
        _token: Address,
        amount: i128,
        beneficiary: Address,
        _min_returned_tokens: i128,
        _prefer_claimed: bool,
        _memo: String,
        metadata: PayMetadata,
    ) -> i128 {
        let store = env.storage().instance();
        let mut payments: Vec<PaymentRecord> =
            store.get(&MockKey::Payments).unwrap_or(Vec::new(&env));
        payments.push_back(PaymentRecord {
            project_id,
            amount,
            beneficiary,
            metadata,
        });
        store.set(&MockKey::Payments, &payments);
        amount
    }

    pub fn payments(env: Env) -> Vec<PaymentRecord> {
        env.storage()
            .instance()
            .get(&MockKey::Payments)
            .unwrap_or(Vec::new(&env))
    }
}

// ─────────────────────────────────────────────────────────
// Fixture
// ─────────────────────────────────────────────────────────

pub struct Fixture {
    pub env: Env,
    pub client: PostPublisherClient<'static>,
    pub registry: MockRegistryClient<'static>,
    pub collection: MockCollectionClient<'static>,
    pub project_treasury: MockTreasuryClient<'static>,
    pub fee_treasury: MockTreasuryClient<'static>,
    pub token: token::Client<'static>,
    pub sac: token::StellarAssetClient<'static>,
    pub admin: Address,
    pub owner: Address,
}

pub fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let fee_owner = Address::generate(&env);

    let registry = MockRegistryClient::new(&env, &env.register(MockRegistry, ()));
    let collection = MockCollectionClient::new(&env, &env.register(MockCollection, ()));
    let fee_collection = env.register(MockCollection, ());
    let project_treasury = MockTreasuryClient::new(&env, &env.register(MockTreasury, ()));
    let fee_treasury = MockTreasuryClient::new(&env, &env.register(MockTreasury, ()));

    registry.set_project(&PROJECT_ID, &owner, &collection.address, &project_treasury.address);
    registry.set_project(
        &FEE_PROJECT_ID,
        &fee_owner,
        &fee_collection,
        &fee_treasury.address,
    );

    let token_admin = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &asset.address());
    let sac = token::StellarAssetClient::new(&env, &asset.address());

    let client = PostPublisherClient::new(&env, &env.register(PostPublisher, ()));
    client.init(
        &admin,
        &registry.address,
        &token.address,
        &FEE_PROJECT_ID,
        &FEE_DIVISOR,
    );

    Fixture {
        env,
        client,
        registry,
        collection,
        project_treasury,
        fee_treasury,
        token,
        sac,
        admin,
        owner,
    }
}

pub fn content(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

pub fn post(env: &Env, seed: u8, quantity: u32, price: i128, category: u32) -> Post {
    Post {
        content_id: content(env, seed),
        quantity,
        price,
        category,
    }
}

pub fn policy(
    env: &Env,
    category: u32,
    minimum_price: i128,
    minimum_supply: u32,
    maximum_supply: u32,
) -> AllowedPost {
    AllowedPost {
        collection: None,
        category,
        minimum_price,
        minimum_supply,
        maximum_supply,
        allowed_posters: Vec::new(env),
    }
}

impl Fixture {
    /// Open `category` on the default collection with a single policy.
    pub fn open_category(&self, allowed: AllowedPost) {
        let policies = soroban_sdk::vec![&self.env, allowed];
        self.client.set_allowances(&PROJECT_ID, &self.owner, &policies);
    }

    /// A fresh poster holding `balance` payment tokens.
    pub fn funded_poster(&self, balance: i128) -> Address {
        let poster = Address::generate(&self.env);
        if balance > 0 {
            self.sac.mint(&poster, &balance);
        }
        poster
    }

    /// Submit `posts` to the default collection with the poster as both
    /// beneficiaries.
    pub fn submit(&self, poster: &Address, posts: &Vec<Post>, amount: i128) {
        self.client.submit_posts(
            poster,
            &PROJECT_ID,
            &None,
            posts,
            poster,
            poster,
            &amount,
        );
    }
}
