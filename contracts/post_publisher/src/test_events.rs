extern crate std;

use soroban_sdk::{
    symbol_short, testutils::Events, vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{AllowanceRemoved, AllowanceSet, FeeDivisorUpdated, PostsSubmitted};
use crate::mocks::{policy, post, setup, PROJECT_ID};

#[test]
fn test_allowance_set_event() {
    let fx = setup();
    let env = &fx.env;
    fx.open_category(policy(env, 3, 25, 2, 8));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("allow_set"), project_id)
    assert_eq!(last_event.0, fx.client.address);
    let expected_topics = vec![env, symbol_short!("allow_set").into_val(env), PROJECT_ID.into_val(env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AllowanceSet = last_event.2.try_into_val(env).unwrap();
    assert_eq!(event_data, AllowanceSet {
        project_id: PROJECT_ID,
        collection: fx.collection.address.clone(),
        category: 3,
        minimum_price: 25,
        minimum_supply: 2,
        maximum_supply: 8,
        allowed_posters: soroban_sdk::Vec::new(env),
        caller: fx.owner.clone(),
    });
}

#[test]
fn test_allowance_removed_event() {
    let fx = setup();
    let env = &fx.env;
    fx.open_category(policy(env, 3, 25, 2, 0));
    fx.client.remove_allowance(&PROJECT_ID, &fx.owner, &None, &3);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![env, symbol_short!("allow_del").into_val(env), PROJECT_ID.into_val(env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AllowanceRemoved = last_event.2.try_into_val(env).unwrap();
    assert_eq!(event_data, AllowanceRemoved {
        project_id: PROJECT_ID,
        collection: fx.collection.address.clone(),
        category: 3,
        caller: fx.owner.clone(),
    });
}

#[test]
fn test_posts_submitted_event() {
    let fx = setup();
    let env = &fx.env;
    fx.open_category(policy(env, 1, 100, 1, 0));

    let poster = fx.funded_poster(1_000);
    let batch = vec![env, post(env, 5, 2, 100, 1), post(env, 6, 2, 100, 1)];
    fx.submit(&poster, &batch, 210);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("posted"), project_id)
    assert_eq!(last_event.0, fx.client.address);
    let expected_topics = vec![env, symbol_short!("posted").into_val(env), PROJECT_ID.into_val(env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PostsSubmitted = last_event.2.try_into_val(env).unwrap();
    assert_eq!(event_data, PostsSubmitted {
        project_id: PROJECT_ID,
        collection: fx.collection.address.clone(),
        posts: batch,
        slot_ids: vec![env, 1u32, 2u32],
        nft_beneficiary: poster.clone(),
        fee_beneficiary: poster.clone(),
        total_price: 200,
        fee: 10,
        caller: poster,
    });
}

#[test]
fn test_fee_divisor_updated_event() {
    let fx = setup();
    let env = &fx.env;
    fx.client.set_fee_divisor(&fx.admin, &40);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![env, symbol_short!("fee_set").into_val(env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FeeDivisorUpdated = last_event.2.try_into_val(env).unwrap();
    assert_eq!(event_data, FeeDivisorUpdated {
        old_divisor: 20,
        new_divisor: 40,
        caller: fx.admin.clone(),
    });
}

#[test]
fn test_pause_events() {
    let fx = setup();
    let env = &fx.env;

    fx.client.pause(&fx.admin);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![env, symbol_short!("paused").into_val(env)]);
    let caller: Address = last_event.2.try_into_val(env).unwrap();
    assert_eq!(caller, fx.admin);

    fx.client.unpause(&fx.admin);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.1, vec![env, symbol_short!("unpaused").into_val(env)]);
}
