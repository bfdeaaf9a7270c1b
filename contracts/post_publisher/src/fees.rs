//! # Fees and payment routing
//!
//! The poster pays `supplied` tokens into the publisher. The fee project keeps
//! `total_price / fee_divisor` unless the posting project *is* the fee
//! project; everything else goes to the posting project's treasury together
//! with the mint metadata.

use soroban_sdk::{token, Address, Env, String, Vec};

use crate::interfaces::{ProjectRegistryClient, TreasuryClient};
use crate::types::{PayMetadata, PublisherConfig};
use crate::Error;

/// Memo attached to every treasury payment.
pub const POST_MEMO: &str = "Minted from post publisher";

/// How a supplied amount is divided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Disbursement {
    pub fee: i128,
    pub to_project: i128,
    pub to_fee_project: i128,
}

/// Publishing fee for `total_price`; zero when the project is the fee project.
pub fn compute_fee(
    project_id: u64,
    fee_project_id: u64,
    fee_divisor: u32,
    total_price: i128,
) -> Result<i128, Error> {
    if fee_divisor == 0 {
        return Err(Error::InvalidFeeDivisor);
    }
    if project_id == fee_project_id {
        return Ok(0);
    }
    Ok(total_price / fee_divisor as i128)
}

/// Split `supplied` into the project's and the fee project's share.
///
/// Any excess over `total_price + fee` stays with the project.
pub fn split(supplied: i128, total_price: i128, fee: i128) -> Result<Disbursement, Error> {
    if supplied < 0 {
        return Err(Error::InvalidAmount);
    }
    let required = total_price.checked_add(fee).ok_or(Error::Overflow)?;
    if required > supplied {
        return Err(Error::InsufficientAmount);
    }
    let to_project = supplied - fee;
    Ok(Disbursement {
        fee,
        to_project,
        to_fee_project: supplied - to_project,
    })
}

/// Move the poster's payment into the two treasuries.
///
/// The project payment is always reported, even for zero, because it carries
/// the slot ids to mint.
#[allow(clippy::too_many_arguments)]
pub fn route(
    env: &Env,
    config: &PublisherConfig,
    project_id: u64,
    collection: &Address,
    poster: &Address,
    disbursement: &Disbursement,
    slot_ids: &Vec<u32>,
    nft_beneficiary: &Address,
    fee_beneficiary: &Address,
) {
    let token_client = token::Client::new(env, &config.payment_token);
    let registry = ProjectRegistryClient::new(env, &config.registry);
    let this = env.current_contract_address();
    let memo = String::from_str(env, POST_MEMO);

    let supplied = disbursement.to_project + disbursement.to_fee_project;
    if supplied > 0 {
        token_client.transfer(poster, &this, &supplied);
    }

    let project_treasury = registry.primary_treasury_of(&project_id, &config.payment_token);
    if disbursement.to_project > 0 {
        token_client.transfer(&this, &project_treasury, &disbursement.to_project);
    }
    TreasuryClient::new(env, &project_treasury).pay(
        &project_id,
        &config.payment_token,
        &disbursement.to_project,
        nft_beneficiary,
        &0,
        &true,
        &memo,
        &PayMetadata {
            referral: config.fee_project_id,
            collection: Some(collection.clone()),
            slot_ids: slot_ids.clone(),
        },
    );

    if disbursement.to_fee_project > 0 {
        let fee_treasury =
            registry.primary_treasury_of(&config.fee_project_id, &config.payment_token);
        token_client.transfer(&this, &fee_treasury, &disbursement.to_fee_project);
        TreasuryClient::new(env, &fee_treasury).pay(
            &config.fee_project_id,
            &config.payment_token,
            &disbursement.to_fee_project,
            fee_beneficiary,
            &0,
            &true,
            &memo,
            &PayMetadata {
                referral: config.fee_project_id,
                collection: None,
                slot_ids: Vec::new(env),
            },
        );
    }
}
