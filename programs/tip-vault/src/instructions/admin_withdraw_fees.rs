use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::GLOBAL_CONFIG_SEED,
    errors::ErrorCode,
    events::FeesSwept,
    pda::SigningCapability,
    state::GlobalConfig,
    utils::{read_initialized_config, transfer_from_custody},
};

#[derive(Accounts)]
pub struct AdminWithdrawFees<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Deserialized in handler so a missing config reports NotInitialized
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,

    /// Must be GlobalConfig.treasury, checked in handler
    #[account(mut)]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner-designated receiving account
    #[account(
        mut,
        constraint = destination.mint == mint.key() @ ErrorCode::InvalidMintAddress
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// Must be GlobalConfig.mint, checked in handler
    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Sweeps `amount` of accumulated fees to the owner's destination
/// Only callable by the protocol owner
pub fn handler(ctx: Context<AdminWithdrawFees>, amount: u64) -> Result<()> {
    let config = load_owned_config(ctx.accounts)?;

    require!(
        amount <= ctx.accounts.treasury_vault.amount,
        ErrorCode::InsufficientVaultBalance
    );

    sweep(ctx.accounts, &config, amount)
}

/// Sweeps the entire treasury balance; an empty treasury is a no-op
/// Only callable by the protocol owner
pub fn handler_all(ctx: Context<AdminWithdrawFees>) -> Result<()> {
    let config = load_owned_config(ctx.accounts)?;
    let amount = ctx.accounts.treasury_vault.amount;

    sweep(ctx.accounts, &config, amount)
}

/// Loads the config and checks the signer, treasury and mint against it
fn load_owned_config(accounts: &AdminWithdrawFees) -> Result<GlobalConfig> {
    let config = read_initialized_config(&accounts.global_config)?;

    require!(config.owner == accounts.owner.key(), ErrorCode::Unauthorized);
    require!(
        accounts.treasury_vault.key() == config.treasury,
        ErrorCode::TreasuryError
    );
    require!(
        accounts.mint.key() == config.mint,
        ErrorCode::InvalidMintAddress
    );

    Ok(config)
}

fn sweep(accounts: &AdminWithdrawFees, config: &GlobalConfig, amount: u64) -> Result<()> {
    let capability = SigningCapability::global_config(config.bump);

    transfer_from_custody(
        &accounts.treasury_vault,
        &accounts.destination,
        &accounts.global_config.to_account_info(),
        &accounts.mint,
        &accounts.token_program,
        &capability,
        amount,
    )?;

    emit!(FeesSwept {
        owner: accounts.owner.key(),
        treasury: accounts.treasury_vault.key(),
        destination: accounts.destination.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
