use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{GLOBAL_CONFIG_SEED, RECIPIENT_PROFILE_SEED, VAULT_AUTHORITY_SEED, VAULT_SEED},
    errors::ErrorCode,
    events::WithdrawalSettled,
    pda::SigningCapability,
    state::RecipientProfile,
    utils::{read_initialized_config, split_withdrawal, transfer_from_custody},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub creator: Signer<'info>,

    #[account(
        seeds = [RECIPIENT_PROFILE_SEED, recipient_profile.creator.as_ref()],
        bump = recipient_profile.bump,
        constraint = recipient_profile.creator == creator.key() @ ErrorCode::Unauthorized
    )]
    pub recipient_profile: Account<'info, RecipientProfile>,

    /// CHECK: Signing PDA only, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, recipient_profile.key().as_ref()],
        bump = recipient_profile.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, recipient_profile.key().as_ref()],
        bump = recipient_profile.vault_bump,
        constraint = vault.owner == vault_authority.key() @ ErrorCode::InvalidVault
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Any token account of the configured mint chosen by the recipient
    #[account(
        mut,
        constraint = destination.mint == mint.key() @ ErrorCode::InvalidMintAddress
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Deserialized in handler so a missing config reports NotInitialized
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,

    /// Must be GlobalConfig.treasury, checked in handler
    #[account(mut)]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    /// Must be GlobalConfig.mint, checked in handler
    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Releases `amount` from the vault: the protocol fee and the reimbursed
/// cost go to the treasury, the rest to `destination`
/// Only callable by the profile's creator
pub fn handler(ctx: Context<Withdraw>, amount: u64, reimbursed_cost: u64) -> Result<()> {
    let config = read_initialized_config(&ctx.accounts.global_config)?;

    require!(
        ctx.accounts.treasury_vault.key() == config.treasury,
        ErrorCode::TreasuryError
    );
    require!(
        ctx.accounts.mint.key() == config.mint,
        ErrorCode::InvalidMintAddress
    );

    require!(
        amount <= ctx.accounts.vault.amount,
        ErrorCode::InsufficientVaultBalance
    );

    let split = split_withdrawal(amount, reimbursed_cost, config.fee_rate_bps)?;

    let profile_key = ctx.accounts.recipient_profile.key();
    let capability = SigningCapability::vault_authority(
        &profile_key,
        ctx.accounts.recipient_profile.vault_authority_bump,
    );
    let vault_authority = ctx.accounts.vault_authority.to_account_info();

    // Both legs run in this instruction; a failure in either reverts both
    transfer_from_custody(
        &ctx.accounts.vault,
        &ctx.accounts.treasury_vault,
        &vault_authority,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
        &capability,
        split.to_treasury,
    )?;

    transfer_from_custody(
        &ctx.accounts.vault,
        &ctx.accounts.destination,
        &vault_authority,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
        &capability,
        split.to_recipient,
    )?;

    ctx.accounts.vault.reload()?;

    #[cfg(feature = "verbose")]
    msg!(
        "Withdrew {}: fee {}, cost {}, net {}",
        amount,
        split.protocol_fee,
        split.reimbursed_cost,
        split.to_recipient
    );

    emit!(WithdrawalSettled {
        recipient_profile: profile_key,
        creator: ctx.accounts.creator.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        protocol_fee: split.protocol_fee,
        reimbursed_cost: split.reimbursed_cost,
        net_to_recipient: split.to_recipient,
        remaining_balance: ctx.accounts.vault.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
