use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    constants::{GLOBAL_CONFIG_SEED, RECIPIENT_PROFILE_SEED, VAULT_SEED},
    errors::ErrorCode,
    events::TipSent,
    state::RecipientProfile,
    utils::read_initialized_config,
};

#[derive(Accounts)]
pub struct Tip<'info> {
    #[account(mut)]
    pub tipper: Signer<'info>,

    #[account(
        mut,
        constraint = tipper_token_account.mint == mint.key() @ ErrorCode::InvalidMintAddress
    )]
    pub tipper_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        seeds = [RECIPIENT_PROFILE_SEED, recipient_profile.creator.as_ref()],
        bump = recipient_profile.bump
    )]
    pub recipient_profile: Account<'info, RecipientProfile>,

    #[account(
        mut,
        seeds = [VAULT_SEED, recipient_profile.key().as_ref()],
        bump = recipient_profile.vault_bump,
        constraint = vault.mint == mint.key() @ ErrorCode::InvalidVault
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Deserialized in handler so a missing config reports NotInitialized
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Moves `amount` from the tipper into the recipient's vault
/// No fee is taken here; fees settle at withdrawal
pub fn handler(ctx: Context<Tip>, amount: u64) -> Result<()> {
    let config = read_initialized_config(&ctx.accounts.global_config)?;

    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        ctx.accounts.mint.key() == config.mint,
        ErrorCode::InvalidMintAddress
    );

    // Tipper signs directly; insufficient balance surfaces as the token program's error
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.tipper_token_account.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.tipper.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    emit!(TipSent {
        tipper: ctx.accounts.tipper.key(),
        recipient_profile: ctx.accounts.recipient_profile.key(),
        vault: ctx.accounts.vault.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
