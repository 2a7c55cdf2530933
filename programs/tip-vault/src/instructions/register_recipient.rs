use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{
        GLOBAL_CONFIG_SEED, RECIPIENT_PROFILE_SEED, RECIPIENT_PROFILE_SIZE, VAULT_AUTHORITY_SEED,
        VAULT_SEED,
    },
    errors::ErrorCode,
    events::RecipientRegistered,
    state::RecipientProfile,
    utils::read_initialized_config,
};

#[derive(Accounts)]
pub struct RegisterRecipient<'info> {
    /// Recipient that will own the profile and withdraw from the vault
    pub creator: Signer<'info>,

    /// Account paying rent for profile and vault (can be same as creator or different)
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = RECIPIENT_PROFILE_SIZE,
        seeds = [RECIPIENT_PROFILE_SEED, creator.key().as_ref()],
        bump
    )]
    pub recipient_profile: Account<'info, RecipientProfile>,

    /// CHECK: Signing PDA only, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, recipient_profile.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        seeds = [VAULT_SEED, recipient_profile.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_authority,
        token::token_program = token_program
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
    pub system_program: Program<'info, System>,
}

/// Creates the recipient profile and its empty vault
/// Registering twice fails when the profile address is already allocated
pub fn handler(ctx: Context<RegisterRecipient>) -> Result<()> {
    let config = read_initialized_config(&ctx.accounts.global_config)?;

    require!(
        ctx.accounts.mint.key() == config.mint,
        ErrorCode::InvalidMintAddress
    );

    let creator = ctx.accounts.creator.key();

    ctx.accounts.recipient_profile.set_inner(RecipientProfile {
        creator,
        bump: ctx.bumps.recipient_profile,
        vault_bump: ctx.bumps.vault,
        vault_authority_bump: ctx.bumps.vault_authority,
    });

    #[cfg(feature = "verbose")]
    msg!("Registered recipient {}", creator);

    emit!(RecipientRegistered {
        recipient_profile: ctx.accounts.recipient_profile.key(),
        creator,
        vault: ctx.accounts.vault.key(),
        payer: ctx.accounts.payer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
