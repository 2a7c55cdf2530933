use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{GLOBAL_CONFIG_SEED, GLOBAL_CONFIG_SIZE, MAX_FEE_RATE_BPS, REQUIRED_MINT_DECIMALS},
    errors::ErrorCode,
    events::ProtocolInitialized,
    state::GlobalConfig,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the protocol owner
    #[account(mut)]
    pub owner: Signer<'info>,

    // init_if_needed so a repeated call reaches the handler and fails with
    // AlreadyInitialized instead of an allocation error
    #[account(
        init_if_needed,
        payer = owner,
        space = GLOBAL_CONFIG_SIZE,
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Must have REQUIRED_MINT_DECIMALS, checked after AlreadyInitialized
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = global_config,
        associated_token::token_program = token_program
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Creates the global config and its treasury vault
/// Can only succeed once; the signer becomes the permanent owner
pub fn handler(ctx: Context<Initialize>, treasury: Pubkey, fee_rate_bps: u16) -> Result<()> {
    require!(
        !ctx.accounts.global_config.initialized,
        ErrorCode::AlreadyInitialized
    );

    require!(
        ctx.accounts.mint.decimals == REQUIRED_MINT_DECIMALS,
        ErrorCode::InvalidMint
    );

    require!(fee_rate_bps <= MAX_FEE_RATE_BPS, ErrorCode::BasePointError);

    // Treasury must name the vault this instruction custodies
    require!(treasury != Pubkey::default(), ErrorCode::TreasuryError);
    require!(
        treasury == ctx.accounts.treasury_vault.key(),
        ErrorCode::TreasuryError
    );

    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.mint.key();

    ctx.accounts.global_config.set_inner(GlobalConfig {
        treasury,
        fee_rate_bps,
        initialized: true,
        owner,
        mint,
        bump: ctx.bumps.global_config,
    });

    #[cfg(feature = "verbose")]
    msg!("Protocol initialized with fee rate {} bps", fee_rate_bps);

    emit!(ProtocolInitialized {
        owner,
        treasury,
        mint,
        fee_rate_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
