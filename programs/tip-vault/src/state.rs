use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_CONFIG_SIZE, RECIPIENT_PROFILE_SIZE};

/// Global protocol configuration (single instance)
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    /// Fee-accumulation token account (ATA of `mint` owned by this PDA)
    pub treasury: Pubkey,
    /// Protocol cut taken at withdrawal, in basis points (0-10000)
    pub fee_rate_bps: u16,
    /// Set once by initialize, never cleared
    pub initialized: bool,
    /// Only identity allowed to sweep the treasury
    pub owner: Pubkey,
    /// Token mint custodied by every vault of this deployment
    pub mint: Pubkey,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Per-recipient profile anchoring that recipient's vault
#[account]
#[derive(InitSpace)]
pub struct RecipientProfile {
    /// Recipient wallet; the only signer allowed to withdraw
    pub creator: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    pub vault_authority_bump: u8,
}

// Compile-time size assertions to catch accidental struct changes
const _: () = assert!(GlobalConfig::INIT_SPACE + 8 == GLOBAL_CONFIG_SIZE);
const _: () = assert!(RecipientProfile::INIT_SPACE + 8 == RECIPIENT_PROFILE_SIZE);
