use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
mod utils;

use instructions::*;

declare_id!("BTfqNEeyFptdwZFC8baNkEu4xs1hBMzr1vbDnfU5HjF7");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Tip Vault",
    project_url: "https://github.com/tip-vault/tip-vault",
    contacts: "link:https://github.com/tip-vault/tip-vault/security",
    policy: "https://github.com/tip-vault/tip-vault/blob/main/SECURITY.md",
    source_code: "https://github.com/tip-vault/tip-vault",
    source_release: "v0.1.0"
}

#[program]
pub mod tip_vault {
    use super::*;

    /// Creates the global config and treasury vault
    /// Can only succeed once; the signer becomes the owner
    pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey, fee_rate_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, treasury, fee_rate_bps)
    }

    /// Creates a recipient profile and its vault
    /// Rent may be paid by a separate payer
    pub fn register_recipient(ctx: Context<RegisterRecipient>) -> Result<()> {
        instructions::register_recipient::handler(ctx)
    }

    /// Tips a recipient; the full amount lands in their vault
    pub fn tip(ctx: Context<Tip>, amount: u64) -> Result<()> {
        instructions::tip::handler(ctx, amount)
    }

    /// Withdraws from the caller's vault net of protocol fee and reimbursed cost
    /// Only callable by the recipient
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64, reimbursed_cost: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount, reimbursed_cost)
    }

    /// Sweeps `amount` from the treasury
    /// Only callable by the owner
    pub fn admin_withdraw_fees(ctx: Context<AdminWithdrawFees>, amount: u64) -> Result<()> {
        instructions::admin_withdraw_fees::handler(ctx, amount)
    }

    /// Sweeps the whole treasury balance
    /// Only callable by the owner
    pub fn admin_withdraw_fees_all(ctx: Context<AdminWithdrawFees>) -> Result<()> {
        instructions::admin_withdraw_fees::handler_all(ctx)
    }
}
