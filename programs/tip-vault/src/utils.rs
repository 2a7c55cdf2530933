use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    constants::BPS_DENOMINATOR,
    errors::ErrorCode,
    pda::SigningCapability,
    state::GlobalConfig,
    ID,
};

/// How a withdrawal splits between the recipient and the treasury
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalSplit {
    pub protocol_fee: u64,
    pub reimbursed_cost: u64,
    /// protocol_fee + reimbursed_cost, sent to the treasury
    pub to_treasury: u64,
    pub to_recipient: u64,
}

/// Protocol cut of `amount`, rounded down
pub fn calculate_protocol_fee(amount: u64, fee_rate_bps: u16) -> Result<u64> {
    let fee: u64 = (amount as u128)
        .checked_mul(fee_rate_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(ErrorCode::MathOverflow)?
        .try_into()
        .map_err(|_| ErrorCode::MathOverflow)?;
    Ok(fee)
}

/// Splits a withdrawal of `amount` into recipient and treasury legs
///
/// Fails with MathUnderflow when the fee plus the reimbursed cost exceed
/// the amount. The two legs always sum to `amount`.
pub fn split_withdrawal(amount: u64, reimbursed_cost: u64, fee_rate_bps: u16) -> Result<WithdrawalSplit> {
    let protocol_fee = calculate_protocol_fee(amount, fee_rate_bps)?;

    let to_treasury = protocol_fee
        .checked_add(reimbursed_cost)
        .ok_or(ErrorCode::MathOverflow)?;

    let to_recipient = amount
        .checked_sub(to_treasury)
        .ok_or(ErrorCode::MathUnderflow)?;

    Ok(WithdrawalSplit {
        protocol_fee,
        reimbursed_cost,
        to_treasury,
        to_recipient,
    })
}

/// Reads the global config, treating a missing, foreign or not yet
/// initialized record as NotInitialized
pub fn read_initialized_config(config_info: &AccountInfo) -> Result<GlobalConfig> {
    require!(
        config_info.owner == &ID && !config_info.data_is_empty(),
        ErrorCode::NotInitialized
    );

    let config = GlobalConfig::try_deserialize(&mut &config_info.try_borrow_data()?[..])
        .map_err(|_| ErrorCode::NotInitialized)?;

    require!(config.initialized, ErrorCode::NotInitialized);

    Ok(config)
}

/// Moves `amount` out of a program-custodied token account
///
/// The `capability` must be the one derived for `authority` in this
/// instruction. Zero amounts are skipped.
pub fn transfer_from_custody<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    capability: &SigningCapability,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    #[cfg(feature = "verbose")]
    msg!("Custody transfer of {} signed as {:?}", amount, capability.role());

    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: authority.clone(),
    };

    capability.with_signer_seeds(|signer_seeds| {
        let cpi_ctx = CpiContext::new_with_signer(
            token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
    })
}
