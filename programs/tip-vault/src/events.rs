use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub mint: Pubkey,
    pub fee_rate_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct RecipientRegistered {
    pub recipient_profile: Pubkey,
    pub creator: Pubkey,
    pub vault: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TipSent {
    pub tipper: Pubkey,
    pub recipient_profile: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalSettled {
    pub recipient_profile: Pubkey,
    pub creator: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub protocol_fee: u64,
    pub reimbursed_cost: u64,
    pub net_to_recipient: u64,
    pub remaining_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesSwept {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
