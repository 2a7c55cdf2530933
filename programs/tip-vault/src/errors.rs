use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Protocol already initialized")]
    AlreadyInitialized,

    #[msg("Protocol is not initialized")]
    NotInitialized,

    #[msg("Not your turn")]
    NotTurn,

    #[msg("Task is not completed")]
    TaskNotCompleted,

    #[msg("Caller is not a participant")]
    NotAParticipant,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid treasury account")]
    TreasuryError,

    #[msg("Fee rate must be at most 10000 bps")]
    BasePointError,

    #[msg("Tip amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Token mint must have 6 decimals")]
    InvalidMint,

    #[msg("Token mint does not match the configured mint")]
    InvalidMintAddress,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Seed input must be a 32-byte key")]
    InvalidSeedInput,
}
