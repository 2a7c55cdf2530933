// Fee configuration
pub const MAX_FEE_RATE_BPS: u16 = 10_000;     // 100%
pub const BPS_DENOMINATOR: u128 = 10_000;

// Only 6-decimal mints (USDC-style) are accepted at initialization
pub const REQUIRED_MINT_DECIMALS: u8 = 6;

// PDA seeds
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global-state";
pub const RECIPIENT_PROFILE_SEED: &[u8] = b"recipient_state";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

// Account sizes (Borsh layout, discriminator included)
// GlobalConfig: discriminator (8) + treasury (32) + fee_rate_bps (2) + initialized (1)
//             + owner (32) + mint (32) + bump (1)
pub const GLOBAL_CONFIG_SIZE: usize = 8 + 32 + 2 + 1 + 32 + 32 + 1;  // 108 bytes

// RecipientProfile: discriminator (8) + creator (32) + bump (1) + vault_bump (1)
//                 + vault_authority_bump (1)
pub const RECIPIENT_PROFILE_SIZE: usize = 8 + 32 + 1 + 1 + 1;  // 43 bytes
