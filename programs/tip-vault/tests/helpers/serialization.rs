//! Serialization helpers for Borsh Anchor accounts
//!
//! Layout: 8-byte Anchor discriminator, then fields in declaration order.
//! Must match state.rs exactly.

use solana_sdk::pubkey::Pubkey;

pub const GLOBAL_CONFIG_SIZE: usize = 8 + 32 + 2 + 1 + 32 + 32 + 1; // 108 bytes
pub const RECIPIENT_PROFILE_SIZE: usize = 8 + 32 + 1 + 1 + 1; // 43 bytes

// Anchor discriminators (first 8 bytes of sha256("account:StructName"))
pub const GLOBAL_CONFIG_DISCRIMINATOR: [u8; 8] = [0x95, 0x08, 0x9c, 0xca, 0xa0, 0xfc, 0xb0, 0xd9];
pub const RECIPIENT_PROFILE_DISCRIMINATOR: [u8; 8] = [0xeb, 0x71, 0xbb, 0x73, 0x43, 0x4d, 0x97, 0xc4];

/// GlobalConfig field values for serialization
#[derive(Clone, Copy, Debug)]
pub struct GlobalConfigData {
    pub treasury: Pubkey,
    pub fee_rate_bps: u16,
    pub initialized: bool,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
}

/// Serialize GlobalConfig for test account data
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: treasury
/// - 2 bytes: fee_rate_bps (little-endian)
/// - 1 byte: initialized
/// - 32 bytes: owner
/// - 32 bytes: mint
/// - 1 byte: bump
pub fn serialize_global_config(config: &GlobalConfigData) -> Vec<u8> {
    let mut data = Vec::with_capacity(GLOBAL_CONFIG_SIZE);
    data.extend_from_slice(&GLOBAL_CONFIG_DISCRIMINATOR);
    data.extend_from_slice(&config.treasury.to_bytes());
    data.extend_from_slice(&config.fee_rate_bps.to_le_bytes());
    data.push(config.initialized as u8);
    data.extend_from_slice(&config.owner.to_bytes());
    data.extend_from_slice(&config.mint.to_bytes());
    data.push(config.bump);

    assert_eq!(data.len(), GLOBAL_CONFIG_SIZE);
    data
}

/// Serialize RecipientProfile for test account data
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: creator
/// - 1 byte each: bump, vault_bump, vault_authority_bump
pub fn serialize_recipient_profile(
    creator: Pubkey,
    bump: u8,
    vault_bump: u8,
    vault_authority_bump: u8,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(RECIPIENT_PROFILE_SIZE);
    data.extend_from_slice(&RECIPIENT_PROFILE_DISCRIMINATOR);
    data.extend_from_slice(&creator.to_bytes());
    data.push(bump);
    data.push(vault_bump);
    data.push(vault_authority_bump);

    assert_eq!(data.len(), RECIPIENT_PROFILE_SIZE);
    data
}

/// Read fields back out of GlobalConfig account data
pub fn deserialize_global_config(data: &[u8]) -> GlobalConfigData {
    assert_eq!(&data[0..8], &GLOBAL_CONFIG_DISCRIMINATOR);
    GlobalConfigData {
        treasury: Pubkey::try_from(&data[8..40]).unwrap(),
        fee_rate_bps: u16::from_le_bytes([data[40], data[41]]),
        initialized: data[42] == 1,
        owner: Pubkey::try_from(&data[43..75]).unwrap(),
        mint: Pubkey::try_from(&data[75..107]).unwrap(),
        bump: data[107],
    }
}
