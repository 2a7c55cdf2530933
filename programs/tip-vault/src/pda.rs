//! Deterministic account addresses and the signing capability that lets the
//! program move tokens out of accounts it custodies.

use anchor_lang::prelude::*;

use crate::{
    constants::{GLOBAL_CONFIG_SEED, RECIPIENT_PROFILE_SEED, VAULT_AUTHORITY_SEED, VAULT_SEED},
    errors::ErrorCode,
    ID,
};

/// Account roles with a program-derived address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedRole {
    /// Singleton, no identity input
    GlobalConfig,
    /// Keyed by the recipient wallet
    RecipientProfile,
    /// Keyed by the recipient profile
    Vault,
    /// Keyed by the recipient profile
    VaultAuthority,
}

impl SeedRole {
    pub fn tag(self) -> &'static [u8] {
        match self {
            SeedRole::GlobalConfig => GLOBAL_CONFIG_SEED,
            SeedRole::RecipientProfile => RECIPIENT_PROFILE_SEED,
            SeedRole::Vault => VAULT_SEED,
            SeedRole::VaultAuthority => VAULT_AUTHORITY_SEED,
        }
    }

    fn takes_identity(self) -> bool {
        !matches!(self, SeedRole::GlobalConfig)
    }
}

/// Derives the address for `role`
///
/// `identity` must be empty for the global config and a 32-byte key for
/// every other role. Malformed input is rejected, never defaulted.
pub fn derive_address(role: SeedRole, identity: &[u8]) -> Result<(Pubkey, u8)> {
    if role.takes_identity() {
        require!(identity.len() == 32, ErrorCode::InvalidSeedInput);
        Ok(Pubkey::find_program_address(&[role.tag(), identity], &ID))
    } else {
        require!(identity.is_empty(), ErrorCode::InvalidSeedInput);
        Ok(Pubkey::find_program_address(&[role.tag()], &ID))
    }
}

pub fn global_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], &ID)
}

pub fn recipient_profile_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RECIPIENT_PROFILE_SEED, creator.as_ref()], &ID)
}

pub fn vault_address(recipient_profile: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, recipient_profile.as_ref()], &ID)
}

pub fn vault_authority_address(recipient_profile: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, recipient_profile.as_ref()], &ID)
}

/// Authority to sign as one program-derived address
///
/// Built from the bump Anchor verified for the current instruction and
/// handed explicitly to the transfer helper. It only ever yields the seed
/// tuple it was built from.
pub struct SigningCapability<'a> {
    role: SeedRole,
    anchor: Option<&'a [u8]>,
    bump: [u8; 1],
}

impl<'a> SigningCapability<'a> {
    /// Signs for a recipient's vault
    pub fn vault_authority(recipient_profile: &'a Pubkey, bump: u8) -> Self {
        Self {
            role: SeedRole::VaultAuthority,
            anchor: Some(recipient_profile.as_ref()),
            bump: [bump],
        }
    }

    /// Signs for the treasury vault
    pub fn global_config(bump: u8) -> Self {
        Self {
            role: SeedRole::GlobalConfig,
            anchor: None,
            bump: [bump],
        }
    }

    pub fn role(&self) -> SeedRole {
        self.role
    }

    /// Runs `f` with the signer seeds for this capability
    pub fn with_signer_seeds<R>(&self, f: impl FnOnce(&[&[&[u8]]]) -> R) -> R {
        match self.anchor {
            Some(anchor) => {
                let seeds: [&[u8]; 3] = [self.role.tag(), anchor, &self.bump];
                f(&[&seeds[..]])
            }
            None => {
                let seeds: [&[u8]; 2] = [self.role.tag(), &self.bump];
                f(&[&seeds[..]])
            }
        }
    }
}
