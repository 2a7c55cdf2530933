//! Shared setup for Tip Vault Mollusk tests and benches
//!
//! NOTE: mollusk-svm 0.5.1 with solana-sdk 2.2, so everything comes from
//! solana_sdk::* rather than the split solana_* crates
//!
//! - `accounts`: raw account builders and balance readers
//! - `fixtures`: a deployed protocol and registered recipients
//! - `instructions`: PDA derivation and instruction builders
//! - `serialization`: Borsh layouts of GlobalConfig and RecipientProfile

#![allow(dead_code)]

pub mod serialization;

pub use accounts::*;
pub use errors::*;
pub use fixtures::*;
pub use instructions::*;
pub use serialization::*;

use mollusk_svm::Mollusk;
use mollusk_svm_programs_token::{associated_token, token};

/// Mollusk loaded with tip_vault plus the SPL Token and Associated Token
/// programs every custody path goes through
///
/// The program binary is looked up in `<workspace>/target/deploy` via
/// SBF_OUT_DIR.
pub fn setup_mollusk() -> Mollusk {
    // programs/tip-vault -> workspace root
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    let mut mollusk = Mollusk::new(&instructions::PROGRAM_ID, "tip_vault");
    token::add_program(&mut mollusk);
    associated_token::add_program(&mut mollusk);
    mollusk
}
