#![allow(ambiguous_glob_reexports)]

pub mod admin_withdraw_fees;
pub mod initialize;
pub mod register_recipient;
pub mod tip;
pub mod withdraw;

pub use admin_withdraw_fees::*;
pub use initialize::*;
pub use register_recipient::*;
pub use tip::*;
pub use withdraw::*;
