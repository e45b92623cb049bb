//! Test support: wallet stand-ins and subsystem wiring.

pub mod telemetry;
pub mod wallets;
pub mod wiring;

pub use wallets::TestWallet;
pub use wiring::RegistryDirectory;
