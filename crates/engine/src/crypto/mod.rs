pub mod secret;
pub mod signer;
