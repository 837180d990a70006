#[cfg(feature = "fs")]
pub mod fs;
