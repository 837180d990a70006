// Re-export all types at one level so consumers never deal with the
// internal module split.

mod attachment;
mod config;
mod style;

pub use self::attachment::*;
pub use self::config::*;
pub use self::style::*;
