//! Subcommand implementations.

pub mod play;
pub mod simulate;

pub use play::Input;
pub use simulate::Tally;
