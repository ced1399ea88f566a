//! Command implementations

pub mod check;
pub mod discover;
pub mod play;

pub use check::{CheckOutcome, check_words};
pub use discover::{DiscoverResult, run_discover};
pub use play::run_play;
