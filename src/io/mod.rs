/// Command-line interface
pub mod cli;
/// Constants, defaults and the piece palette
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// JSON persistence of tilings
pub mod export;
/// PNG rendering of tilings
pub mod image;
/// Search progress display
pub mod progress;
