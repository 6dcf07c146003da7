pub mod commands;

pub use commands::{Cli, Format, Mode};
