//! One module per subcommand, each exposing an `execute` function.

pub mod algorithms;
pub mod completions;
pub mod hash;
pub mod inspect;
pub mod verify;
pub mod version;
