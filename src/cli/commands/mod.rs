//! One module per `ecv` subcommand.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod inspect;
pub mod substitute;
