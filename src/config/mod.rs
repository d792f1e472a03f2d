//! Project configuration loaded from `.ecv.toml`.

pub mod settings;

pub use settings::Settings;
