//! Configuration loading (`.passcodec.toml` plus `PASSCODEC_*` overrides).

pub mod settings;

pub use settings::Settings;
