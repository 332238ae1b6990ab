//! Configuration system for Kizuna.
//! TOML-based, 3-layer resolution: env > project `kizuna.toml` > defaults.

pub mod build_config;
pub mod kizuna_config;
pub mod weights_config;

pub use build_config::BuildConfig;
pub use kizuna_config::KizunaConfig;
pub use weights_config::WeightsConfig;
