#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod directory;

#[cfg(feature = "server")]
pub mod error_convert;

pub mod api;
