pub mod config;
pub mod error;
pub mod intake;

pub use config::*;
pub use error::*;
pub use intake::*;
