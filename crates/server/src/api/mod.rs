mod patient;
pub use patient::*;
