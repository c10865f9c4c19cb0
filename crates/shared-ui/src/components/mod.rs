// Primitive controls
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod skeleton;
pub mod textarea;

// Composites built on the primitives above
pub mod form_field;
pub mod submit_button;

pub use form::*;
pub use form_field::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use skeleton::*;
pub use submit_button::*;
pub use textarea::*;
