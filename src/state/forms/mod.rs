//! Form state module

mod field;
mod form_state;
mod validate;

pub use field::*;
pub use form_state::*;
pub use validate::*;
