//! Form rendering module
//!
//! UI components for rendering the intake form:
//! - `field_renderer`: field and checkbox rendering utilities
//! - `intake_form`: the volunteer form view

mod field_renderer;
mod intake_form;

pub use intake_form::draw_intake;
