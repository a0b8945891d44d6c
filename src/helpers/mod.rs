//! Helper functions shared by the template and card renderers

mod date;
mod html;

pub use date::*;
pub use html::*;
