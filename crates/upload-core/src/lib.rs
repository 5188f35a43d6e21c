pub mod domain;
pub mod error;
pub mod sequence;

pub use domain::*;
pub use error::CoreError;
pub use sequence::{foobar, foobar_terms};
