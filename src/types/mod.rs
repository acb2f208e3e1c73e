//! Shared data structures for advance rate estimation
//!
//! - `ground`: categorical inputs (soil/rock type, TBM type)
//! - `params`: estimation inputs and their validation
//! - `result`: estimation outputs and risk assessment

mod ground;
pub mod params;
mod result;

pub use ground::*;
pub use params::{FieldViolation, TbmParameters, ValidationError};
pub use result::*;
