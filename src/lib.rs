pub mod build_info;
pub mod csv;
pub mod domain;
pub mod error;
pub mod image;
pub mod initial_conditions;
pub mod smooth_example;
pub mod solver;
pub mod stencil;
pub mod util;

pub use domain::{Pin, PinSet, Sequence};
pub use error::{SmoothError, SmoothResult};
pub use solver::Smoother;
