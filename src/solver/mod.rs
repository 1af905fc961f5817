pub mod naive;
mod smoother;

pub use naive::*;
pub use smoother::*;
