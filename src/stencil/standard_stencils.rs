use crate::stencil::*;

/// Mean of the two neighbors, the cell's own value is ignored.
/// This converges differently than `three_point_average`.
/// Evaluated as `(left + right) / 2`, not as a weighted sum.
pub fn skip_self_average() -> Stencil<2> {
    Stencil::exact([-1, 1], |args: &[f64; 2]| {
        let left = args[0];
        let right = args[1];
        (left + right) / 2.0
    })
}

pub fn three_point_average() -> Stencil<3> {
    Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        (left + middle + right) / 3.0
    })
}
