/// Stencil arguments and weights, one entry per neighbor.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

/// Signed distance from a cell to one of its neighbors.
pub type Offset = i32;

/// How far a stencil looks to the (left, right) of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reach {
    pub left: usize,
    pub right: usize,
}

impl Reach {
    /// Cells closer than `left` to the start, or `right` to the end,
    /// can't see all of their neighbors.
    pub fn is_interior(&self, index: usize, len: usize) -> bool {
        index >= self.left && index + self.right < len
    }
}
