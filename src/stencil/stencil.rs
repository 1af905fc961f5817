use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zeros();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Stencil operation kept verbatim, see `Stencil::exact`.
pub type Operation<const NEIGHBORHOOD_SIZE: usize> =
    fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64;

/// We view a 1D linear stencil as a combination
/// of neighbor offsets and weights.
/// An offset of 0 means the cell itself is an argument.
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    pub weights: Values<NEIGHBORHOOD_SIZE>,
    pub offsets: [Offset; NEIGHBORHOOD_SIZE],
    operation: Option<Operation<NEIGHBORHOOD_SIZE>>,
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [Offset; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets,
            weights,
            operation: None,
        }
    }

    /// Like `new`, but `apply` evaluates `operation` itself
    /// instead of the weighted sum, so results round exactly
    /// as `operation` does, subnormals and overflow included.
    pub fn exact(
        offsets: [Offset; NEIGHBORHOOD_SIZE],
        operation: Operation<NEIGHBORHOOD_SIZE>,
    ) -> Self {
        Stencil {
            operation: Some(operation),
            ..Self::new(offsets, operation)
        }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[Offset; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    pub fn reach(&self) -> Reach {
        let mut result = Reach::default();
        for neighbor in self.offsets {
            let distance = neighbor.unsigned_abs() as usize;
            if neighbor > 0 {
                result.right = result.right.max(distance);
            } else {
                result.left = result.left.max(distance);
            }
        }
        result
    }

    /// Gather the neighbors of `index` from `input`.
    /// Caller guarantees `index` is interior for this stencil's reach.
    #[track_caller]
    pub fn gather(
        &self,
        input: &[f64],
        index: usize,
    ) -> [f64; NEIGHBORHOOD_SIZE] {
        debug_assert!(self.reach().is_interior(index, input.len()));
        std::array::from_fn(|n| {
            let neighbor = index as i64 + self.offsets[n] as i64;
            input[neighbor as usize]
        })
    }

    pub fn apply(&self, args: &[f64; NEIGHBORHOOD_SIZE]) -> f64 {
        match self.operation {
            Some(operation) => operation(args),
            None => self.weights.component_mul(&Values::from(*args)).sum(),
        }
    }
}
