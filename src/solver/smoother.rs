use crate::domain::*;
use crate::error::*;
use crate::solver::naive;
use crate::stencil::standard_stencils::skip_self_average;
use crate::stencil::*;

/// Relaxes sequences of one fixed length against one pin set.
/// Both are checked once here, so a run that starts never fails.
pub struct Smoother<const NEIGHBORHOOD_SIZE: usize> {
    len: usize,
    pins: PinSet,
    stencil: Stencil<NEIGHBORHOOD_SIZE>,
}

impl Smoother<2> {
    /// Smoother using the skip-self neighbor average.
    pub fn new(len: usize, pins: PinSet) -> SmoothResult<Self> {
        Self::with_stencil(len, pins, skip_self_average())
    }
}

impl<const NEIGHBORHOOD_SIZE: usize> Smoother<NEIGHBORHOOD_SIZE> {
    pub fn with_stencil(
        len: usize,
        pins: PinSet,
        stencil: Stencil<NEIGHBORHOOD_SIZE>,
    ) -> SmoothResult<Self> {
        if len == 0 {
            return Err(SmoothError::EmptySequence);
        }
        pins.check_fits(len)?;
        tracing::debug!(
            len,
            pins = pins.len(),
            neighbors = NEIGHBORHOOD_SIZE,
            "created smoother"
        );
        Ok(Smoother { len, pins, stencil })
    }

    pub fn sequence_len(&self) -> usize {
        self.len
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    pub fn stencil(&self) -> &Stencil<NEIGHBORHOOD_SIZE> {
        &self.stencil
    }

    fn check_len(&self, sequence: &Sequence) -> SmoothResult<()> {
        if sequence.len() != self.len {
            return Err(SmoothError::LengthMismatch {
                expected: self.len,
                got: sequence.len(),
            });
        }
        Ok(())
    }

    pub fn apply_pins(&self, sequence: &mut Sequence) -> SmoothResult<()> {
        self.check_len(sequence)?;
        self.pins.apply(sequence);
        Ok(())
    }

    /// Pin `initial`, then run exactly `iterations` steps.
    pub fn smooth(
        &self,
        initial: Sequence,
        iterations: usize,
    ) -> SmoothResult<Sequence> {
        self.smooth_with(initial, iterations, |_, _| {})
    }

    /// Like `smooth`, but `observer` also sees the pinned input as step 0
    /// and the state after each following step.
    pub fn smooth_with<F>(
        &self,
        initial: Sequence,
        iterations: usize,
        mut observer: F,
    ) -> SmoothResult<Sequence>
    where
        F: FnMut(usize, &Sequence),
    {
        self.check_len(&initial)?;
        initial.check_finite()?;

        let mut input = initial;
        self.pins.apply(&mut input);
        observer(0, &input);

        let mut output = Sequence::new(self.len);
        naive::box_apply(
            &self.stencil,
            &self.pins,
            &mut input,
            &mut output,
            iterations,
            observer,
        );
        tracing::debug!(iterations, "smoothing finished");
        Ok(input)
    }
}
