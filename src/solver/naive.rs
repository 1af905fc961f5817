use crate::domain::*;
use crate::stencil::*;

/// One Jacobi step from `input` into `output`.
/// Cells within the stencil's reach of an edge are copied,
/// every other cell only sees `input`, never partially updated values.
/// Pins are written last so they always win.
pub fn apply_step<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    pins: &PinSet,
    input: &Sequence,
    output: &mut Sequence,
) {
    profiling::scope!("apply_step");
    debug_assert_eq!(input.len(), output.len());
    let reach = stencil.reach();
    let len = input.len();
    let src = input.buffer();
    for (i, value_mut) in output.buffer_mut().iter_mut().enumerate() {
        *value_mut = if reach.is_interior(i, len) {
            stencil.apply(&stencil.gather(src, i))
        } else {
            src[i]
        };
    }
    pins.apply(output);
}

/// Run exactly `steps` steps, the result ends up in `input`.
/// `observer` sees the state after every step.
pub fn box_apply<const NEIGHBORHOOD_SIZE: usize, F>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    pins: &PinSet,
    input: &mut Sequence,
    output: &mut Sequence,
    steps: usize,
    mut observer: F,
) where
    F: FnMut(usize, &Sequence),
{
    profiling::scope!("box_apply");
    for t in 1..=steps {
        apply_step(stencil, pins, input, output);
        std::mem::swap(input, output);
        tracing::trace!(step = t, "finished step");
        observer(t, input);
    }
}
