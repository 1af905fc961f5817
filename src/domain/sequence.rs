use crate::error::*;

/// Fixed length buffer of values being smoothed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    buffer: Box<[f64]>,
}

impl Sequence {
    /// Sequence of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    pub fn filled(len: usize, value: f64) -> Self {
        Sequence {
            buffer: vec![value; len].into_boxed_slice(),
        }
    }

    pub fn from_fn<F: FnMut(usize) -> f64>(len: usize, f: F) -> Self {
        Sequence {
            buffer: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    #[track_caller]
    pub fn view(&self, index: usize) -> f64 {
        debug_assert!(
            index < self.len(),
            "{} is outside a sequence of length {}",
            index,
            self.len()
        );
        self.buffer[index]
    }

    #[track_caller]
    pub fn set(&mut self, index: usize, value: f64) {
        debug_assert!(
            index < self.len(),
            "{} is outside a sequence of length {}",
            index,
            self.len()
        );
        self.buffer[index] = value;
    }

    pub fn set_values<F: FnMut(usize) -> f64>(&mut self, mut f: F) {
        self.buffer
            .iter_mut()
            .enumerate()
            .for_each(|(i, value_mut)| *value_mut = f(i));
    }

    /// First non-finite value, if any.
    pub fn check_finite(&self) -> SmoothResult<()> {
        match self.buffer.iter().position(|v| !v.is_finite()) {
            Some(position) => Err(SmoothError::NonFiniteValue {
                position,
                value: self.buffer[position],
            }),
            None => Ok(()),
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.buffer.into_vec()
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Sequence {
            buffer: values.into_boxed_slice(),
        }
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.buffer.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
