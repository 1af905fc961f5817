use crate::domain::*;
use crate::error::*;
use std::collections::BTreeSet;

/// A position whose value is held fixed for the whole run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pin {
    pub position: usize,
    pub value: f64,
}

impl Pin {
    pub fn new(position: usize, value: f64) -> Self {
        Pin { position, value }
    }
}

impl From<(usize, f64)> for Pin {
    fn from((position, value): (usize, f64)) -> Self {
        Pin { position, value }
    }
}

impl std::fmt::Display for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.position, self.value)
    }
}

/// Distinct pins with finite values, kept in the order given.
/// Whether positions fit a given sequence is checked
/// by the smoother, since a pin set doesn't know `n`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinSet {
    pins: Vec<Pin>,
}

impl PinSet {
    pub fn new<I: IntoIterator<Item = (usize, f64)>>(
        pins: I,
    ) -> SmoothResult<Self> {
        let pins: Vec<Pin> = pins.into_iter().map(Pin::from).collect();
        let mut seen = BTreeSet::new();
        for pin in &pins {
            if !pin.value.is_finite() {
                return Err(SmoothError::NonFinitePin {
                    position: pin.position,
                    value: pin.value,
                });
            }
            if !seen.insert(pin.position) {
                return Err(SmoothError::DuplicatePin {
                    position: pin.position,
                });
            }
        }
        Ok(PinSet { pins })
    }

    /// Both ends and the middle held at `value`.
    /// For tiny sequences these coincide, so positions are merged.
    pub fn ends_and_middle(len: usize, value: f64) -> SmoothResult<Self> {
        let positions: BTreeSet<usize> = match len {
            0 => BTreeSet::new(),
            _ => [0, len >> 1, len - 1].into(),
        };
        PinSet::new(positions.into_iter().map(|p| (p, value)))
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.pins
            .iter()
            .find(|pin| pin.position == position)
            .map(|pin| pin.value)
    }

    /// Fails fast if these pins can't be applied to a sequence of `len`.
    pub fn check_fits(&self, len: usize) -> SmoothResult<()> {
        if self.pins.len() > len {
            return Err(SmoothError::TooManyPins {
                pins: self.pins.len(),
                len,
            });
        }
        match self.pins.iter().find(|pin| pin.position >= len) {
            Some(pin) => Err(SmoothError::PinOutOfRange {
                position: pin.position,
                len,
            }),
            None => Ok(()),
        }
    }

    /// Overwrite every pinned position, nothing else is touched.
    #[track_caller]
    pub fn apply(&self, sequence: &mut Sequence) {
        for pin in &self.pins {
            sequence.set(pin.position, pin.value);
        }
    }
}

impl std::fmt::Display for PinSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pin) in self.pins.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{pin}")?;
        }
        Ok(())
    }
}
