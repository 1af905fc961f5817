mod generate_ic;
pub mod normal_impulse;
pub mod rand;
use crate::error::*;
use clap::ValueEnum;
pub use generate_ic::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ICType {
    #[default]
    Zero,
    Rand {
        max_val: f64,
        seed: Option<u64>,
    },
    Impulse {
        variance: f64,
    },
}

impl ICType {
    /// Rand needs a positive bound, impulse a positive variance.
    pub fn check(&self) -> SmoothResult<()> {
        match *self {
            ICType::Zero => Ok(()),
            ICType::Rand { max_val, .. } => check_dial("rand", max_val),
            ICType::Impulse { variance } => check_dial("impulse", variance),
        }
    }
}

fn check_dial(ic: &'static str, dial: f64) -> SmoothResult<()> {
    if dial > 0.0 && dial.is_finite() {
        Ok(())
    } else {
        Err(SmoothError::InvalidDial { ic, dial })
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum ClapICType {
    #[default]
    Zero,
    Rand,
    Impulse,
}

impl ClapICType {
    pub fn to_ic_type(
        &self,
        dial: f64,
        seed: Option<u64>,
    ) -> SmoothResult<ICType> {
        let ic_type = match self {
            ClapICType::Zero => ICType::Zero,
            ClapICType::Rand => ICType::Rand {
                max_val: dial,
                seed,
            },
            ClapICType::Impulse => ICType::Impulse { variance: dial },
        };
        ic_type.check()?;
        Ok(ic_type)
    }
}
