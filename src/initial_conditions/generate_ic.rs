use crate::domain::*;
use crate::initial_conditions::normal_impulse::*;
use crate::initial_conditions::rand::*;
use crate::error::*;
use crate::initial_conditions::*;

pub fn generate_ic(len: usize, ic_type: ICType) -> SmoothResult<Sequence> {
    ic_type.check()?;
    let mut sequence = Sequence::new(len);
    match ic_type {
        // Special case, sequences start as zeros
        ICType::Zero => {}
        ICType::Rand { max_val, seed } => {
            rand_ic(&mut sequence, max_val, seed);
        }
        ICType::Impulse { variance } => {
            normal_ic(&mut sequence, variance);
        }
    }
    Ok(sequence)
}
