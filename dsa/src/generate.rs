use crate::{RandomInt, Result, components::MR_ROUNDS};
use num_bigint::{BigUint, prime::probably_prime};
use num_traits::One;

mod components;
mod keypair;
mod secret_number;

pub(crate) use self::components::{common as common_components, public as public_component};
pub(crate) use self::keypair::keypair;
pub(crate) use self::secret_number::secret_number;

/// Calculate the upper and lower bounds for generating values like p or q
#[inline]
fn calculate_bounds(size: u32) -> (BigUint, BigUint) {
    let lower = BigUint::one() << (size as usize - 1);
    let upper = BigUint::one() << size as usize;

    (lower, upper)
}

/// Generate a prime number of exactly `bit_length` bits
///
/// Candidates come from [`RandomInt`], so a generator failure ends the search
/// with [`Error::Entropy`](crate::Error::Entropy)
#[inline]
fn generate_prime<R: RandomInt + ?Sized>(bit_length: u32, rng: &mut R) -> Result<BigUint> {
    let (lower, upper) = calculate_bounds(bit_length);

    loop {
        let candidate = rng.random_int(&lower, &upper)? | BigUint::one();

        if probably_prime(&candidate, MR_ROUNDS) {
            return Ok(candidate);
        }
    }
}
