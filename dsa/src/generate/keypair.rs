//!
//! Generate a DSA keypair
//!

use crate::{Components, RandomInt, Result, SigningKey, VerifyingKey, generate::components};
use num_bigint::BigUint;
use num_traits::One;

/// Generate a new keypair
///
/// x is drawn uniformly from `[1, q - 1]` and y is derived as `g^x mod p`.
#[inline]
pub(crate) fn keypair<R: RandomInt + ?Sized>(
    rng: &mut R,
    components: Components,
) -> Result<SigningKey> {
    let x = rng.random_int(&BigUint::one(), components.q())?;
    let y = components::public(&components, &x);

    let verifying_key = VerifyingKey::from_components(components, y)?;
    SigningKey::from_components(verifying_key, x)
}
