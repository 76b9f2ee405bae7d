//!
//! Generate a per-message secret number
//!

use crate::{Components, RandomInt, Result};
use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

/// Generate a per-message secret number k according to Appendix B.2
///
/// A fresh k is drawn on every call. It is never cached nor derived from
/// the message, since two signatures sharing k reveal the private component.
///
/// # Returns
///
/// Secret number k and its modular multiplicative inverse with q
#[inline]
pub(crate) fn secret_number<R: RandomInt + ?Sized>(
    rng: &mut R,
    components: &Components,
) -> Result<(Zeroizing<BigUint>, Zeroizing<BigUint>)> {
    let q = components.q();

    let k = Zeroizing::new(rng.random_int(&BigUint::one(), q)?);
    let inv_k = Zeroizing::new(crate::invert_mod_prime(&k, q));

    Ok((k, inv_k))
}
