//!
//! Generate DSA key components
//!

use crate::{
    Components, RandomInt, Result,
    components::MR_ROUNDS,
    generate::{calculate_bounds, generate_prime},
    size::KeySize,
    two,
};
use num_bigint::{BigUint, prime::probably_prime};
use num_traits::One;

/// Generate the common components p, q, and g
///
/// # Returns
///
/// Tuple of three `BigUint`s. Ordered like this `(p, q, g)`
pub(crate) fn common<R: RandomInt + ?Sized>(
    rng: &mut R,
    KeySize { l, n }: KeySize,
) -> Result<(BigUint, BigUint, BigUint)> {
    // Calculate the lower and upper bounds of p
    let (p_min, p_max) = calculate_bounds(l);

    let (p, q) = 'gen_pq: loop {
        let q = generate_prime(n, rng)?;
        let rem = two() * &q;

        // Attempt to find a prime p which has a subgroup of the order q
        for attempt in 0..4 * l {
            let m = rng.random_int(&p_min, &p_max)?;
            let p = &m - (&m % &rem) + BigUint::one();

            if p < p_min {
                continue;
            }

            if probably_prime(&p, MR_ROUNDS) {
                tracing::debug!(l, n, attempt, "found DSA prime modulus");
                break 'gen_pq (p, q);
            }
        }

        tracing::trace!(l, n, "no prime modulus for candidate q, drawing a new one");
    };

    // Generate g using the unverifiable method as defined by Appendix A.2.1
    let e = (&p - BigUint::one()) / &q;
    let mut h = two();
    let g = loop {
        let g = h.modpow(&e, &p);

        if !g.is_one() {
            break g;
        }

        h += BigUint::one();
    };

    Ok((p, q, g))
}

/// Calculate the public component from the common components and the private component
#[inline]
pub(crate) fn public(components: &Components, x: &BigUint) -> BigUint {
    components.g().modpow(x, components.p())
}
