//!
//! Module containing the definition of the common components container
//!

use crate::{Error, RandomInt, Result, size::KeySize, two};
use num_bigint::{BigUint, prime::probably_prime};
use num_traits::{One, Zero};

/// Number of Miller-Rabin rounds run on p and q.
///
/// Largest recommendation from Table C.1 of FIPS 186-4.
pub(crate) const MR_ROUNDS: usize = 64;

/// The common components of an DSA keypair
///
/// (the prime p, quotient q and generator g)
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd)]
#[must_use]
pub struct Components {
    /// Prime p
    p: BigUint,

    /// Quotient q
    q: BigUint,

    /// Generator g
    g: BigUint,
}

impl Components {
    /// Construct the common components container from its inner values (p, q and g)
    ///
    /// The values get checked: p and q have to be prime, q has to divide p - 1
    /// and g has to generate the subgroup of order q.
    pub fn from_components(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        let components = Self { p, q, g };
        components.check()?;
        Ok(components)
    }

    /// Generate a new pair of common components
    pub fn generate<R: RandomInt + ?Sized>(rng: &mut R, size: KeySize) -> Result<Self> {
        let (p, q, g) = crate::generate::common_components(rng, size)?;
        Ok(Self { p, q, g })
    }

    /// DSA prime p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// DSA quotient q
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// DSA generator g
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Byte length a digest signed under these components must have
    #[must_use]
    pub fn digest_len(&self) -> usize {
        self.q.bits() / 8
    }

    /// Check whether the components are valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    fn check(&self) -> Result<()> {
        let (p, q, g) = (self.p(), self.q(), self.g());

        if *p < two() || *q < two() {
            return reject("p and q must be at least 2");
        }
        if q.bits() % 8 != 0 || q.bits() >= p.bits() {
            return reject("bit length of q must be a multiple of 8 and below that of p");
        }
        if *g <= BigUint::one() || g >= p {
            return reject("g must lie in (1, p)");
        }
        if !((p - BigUint::one()) % q).is_zero() {
            return reject("q does not divide p - 1");
        }
        if !g.modpow(q, p).is_one() {
            return reject("g does not generate a subgroup of order q");
        }
        if !probably_prime(q, MR_ROUNDS) {
            return reject("q is not prime");
        }
        if !probably_prime(p, MR_ROUNDS) {
            return reject("p is not prime");
        }

        Ok(())
    }
}

fn reject(reason: &'static str) -> Result<()> {
    tracing::debug!(reason, "rejected DSA domain parameters");
    Err(Error::Validation(reason))
}
