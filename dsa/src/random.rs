//!
//! Source of uniformly distributed random integers
//!

use crate::{Error, Result};
use num_bigint::{BigUint, RandBigInt};
use rand_core::{CryptoRngCore, RngCore};
use zeroize::Zeroize;

/// Source of uniformly distributed, cryptographically secure random integers.
///
/// Every [`CryptoRngCore`] is a `RandomInt` through a blanket implementation.
/// Implementations must be safe to use for secret values: the private
/// component x and every per-message secret k come from here.
pub trait RandomInt {
    /// Draw an integer uniformly from `[low, high)`.
    ///
    /// Fails with [`Error::Entropy`] when the underlying generator fails and
    /// with [`Error::EmptyRange`] if `low >= high`.
    fn random_int(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandomInt for R {
    fn random_int(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint> {
        if low >= high {
            return Err(Error::EmptyRange);
        }

        let mut rng = Fallible::new(self);
        let mut value = rng.gen_biguint_range(low, high);

        if let Some(error) = rng.error {
            value.zeroize();
            return Err(error.into());
        }

        Ok(value)
    }
}

/// Generator adapter that remembers the first failure of the inner generator
///
/// `RandBigInt` only knows the infallible `fill_bytes`. After a failure every
/// further request is answered with zeros, so sampling still terminates and the
/// caller discards the result.
struct Fallible<'a, R: ?Sized> {
    inner: &'a mut R,
    error: Option<rand_core::Error>,
}

impl<'a, R: RngCore + ?Sized> Fallible<'a, R> {
    fn new(inner: &'a mut R) -> Self {
        Self { inner, error: None }
    }
}

impl<R: RngCore + ?Sized> RngCore for Fallible<'_, R> {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.error.is_some() {
            dest.zeroize();
            return;
        }

        if let Err(error) = self.inner.try_fill_bytes(dest) {
            dest.zeroize();
            self.error = Some(error);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
