//!
//! Module containing the definition of the private key container
//!

use crate::{Components, Error, RandomInt, Result, Signature, VerifyingKey};
use core::fmt;
use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use signature::{
    RandomizedDigestSigner, RandomizedSigner, hazmat::RandomizedPrehashSigner,
    rand_core::CryptoRngCore,
};
use zeroize::Zeroizing;

/// DSA private key.
///
/// Every signature draws a fresh per-message secret from the supplied random
/// number generator; there is no deterministic signing mode.
#[derive(Clone, Eq, PartialEq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    verifying_key: VerifyingKey,

    /// Private component x
    x: Zeroizing<BigUint>,
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Construct a new private key from the public key and private component
    ///
    /// x has to lie in `[1, q - 1]` and the public component has to equal `g^x mod p`.
    pub fn from_components(verifying_key: VerifyingKey, x: BigUint) -> Result<Self> {
        let x = Zeroizing::new(x);
        let components = verifying_key.components();

        if x.is_zero() || *x >= *components.q() {
            return Err(Error::Validation("x must lie in [1, q - 1]"));
        }

        if crate::generate::public_component(components, &x) != *verifying_key.y() {
            tracing::debug!("rejected DSA key pair with mismatching public component");
            return Err(Error::Validation("y does not equal g^x mod p"));
        }

        Ok(Self { verifying_key, x })
    }

    /// Generate a new DSA keypair over the given components
    #[inline]
    pub fn generate<R: RandomInt + ?Sized>(rng: &mut R, components: Components) -> Result<Self> {
        crate::generate::keypair(rng, components)
    }

    /// DSA public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// DSA private component
    ///
    /// If you decide to clone this value, please consider using [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the memory after you're done using the clone
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Sign a message digest
    ///
    /// The digest must be exactly as long as q. A fresh per-message secret is drawn
    /// from `rng` for every attempt; attempts yielding `r = 0` or `s = 0` are repeated.
    pub fn try_sign_prehash_with_rng<R: RandomInt + ?Sized>(
        &self,
        rng: &mut R,
        prehash: &[u8],
    ) -> Result<Signature> {
        let components = self.verifying_key().components();
        let expected = components.digest_len();
        if prehash.len() != expected {
            return Err(Error::DigestLength {
                expected,
                got: prehash.len(),
            });
        }

        loop {
            let ks = crate::generate::secret_number(rng, components)?;
            if let Some(signature) = self.sign_prehashed(ks, prehash) {
                return Ok(signature);
            }

            tracing::trace!("r or s came out as zero, retrying with a fresh secret number");
        }
    }

    /// Sign some pre-hashed data
    fn sign_prehashed(
        &self,
        (k, inv_k): (Zeroizing<BigUint>, Zeroizing<BigUint>),
        hash: &[u8],
    ) -> Option<Signature> {
        let components = self.verifying_key().components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let x = self.x();

        let r = g.modpow(&k, p) % q;
        let z = BigUint::from_bytes_be(hash);

        let s = (&*inv_k * (z + x * &r)) % q;

        // r or s might be 0 (very unlikely but possible)
        Signature::from_components(r, s)
    }
}

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.try_sign_prehash_with_rng(rng, prehash)?)
    }
}

impl<D> RandomizedDigestSigner<D, Signature> for SigningKey
where
    D: Digest,
{
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: D,
    ) -> signature::Result<Signature> {
        let hash = digest.finalize();
        Ok(self.try_sign_prehash_with_rng(rng, &hash)?)
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        let hash = crate::hash::prehash(self.verifying_key().components(), &[msg])?;
        Ok(self.try_sign_prehash_with_rng(rng, &hash)?)
    }
}

#[cfg(feature = "getrandom")]
impl signature::Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        self.try_sign_with_rng(&mut rand_core::OsRng, msg)
    }
}
