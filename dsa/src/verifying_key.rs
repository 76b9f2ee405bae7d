//!
//! Module containing the definition of the public key container
//!

use crate::{Components, Error, Result, Signature, two};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::One;
use signature::{DigestVerifier, Verifier, hazmat::PrehashVerifier};

/// DSA public key.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd)]
#[must_use]
pub struct VerifyingKey {
    /// common components
    components: Components,

    /// Public component y
    y: BigUint,
}

impl VerifyingKey {
    /// Construct a new public key from the common components and the public component
    ///
    /// y has to lie in `(1, p)` and belong to the subgroup of order q.
    pub fn from_components(components: Components, y: BigUint) -> Result<Self> {
        let (p, q) = (components.p(), components.q());

        if y < two() || y >= *p || !y.modpow(q, p).is_one() {
            tracing::debug!("rejected DSA public component");
            return Err(Error::Validation("y is not an element of the subgroup of order q"));
        }

        Ok(Self { components, y })
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// Key size in bits (bit length of p)
    #[must_use]
    pub fn size(&self) -> u32 {
        self.components.p().bits() as u32
    }

    /// Verify a signature over a message digest
    ///
    /// The digest must be exactly as long as q. A well-formed signature that doesn't
    /// match yields `Ok(false)`; only a digest of the wrong length is an error.
    pub fn verify_prehash_bool(&self, prehash: &[u8], signature: &Signature) -> Result<bool> {
        let expected = self.components.digest_len();
        if prehash.len() != expected {
            return Err(Error::DigestLength {
                expected,
                got: prehash.len(),
            });
        }

        Ok(self.verify_prehashed(prehash, signature))
    }

    /// Verify some prehashed data of the correct length
    fn verify_prehashed(&self, hash: &[u8], signature: &Signature) -> bool {
        let components = self.components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let (r, s) = (signature.r(), signature.s());
        let y = self.y();

        if !signature.r_s_valid(q) {
            return false;
        }

        let w = crate::invert_mod_prime(s, q);
        let z = BigUint::from_bytes_be(hash);

        let u1 = (&z * &w) % q;
        let u2 = (r * &w) % q;
        let v = (g.modpow(&u1, p) * y.modpow(&u2, p) % p) % q;

        v == *r
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        let hash = crate::hash::prehash(&self.components, &[msg])?;
        self.verify_prehash(&hash, signature)
    }
}

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_prehash_bool(prehash, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    fn verify_digest(&self, digest: D, signature: &Signature) -> signature::Result<()> {
        let hash = digest.finalize();
        self.verify_prehash(&hash, signature)
    }
}
