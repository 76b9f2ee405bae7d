//!
//! Key container covering both private and public-only DSA keys
//!

use crate::{
    Components, Error, KeyAttributes, KeySize, RandomInt, Result, Signature, SigningKey,
    VerifyingKey,
};
use signature::{
    hazmat::{PrehashVerifier, RandomizedPrehashSigner},
    rand_core::CryptoRngCore,
};

/// A DSA key holding either a full key pair or only the public half.
///
/// Keys are immutable once built. Signing only borrows the key and consumes
/// randomness from the caller's generator, so a single key can be shared
/// between threads for signing and verifying without synchronization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum DsaKey {
    /// Key pair able to sign and verify
    Private(SigningKey),

    /// Public key, only able to verify
    Public(VerifyingKey),
}

impl DsaKey {
    /// Generate a new key pair of `size_bits` bits with fresh domain parameters
    /// using the operating system's random number generator
    ///
    /// See [`DsaKey::generate_with_rng`].
    #[cfg(feature = "getrandom")]
    pub fn generate(size_bits: u32) -> Result<Self> {
        Self::generate_with_rng(&mut rand_core::OsRng, size_bits)
    }

    /// Generate a new key pair of `size_bits` bits with fresh domain parameters
    ///
    /// `size_bits` has to be 1024, 2048 or 3072, otherwise
    /// [`Error::UnsupportedKeySize`] is returned.
    pub fn generate_with_rng<R: RandomInt + ?Sized>(rng: &mut R, size_bits: u32) -> Result<Self> {
        let size = KeySize::from_bits(size_bits)?;
        tracing::debug!(l = size.l(), n = size.n(), "generating DSA domain parameters");

        let components = Components::generate(rng, size)?;
        Self::generate_from_components(rng, components)
    }

    /// Generate a new key pair over existing domain parameters
    pub fn generate_from_components<R: RandomInt + ?Sized>(
        rng: &mut R,
        components: Components,
    ) -> Result<Self> {
        SigningKey::generate(rng, components).map(Self::Private)
    }

    /// Rebuild a key from its numeric fields
    ///
    /// All domain parameter checks run, and when x is present it has to match y.
    pub fn from_attributes(attributes: &KeyAttributes) -> Result<Self> {
        match attributes.to_signing_key()? {
            Some(signing_key) => Ok(Self::Private(signing_key)),
            None => attributes.to_verifying_key().map(Self::Public),
        }
    }

    /// Export every numeric field, including x
    ///
    /// Fails with [`Error::MissingPrivateKey`] on a public key.
    pub fn attributes(&self) -> Result<KeyAttributes> {
        self.signing_key().map(KeyAttributes::from)
    }

    /// Export the public fields (p, q, g and y)
    #[must_use]
    pub fn public_attributes(&self) -> KeyAttributes {
        KeyAttributes::from(self.verifying_key())
    }

    /// Whether this key holds the private component
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }

    /// Key size in bits (bit length of p)
    #[must_use]
    pub fn size(&self) -> u32 {
        self.verifying_key().size()
    }

    /// DSA common components
    pub fn components(&self) -> &Components {
        self.verifying_key().components()
    }

    /// Public half of this key
    pub fn verifying_key(&self) -> &VerifyingKey {
        match self {
            Self::Private(signing_key) => signing_key.verifying_key(),
            Self::Public(verifying_key) => verifying_key,
        }
    }

    /// Private half of this key
    pub fn signing_key(&self) -> Result<&SigningKey> {
        match self {
            Self::Private(signing_key) => Ok(signing_key),
            Self::Public(_) => Err(Error::MissingPrivateKey),
        }
    }

    /// Public-only copy of this key
    pub fn to_public(&self) -> Self {
        Self::Public(self.verifying_key().clone())
    }

    /// Sign a message digest using the operating system's random number generator
    ///
    /// See [`DsaKey::sign_with_rng`].
    #[cfg(feature = "getrandom")]
    pub fn sign(&self, digest: &[u8]) -> Result<Signature> {
        self.sign_with_rng(&mut rand_core::OsRng, digest)
    }

    /// Sign a message digest
    ///
    /// Fails with [`Error::MissingPrivateKey`] on a public key and with
    /// [`Error::DigestLength`] if the digest isn't exactly as long as q.
    pub fn sign_with_rng<R: RandomInt + ?Sized>(
        &self,
        rng: &mut R,
        digest: &[u8],
    ) -> Result<Signature> {
        self.signing_key()?.try_sign_prehash_with_rng(rng, digest)
    }

    /// Verify a signature over a message digest
    ///
    /// Returns `Ok(false)` for a signature that doesn't match, including one whose
    /// parts fall outside `(0, q)`. Fails only with [`Error::DigestLength`].
    pub fn verify(&self, digest: &[u8], signature: &Signature) -> Result<bool> {
        self.verifying_key().verify_prehash_bool(digest, signature)
    }
}

impl From<SigningKey> for DsaKey {
    fn from(signing_key: SigningKey) -> Self {
        Self::Private(signing_key)
    }
}

impl From<VerifyingKey> for DsaKey {
    fn from(verifying_key: VerifyingKey) -> Self {
        Self::Public(verifying_key)
    }
}

impl RandomizedPrehashSigner<Signature> for DsaKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_with_rng(rng, prehash)?)
    }
}

impl PrehashVerifier<Signature> for DsaKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verifying_key().verify_prehash(prehash, signature)
    }
}
