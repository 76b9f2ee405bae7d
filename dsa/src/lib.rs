#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]

//!
//! # Examples
//!
//! Generate a DSA keypair, sign a digest and verify it
//!
#![cfg_attr(feature = "getrandom", doc = "```no_run")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! # use dsa_key::DsaKey;
//! # use sha2::{Digest, Sha256};
//! # fn main() -> dsa_key::Result<()> {
//! let key = DsaKey::generate(2048)?;
//! let digest = Sha256::digest(b"hello world");
//!
//! let signature = key.sign(&digest)?;
//! assert!(key.verify(&digest, &signature)?);
//! # Ok(())
//! # }
//! ```
//!
//! Rebuild a public key from exported fields
//!
//! ```
//! # use dsa_key::{DsaKey, KeyAttributes};
//! # fn verify_elsewhere(attributes: &KeyAttributes, digest: &[u8], signature: &dsa_key::Signature)
//! #     -> dsa_key::Result<bool> {
//! let key = DsaKey::from_attributes(attributes)?;
//! assert!(!key.is_private());
//!
//! key.verify(digest, signature)
//! # }
//! ```
//!

extern crate alloc;

pub use crate::{
    attributes::KeyAttributes,
    components::Components,
    error::{Error, ErrorKind, Result},
    key::DsaKey,
    random::RandomInt,
    sig::Signature,
    signing_key::SigningKey,
    size::KeySize,
    verifying_key::VerifyingKey,
};

pub use num_bigint::BigUint;
pub use signature;

mod attributes;
mod components;
mod error;
mod generate;
mod hash;
mod key;
mod random;
mod sig;
mod signing_key;
mod size;
mod verifying_key;

/// Returns a `BigUint` with the value 2
#[inline]
fn two() -> BigUint {
    BigUint::from(2_u8)
}

/// Modular multiplicative inverse of `a` modulo the prime `q`
///
/// Computed as `a^(q - 2) mod q` (Fermat). `a` must not be a multiple of `q`.
#[inline]
fn invert_mod_prime(a: &BigUint, q: &BigUint) -> BigUint {
    a.modpow(&(q - two()), q)
}
