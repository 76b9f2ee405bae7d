//!
//! Structured, format-agnostic representation of DSA key material
//!

use crate::{Components, Result, SigningKey, VerifyingKey};
use core::fmt;
use num_bigint::BigUint;
use zeroize::Zeroize;

/// Numeric fields of a DSA key: p, q, g, y and, for private keys, x.
///
/// This is what the surrounding key management system persists. Turning it back
/// into a key re-runs every consistency check. The struct holds x in plain
/// memory; call [`Zeroize::zeroize`] once it's been persisted.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyAttributes {
    /// Prime p
    #[cfg_attr(feature = "serde", serde(with = "crate::attributes::base64_uint"))]
    pub p: BigUint,

    /// Quotient q
    #[cfg_attr(feature = "serde", serde(with = "crate::attributes::base64_uint"))]
    pub q: BigUint,

    /// Generator g
    #[cfg_attr(feature = "serde", serde(with = "crate::attributes::base64_uint"))]
    pub g: BigUint,

    /// Public component y
    #[cfg_attr(feature = "serde", serde(with = "crate::attributes::base64_uint"))]
    pub y: BigUint,

    /// Private component x, absent for public keys
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::attributes::base64_uint_opt"
        )
    )]
    pub x: Option<BigUint>,
}

impl KeyAttributes {
    /// Whether the private component is present
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.x.is_some()
    }

    /// Build the public half
    pub fn to_verifying_key(&self) -> Result<VerifyingKey> {
        let components =
            Components::from_components(self.p.clone(), self.q.clone(), self.g.clone())?;
        VerifyingKey::from_components(components, self.y.clone())
    }

    /// Build the private key, if x is present
    pub fn to_signing_key(&self) -> Result<Option<SigningKey>> {
        let verifying_key = self.to_verifying_key()?;

        self.x
            .clone()
            .map(|x| SigningKey::from_components(verifying_key, x))
            .transpose()
    }
}

impl From<&VerifyingKey> for KeyAttributes {
    fn from(key: &VerifyingKey) -> Self {
        let components = key.components();

        Self {
            p: components.p().clone(),
            q: components.q().clone(),
            g: components.g().clone(),
            y: key.y().clone(),
            x: None,
        }
    }
}

impl From<&SigningKey> for KeyAttributes {
    fn from(key: &SigningKey) -> Self {
        let components = key.verifying_key().components();

        Self {
            p: components.p().clone(),
            q: components.q().clone(),
            g: components.g().clone(),
            y: key.verifying_key().y().clone(),
            x: Some(key.x().clone()),
        }
    }
}

impl fmt::Debug for KeyAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAttributes")
            .field("p", &self.p)
            .field("q", &self.q)
            .field("g", &self.g)
            .field("y", &self.y)
            .field("x", &self.x.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Zeroize for KeyAttributes {
    fn zeroize(&mut self) {
        if let Some(x) = self.x.as_mut() {
            x.zeroize();
        }
    }
}

/// Integers as url-safe, unpadded base64 of their big-endian bytes
#[cfg(feature = "serde")]
pub(crate) mod base64_uint {
    use alloc::string::String;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(crate) fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&URL_SAFE_NO_PAD.encode(value.to_bytes_be()))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        decode(&String::deserialize(deserializer)?)
    }

    pub(super) fn decode<E: Error>(encoded: &str) -> Result<BigUint, E> {
        let bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(E::custom)?;
        Ok(BigUint::from_bytes_be(&bytes))
    }
}

#[cfg(feature = "serde")]
pub(crate) mod base64_uint_opt {
    use alloc::string::String;
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<BigUint>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::base64_uint::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigUint>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| super::base64_uint::decode::<D::Error>(&encoded))
            .transpose()
    }
}
