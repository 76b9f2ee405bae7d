//!
//! Module containing the definition of the Signature container
//!

use alloc::{boxed::Box, vec::Vec};
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer,
    asn1::UintRef,
};
use num_bigint::BigUint;
use num_traits::Zero;
use signature::SignatureEncoding;

/// Container of the DSA signature
///
/// Encodes as the DER structure `SEQUENCE { r INTEGER, s INTEGER }`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd)]
#[must_use]
pub struct Signature {
    /// Signature part r
    r: BigUint,

    /// Signature part s
    s: BigUint,
}

impl Signature {
    /// Create a new Signature container from its components
    ///
    /// Returns `None` if either part is zero. The upper bound `q` is only known
    /// to a key, so it is checked at verification time.
    pub fn from_components(r: BigUint, s: BigUint) -> Option<Self> {
        if r.is_zero() || s.is_zero() {
            return None;
        }

        Some(Self { r, s })
    }

    /// Signature part r
    #[must_use]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s
    #[must_use]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Check whether both parts lie in `(0, q)`
    pub(crate) fn r_s_valid(&self, q: &BigUint) -> bool {
        self.r < *q && self.s < *q
    }
}

impl<'a> DecodeValue<'a> for Signature {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let r = UintRef::decode(reader)?;
            let s = UintRef::decode(reader)?;

            let r = BigUint::from_bytes_be(r.as_bytes());
            let s = BigUint::from_bytes_be(s.as_bytes());

            Self::from_components(r, s).ok_or_else(|| der::Tag::Integer.value_error())
        })
    }
}

impl EncodeValue for Signature {
    fn value_len(&self) -> der::Result<Length> {
        let r_bytes = self.r.to_bytes_be();
        let s_bytes = self.s.to_bytes_be();

        UintRef::new(&r_bytes)?.encoded_len()? + UintRef::new(&s_bytes)?.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        let r_bytes = self.r.to_bytes_be();
        let s_bytes = self.s.to_bytes_be();

        UintRef::new(&r_bytes)?.encode(writer)?;
        UintRef::new(&s_bytes)?.encode(writer)
    }
}

impl Sequence<'_> for Signature {}

impl From<Signature> for Box<[u8]> {
    fn from(sig: Signature) -> Box<[u8]> {
        sig.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Box<[u8]>;

    fn to_bytes(&self) -> Box<[u8]> {
        SignatureEncoding::to_vec(self).into_boxed_slice()
    }

    fn to_vec(&self) -> Vec<u8> {
        Encode::to_der(self).expect("DER encoding error")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Self::from_der(bytes).map_err(|_| signature::Error::new())
    }
}
