use crate::{Error, Result};

/// DSA key size
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KeySize {
    /// Bit size of p
    pub(crate) l: u32,

    /// Bit size of q
    pub(crate) n: u32,
}

impl KeySize {
    /// DSA parameter size constant: L = 1024, N = 160
    #[deprecated(
        note = "This size constant has a security strength of under 112 bits per SP 800-57 Part 1 Rev. 5"
    )]
    pub const DSA_1024_160: Self = Self { l: 1024, n: 160 };

    /// DSA parameter size constant: L = 2048, N = 224
    pub const DSA_2048_224: Self = Self { l: 2048, n: 224 };

    /// DSA parameter size constant: L = 2048, N = 256
    pub const DSA_2048_256: Self = Self { l: 2048, n: 256 };

    /// DSA parameter size constant: L = 3072, N = 256
    pub const DSA_3072_256: Self = Self { l: 3072, n: 256 };

    /// Select the parameter size for a modulus of `bits` bits.
    ///
    /// Only 1024, 2048 and 3072 are accepted; they map to N = 160, 256 and 256.
    /// Any other value is rejected rather than rounded.
    #[allow(deprecated)]
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1024 => Ok(Self::DSA_1024_160),
            2048 => Ok(Self::DSA_2048_256),
            3072 => Ok(Self::DSA_3072_256),
            _ => Err(Error::UnsupportedKeySize(bits)),
        }
    }

    /// Bit size of the prime modulus p
    #[must_use]
    pub const fn l(&self) -> u32 {
        self.l
    }

    /// Bit size of the subgroup order q
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }
}
