//!
//! Message digests matching the size of q
//!

use crate::{Components, Error, Result};
use alloc::vec::Vec;
use digest::Digest;
use sha1::Sha1;
use sha2::{Sha224, Sha256};

/// Hash a (possibly multipart) message with the digest whose output length equals
/// the bit length of q
///
/// N = 160 uses SHA-1, N = 224 uses SHA-224 and N = 256 uses SHA-256.
pub(crate) fn prehash(components: &Components, msg: &[&[u8]]) -> Result<Vec<u8>> {
    match components.digest_len() {
        20 => Ok(digest_parts::<Sha1>(msg)),
        28 => Ok(digest_parts::<Sha224>(msg)),
        32 => Ok(digest_parts::<Sha256>(msg)),
        _ => Err(Error::Validation("no standard digest matches the size of q")),
    }
}

fn digest_parts<D: Digest>(msg: &[&[u8]]) -> Vec<u8> {
    let mut digest = D::new();
    msg.iter().for_each(|part| digest.update(part));
    digest.finalize().to_vec()
}
