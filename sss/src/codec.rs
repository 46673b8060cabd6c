//! Bidirectional mapping between a short byte string and one field
//! element, shared by share generation and reconstruction.
//!
//! The encoding is big-endian base 256. It is only a bijection on the
//! inputs this module accepts: nonempty, no leading zero byte, at most
//! [`MAX_SECRET_BYTES`] long. Everything else is rejected up front so
//! that `decode(encode(s)) == s` holds without caveats.

use math::prelude::FieldElement;

use crate::error::{Result, ShamirError};
use crate::params::MAX_SECRET_BYTES;

/// Pack `secret` into a single field element.
pub fn encode(secret: &[u8]) -> Result<FieldElement> {
    if secret.is_empty() {
        return Err(ShamirError::EmptySecret);
    }
    if secret[0] == 0 {
        // A leading zero byte survives encoding but not decoding.
        return Err(ShamirError::LeadingZeroByte);
    }
    if secret.len() > MAX_SECRET_BYTES {
        return Err(ShamirError::SecretTooLarge { len: secret.len() });
    }

    let mut value: u64 = 0;
    for &byte in secret {
        value = (value << 8) | u64::from(byte);
    }

    // At most 3 bytes, so value < 2^24 < P: no reduction takes place.
    Ok(FieldElement::new(value as u32))
}

/// Unpack a field element back into the byte string it encodes.
pub fn decode(value: FieldElement) -> Vec<u8> {
    let mut remaining = value.value();
    let mut bytes = Vec::with_capacity(MAX_SECRET_BYTES);

    while remaining > 0 {
        bytes.push((remaining % 256) as u8);
        remaining /= 256;
    }

    bytes.reverse();
    bytes
}
