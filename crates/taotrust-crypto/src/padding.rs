//! EMSA-PKCS1-v1_5 block verification
//!
//! The recovered signature block must match the fixed layout
//! `00 01 FF..FF 00 DigestInfo digest` byte for byte. The structure bytes
//! are checked exactly; the trailing digest bytes are compared in constant
//! time so a near-miss digest is indistinguishable from a far-off one.

use subtle::ConstantTimeEq;

/// DER-encoded DigestInfo prefix for SHA-256 (RFC 8017, section 9.2)
pub(crate) const SHA256_DIGEST_INFO: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// SHA-256 digest length in bytes
pub(crate) const DIGEST_SIZE: usize = 32;

// leading 00 01, trailing 00 separator, at least eight FF bytes
const MIN_OVERHEAD: usize = 11;

/// Check a recovered block against the expected encoding of `digest`
pub(crate) fn emsa_pkcs1_v15_check(digest: &[u8; DIGEST_SIZE], block: &[u8]) -> bool {
    let k = block.len();
    let t_len = SHA256_DIGEST_INFO.len() + DIGEST_SIZE;
    if k < t_len + MIN_OVERHEAD {
        return false;
    }
    if block[0] != 0x00 || block[1] != 0x01 {
        return false;
    }
    let ps_len = k - 3 - t_len;
    if block[2..2 + ps_len].iter().any(|&b| b != 0xff) {
        return false;
    }
    if block[2 + ps_len] != 0x00 {
        return false;
    }
    let info_start = 3 + ps_len;
    let digest_start = info_start + SHA256_DIGEST_INFO.len();
    if block[info_start..digest_start] != SHA256_DIGEST_INFO {
        return false;
    }
    bool::from(block[digest_start..].ct_eq(&digest[..]))
}
