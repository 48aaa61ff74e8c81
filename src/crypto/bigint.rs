//! Conversion between arbitrary-precision unsigned integers and the big-endian byte strings DNS
//! key and signature fields carry.
//!
//! DNS integers are unsigned and have no sign byte, unlike ASN.1 INTEGERs. Length checks are up
//! to the caller, as each field has its own fixed or prefixed width.

pub use num_bigint_dig::BigUint;

/// Reads a big-endian unsigned integer. The empty string is zero.
pub fn decode(bytes: &[u8]) -> BigUint {
	BigUint::from_bytes_be(bytes)
}

/// Writes `v` as a minimal big-endian byte string, with no leading zero bytes.
///
/// Zero encodes as the empty string.
pub fn encode(v: &BigUint) -> Vec<u8> {
	if byte_len(v) == 0 { return Vec::new(); }
	v.to_bytes_be()
}

/// The number of bytes [`encode`] writes for `v`.
pub fn byte_len(v: &BigUint) -> usize {
	(v.bits() + 7) / 8
}

/// Writes `v` as exactly `width` big-endian bytes.
///
/// Short values are left-padded with zeros. Values wider than `width` keep only their
/// least-significant `width` bytes.
pub fn encode_fixed(v: &BigUint, width: usize) -> Vec<u8> {
	let bytes = encode(v);
	let mut res = vec![0; width];
	if bytes.len() >= width {
		res.copy_from_slice(&bytes[bytes.len() - width..]);
	} else {
		res[width - bytes.len()..].copy_from_slice(&bytes);
	}
	res
}
