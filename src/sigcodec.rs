//! Conversion between DNSSEC wire-format signatures and the DER encoding signature primitives
//! consume and produce.
//!
//! On the wire, DSA (RFC 2536) and ECDSA (RFC 6605) signatures are fixed-width concatenations of
//! `r` and `s` (with a leading `T` byte for DSA), whereas primitives use the ASN.1
//! `SEQUENCE { INTEGER r, INTEGER s }` form. RSA signatures are identical in both.

use crate::alg::Curve;
use crate::crypto::bigint;
use crate::error::DnssecError;
use crate::keys::{PrivateKey, PublicKey};
use crate::ser::{read_bytes, read_u8};

const DSA_INT_LEN: usize = 20;

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// How a signature is laid out on the wire, as determined by the key which made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigFormat {
	/// RSA signatures, the same in both encodings.
	Rsa,
	/// DSA signatures: `T`, then 20-byte `r` and `s`.
	Dsa {
		/// The `T` parameter of the signing key, which is repeated in each signature.
		t: u8,
	},
	/// ECDSA signatures: `r` and `s`, each the curve's field width.
	Ecdsa(Curve),
}

fn dsa_t(p: &bigint::BigUint) -> u8 {
	(bigint::byte_len(p).saturating_sub(64) / 8) as u8
}

impl SigFormat {
	/// The format of signatures made by the private half of `key`.
	pub fn for_public_key(key: &PublicKey) -> SigFormat {
		match key {
			PublicKey::Rsa { .. } => SigFormat::Rsa,
			PublicKey::Dsa { p, .. } => SigFormat::Dsa { t: dsa_t(p) },
			PublicKey::Ec { curve, .. } => SigFormat::Ecdsa(*curve),
		}
	}

	/// The format of signatures made by `key`.
	pub fn for_private_key(key: &PrivateKey) -> SigFormat {
		match key {
			PrivateKey::Rsa(_) => SigFormat::Rsa,
			PrivateKey::Dsa { p, .. } => SigFormat::Dsa { t: dsa_t(p) },
			PrivateKey::Ec { curve, .. } => SigFormat::Ecdsa(*curve),
		}
	}
}

fn write_der_int(out: &mut Vec<u8>, int: &[u8]) {
	let start = int.iter().position(|b| *b != 0).unwrap_or(int.len());
	let int = &int[start..];
	let pad = int.is_empty() || int[0] & 0x80 != 0;
	out.push(DER_INTEGER);
	out.push((int.len() + pad as usize) as u8);
	if pad { out.push(0); }
	out.extend_from_slice(int);
}

fn write_der_sig(r: &[u8], s: &[u8]) -> Vec<u8> {
	let mut ints = Vec::with_capacity(r.len() + s.len() + 6);
	write_der_int(&mut ints, r);
	write_der_int(&mut ints, s);
	let mut res = Vec::with_capacity(ints.len() + 2);
	res.push(DER_SEQUENCE);
	res.push(ints.len() as u8);
	res.extend_from_slice(&ints);
	res
}

/// Reads one non-negative INTEGER no wider than `width` bytes, left-padded to exactly `width`.
fn read_der_int(inp: &mut &[u8], width: usize) -> Result<Vec<u8>, ()> {
	if read_u8(inp)? != DER_INTEGER { return Err(()); }
	let len = read_u8(inp)? as usize;
	// Long-form lengths are never needed for integers this small.
	if len == 0 || len & 0x80 != 0 { return Err(()); }
	let mut int = read_bytes(inp, len)?;
	if int[0] & 0x80 != 0 { return Err(()); }
	if int.len() == width + 1 {
		if int[0] != 0 { return Err(()); }
		int = &int[1..];
	}
	if int.len() > width { return Err(()); }
	Ok(bigint::encode_fixed(&bigint::decode(int), width))
}

fn read_der_sig(mut der: &[u8], width: usize) -> Result<(Vec<u8>, Vec<u8>), ()> {
	if read_u8(&mut der)? != DER_SEQUENCE { return Err(()); }
	let len = read_u8(&mut der)? as usize;
	if len & 0x80 != 0 || len != der.len() { return Err(()); }
	let r = read_der_int(&mut der, width)?;
	let s = read_der_int(&mut der, width)?;
	if !der.is_empty() { return Err(()); }
	Ok((r, s))
}

/// Converts a DNS wire-format signature into the form signature primitives verify.
///
/// Wire signatures of the wrong length fail with [`DnssecError::SignatureVerificationFailed`].
pub fn wire_to_der(wire: &[u8], format: SigFormat) -> Result<Vec<u8>, DnssecError> {
	match format {
		SigFormat::Rsa => Ok(wire.to_vec()),
		SigFormat::Dsa { .. } => {
			if wire.len() != 1 + 2 * DSA_INT_LEN { return Err(DnssecError::SignatureVerificationFailed); }
			let (r, s) = wire[1..].split_at(DSA_INT_LEN);
			Ok(write_der_sig(r, s))
		},
		SigFormat::Ecdsa(curve) => {
			let width = curve.field_width();
			if wire.len() != 2 * width { return Err(DnssecError::SignatureVerificationFailed); }
			let (r, s) = wire.split_at(width);
			Ok(write_der_sig(r, s))
		},
	}
}

/// Converts a signature made by a signature primitive into DNS wire format.
///
/// Malformed DER, negative integers and integers too wide for the format fail with
/// [`DnssecError::SignatureVerificationFailed`].
pub fn der_to_wire(der: &[u8], format: SigFormat) -> Result<Vec<u8>, DnssecError> {
	let (prefix, width) = match format {
		SigFormat::Rsa => return Ok(der.to_vec()),
		SigFormat::Dsa { t } => (Some(t), DSA_INT_LEN),
		SigFormat::Ecdsa(curve) => (None, curve.field_width()),
	};
	let (r, s) = read_der_sig(der, width).map_err(|()| DnssecError::SignatureVerificationFailed)?;
	let mut res = Vec::with_capacity(1 + 2 * width);
	if let Some(t) = prefix { res.push(t); }
	res.extend_from_slice(&r);
	res.extend_from_slice(&s);
	Ok(res)
}

#[cfg(fuzzing)]
/// Feeds arbitrary bytes through the key and signature codecs, checking that anything which
/// decodes re-encodes to the same bytes.
pub fn fuzz_codecs(input: &[u8]) {
	if input.len() < 2 { return; }
	let (alg, data) = (input[0], &input[1..]);
	let key = crate::rr::DnsKey {
		name: ".".try_into().unwrap(), flags: 256, protocol: 3, alg, pubkey: data.to_vec(),
	};
	if let Ok(pk) = crate::keys::to_public_key(&key) {
		// RSA and DSA fields may carry leading zeros or a redundant length form, so only EC
		// points have a unique encoding.
		let encoded = crate::keys::from_public_key(&pk, alg);
		if let PublicKey::Ec { .. } = pk {
			assert_eq!(encoded.unwrap(), data);
		}
	}
	for format in [SigFormat::Dsa { t: 8 }, SigFormat::Ecdsa(Curve::P256), SigFormat::Ecdsa(Curve::P384)] {
		if let Ok(wire) = der_to_wire(data, format) {
			let der = wire_to_der(&wire, format).unwrap();
			assert_eq!(der_to_wire(&der, format).unwrap(), wire);
		}
		if let Ok(der) = wire_to_der(data, format) {
			let wire = der_to_wire(&der, format).unwrap();
			if let SigFormat::Dsa { .. } = format {
				assert_eq!(wire[1..], data[1..]);
			} else {
				assert_eq!(wire, data);
			}
		}
	}
}
