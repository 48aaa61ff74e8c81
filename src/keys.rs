//! Conversion between the public key field of [`DnsKey`] records and typed key material.
//!
//! Each key family has its own fixed DNS layout:
//!  * RSA (RFC 3110): exponent length (one byte, or a zero byte then two bytes), the exponent,
//!    then the modulus.
//!  * DSA (RFC 2536): `T`, then `Q` (20 bytes), then `P`, `G` and `Y`, each `64 + 8T` bytes.
//!  * ECDSA (RFC 6605): the X and Y coordinates, each as wide as the curve's field.

use ::rsa::traits::PublicKeyParts;
use ::rsa::RsaPrivateKey;

use crate::alg::{Algorithm, Curve, KeyFamily};
use crate::crypto::bigint::{self, BigUint};
use crate::crypto::ec;
use crate::error::DnssecError;
use crate::rr::DnsKey;
use crate::ser::{read_bytes, read_u16, read_u8};

const DSA_Q_LEN: usize = 20;

/// A public key, as carried by a [`DnsKey`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
	/// An RSA public key.
	Rsa {
		/// The modulus `n`.
		modulus: BigUint,
		/// The public exponent `e`.
		exponent: BigUint,
	},
	/// A DSA public key with its domain parameters.
	Dsa {
		/// The prime modulus.
		p: BigUint,
		/// The subgroup order.
		q: BigUint,
		/// The subgroup generator.
		g: BigUint,
		/// The public value `g^x mod p`.
		y: BigUint,
	},
	/// An ECDSA public point.
	Ec {
		/// The curve the point is on.
		curve: Curve,
		/// Affine X coordinate.
		x: BigUint,
		/// Affine Y coordinate.
		y: BigUint,
	},
}

/// A private key which can sign for a [`DnsKey`].
///
/// Loading these from storage is left to the caller.
#[derive(Clone, Debug)]
pub enum PrivateKey {
	/// An RSA private key.
	Rsa(RsaPrivateKey),
	/// A DSA private key with its domain parameters.
	Dsa {
		/// The prime modulus.
		p: BigUint,
		/// The subgroup order.
		q: BigUint,
		/// The subgroup generator.
		g: BigUint,
		/// The public value `g^x mod p`.
		y: BigUint,
		/// The private exponent.
		x: BigUint,
	},
	/// An ECDSA private scalar.
	Ec {
		/// The curve the key is on.
		curve: Curve,
		/// The private scalar.
		d: BigUint,
	},
}

impl PublicKey {
	/// The family of algorithms this key can be used with.
	pub fn family(&self) -> KeyFamily {
		match self {
			PublicKey::Rsa { .. } => KeyFamily::Rsa,
			PublicKey::Dsa { .. } => KeyFamily::Dsa,
			PublicKey::Ec { curve, .. } => KeyFamily::Ecdsa(*curve),
		}
	}
}

impl PrivateKey {
	/// The family of algorithms this key can be used with.
	pub fn family(&self) -> KeyFamily {
		match self {
			PrivateKey::Rsa(_) => KeyFamily::Rsa,
			PrivateKey::Dsa { .. } => KeyFamily::Dsa,
			PrivateKey::Ec { curve, .. } => KeyFamily::Ecdsa(*curve),
		}
	}

	/// The public half of this key.
	pub fn public_key(&self) -> Result<PublicKey, DnssecError> {
		match self {
			PrivateKey::Rsa(key) => Ok(PublicKey::Rsa { modulus: key.n().clone(), exponent: key.e().clone() }),
			PrivateKey::Dsa { p, q, g, y, .. } =>
				Ok(PublicKey::Dsa { p: p.clone(), q: q.clone(), g: g.clone(), y: y.clone() }),
			PrivateKey::Ec { curve, d } => {
				let (x, y) = ec::public_point(*curve, d)?;
				Ok(PublicKey::Ec { curve: *curve, x, y })
			},
		}
	}
}

/// Checks that `alg` is supported and signs with keys of `family`.
pub(crate) fn check_compatible(family: KeyFamily, alg: u8) -> Result<Algorithm, DnssecError> {
	let alg = Algorithm::try_from(alg)?;
	if alg.family() != family { return Err(DnssecError::IncompatibleKey); }
	Ok(alg)
}

fn parse_rsa(mut pubkey: &[u8]) -> Result<PublicKey, ()> {
	let mut exponent_length = read_u8(&mut pubkey)? as usize;
	if exponent_length == 0 {
		exponent_length = read_u16(&mut pubkey)? as usize;
	}
	let exponent = read_bytes(&mut pubkey, exponent_length)?;
	if exponent.is_empty() || pubkey.is_empty() { return Err(()); }
	Ok(PublicKey::Rsa { exponent: bigint::decode(exponent), modulus: bigint::decode(pubkey) })
}

fn parse_dsa(mut pubkey: &[u8]) -> Result<PublicKey, ()> {
	let t = read_u8(&mut pubkey)? as usize;
	if t > 8 { return Err(()); }
	let len = 64 + t * 8;
	if pubkey.len() != DSA_Q_LEN + 3 * len { return Err(()); }
	let q = bigint::decode(read_bytes(&mut pubkey, DSA_Q_LEN)?);
	let p = bigint::decode(read_bytes(&mut pubkey, len)?);
	let g = bigint::decode(read_bytes(&mut pubkey, len)?);
	let y = bigint::decode(read_bytes(&mut pubkey, len)?);
	Ok(PublicKey::Dsa { p, q, g, y })
}

fn parse_ec(curve: Curve, pubkey: &[u8]) -> Result<PublicKey, ()> {
	let width = curve.field_width();
	if pubkey.len() != 2 * width { return Err(()); }
	let x = bigint::decode(&pubkey[..width]);
	let y = bigint::decode(&pubkey[width..]);
	if !ec::on_curve(curve.params(), &x, &y) { return Err(()); }
	Ok(PublicKey::Ec { curve, x, y })
}

/// Decodes the public key of `key` according to its algorithm.
pub fn to_public_key(key: &DnsKey) -> Result<PublicKey, DnssecError> {
	let alg = Algorithm::try_from(key.alg)?;
	match alg.family() {
		KeyFamily::Rsa => parse_rsa(&key.pubkey),
		KeyFamily::Dsa => parse_dsa(&key.pubkey),
		KeyFamily::Ecdsa(curve) => parse_ec(curve, &key.pubkey),
	}.map_err(|()| DnssecError::MalformedKey)
}

fn write_rsa(modulus: &BigUint, exponent: &BigUint) -> Result<Vec<u8>, ()> {
	let exponent = bigint::encode(exponent);
	let modulus = bigint::encode(modulus);
	if exponent.is_empty() || modulus.is_empty() { return Err(()); }
	let mut res = Vec::with_capacity(3 + exponent.len() + modulus.len());
	if exponent.len() < 256 {
		res.push(exponent.len() as u8);
	} else {
		let len: u16 = exponent.len().try_into().map_err(|_| ())?;
		res.push(0);
		res.extend_from_slice(&len.to_be_bytes());
	}
	res.extend_from_slice(&exponent);
	res.extend_from_slice(&modulus);
	Ok(res)
}

fn write_dsa(p: &BigUint, q: &BigUint, g: &BigUint, y: &BigUint) -> Result<Vec<u8>, ()> {
	let len = bigint::byte_len(p);
	if len < 64 || (len - 64) % 8 != 0 { return Err(()); }
	let t = (len - 64) / 8;
	if t > 8 { return Err(()); }
	if bigint::byte_len(q) > DSA_Q_LEN { return Err(()); }
	if bigint::byte_len(g) > len || bigint::byte_len(y) > len { return Err(()); }

	let mut res = Vec::with_capacity(1 + DSA_Q_LEN + 3 * len);
	res.push(t as u8);
	res.extend_from_slice(&bigint::encode_fixed(q, DSA_Q_LEN));
	res.extend_from_slice(&bigint::encode_fixed(p, len));
	res.extend_from_slice(&bigint::encode_fixed(g, len));
	res.extend_from_slice(&bigint::encode_fixed(y, len));
	Ok(res)
}

fn write_ec(curve: Curve, x: &BigUint, y: &BigUint) -> Result<Vec<u8>, ()> {
	let width = curve.field_width();
	if bigint::byte_len(x) > width || bigint::byte_len(y) > width { return Err(()); }
	let mut res = bigint::encode_fixed(x, width);
	res.extend_from_slice(&bigint::encode_fixed(y, width));
	Ok(res)
}

/// Encodes `key` as the public key field of a [`DnsKey`] with algorithm `alg`.
pub fn from_public_key(key: &PublicKey, alg: u8) -> Result<Vec<u8>, DnssecError> {
	check_compatible(key.family(), alg)?;
	match key {
		PublicKey::Rsa { modulus, exponent } => write_rsa(modulus, exponent),
		PublicKey::Dsa { p, q, g, y } => write_dsa(p, q, g, y),
		PublicKey::Ec { curve, x, y } => write_ec(*curve, x, y),
	}.map_err(|()| DnssecError::MalformedKey)
}
