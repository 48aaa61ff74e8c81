//! ECDSA over the SECP random curves P-256 and P-384.
//!
//! Verification goes through `ring`. Signing needs a scalar we were handed directly, which `ring`
//! has no way to import, so it is done with the RustCrypto curve crates instead. Both sides
//! exchange signatures as DER.

use ring::signature;
use p256::ecdsa::signature::Signer;

use super::bigint::{self, BigUint};
use crate::alg::{Curve, CurveParams};
use crate::error::DnssecError;

/// Checks that `(x, y)` is a point on the curve, ie that both coordinates are field elements and
/// `y^2 = x^3 + ax + b (mod p)`.
pub(crate) fn on_curve(params: &CurveParams, x: &BigUint, y: &BigUint) -> bool {
	let p = bigint::decode(params.p);
	if *x >= p || *y >= p { return false; }
	let a = bigint::decode(params.a);
	let b = bigint::decode(params.b);
	let lhs = (y * y) % &p;
	let rhs = (x * x * x + a * x + b) % &p;
	lhs == rhs
}

/// Signs `data` with the private scalar `d`, returning a DER signature.
pub(crate) fn sign_ecdsa(curve: Curve, d: &BigUint, data: &[u8]) -> Result<Vec<u8>, DnssecError> {
	let scalar = bigint::encode_fixed(d, curve.field_width());
	match curve {
		Curve::P256 => {
			let key = p256::ecdsa::SigningKey::from_slice(&scalar).map_err(DnssecError::crypto)?;
			let sig: p256::ecdsa::Signature = key.try_sign(data).map_err(DnssecError::crypto)?;
			Ok(sig.to_der().as_bytes().to_vec())
		},
		Curve::P384 => {
			let key = p384::ecdsa::SigningKey::from_slice(&scalar).map_err(DnssecError::crypto)?;
			let sig: p384::ecdsa::Signature = key.try_sign(data).map_err(DnssecError::crypto)?;
			Ok(sig.to_der().as_bytes().to_vec())
		},
	}
}

/// Derives the public point `d * G`, as `(x, y)`.
pub(crate) fn public_point(curve: Curve, d: &BigUint) -> Result<(BigUint, BigUint), DnssecError> {
	let scalar = bigint::encode_fixed(d, curve.field_width());
	let point = match curve {
		Curve::P256 => p256::ecdsa::SigningKey::from_slice(&scalar).map_err(DnssecError::crypto)?
			.verifying_key().to_encoded_point(false).as_bytes().to_vec(),
		Curve::P384 => p384::ecdsa::SigningKey::from_slice(&scalar).map_err(DnssecError::crypto)?
			.verifying_key().to_encoded_point(false).as_bytes().to_vec(),
	};
	// Uncompressed SEC1: 0x04 || X || Y
	let width = curve.field_width();
	if point.len() != 1 + 2 * width { return Err(DnssecError::MalformedKey); }
	Ok((bigint::decode(&point[1..1 + width]), bigint::decode(&point[1 + width..])))
}

/// Validates a DER signature over `data` against the public point `(x, y)`.
pub(crate) fn validate_ecdsa(curve: Curve, x: &BigUint, y: &BigUint, der_sig: &[u8], data: &[u8])
-> Result<(), DnssecError> {
	let width = curve.field_width();
	let alg = match curve {
		Curve::P256 => &signature::ECDSA_P256_SHA256_ASN1,
		Curve::P384 => &signature::ECDSA_P384_SHA384_ASN1,
	};

	// Add 0x4 identifier to the ECDSA pubkey as expected by ring.
	let mut key = Vec::with_capacity(1 + 2 * width);
	key.push(0x4);
	key.extend_from_slice(&bigint::encode_fixed(x, width));
	key.extend_from_slice(&bigint::encode_fixed(y, width));

	signature::UnparsedPublicKey::new(alg, &key)
		.verify(data, der_sig)
		.map_err(|_| DnssecError::SignatureVerificationFailed)
}
