//! RSA PKCS#1 v1.5 signing and verification for DNSSEC.
//!
//! The `rsa` crate is only asked for raw PKCS#1 v1.5 padding. We build the `DigestInfo` ourselves
//! so that every DNSSEC hash (including MD5) goes through the same path.

use ::rsa::traits::PublicKeyParts;
use ::rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};

use super::bigint::BigUint;
use super::hash::{digest_info_prefix, hash};
use crate::alg::HashAlg;
use crate::error::DnssecError;

fn digest_info(alg: HashAlg, data: &[u8]) -> Vec<u8> {
	let pfx = digest_info_prefix(alg);
	let mut res = Vec::with_capacity(pfx.len() + 64);
	res.extend_from_slice(pfx);
	res.extend_from_slice(&hash(alg, data));
	res
}

/// Signs `data`, returning a signature exactly as long as the modulus.
pub(crate) fn sign_rsa(key: &RsaPrivateKey, alg: HashAlg, data: &[u8]) -> Result<Vec<u8>, DnssecError> {
	key.sign(Pkcs1v15Sign::new_unprefixed(), &digest_info(alg, data))
		.map_err(DnssecError::crypto)
}

/// Validates the given RSA signature against the given RSA public key components.
pub(crate) fn validate_rsa(modulus: &BigUint, exponent: &BigUint, alg: HashAlg, sig: &[u8], data: &[u8])
-> Result<(), DnssecError> {
	let pk = RsaPublicKey::new(modulus.clone(), exponent.clone())
		.map_err(DnssecError::crypto)?;
	// Signatures are always exactly as long as the modulus.
	if sig.len() != pk.size() { return Err(DnssecError::SignatureVerificationFailed); }
	pk.verify(Pkcs1v15Sign::new_unprefixed(), &digest_info(alg, data), sig)
		.map_err(|_| DnssecError::SignatureVerificationFailed)
}
