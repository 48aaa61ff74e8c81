//! DSA (FIPS 186) signing and verification for DNSSEC, which only ever uses SHA-1.
//!
//! Signatures go in and out as DER `SEQUENCE { r, s }`, the form [`crate::sigcodec`] converts
//! the DNS wire format to and from.

use ::dsa::{Components, Signature, SigningKey, VerifyingKey};
use sha1::{Digest, Sha1};
use signature::{DigestSigner, DigestVerifier, SignatureEncoding};

use super::bigint::BigUint;
use crate::error::DnssecError;

fn verifying_key(p: &BigUint, q: &BigUint, g: &BigUint, y: &BigUint) -> Result<VerifyingKey, DnssecError> {
	let components = Components::from_components(p.clone(), q.clone(), g.clone())
		.map_err(DnssecError::crypto)?;
	VerifyingKey::from_components(components, y.clone()).map_err(DnssecError::crypto)
}

/// Signs `data` with RFC 6979 deterministic nonces, returning a DER signature.
pub(crate) fn sign_dsa(p: &BigUint, q: &BigUint, g: &BigUint, y: &BigUint, x: &BigUint, data: &[u8])
-> Result<Vec<u8>, DnssecError> {
	let key = SigningKey::from_components(verifying_key(p, q, g, y)?, x.clone())
		.map_err(DnssecError::crypto)?;
	let sig: Signature = key.try_sign_digest(Sha1::new_with_prefix(data))
		.map_err(DnssecError::crypto)?;
	Ok(sig.to_vec())
}

/// Validates a DER signature over `data`.
pub(crate) fn validate_dsa(p: &BigUint, q: &BigUint, g: &BigUint, y: &BigUint, der_sig: &[u8], data: &[u8])
-> Result<(), DnssecError> {
	let key = verifying_key(p, q, g, y)?;
	let sig = Signature::try_from(der_sig).map_err(|_| DnssecError::SignatureVerificationFailed)?;
	key.verify_digest(Sha1::new_with_prefix(data), &sig)
		.map_err(|_| DnssecError::SignatureVerificationFailed)
}
