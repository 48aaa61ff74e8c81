//! Signing and verification of [`RRset`]s, and DS digests of [`DnsKey`]s.
//!
//! Verification walks a fixed sequence of checks, stopping at the first that fails: the key must
//! be the one the signature names (algorithm, key tag and signer), the signature must be within
//! its validity period (expiration is checked before inception), and only then is the signature
//! itself checked.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::alg::{Algorithm, DigestAlgorithm, KeyFamily};
use crate::crypto::{dsa, ec, rsa};
use crate::digest::digest_rrset;
use crate::error::DnssecError;
use crate::keys::{check_compatible, to_public_key, PrivateKey, PublicKey};
use crate::rr::*;
use crate::ser::write_name;
use crate::sigcodec::{der_to_wire, wire_to_der, SigFormat};

/// Maps a 32-bit DNSSEC timestamp onto a UNIX time.
pub(crate) fn resolve_time(time: u32) -> u64 {
	// RFC 2065 was published in January 1997, so we arbitrarily use that as a cutoff and assume
	// any timestamps before then are actually past 2106 instead.
	// We ignore leap years for simplicity.
	if time < 60*60*24*365*27 {
		(time as u64) + (u32::MAX as u64) + 1
	} else {
		time.into()
	}
}

/// The current UNIX time.
pub(crate) fn now() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}

/// Checks that `key` is the key `sig` claims to be made by.
pub(crate) fn check_key(sig: &SigData, key: &DnsKey) -> Result<(), DnssecError> {
	let key_tag = key.key_tag();
	if sig.alg != key.alg || sig.key_tag != key_tag || !sig.key_name.eq_canonical(&key.name) {
		debug!(sig_alg = sig.alg, key_alg = key.alg, sig_tag = sig.key_tag, key_tag,
			signer = %sig.key_name, key_name = %key.name, "signature was not made by this key");
		return Err(DnssecError::KeyMismatch {
			sig_alg: sig.alg, key_alg: key.alg, sig_tag: sig.key_tag, key_tag,
		});
	}
	Ok(())
}

/// Checks that `now` is within `[inception, expiration]`, checking expiration first.
pub(crate) fn check_time(sig: &SigData, now: u64) -> Result<(), DnssecError> {
	let expiration = resolve_time(sig.expiration);
	if now > expiration {
		debug!(expiration, now, "signature expired");
		return Err(DnssecError::SignatureExpired { expiration, now });
	}
	let inception = resolve_time(sig.inception);
	if now < inception {
		debug!(inception, now, "signature not yet valid");
		return Err(DnssecError::SignatureNotYetValid { inception, now });
	}
	Ok(())
}

/// Checks the wire-format `signature` over `data` against `key`.
pub(crate) fn verify_signature(data: &[u8], signature: &[u8], key: &DnsKey) -> Result<(), DnssecError> {
	let alg = Algorithm::try_from(key.alg)?;
	let public = to_public_key(key)?;
	let sig = wire_to_der(signature, SigFormat::for_public_key(&public))?;
	let res = match (&public, alg.family()) {
		(PublicKey::Rsa { modulus, exponent }, KeyFamily::Rsa) =>
			rsa::validate_rsa(modulus, exponent, alg.hash(), &sig, data),
		(PublicKey::Dsa { p, q, g, y }, KeyFamily::Dsa) =>
			dsa::validate_dsa(p, q, g, y, &sig, data),
		(PublicKey::Ec { curve, x, y }, KeyFamily::Ecdsa(_)) =>
			ec::validate_ecdsa(*curve, x, y, &sig, data),
		_ => Err(DnssecError::IncompatibleKey),
	};
	if let Err(e) = &res {
		debug!(alg = %alg, error = %e, "signature did not verify");
	}
	res
}

/// Signs `data` with `key` under `alg`, returning a wire-format signature.
pub(crate) fn create_signature(data: &[u8], alg: Algorithm, key: &PrivateKey) -> Result<Vec<u8>, DnssecError> {
	let sig = match key {
		PrivateKey::Rsa(key) => rsa::sign_rsa(key, alg.hash(), data)?,
		PrivateKey::Dsa { p, q, g, y, x } => dsa::sign_dsa(p, q, g, y, x, data)?,
		PrivateKey::Ec { curve, d } => ec::sign_ecdsa(*curve, d, data)?,
	};
	der_to_wire(&sig, SigFormat::for_private_key(key))
}

/// Verifies `rrsig` over `rrset` with `key` at the current system time.
///
/// See [`verify_at`].
pub fn verify<R: Record>(rrset: &RRset<R>, rrsig: &RRSig, key: &DnsKey) -> Result<(), DnssecError> {
	verify_at(rrset, rrsig, key, now())
}

/// Verifies `rrsig` over `rrset` with `key`, as if the current UNIX time were `now`.
///
/// `key` must be the key `rrsig` names, else [`DnssecError::KeyMismatch`]. `now` must lie within
/// the signature's validity period (both bounds inclusive), else
/// [`DnssecError::SignatureExpired`] or [`DnssecError::SignatureNotYetValid`]. Signatures over a
/// different record type, with more labels than the owner name or which simply don't verify fail
/// with [`DnssecError::SignatureVerificationFailed`].
///
/// Note that the DNSKEY protocol and flags are not checked, nor is `key` itself authenticated.
pub fn verify_at<R: Record>(rrset: &RRset<R>, rrsig: &RRSig, key: &DnsKey, now: u64)
-> Result<(), DnssecError> {
	check_key(rrsig, key)?;
	check_time(rrsig, now)?;
	if rrsig.ty != rrset.ty() {
		debug!(covered = rrsig.ty, ty = rrset.ty(), "signature covers a different type");
		return Err(DnssecError::SignatureVerificationFailed);
	}
	let data = digest_rrset(rrsig, rrset)?;
	verify_signature(&data, &rrsig.signature, key)
}

/// Signs `rrset` with `private`, the private half of `key`, producing an [`RRSig`] valid from
/// `inception` until `expiration` (UNIX times, truncated to 32 bits as on the wire).
///
/// Fails with [`DnssecError::UnsupportedAlgorithm`] or [`DnssecError::IncompatibleKey`] before
/// anything is signed if `key`'s algorithm cannot be used with `private`.
pub fn sign<R: Record>(rrset: &RRset<R>, key: &DnsKey, private: &PrivateKey, inception: u32, expiration: u32)
-> Result<RRSig, DnssecError> {
	let alg = check_compatible(private.family(), key.alg)?;
	let name = rrset.name();
	let labels = if name.is_wildcard() { name.labels() - 1 } else { name.labels() };
	let sig = SigData {
		name: name.clone(), ty: rrset.ty(), alg: key.alg, labels, orig_ttl: rrset.ttl(),
		expiration, inception, key_tag: key.key_tag(), key_name: key.name.clone(),
	};
	let data = digest_rrset(&sig, rrset)?;
	let signature = create_signature(&data, alg, private)?;
	debug!(name = %sig.name, ty = sig.ty, alg = %alg, key_tag = sig.key_tag, "signed RRset");
	Ok(sig.into_rrsig(signature))
}

/// Computes the digest a DS record for `key` carries: the hash of its canonical owner name
/// followed by its canonical RDATA.
pub fn generate_ds_digest(key: &DnsKey, digest_type: DigestAlgorithm) -> Vec<u8> {
	let mut ctx = ring::digest::Context::new(digest_type.ring_alg());
	write_name(&mut ctx, &key.name);
	ctx.update(&key.flags.to_be_bytes());
	ctx.update(&key.protocol.to_be_bytes());
	ctx.update(&key.alg.to_be_bytes());
	ctx.update(&key.pubkey);
	ctx.finish().as_ref().to_vec()
}

/// Builds the [`DS`] record which delegates to `key`.
pub fn generate_ds(key: &DnsKey, digest_type: DigestAlgorithm) -> DS {
	DS {
		name: key.name.clone(), key_tag: key.key_tag(), alg: key.alg, digest_type: digest_type as u8,
		digest: generate_ds_digest(key, digest_type),
	}
}
