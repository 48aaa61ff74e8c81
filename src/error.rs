//! The error type returned by every fallible operation in this crate.

use thiserror::Error;

/// An error signing or verifying DNSSEC data, or converting keys and signatures.
///
/// None of these are transient: every operation here is a deterministic computation over its
/// inputs, so retrying with the same inputs will fail in the same way.
#[derive(Debug, Error)]
pub enum DnssecError {
	/// The DNSSEC algorithm number is unknown or not implemented.
	#[error("unsupported DNSSEC algorithm {0}")]
	UnsupportedAlgorithm(u8),
	/// The DS digest type number is unknown or not implemented.
	#[error("unsupported DS digest type {0}")]
	UnsupportedDigestType(u8),
	/// Public key material does not match the fixed layout for its algorithm.
	#[error("malformed DNSSEC public key")]
	MalformedKey,
	/// A key belongs to a different key family (or curve) than the algorithm requires.
	#[error("key is incompatible with the requested algorithm")]
	IncompatibleKey,
	/// The signature and the key disagree on algorithm, key tag or signer name.
	#[error("signature was not made by this key (algorithm {sig_alg}/{key_alg}, tag {sig_tag}/{key_tag})")]
	KeyMismatch {
		/// Algorithm of the signature.
		sig_alg: u8,
		/// Algorithm of the key.
		key_alg: u8,
		/// Key tag recorded in the signature.
		sig_tag: u16,
		/// Key tag of the key.
		key_tag: u16,
	},
	/// The current time is past the signature's expiration.
	#[error("signature expired at {expiration}, now {now}")]
	SignatureExpired {
		/// Expiration, in UNIX seconds.
		expiration: u64,
		/// The time the check was made at, in UNIX seconds.
		now: u64,
	},
	/// The current time is before the signature's inception.
	#[error("signature not valid before {inception}, now {now}")]
	SignatureNotYetValid {
		/// Inception, in UNIX seconds.
		inception: u64,
		/// The time the check was made at, in UNIX seconds.
		now: u64,
	},
	/// The signature bytes were malformed or did not verify.
	#[error("DNSSEC signature verification failed")]
	SignatureVerificationFailed,
	/// Message verification was requested but the message carries no SIG(0) record.
	#[error("message has no SIG(0) signature")]
	NoSignaturePresent,
	/// The records handed in as an RRset were empty or did not share name, type and class.
	#[error("records do not form a single RRset")]
	MalformedRRset,
	/// The DNS message is shorter than a header, is already signed, or its ARCOUNT cannot account
	/// for the SIG(0).
	#[error("malformed DNS message")]
	MalformedMessage,
	/// The underlying signature primitive failed.
	#[error("signature primitive failed: {0}")]
	Crypto(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DnssecError {
	pub(crate) fn crypto<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
		DnssecError::Crypto(Box::new(e))
	}
}
