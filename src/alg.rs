//! The DNSSEC algorithm registry this crate understands.
//!
//! Records carry algorithms as raw `u8`s. Everything that needs to know what a number means goes
//! through [`Algorithm`], whose properties come from one static table.

use core::fmt;
use core::str::FromStr;

use crate::crypto::{secp256r1, secp384r1};
use crate::error::DnssecError;

/// A DNSSEC signing algorithm, as assigned by IANA.
///
/// See <https://www.iana.org/assignments/dns-sec-alg-numbers/dns-sec-alg-numbers.xhtml>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Algorithm {
	/// RSA/MD5, long deprecated but still supported for verification of old data.
	RsaMd5 = 1,
	/// DSA/SHA-1.
	Dsa = 3,
	/// RSA/SHA-1.
	RsaSha1 = 5,
	/// DSA/SHA-1, signalling NSEC3 support.
	DsaNsec3Sha1 = 6,
	/// RSA/SHA-1, signalling NSEC3 support.
	RsaSha1Nsec3Sha1 = 7,
	/// RSA/SHA-256.
	RsaSha256 = 8,
	/// RSA/SHA-512.
	RsaSha512 = 10,
	/// ECDSA over P-256 with SHA-256.
	EcdsaP256Sha256 = 13,
	/// ECDSA over P-384 with SHA-384.
	EcdsaP384Sha384 = 14,
}

/// The kind of key an [`Algorithm`] signs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyFamily {
	/// RSA keys, with PKCS#1 v1.5 signatures.
	Rsa,
	/// DSA keys.
	Dsa,
	/// ECDSA keys over the given curve.
	Ecdsa(Curve),
}

/// The elliptic curves used by DNSSEC ECDSA algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
	/// NIST P-256 (secp256r1).
	P256,
	/// NIST P-384 (secp384r1).
	P384,
}

/// The message digest an [`Algorithm`] hashes signed data with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlg {
	/// MD5
	Md5,
	/// SHA-1
	Sha1,
	/// SHA-256
	Sha256,
	/// SHA-384
	Sha384,
	/// SHA-512
	Sha512,
}

/// Short-Weierstrass domain parameters `y^2 = x^3 + ax + b (mod p)`, as big-endian bytes.
#[derive(Debug)]
pub struct CurveParams {
	/// The width, in bytes, of a field element (and thus of each public key coordinate and
	/// each half of a wire-format signature).
	pub field_width: usize,
	/// The field prime.
	pub p: &'static [u8],
	/// The `a` coefficient.
	pub a: &'static [u8],
	/// The `b` coefficient.
	pub b: &'static [u8],
	/// X coordinate of the generator.
	pub gx: &'static [u8],
	/// Y coordinate of the generator.
	pub gy: &'static [u8],
	/// The group order.
	pub n: &'static [u8],
}

/// A DS record digest type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DigestAlgorithm {
	/// SHA-1 (digest type 1)
	Sha1 = 1,
	/// SHA-256 (digest type 2)
	Sha256 = 2,
	/// SHA-384 (digest type 4)
	Sha384 = 4,
}

struct AlgorithmInfo {
	alg: Algorithm,
	mnemonic: &'static str,
	family: KeyFamily,
	hash: HashAlg,
	scheme: &'static str,
}

static ALGORITHMS: [AlgorithmInfo; 9] = [
	AlgorithmInfo { alg: Algorithm::RsaMd5, mnemonic: "RSAMD5", family: KeyFamily::Rsa, hash: HashAlg::Md5, scheme: "MD5withRSA" },
	AlgorithmInfo { alg: Algorithm::Dsa, mnemonic: "DSA", family: KeyFamily::Dsa, hash: HashAlg::Sha1, scheme: "SHA1withDSA" },
	AlgorithmInfo { alg: Algorithm::RsaSha1, mnemonic: "RSASHA1", family: KeyFamily::Rsa, hash: HashAlg::Sha1, scheme: "SHA1withRSA" },
	AlgorithmInfo { alg: Algorithm::DsaNsec3Sha1, mnemonic: "DSA-NSEC3-SHA1", family: KeyFamily::Dsa, hash: HashAlg::Sha1, scheme: "SHA1withDSA" },
	AlgorithmInfo { alg: Algorithm::RsaSha1Nsec3Sha1, mnemonic: "RSASHA1-NSEC3-SHA1", family: KeyFamily::Rsa, hash: HashAlg::Sha1, scheme: "SHA1withRSA" },
	AlgorithmInfo { alg: Algorithm::RsaSha256, mnemonic: "RSASHA256", family: KeyFamily::Rsa, hash: HashAlg::Sha256, scheme: "SHA256withRSA" },
	AlgorithmInfo { alg: Algorithm::RsaSha512, mnemonic: "RSASHA512", family: KeyFamily::Rsa, hash: HashAlg::Sha512, scheme: "SHA512withRSA" },
	AlgorithmInfo { alg: Algorithm::EcdsaP256Sha256, mnemonic: "ECDSAP256SHA256", family: KeyFamily::Ecdsa(Curve::P256), hash: HashAlg::Sha256, scheme: "SHA256withECDSA" },
	AlgorithmInfo { alg: Algorithm::EcdsaP384Sha384, mnemonic: "ECDSAP384SHA384", family: KeyFamily::Ecdsa(Curve::P384), hash: HashAlg::Sha384, scheme: "SHA384withECDSA" },
];

// Older names some zone files still use for the NSEC3 variants.
const ALIASES: [(&str, Algorithm); 2] = [
	("NSEC3DSA", Algorithm::DsaNsec3Sha1),
	("NSEC3RSASHA1", Algorithm::RsaSha1Nsec3Sha1),
];

impl Algorithm {
	fn info(&self) -> &'static AlgorithmInfo {
		let idx = match self {
			Algorithm::RsaMd5 => 0,
			Algorithm::Dsa => 1,
			Algorithm::RsaSha1 => 2,
			Algorithm::DsaNsec3Sha1 => 3,
			Algorithm::RsaSha1Nsec3Sha1 => 4,
			Algorithm::RsaSha256 => 5,
			Algorithm::RsaSha512 => 6,
			Algorithm::EcdsaP256Sha256 => 7,
			Algorithm::EcdsaP384Sha384 => 8,
		};
		&ALGORITHMS[idx]
	}

	/// The key family this algorithm signs with.
	pub fn family(&self) -> KeyFamily { self.info().family }
	/// The digest signed data is hashed with.
	pub fn hash(&self) -> HashAlg { self.info().hash }
	/// The conventional name of the signature scheme, eg `SHA256withRSA`.
	pub fn scheme(&self) -> &'static str { self.info().scheme }
	/// The RFC mnemonic, eg `RSASHA256`.
	pub fn mnemonic(&self) -> &'static str { self.info().mnemonic }
}

impl TryFrom<u8> for Algorithm {
	type Error = DnssecError;
	fn try_from(alg: u8) -> Result<Algorithm, DnssecError> {
		ALGORITHMS.iter().find(|info| info.alg as u8 == alg)
			.map(|info| info.alg)
			.ok_or(DnssecError::UnsupportedAlgorithm(alg))
	}
}

impl From<Algorithm> for u8 {
	fn from(alg: Algorithm) -> u8 { alg as u8 }
}

impl FromStr for Algorithm {
	type Err = ();
	/// Parses an algorithm mnemonic (case-insensitively) or decimal number.
	fn from_str(s: &str) -> Result<Algorithm, ()> {
		if let Some(info) = ALGORITHMS.iter().find(|info| info.mnemonic.eq_ignore_ascii_case(s)) {
			return Ok(info.alg);
		}
		if let Some((_, alg)) = ALIASES.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)) {
			return Ok(*alg);
		}
		let num: u8 = s.parse().map_err(|_| ())?;
		Algorithm::try_from(num).map_err(|_| ())
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.mnemonic())
	}
}

impl Curve {
	/// The domain parameters of this curve.
	pub fn params(&self) -> &'static CurveParams {
		match self {
			Curve::P256 => &secp256r1::PARAMS,
			Curve::P384 => &secp384r1::PARAMS,
		}
	}
	/// The width of a field element, in bytes.
	pub fn field_width(&self) -> usize { self.params().field_width }
}

impl TryFrom<u8> for DigestAlgorithm {
	type Error = DnssecError;
	fn try_from(digest_type: u8) -> Result<DigestAlgorithm, DnssecError> {
		match digest_type {
			1 => Ok(DigestAlgorithm::Sha1),
			2 => Ok(DigestAlgorithm::Sha256),
			4 => Ok(DigestAlgorithm::Sha384),
			_ => Err(DnssecError::UnsupportedDigestType(digest_type)),
		}
	}
}

impl DigestAlgorithm {
	pub(crate) fn ring_alg(&self) -> &'static ring::digest::Algorithm {
		match self {
			DigestAlgorithm::Sha1 => &ring::digest::SHA1_FOR_LEGACY_USE_ONLY,
			DigestAlgorithm::Sha256 => &ring::digest::SHA256,
			DigestAlgorithm::Sha384 => &ring::digest::SHA384,
		}
	}
}
