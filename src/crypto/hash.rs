//! Simple wrapper around various hash options to provide a single enum which can calculate
//! different hashes.

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::alg::HashAlg;

pub(crate) enum Hasher {
	Md5(Md5),
	Sha1(Sha1),
	Sha256(Sha256),
	Sha384(Sha384),
	Sha512(Sha512),
}

impl Hasher {
	pub(crate) fn new(alg: HashAlg) -> Hasher {
		match alg {
			HashAlg::Md5 => Hasher::Md5(Md5::new()),
			HashAlg::Sha1 => Hasher::Sha1(Sha1::new()),
			HashAlg::Sha256 => Hasher::Sha256(Sha256::new()),
			HashAlg::Sha384 => Hasher::Sha384(Sha384::new()),
			HashAlg::Sha512 => Hasher::Sha512(Sha512::new()),
		}
	}

	pub(crate) fn update(&mut self, buf: &[u8]) {
		match self {
			Hasher::Md5(hasher) => hasher.update(buf),
			Hasher::Sha1(hasher) => hasher.update(buf),
			Hasher::Sha256(hasher) => hasher.update(buf),
			Hasher::Sha384(hasher) => hasher.update(buf),
			Hasher::Sha512(hasher) => hasher.update(buf),
		}
	}

	pub(crate) fn finish(self) -> Vec<u8> {
		match self {
			Hasher::Md5(hasher) => hasher.finalize().to_vec(),
			Hasher::Sha1(hasher) => hasher.finalize().to_vec(),
			Hasher::Sha256(hasher) => hasher.finalize().to_vec(),
			Hasher::Sha384(hasher) => hasher.finalize().to_vec(),
			Hasher::Sha512(hasher) => hasher.finalize().to_vec(),
		}
	}
}

/// Hashes `data` in one shot.
pub(crate) fn hash(alg: HashAlg, data: &[u8]) -> Vec<u8> {
	let mut hasher = Hasher::new(alg);
	hasher.update(data);
	hasher.finish()
}

/// The DER-encoded `DigestInfo` header which PKCS#1 v1.5 signatures put in front of a hash.
///
/// From <https://www.rfc-editor.org/rfc/rfc8017#section-9.2> and, for the DNSSEC uses,
/// <https://www.rfc-editor.org/rfc/rfc5702#section-3.1>.
pub(crate) fn digest_info_prefix(alg: HashAlg) -> &'static [u8] {
	const MD5_PFX: [u8; 18] = hex_lit::hex!("3020300c06082a864886f70d020505000410");
	const SHA1_PFX: [u8; 15] = hex_lit::hex!("3021300906052b0e03021a05000414");
	const SHA256_PFX: [u8; 19] = hex_lit::hex!("3031300d060960864801650304020105000420");
	const SHA384_PFX: [u8; 19] = hex_lit::hex!("3041300d060960864801650304020205000430");
	const SHA512_PFX: [u8; 19] = hex_lit::hex!("3051300d060960864801650304020305000440");
	match alg {
		HashAlg::Md5 => &MD5_PFX,
		HashAlg::Sha1 => &SHA1_PFX,
		HashAlg::Sha256 => &SHA256_PFX,
		HashAlg::Sha384 => &SHA384_PFX,
		HashAlg::Sha512 => &SHA512_PFX,
	}
}
