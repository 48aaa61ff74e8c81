//! Resource Records are the fundamental type in the DNS - individual records mapping a name to
//! some data.
//!
//! This module holds the record types the signing and verification code consumes. It is not a
//! general DNS codec: records only know how to write their canonical RDATA, which is all that
//! RRset digests, key codecs and DS digests need.

use core::fmt;
use core::ops::Deref;

use crate::error::DnssecError;
use crate::ser::*;

/// The INternet class.
pub const CLASS_IN: u16 = 1;
/// The ANY class, used by SIG(0) records.
pub const CLASS_ANY: u16 = 255;

/// A valid domain name.
///
/// It must end with a ".", be no longer than 255 bytes, consist of only printable ASCII
/// characters and each label may be no longer than 63 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);
impl Name {
	/// The root name, `.`.
	pub fn root() -> Name { Name(".".to_owned()) }

	/// Gets the underlying human-readable domain name
	pub fn as_str(&self) -> &str { &self.0 }

	/// The number of labels in this name, not counting the root.
	pub fn labels(&self) -> u8 {
		if self.0 == "." { 0 } else { self.0.chars().filter(|c| *c == '.').count() as u8 }
	}

	/// Whether the leftmost label is the `*` wildcard label.
	pub fn is_wildcard(&self) -> bool { self.0.starts_with("*.") }

	/// Replaces all but the rightmost `keep` labels with a single `*` label.
	pub fn to_wildcard(&self, keep: u8) -> Name {
		let mut labels = self.0.split('.').filter(|label| !label.is_empty()).collect::<Vec<_>>();
		let skip = labels.len().saturating_sub(keep as usize);
		labels.drain(..skip);
		let mut res = String::with_capacity(self.0.len());
		res += "*.";
		for label in labels {
			res += label;
			res += ".";
		}
		Name(res)
	}

	/// Compares two names the way the DNS does, ignoring ASCII case.
	pub fn eq_canonical(&self, other: &Name) -> bool { self.0.eq_ignore_ascii_case(&other.0) }
}
impl Deref for Name {
	type Target = str;
	fn deref(&self) -> &str { &self.0 }
}
impl fmt::Display for Name {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}
impl TryFrom<String> for Name {
	type Error = ();
	fn try_from(s: String) -> Result<Name, ()> {
		if s.is_empty() { return Err(()); }
		if *s.as_bytes().last().unwrap_or(&0) != b"."[0] { return Err(()); }
		if s.len() > 255 { return Err(()); }
		if s.chars().any(|c| !c.is_ascii_graphic() && c != '.' && c != '-') { return Err(()); }
		if s != "." && s.split(".").count() > 1 && s[..s.len() - 1].split(".").any(|l| l.is_empty()) {
			return Err(());
		}
		for label in s.split(".") {
			if label.len() > 63 { return Err(()); }
		}

		Ok(Name(s))
	}
}
impl TryFrom<&str> for Name {
	type Error = ();
	fn try_from(s: &str) -> Result<Name, ()> {
		Self::try_from(s.to_owned())
	}
}

/// A trait describing a resource record, as consumed by the digest and signing code.
pub trait Record {
	/// The resource record type, as maintained by IANA.
	///
	/// Current assignments can be found at
	/// <http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
	fn ty(&self) -> u16;
	/// The name this record is at.
	fn name(&self) -> &Name;
	/// The class of this record, [`CLASS_IN`] unless otherwise specified.
	fn class(&self) -> u16 { CLASS_IN }
	/// Writes the canonical (RFC 4034 section 6.2) RDATA of this record, without a length
	/// prefix, to the given `Vec`.
	fn write_rdata(&self, out: &mut Vec<u8>);
}

pub(crate) trait StaticRecord : Sized {
	// http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
	const TYPE: u16;
	const CLASS: u16 = CLASS_IN;
	fn name(&self) -> &Name;
	fn write_rdata(&self, out: &mut Vec<u8>);
}
impl<RR: StaticRecord> Record for RR {
	fn ty(&self) -> u16 { RR::TYPE }
	fn name(&self) -> &Name { RR::name(self) }
	fn class(&self) -> u16 { RR::CLASS }
	fn write_rdata(&self, out: &mut Vec<u8>) { RR::write_rdata(self, out) }
}

/// A set of records sharing an owner name, type and class, along with the TTL they are served
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RRset<R: Record> {
	name: Name,
	class: u16,
	ty: u16,
	ttl: u32,
	records: Vec<R>,
}
impl<R: Record> RRset<R> {
	/// Builds an RRset out of `records`, which must be non-empty and all share one owner name
	/// (ignoring case), type and class.
	pub fn new(ttl: u32, records: Vec<R>) -> Result<Self, DnssecError> {
		let first = records.first().ok_or(DnssecError::MalformedRRset)?;
		let (name, class, ty) = (first.name().clone(), first.class(), first.ty());
		for record in records.iter() {
			if !record.name().eq_canonical(&name) || record.class() != class || record.ty() != ty {
				return Err(DnssecError::MalformedRRset);
			}
		}
		Ok(RRset { name, class, ty, ttl, records })
	}
	/// The owner name of every record in this set.
	pub fn name(&self) -> &Name { &self.name }
	/// The class of every record in this set.
	pub fn class(&self) -> u16 { self.class }
	/// The type of every record in this set.
	pub fn ty(&self) -> u16 { self.ty }
	/// The TTL this set is served with.
	pub fn ttl(&self) -> u32 { self.ttl }
	/// The records themselves, in the order they were provided.
	pub fn records(&self) -> &[R] { &self.records }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A record whose RDATA is already available in canonical wire form, for record types this
/// crate does not model.
pub struct Opaque {
	/// The name this record is at.
	pub name: Name,
	/// The record type.
	pub ty: u16,
	/// The record class.
	pub class: u16,
	/// The canonical RDATA.
	pub data: Vec<u8>,
}
impl Record for Opaque {
	fn ty(&self) -> u16 { self.ty }
	fn name(&self) -> &Name { &self.name }
	fn class(&self) -> u16 { self.class }
	fn write_rdata(&self, out: &mut Vec<u8>) { out.extend_from_slice(&self.data); }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A text resource record, containing arbitrary text data
pub struct Txt {
	/// The name this record is at.
	pub name: Name,
	/// The text record itself.
	///
	/// While this is generally UTF-8-valid, there is no specific requirement that it be, and thus
	/// is an arbitrary series of bytes here. It is split into 255-byte character-strings on the
	/// wire.
	pub data: Vec<u8>,
}
impl StaticRecord for Txt {
	const TYPE: u16 = 16;
	fn name(&self) -> &Name { &self.name }
	fn write_rdata(&self, out: &mut Vec<u8>) {
		let mut data_write = &self.data[..];
		out.extend_from_slice(&[data_write.len().try_into().unwrap_or(255)]);
		while !data_write.is_empty() {
			let split_pos = core::cmp::min(255, data_write.len());
			out.extend_from_slice(&data_write[..split_pos]);
			data_write = &data_write[split_pos..];
			if !data_write.is_empty() {
				out.extend_from_slice(&[data_write.len().try_into().unwrap_or(255)]);
			}
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A public key resource record which can be used to validate [`RRSig`]s.
///
/// KEY records, which SIG(0) signatures are made with, share this RDATA layout and are
/// represented with this type as well.
pub struct DnsKey {
	/// The name this record is at.
	pub name: Name,
	/// Flags which constrain the usage of this public key.
	pub flags: u16,
	/// The protocol this key is used for (protocol `3` is DNSSEC).
	pub protocol: u8,
	/// The algorithm which this public key uses to sign data.
	pub alg: u8,
	/// The public key itself, in the algorithm's DNS encoding.
	pub pubkey: Vec<u8>,
}
impl StaticRecord for DnsKey {
	const TYPE: u16 = 48;
	fn name(&self) -> &Name { &self.name }
	fn write_rdata(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.flags.to_be_bytes());
		out.extend_from_slice(&self.protocol.to_be_bytes());
		out.extend_from_slice(&self.alg.to_be_bytes());
		out.extend_from_slice(&self.pubkey);
	}
}
impl DnsKey {
	/// A short (non-cryptographic) digest which can be used to refer to this [`DnsKey`].
	pub fn key_tag(&self) -> u16 {
		if self.alg == 1 {
			// RSA/MD5 keys use the low bits of the modulus instead (RFC 4034 Appendix B.1)
			let len = self.pubkey.len();
			if len < 3 { return 0; }
			return u16::from_be_bytes([self.pubkey[len - 3], self.pubkey[len - 2]]);
		}
		let mut res = u32::from(self.flags);
		res += u32::from(self.protocol) << 8;
		res += u32::from(self.alg);
		for (idx, b) in self.pubkey.iter().enumerate() {
			if idx % 2 == 0 {
				res += u32::from(*b) << 8;
			} else {
				res += u32::from(*b);
			}
		}
		res += (res >> 16) & 0xffff;
		(res & 0xffff) as u16
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A Delegation Signer resource record which indicates that some alternative [`DnsKey`] can sign
/// for records in the zone which matches [`DS::name`].
pub struct DS {
	/// The name this record is at.
	///
	/// This is also the zone that a [`DnsKey`] which matches the [`Self::digest`] can sign for.
	pub name: Name,
	/// A short tag which describes the matching [`DnsKey`].
	///
	/// This matches the [`DnsKey::key_tag`] for the [`DnsKey`] which is referred to by this
	/// [`DS`].
	pub key_tag: u16,
	/// The algorithm which the [`DnsKey`] referred to by this [`DS`] uses.
	pub alg: u8,
	/// The type of digest used to hash the referred-to [`DnsKey`].
	pub digest_type: u8,
	/// The digest itself.
	pub digest: Vec<u8>,
}
impl StaticRecord for DS {
	const TYPE: u16 = 43;
	fn name(&self) -> &Name { &self.name }
	fn write_rdata(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.key_tag.to_be_bytes());
		out.extend_from_slice(&self.alg.to_be_bytes());
		out.extend_from_slice(&self.digest_type.to_be_bytes());
		out.extend_from_slice(&self.digest);
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything in an [`RRSig`] or [`Sig`] record except the signature itself.
///
/// These are exactly the fields covered by the signature, so they are fixed before signing and a
/// signed record is only ever built by attaching a finished signature to them.
pub struct SigData {
	/// The name this record is at.
	///
	/// For [`RRSig`]s this is also the name of the records being signed (ignoring wildcards).
	/// SIG(0) records live at the root.
	pub name: Name,
	/// The resource record type which this signature covers (`0` for SIG(0)).
	pub ty: u16,
	/// The algorithm which is being used to sign.
	///
	/// This must match the [`DnsKey::alg`] field in the [`DnsKey`] being used to sign.
	pub alg: u8,
	/// The number of labels in the name of the signed records, not counting the root or a
	/// leading `*` label.
	///
	/// Records whose name has more labels than this were synthesized from a wildcard.
	pub labels: u8,
	/// The TTL of the records which this signature is signing.
	pub orig_ttl: u32,
	/// The expiration (as a UNIX timestamp) of this signature.
	pub expiration: u32,
	/// The time (as a UNIX timestamp) at which this signature becomes valid.
	pub inception: u32,
	/// A short tag which describes the matching [`DnsKey`].
	///
	/// This matches the [`DnsKey::key_tag`] for the [`DnsKey`] which created this signature.
	pub key_tag: u16,
	/// The [`DnsKey::name`] in the [`DnsKey`] which created this signature.
	pub key_name: Name,
}
impl SigData {
	/// Attaches `signature` to build an RRSIG record.
	pub fn into_rrsig(self, signature: Vec<u8>) -> RRSig { RRSig { data: self, signature } }
	/// Attaches `signature` to build a SIG record.
	pub fn into_sig(self, signature: Vec<u8>) -> Sig { Sig { data: self, signature } }

	fn write_rdata(&self, signature: &[u8], out: &mut Vec<u8>) {
		out.extend_from_slice(&self.ty.to_be_bytes());
		out.extend_from_slice(&self.alg.to_be_bytes());
		out.extend_from_slice(&self.labels.to_be_bytes());
		out.extend_from_slice(&self.orig_ttl.to_be_bytes());
		out.extend_from_slice(&self.expiration.to_be_bytes());
		out.extend_from_slice(&self.inception.to_be_bytes());
		out.extend_from_slice(&self.key_tag.to_be_bytes());
		write_name(out, &self.key_name);
		out.extend_from_slice(signature);
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A Resource Record (set) Signature resource record. This contains a signature over all the
/// resources records of the given type at the given name.
pub struct RRSig {
	/// The signed fields.
	pub data: SigData,
	/// The signature itself, in DNS wire format.
	pub signature: Vec<u8>,
}
impl Deref for RRSig {
	type Target = SigData;
	fn deref(&self) -> &SigData { &self.data }
}
impl StaticRecord for RRSig {
	const TYPE: u16 = 46;
	fn name(&self) -> &Name { &self.data.name }
	fn write_rdata(&self, out: &mut Vec<u8>) { self.data.write_rdata(&self.signature, out) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A SIG resource record, used here for SIG(0) transaction signatures over a whole message.
pub struct Sig {
	/// The signed fields.
	pub data: SigData,
	/// The signature itself, in DNS wire format.
	pub signature: Vec<u8>,
}
impl Deref for Sig {
	type Target = SigData;
	fn deref(&self) -> &SigData { &self.data }
}
impl StaticRecord for Sig {
	const TYPE: u16 = 24;
	// SIG(0) records are always in the ANY class.
	const CLASS: u16 = CLASS_ANY;
	fn name(&self) -> &Name { &self.data.name }
	fn write_rdata(&self, out: &mut Vec<u8>) { self.data.write_rdata(&self.signature, out) }
}
