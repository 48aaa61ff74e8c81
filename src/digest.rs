//! Builders for the exact byte strings DNSSEC signatures are computed over.
//!
//! For RRsets this is RFC 4034 section 3.1.8.1: the RRSIG RDATA (without the signature), then
//! every record of the set in canonical form and canonical order. For SIG(0) it is RFC 2931
//! section 3.1: the SIG RDATA, then the message as it was before the SIG was appended.

use tracing::trace;

use crate::error::DnssecError;
use crate::rr::{Name, RRset, Record, SigData};
use crate::ser::{name_len, write_name, LenPrefixedBuf, Writer};
use crate::sig0::Sig0Message;

/// The length of a DNS message header.
pub(crate) const HEADER_LEN: usize = 12;
const ARCOUNT_OFFSET: usize = 10;

fn write_sig_header<W: Writer>(out: &mut W, sig: &SigData) {
	out.write(&sig.ty.to_be_bytes());
	out.write(&sig.alg.to_be_bytes());
	out.write(&sig.labels.to_be_bytes());
	out.write(&sig.orig_ttl.to_be_bytes());
	out.write(&sig.expiration.to_be_bytes());
	out.write(&sig.inception.to_be_bytes());
	out.write(&sig.key_tag.to_be_bytes());
	write_name(out, &sig.key_name);
}

/// Writes the signed fields of `sig`: type covered, algorithm, labels, original TTL, expiration,
/// inception, key tag and the canonical signer name.
pub fn digest_sig(out: &mut Vec<u8>, sig: &SigData) {
	write_sig_header(out, sig);
}

/// The owner name the signature was made over: `name` itself, or the wildcard it was expanded
/// from if it has more labels than the signature covers.
fn signed_owner(name: &Name, labels: u8) -> Result<Option<Name>, DnssecError> {
	let name_labels = name.labels();
	if labels > name_labels { return Err(DnssecError::SignatureVerificationFailed); }
	if labels == name_labels { return Ok(None); }
	Ok(Some(name.to_wildcard(labels)))
}

/// Builds the data signed by an RRSIG with fields `sig` over `rrset`.
///
/// Records are sorted by canonical RDATA and exact duplicates are dropped. Fails with
/// [`DnssecError::SignatureVerificationFailed`] if `sig` claims more labels than the owner name
/// has.
pub fn digest_rrset<R: Record>(sig: &SigData, rrset: &RRset<R>) -> Result<Vec<u8>, DnssecError> {
	let mut rdatas = rrset.records().iter().map(|record| {
		let mut rdata = Vec::new();
		record.write_rdata(&mut rdata);
		rdata
	}).collect::<Vec<_>>();
	rdatas.sort_unstable();
	rdatas.dedup();

	let wildcard = signed_owner(rrset.name(), sig.labels)?;
	let owner = wildcard.as_ref().unwrap_or(rrset.name());

	let mut record_header = Vec::with_capacity(name_len(owner) as usize + 8);
	write_name(&mut record_header, owner);
	record_header.extend_from_slice(&rrset.ty().to_be_bytes());
	record_header.extend_from_slice(&rrset.class().to_be_bytes());
	record_header.extend_from_slice(&sig.orig_ttl.to_be_bytes());

	let rdata_len: usize = rdatas.iter().map(|rdata| rdata.len()).sum();
	let mut out = LenPrefixedBuf::with_capacity(
		18 + name_len(&sig.key_name) as usize + rdatas.len() * (record_header.len() + 2) + rdata_len);
	write_sig_header(&mut out, sig);
	for rdata in rdatas.iter() {
		out.write(&record_header);
		let len = out.reserve_len();
		out.write(rdata);
		out.patch_len(len).map_err(|()| DnssecError::MalformedRRset)?;
	}
	let res = out.into_bytes();
	trace!(records = rdatas.len(), len = res.len(), "built RRset signing data");
	Ok(res)
}

/// Builds the data signed by a SIG(0) with fields `sig` over the unsigned wire-format `message`.
///
/// If this signature continues a chain, `previous` is the signature of the one before it.
pub fn digest_message(sig: &SigData, message: &[u8], previous: Option<&[u8]>) -> Vec<u8> {
	let mut out = Vec::with_capacity(18 + name_len(&sig.key_name) as usize + previous.map_or(0, |p| p.len()) + message.len());
	write_sig_header(&mut out, sig);
	if let Some(previous) = previous {
		out.extend_from_slice(previous);
	}
	out.extend_from_slice(message);
	trace!(len = out.len(), "built message signing data");
	out
}

/// Builds the data signed by the SIG(0) which `message` carries, by reconstructing the message
/// as it was before the SIG was appended: ARCOUNT one lower, and everything from the SIG on
/// removed.
///
/// Fails with [`DnssecError::NoSignaturePresent`] if `message` has no SIG(0) and
/// [`DnssecError::MalformedMessage`] if its header cannot have counted it.
pub fn digest_signed_message(sig: &SigData, message: &Sig0Message, previous: Option<&[u8]>)
-> Result<Vec<u8>, DnssecError> {
	let sig_start = message.sig_start().ok_or(DnssecError::NoSignaturePresent)?;
	let wire = message.wire();
	if sig_start < HEADER_LEN || sig_start > wire.len() { return Err(DnssecError::MalformedMessage); }

	let mut header = [0; HEADER_LEN];
	header.copy_from_slice(&wire[..HEADER_LEN]);
	let arcount = u16::from_be_bytes([header[ARCOUNT_OFFSET], header[ARCOUNT_OFFSET + 1]]);
	let arcount = arcount.checked_sub(1).ok_or(DnssecError::MalformedMessage)?;
	header[ARCOUNT_OFFSET..].copy_from_slice(&arcount.to_be_bytes());

	let mut out = Vec::with_capacity(18 + name_len(&sig.key_name) as usize + previous.map_or(0, |p| p.len()) + sig_start);
	write_sig_header(&mut out, sig);
	if let Some(previous) = previous {
		out.extend_from_slice(previous);
	}
	out.extend_from_slice(&header);
	out.extend_from_slice(&wire[HEADER_LEN..sig_start]);
	trace!(len = out.len(), "built signed message verification data");
	Ok(out)
}

/// Increments the ARCOUNT of the message header at the start of `wire`.
pub(crate) fn bump_arcount(wire: &mut [u8]) -> Result<(), DnssecError> {
	if wire.len() < HEADER_LEN { return Err(DnssecError::MalformedMessage); }
	let arcount = u16::from_be_bytes([wire[ARCOUNT_OFFSET], wire[ARCOUNT_OFFSET + 1]]);
	let arcount = arcount.checked_add(1).ok_or(DnssecError::MalformedMessage)?;
	wire[ARCOUNT_OFFSET..HEADER_LEN].copy_from_slice(&arcount.to_be_bytes());
	Ok(())
}
