//! SIG(0) transaction signatures (RFC 2931), which sign a whole DNS message rather than an RRset.
//!
//! A SIG(0) is a SIG record appended as the last record of the additional section. It covers the
//! message as it was before the SIG was added, so a verifier needs to know where in the message
//! the SIG starts. [`Sig0Message`] keeps a message's wire bytes together with that offset.

use tracing::debug;

use crate::digest::{bump_arcount, digest_message, digest_signed_message, HEADER_LEN};
use crate::error::DnssecError;
use crate::keys::{check_compatible, PrivateKey};
use crate::rr::*;
use crate::ser::{name_len, write_name, LenPrefixedBuf, Writer};
use crate::validation::{check_key, check_time, create_signature, now, verify_signature};

/// A wire-format DNS message, and the SIG(0) at its end if it has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sig0Message {
	wire: Vec<u8>,
	sig: Option<(usize, Sig)>,
}

impl Sig0Message {
	/// Wraps an unsigned message.
	///
	/// Fails with [`DnssecError::MalformedMessage`] if `wire` is too short to hold a header.
	pub fn new(wire: Vec<u8>) -> Result<Self, DnssecError> {
		if wire.len() < HEADER_LEN { return Err(DnssecError::MalformedMessage); }
		Ok(Self { wire, sig: None })
	}

	/// Wraps a received message whose last record, starting at byte `sig_start`, is `sig`.
	///
	/// Parsing the message is left to the caller, who is trusted to pass the offset it found the
	/// SIG at.
	pub fn received(wire: Vec<u8>, sig_start: usize, sig: Sig) -> Result<Self, DnssecError> {
		if wire.len() < HEADER_LEN || sig_start < HEADER_LEN || sig_start > wire.len() {
			return Err(DnssecError::MalformedMessage);
		}
		Ok(Self { wire, sig: Some((sig_start, sig)) })
	}

	/// The message as it would be sent.
	pub fn wire(&self) -> &[u8] { &self.wire }

	/// Unwraps the message bytes.
	pub fn into_wire(self) -> Vec<u8> { self.wire }

	/// The offset of the SIG(0) record, if the message has one.
	pub fn sig_start(&self) -> Option<usize> { self.sig.as_ref().map(|(start, _)| *start) }

	/// The SIG(0) record, if the message has one.
	pub fn signature(&self) -> Option<&Sig> { self.sig.as_ref().map(|(_, sig)| sig) }

	/// Appends `sig` as the last additional record, incrementing ARCOUNT.
	///
	/// Fails with [`DnssecError::MalformedMessage`] if the message already has a SIG(0) or ARCOUNT
	/// is already at its maximum.
	pub fn append(&mut self, sig: &Sig) -> Result<(), DnssecError> {
		if self.sig.is_some() { return Err(DnssecError::MalformedMessage); }
		let mut rdata = Vec::new();
		Record::write_rdata(sig, &mut rdata);

		let mut record = LenPrefixedBuf::with_capacity(name_len(&sig.name) as usize + 10 + rdata.len());
		write_name(&mut record, &sig.name);
		record.write(&Sig::TYPE.to_be_bytes());
		record.write(&sig.class().to_be_bytes());
		record.write(&0u32.to_be_bytes());
		let len = record.reserve_len();
		record.write(&rdata);
		record.patch_len(len).map_err(|()| DnssecError::MalformedMessage)?;

		bump_arcount(&mut self.wire)?;
		let sig_start = self.wire.len();
		self.wire.extend_from_slice(&record.into_bytes());
		self.sig = Some((sig_start, sig.clone()));
		Ok(())
	}
}

/// Signs `message` with `private`, the private half of `key`, and appends the resulting SIG(0).
///
/// If this continues a chain of signed messages, `previous` is the SIG(0) of the message before
/// it, whose signature is then covered by this one too. Returns the appended SIG.
pub fn sign_message(message: &mut Sig0Message, key: &DnsKey, private: &PrivateKey,
	inception: u32, expiration: u32, previous: Option<&Sig>)
-> Result<Sig, DnssecError> {
	let alg = check_compatible(private.family(), key.alg)?;
	if message.sig.is_some() { return Err(DnssecError::MalformedMessage); }
	let sig = SigData {
		name: Name::root(), ty: 0, alg: key.alg, labels: 0, orig_ttl: 0,
		expiration, inception, key_tag: key.key_tag(), key_name: key.name.clone(),
	};
	let data = digest_message(&sig, message.wire(), previous.map(|p| &p.signature[..]));
	let sig = sig.into_sig(create_signature(&data, alg, private)?);
	message.append(&sig)?;
	debug!(alg = %alg, key_tag = sig.key_tag, signer = %sig.key_name, "signed message");
	Ok(sig)
}

/// Verifies the SIG(0) on `message` with `key` at the current system time.
///
/// See [`verify_message_at`].
pub fn verify_message(message: &Sig0Message, key: &DnsKey, previous: Option<&Sig>) -> Result<(), DnssecError> {
	verify_message_at(message, key, previous, now())
}

/// Verifies the SIG(0) on `message` with `key`, as if the current UNIX time were `now`.
///
/// Fails with [`DnssecError::NoSignaturePresent`] if the message was never signed, then runs the
/// same key, validity period and signature checks as [`crate::validation::verify_at`].
pub fn verify_message_at(message: &Sig0Message, key: &DnsKey, previous: Option<&Sig>, now: u64)
-> Result<(), DnssecError> {
	let sig = message.signature().ok_or_else(|| {
		debug!("message carries no SIG(0)");
		DnssecError::NoSignaturePresent
	})?;
	check_key(sig, key)?;
	check_time(sig, now)?;
	let data = digest_signed_message(sig, message, previous.map(|p| &p.signature[..]))?;
	verify_signature(&data, &sig.signature, key)
}
