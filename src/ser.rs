//! Serialization primitives shared by the record types, the key codec and the digest builders.

use crate::rr::Name;

pub(crate) fn read_u8(inp: &mut &[u8]) -> Result<u8, ()> {
	let res = *inp.get(0).ok_or(())?;
	*inp = &inp[1..];
	Ok(res)
}
pub(crate) fn read_u16(inp: &mut &[u8]) -> Result<u16, ()> {
	if inp.len() < 2 { return Err(()); }
	let mut bytes = [0; 2];
	bytes.copy_from_slice(&inp[..2]);
	*inp = &inp[2..];
	Ok(u16::from_be_bytes(bytes))
}
pub(crate) fn read_bytes<'a>(inp: &mut &'a [u8], len: usize) -> Result<&'a [u8], ()> {
	if inp.len() < len { return Err(()); }
	let res = &inp[..len];
	*inp = &inp[len..];
	Ok(res)
}

pub(crate) trait Writer { fn write(&mut self, buf: &[u8]); }
impl Writer for Vec<u8> { fn write(&mut self, buf: &[u8]) { self.extend_from_slice(buf); } }
impl Writer for ring::digest::Context { fn write(&mut self, buf: &[u8]) { self.update(buf); } }
impl Writer for LenPrefixedBuf { fn write(&mut self, buf: &[u8]) { self.buf.extend_from_slice(buf); } }

/// Writes the canonical (lowercase, uncompressed) wire encoding of `name`.
pub(crate) fn write_name<W: Writer>(out: &mut W, name: &str) {
	let canonical_name = name.to_ascii_lowercase();
	if canonical_name == "." {
		out.write(&[0]);
	} else {
		for label in canonical_name.split(".") {
			out.write(&(label.len() as u8).to_be_bytes());
			out.write(label.as_bytes());
		}
	}
}
pub(crate) fn name_len(name: &Name) -> u16 {
	if name.as_str() == "." {
		1
	} else {
		let mut res = 0;
		for label in name.split(".") {
			res += 1 + label.len();
		}
		res as u16
	}
}

/// A reserved two-byte length field in a [`LenPrefixedBuf`].
///
/// Deliberately neither `Clone` nor `Copy`, so each reservation is patched at most once.
#[must_use]
pub(crate) struct LenSlot(usize);

/// An append-only byte buffer which can reserve a u16 length field and fill it in once the
/// data it prefixes has been written.
///
/// The patched value is always the number of bytes appended between [`Self::reserve_len`] and
/// [`Self::patch_len`].
pub(crate) struct LenPrefixedBuf {
	buf: Vec<u8>,
}
impl LenPrefixedBuf {
	pub(crate) fn with_capacity(cap: usize) -> Self {
		Self { buf: Vec::with_capacity(cap) }
	}
	pub(crate) fn reserve_len(&mut self) -> LenSlot {
		let pos = self.buf.len();
		self.buf.extend_from_slice(&[0, 0]);
		LenSlot(pos)
	}
	/// Fills in `slot` with the length of everything written since it was reserved.
	///
	/// Fails if more than [`u16::MAX`] bytes were written, which no DNS RDATA can be.
	pub(crate) fn patch_len(&mut self, slot: LenSlot) -> Result<(), ()> {
		let len: u16 = (self.buf.len() - slot.0 - 2).try_into().map_err(|_| ())?;
		self.buf[slot.0..slot.0 + 2].copy_from_slice(&len.to_be_bytes());
		Ok(())
	}
	pub(crate) fn into_bytes(self) -> Vec<u8> { self.buf }
}
