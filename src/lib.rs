//! DNSSEC signs DNS data so that a resolver can check it really came from the zone's owner, no
//! matter which servers or caches it passed through on the way.
//!
//! This crate implements the signing side and the checking side of that, for individual RRsets
//! (RFC 4034/4035 RRSIGs) and for whole messages (RFC 2931 SIG(0)), along with everything those
//! need:
//!  * [`keys`] converts between the public key field of DNSKEY records and typed RSA, DSA and
//!    ECDSA keys.
//!  * [`sigcodec`] converts signatures between their DNS wire format and the DER form signature
//!    primitives use.
//!  * [`digest`] builds the canonical byte strings which are actually signed.
//!  * [`validation`] signs and verifies RRsets and computes DS digests, and [`sig0`] does the
//!    same for messages.
//!
//! Supported algorithms are listed in [`alg::Algorithm`]: RSA with MD5, SHA-1, SHA-256 and
//! SHA-512, DSA with SHA-1, and ECDSA on P-256 and P-384. DS digests may be SHA-1, SHA-256 or
//! SHA-384.
//!
//! Parsing DNS messages, fetching keys and deciding which keys to trust are all left to the
//! caller. Everything here is a pure computation over the data it is handed, safe to call from
//! any number of threads at once. Diagnostics are emitted through `tracing` at `debug` and
//! `trace` level.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod alg;
pub mod crypto;
pub mod digest;
pub mod error;
pub mod keys;
pub mod rr;
pub(crate) mod ser;
pub mod sig0;
pub mod sigcodec;
pub mod validation;

#[cfg(test)]
mod test;

pub use error::DnssecError;
