//! Implementations of the cryptographic primitives DNSSEC needs.
//!
//! Sadly, the choices for cryptographic primitives in Rust are somewhat limited. For us (RSA,
//! DSA and secp256r1/secp384r1) there's really only `ring` and `RustCrypto`.
//!
//! `ring` is great, and we use it wherever it covers what we need: ECDSA verification and the DS
//! record digests. However it only signs with keys it generated or parsed from PKCS#8, has no DSA
//! or MD5 at all, and refuses RSA moduli under 2048 bits, all of which DNSSEC still has in the
//! wild. For everything else we use the `RustCrypto` crates, handing them the raw key components
//! our DNSKEY codec produces.

pub mod bigint;
pub(crate) mod dsa;
pub(crate) mod ec;
pub(crate) mod hash;
pub(crate) mod rsa;
pub(crate) mod secp256r1;
pub(crate) mod secp384r1;
