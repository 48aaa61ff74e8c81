//! secp256r1 (NIST P-256) domain parameters, as used by DNSSEC algorithm 13.

use crate::alg::CurveParams;

pub(crate) const PARAMS: CurveParams = CurveParams {
	field_width: 32,
	p: &hex_lit::hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
	a: &hex_lit::hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
	b: &hex_lit::hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
	gx: &hex_lit::hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
	gy: &hex_lit::hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
	n: &hex_lit::hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
};
