//! S8: a double codec must preserve bit-for-bit round-trip identity for
//! every finite value, `NaN`, and both signed zeros — `decode(encode(v))`
//! is identical to `v` down to the bit pattern, not just `==`.

use rust_gds::types::properties::{DoubleCodec, NoOpDoubleCodec};

#[test]
fn no_op_codec_round_trips_every_value_bit_for_bit() {
    let codec = NoOpDoubleCodec;

    for value in [
        0.0_f64,
        -0.0,
        1.0,
        -3.14,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MIN_POSITIVE,
        f64::MAX,
    ] {
        let encoded = codec.encode(value);
        assert_eq!(encoded.len(), codec.compressed_size());
        let decoded = codec.decode(&encoded);
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn distinct_zeros_keep_distinct_sign_bits() {
    let codec = NoOpDoubleCodec;
    let positive_zero = codec.decode(&codec.encode(0.0));
    let negative_zero = codec.decode(&codec.encode(-0.0));

    assert_eq!(positive_zero, negative_zero);
    assert_ne!(positive_zero.to_bits(), negative_zero.to_bits());
}
