use cryptal_sm3::primitives::{ParseDigestError, U256};

#[test]
fn u256_words_round_trip() {
    let words = [
        0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210, 0, 1, 0xFFFF_FFFF, 0x8000_0000,
    ];

    let value = U256::from(words);

    assert_eq!(value.to_words(), words);
    assert_eq!(<[u32; 8]>::from(value), words);
    assert_eq!(value.to_bytes()[..4], [0x01, 0x23, 0x45, 0x67]);
}

#[test]
fn u256_hex_is_lowercase_big_endian() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xAB;
    bytes[31] = 0x0F;

    let hex = U256::from(bytes).to_hex();

    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("ab"));
    assert!(hex.ends_with("0f"));
    assert_eq!(U256::ZERO.to_hex(), "0".repeat(64));
}

#[test]
fn u256_parses_hex() {
    let text = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";
    let value: U256 = text.parse().unwrap();

    assert_eq!(value.to_hex(), text);
    assert_eq!(text.to_uppercase().parse::<U256>().unwrap(), value);
}

#[test]
fn u256_parse_rejects_bad_input() {
    assert_eq!(
        "abc".parse::<U256>(),
        Err(ParseDigestError::InvalidLength(3))
    );

    let mut text = "0".repeat(64);
    text.replace_range(10..11, "g");
    assert_eq!(
        text.parse::<U256>(),
        Err(ParseDigestError::InvalidCharacter(10))
    );
}

#[test]
fn u256_ordering_matches_hex_ordering() {
    let a: U256 = format!("{}1", "0".repeat(63)).parse().unwrap();
    let b: U256 = format!("1{}", "0".repeat(63)).parse().unwrap();

    assert!(a < b);
    assert!(a.to_hex() < b.to_hex());
}

#[test]
fn u256_hamming_distance() {
    let a = U256::ZERO;
    let b = U256::from([0xFFu8; 32]);

    assert_eq!(a.hamming_distance(&b), 256);
    assert_eq!(b.hamming_distance(&b), 0);
}
