use cryptal_sm3::hash::sm3;
use cryptal_sm3::hash::sm3::SM3_INIT;
use cryptal_sm3::hash::sm3::extension::{extend, glue_padding, state_from_digest};
use cryptal_sm3::hash::sm3::padding::pad;
use cryptal_sm3::primitives::U256;

fn forged_message(secret: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut message = secret.to_vec();
    message.extend_from_slice(&glue_padding(secret.len()).unwrap());
    message.extend_from_slice(suffix);
    message
}

#[test]
fn extension_matches_direct_hash() {
    let secret = b"secret_key=123";
    let suffix = b"&user=admin&role=root";

    let published = sm3(secret).unwrap();
    let extension = extend(&published, secret.len(), suffix).unwrap();

    let expected = sm3(&forged_message(secret, suffix)).unwrap();

    assert_eq!(extension.digest, expected);
}

#[test]
fn forged_suffix_is_glue_then_suffix() {
    let secret = b"0123456789";
    let suffix = b"appended";

    let extension = extend(&sm3(secret).unwrap(), secret.len(), suffix).unwrap();

    let mut full = secret.to_vec();
    full.extend_from_slice(&extension.forged_suffix);

    assert_eq!(full, forged_message(secret, suffix));
    assert_eq!(sm3(&full).unwrap(), extension.digest);
}

#[test]
fn extension_across_secret_and_suffix_lengths() {
    for secret_len in [0usize, 1, 31, 55, 56, 63, 64, 65, 130] {
        for suffix_len in [0usize, 1, 8, 55, 56, 64, 100] {
            let secret = vec![0x5Cu8; secret_len];
            let suffix = vec![0xA3u8; suffix_len];

            let extension = extend(&sm3(&secret).unwrap(), secret_len, &suffix).unwrap();
            let expected = sm3(&forged_message(&secret, &suffix)).unwrap();

            assert_eq!(
                extension.digest, expected,
                "secret_len {secret_len}, suffix_len {suffix_len}"
            );
        }
    }
}

#[test]
fn glue_padding_completes_the_padded_message() {
    for len in [0usize, 3, 55, 56, 64, 200] {
        let message = vec![1u8; len];
        let glue = glue_padding(len).unwrap();

        assert_eq!(&pad(&message).unwrap()[len..], &glue[..]);
    }
}

#[test]
fn state_round_trips_through_digest() {
    let digest = U256::from(SM3_INIT);

    assert_eq!(state_from_digest(&digest), SM3_INIT);
}

#[test]
fn wrong_original_length_breaks_the_forgery() {
    let secret = b"secret_key=123";
    let suffix = b"&admin=1";

    let published = sm3(secret).unwrap();
    let wrong = extend(&published, secret.len() + 64, suffix).unwrap();

    assert_ne!(wrong.digest, sm3(&forged_message(secret, suffix)).unwrap());
}
