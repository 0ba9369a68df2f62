use console_base32::{ALPHABET, Base32Error, decode, decoded_len, encode, encoded_len};
use proptest::prelude::*;
use rand::Rng;

#[test]
fn random_buffer_round_trips() {
    let mut input = vec![0u8; 4096];
    rand::rng().fill(&mut input[..]);

    let encoded = encode(&input);
    let output = decode(&encoded).unwrap();

    assert_eq!(input, output);
}

#[test]
fn empty_buffer_round_trips() {
    assert_eq!(encode(&[]), "");
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn every_byte_value_survives_each_phase() {
    let input: Vec<u8> = (0..=u8::MAX).collect();
    for start in 0..5 {
        let slice = &input[start..];
        assert_eq!(decode(&encode(slice)).unwrap(), slice);
    }
}

#[test]
fn rejected_strings_fail_the_same_way_twice() {
    for input in ["A", "ABC", "ABCDEF", "ABCDEFGHI", "ABCDEFGHIJK", "a2", "MZXW6Y=="] {
        let first = decode(input).unwrap_err();
        let second = decode(input).unwrap_err();
        assert_eq!(first, second, "{input}");
        assert_eq!(first.to_string(), second.to_string(), "{input}");
    }
}

#[test]
fn padded_input_is_rejected() {
    // "MY======" is the padded form of "f".
    let err = decode("MY======").unwrap_err();
    assert_eq!(err, Base32Error::InvalidCharacter { character: '=', position: 2 });
}

proptest! {
    #[test]
    fn arbitrary_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&bytes);
        prop_assert_eq!(encoded.len(), encoded_len(bytes.len()));
        prop_assert_eq!(decoded_len(encoded.len()), Ok(bytes.len()));
        prop_assert!(encoded.bytes().all(|c| ALPHABET.contains(&c)));
        prop_assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn lengths_are_minimal_or_rejected(length in 0usize..10_000) {
        match decoded_len(length) {
            Ok(byte_count) => prop_assert_eq!(encoded_len(byte_count), length),
            Err(Base32Error::InvalidLength { length: l, .. }) => prop_assert_eq!(l, length),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
