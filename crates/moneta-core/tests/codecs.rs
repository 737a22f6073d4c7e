//! Cross-module codec tests over the public API, including randomized
//! round-trips for both codecs across every shipped wordset.

use rand::Rng;

use moneta_core::{base58, mnemonic, wordsets, CodecError};

const ADDRESS: &str = "479cG5opa54beQWSyqNoWw5tna9sHUNmMTtiFqLPaUhDevpJ2YLwXAggSx5ePdeFrYF8cdbmVRSmp1Kn3t4Y9kFu7rZ7pFw";
const ADDRESS_HEX: &str = "1291d1848617ec87cf20e14b79c804481d40a2a6d4d121f8a0c633222882c350e2c17cc9705ba529ebd73455e33e8b39547c43f780e04b2b01ef7c8c5de2743c3cc110150e";

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn base58_round_trips_random_buffers() {
    for _ in 0..200 {
        let len = rand::thread_rng().gen_range(0..100);
        let data = random_bytes(len);
        let encoded = base58::encode(&data);
        assert_eq!(
            base58::decode(&encoded).expect("encoded data must decode"),
            data,
            "length {len}"
        );
    }
}

#[test]
fn base58_length_is_a_function_of_input_length() {
    for len in 0..=80usize {
        let expected = len / base58::FULL_BLOCK_SIZE * base58::FULL_ENCODED_BLOCK_SIZE
            + base58::ENCODED_BLOCK_SIZES[len % base58::FULL_BLOCK_SIZE];
        assert_eq!(base58::encode(&random_bytes(len)).len(), expected);
    }
}

#[test]
fn base58_hex_boundary_round_trips_an_address() {
    assert_eq!(base58::encode_hex(ADDRESS_HEX).unwrap(), ADDRESS);
    assert_eq!(base58::decode_hex(ADDRESS).unwrap(), ADDRESS_HEX);
}

#[test]
fn base58_rejects_garbage_without_truncating() {
    // Any failure must surface as an error, never as best-effort bytes.
    assert!(base58::decode("479cG5opa54b!").is_err());
    assert_eq!(
        base58::decode("479cG5opa54b").unwrap_err(),
        CodecError::InvalidLength(1)
    );
}

#[test]
fn mnemonic_round_trips_every_wordset() {
    for name in wordsets::list_wordset_names() {
        let wordset = wordsets::get_wordset(Some(name)).unwrap();
        for chunks in [1usize, 3, 8] {
            let seed = hex::encode(random_bytes(chunks * 4));
            let words = mnemonic::encode_with_checksum(&seed, Some(name))
                .expect("aligned seed must encode");
            assert_eq!(words.len(), chunks * 3 + 1);
            assert!(
                mnemonic::validate_checksum(&words, wordset.prefix_length).unwrap(),
                "{name}: fresh phrase must carry a valid checksum"
            );
            assert_eq!(
                mnemonic::decode(&words, Some(name)).expect("phrase must decode"),
                seed,
                "{name}"
            );
        }
        // Abbreviated entry: the unique prefix is enough to decode.
        let seed = hex::encode(random_bytes(32));
        let words = mnemonic::encode_with_checksum(&seed, Some(name)).unwrap();
        let short: Vec<String> = words
            .iter()
            .map(|w| w.chars().take(wordset.prefix_length).collect())
            .collect();
        assert_eq!(mnemonic::decode(&short, Some(name)).unwrap(), seed);
    }
}

#[test]
fn mnemonic_checksum_detects_single_word_mutations() {
    // CRC collisions are possible in principle, so require failures across
    // the batch rather than for every single trial.
    let mut failures = 0;
    for _ in 0..20 {
        let seed = hex::encode(random_bytes(32));
        let mut words = mnemonic::encode_with_checksum(&seed, Some("english")).unwrap();
        let original = words[0].clone();
        words[0] = if original == "abbey" { "zebra" } else { "abbey" }.to_owned();
        if !mnemonic::validate_checksum(&words, 3).unwrap() {
            failures += 1;
        }
    }
    assert!(
        failures >= 19,
        "mutations evaded the checksum {failures}/20 times"
    );
}

#[test]
fn mnemonic_wordset_detection_is_exclusive() {
    let seed = hex::encode(random_bytes(32));
    for name in wordsets::list_wordset_names() {
        let words = mnemonic::encode(&seed, Some(name)).unwrap();
        match mnemonic::find_wordset_by_mnemonic(&words) {
            Ok(Some(found)) => assert_eq!(found, name),
            // A random seed can in principle land only on shared words;
            // ambiguity is the one acceptable alternative, never a wrong set.
            Err(CodecError::AmbiguousWordset(_)) => {}
            other => panic!("{name}: unexpected detection result {other:?}"),
        }
    }
}

#[test]
fn mnemonic_strictness_end_to_end() {
    let words = mnemonic::encode_with_checksum("00000000", None).unwrap();
    assert_eq!(words, vec!["abbey"; 4]);
    assert_eq!(mnemonic::decode(&words, None).unwrap(), "00000000");

    // Dropping the checksum word must be reported, not guessed around.
    assert_eq!(
        mnemonic::decode(&words[..3], None).unwrap_err(),
        CodecError::MissingChecksum
    );
    // A foreign word must name itself in the error.
    let mut broken = words.clone();
    broken[1] = "xylophone".to_owned();
    assert_eq!(
        mnemonic::decode(&broken, None).unwrap_err(),
        CodecError::InvalidWord("xylophone".into())
    );
}
