//! Integration tests for the Caesar cipher
//!
//! Covers the public API end to end:
//! - Encryption / decryption over mixed Cyrillic and Latin text
//! - Brute-force recovery with a known plaintext sample
//! - Frequency analysis on Russian prose
//! - File-level operations

use caesar_cipher::{
    brute_force, decrypt, encrypt, estimate_shift, files, Alphabet, BruteForceError,
    BruteForceSolver, CaesarError, FrequencyAnalyzer, FrequencyError,
};

const ONEGIN: &str = "Мой дядя самых честных правил, когда не в шутку занемог, он уважать себя \
заставил и лучше выдумать не мог. Его пример другим наука; но, боже мой, какая скука с больным \
сидеть и день и ночь, не отходя ни шагу прочь! Какое низкое коварство полуживого забавлять, \
ему подушки поправлять, печально подносить лекарство, вздыхать и думать про себя: когда же \
чёрт возьмёт тебя!";

/// Test the documented mixed-script example
#[test]
fn test_hello_world_shift_3() {
    let original = "Привет, мир! Hello, world!";
    let encrypted = encrypt(original, 3);

    assert_eq!(encrypted, "Тулезх, плу! Khoor, zruog!");
    assert_eq!(decrypt(&encrypted, 3), original);
}

/// Test that every letter stays in its own alphabet, position by position
#[test]
fn test_each_letter_moves_within_its_alphabet() {
    let original = "Привет, мир! Hello, world!";
    let encrypted = encrypt(original, 3);

    for (before, after) in original.chars().zip(encrypted.chars()) {
        match Alphabet::of(before) {
            Some(alphabet) => {
                let from = alphabet.index_of(before).unwrap();
                let to = alphabet.index_of(after).unwrap();
                assert_eq!(to, (from + 3) % alphabet.len());
            }
            None => assert_eq!(before, after),
        }
    }
}

/// Test decryption is encryption with the negated shift
#[test]
fn test_decrypt_is_negative_encrypt() {
    for shift in [-40, -1, 0, 1, 7, 33, 100] {
        assert_eq!(decrypt(ONEGIN, shift), encrypt(ONEGIN, -shift));
    }
}

/// Test brute force recovers every planted shift from a full-text sample
#[test]
fn test_brute_force_finds_planted_shift() {
    let plain = format!("{ONEGIN} Eugene Onegin, chapter one.");
    for shift in 1..=33 {
        let ciphertext = encrypt(&plain, shift);
        let found = brute_force(&ciphertext, Some(&plain)).unwrap();
        assert_eq!(found.shift, shift, "wrong shift for planted {shift}");
        assert_eq!(found.plaintext, plain);
    }
}

/// Test that a sample longer than the probe only needs its first 100 characters to match
#[test]
fn test_brute_force_long_sample_uses_prefix() {
    let ciphertext = encrypt(ONEGIN, 21);
    let sample: String = ONEGIN.chars().take(150).collect();
    let found = brute_force(&ciphertext, Some(&sample)).unwrap();
    assert_eq!(found.shift, 21);
}

/// Test brute force failure modes
#[test]
fn test_brute_force_failures() {
    let ciphertext = encrypt(ONEGIN, 5);

    assert_eq!(brute_force(&ciphertext, None), Err(BruteForceError::MissingSample));
    assert_eq!(
        brute_force(&ciphertext, Some("Я помню чудное мгновенье")),
        Err(BruteForceError::Exhausted { tried: 33 })
    );
}

/// Test frequency analysis on unshifted and shifted prose
#[test]
fn test_frequency_analysis_recovers_shift() {
    let estimate = estimate_shift(ONEGIN).unwrap();
    assert_eq!(estimate.letter, 'о');
    assert_eq!(estimate.shift, 0);

    for shift in 0..33 {
        let ciphertext = encrypt(ONEGIN, shift);
        let estimate = estimate_shift(&ciphertext).unwrap();
        assert_eq!(estimate.shift, shift);
        assert_eq!(decrypt(&ciphertext, estimate.shift), ONEGIN);
    }
}

/// Test frequency analysis fails explicitly on English text
#[test]
fn test_frequency_analysis_english_is_error() {
    let result = estimate_shift("Peter Piper picked a peck of pickled peppers");
    assert_eq!(
        result,
        Err(FrequencyError::NotInReferenceAlphabet { letter: 'e' })
    );
}

/// File-level operations
mod file_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Test a full encrypt -> brute force -> frequency flow through files
    #[test]
    fn test_file_flow() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let cipher = dir.path().join("cipher.txt");
        let sample = dir.path().join("sample.txt");
        let recovered = dir.path().join("recovered.txt");

        fs::write(&plain, ONEGIN).unwrap();
        fs::write(&sample, "Мой дядя самых честных правил").unwrap();

        files::encrypt_file(&plain, &cipher, 13).unwrap();
        assert_ne!(fs::read_to_string(&cipher).unwrap(), ONEGIN);

        let solver = BruteForceSolver::default();
        let found = files::brute_force_file(&solver, &cipher, Some(&sample), &recovered).unwrap();
        assert_eq!(found.shift, 13);
        assert_eq!(fs::read_to_string(&recovered).unwrap(), ONEGIN);

        let estimate = files::estimate_file_shift(&FrequencyAnalyzer::default(), &cipher).unwrap();
        assert_eq!(estimate.shift, 13);
    }

    /// Test that a missing input is reported, not panicked on
    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let result = files::decrypt_file(&missing, &dir.path().join("out.txt"), 1);
        assert!(matches!(result, Err(CaesarError::FileNotFound(_))));
    }
}
