//! Caesar shift over the four alphabets.
//!
//! Every letter moves within its own alphabet, wrapping modulo that
//! alphabet's length. Anything outside the four alphabets (digits,
//! punctuation, whitespace, other scripts) is copied through unchanged.

use crate::alphabet::Alphabet;

/// Shifts one character within `alphabet`.
///
/// Returns `c` unchanged if it does not belong to `alphabet`. The new index
/// uses Euclidean remainder, so negative amounts wrap backwards.
pub fn shift_char(c: char, amount: i64, alphabet: Alphabet) -> char {
    shift_wide(c, i128::from(amount), alphabet)
}

fn shift_wide(c: char, amount: i128, alphabet: Alphabet) -> char {
    let Some(index) = alphabet.index_of(c) else {
        return c;
    };
    let len = alphabet.len() as i128;
    let new_index = (index as i128 + amount).rem_euclid(len) as usize;
    alphabet.char_at(new_index).unwrap_or(c)
}

fn apply(text: &str, amount: i128) -> String {
    text.chars()
        .map(|c| match Alphabet::of(c) {
            Some(alphabet) => shift_wide(c, amount, alphabet),
            None => c,
        })
        .collect()
}

/// Encrypts `text` by moving each letter `shift` positions forward.
///
/// # Example
///
/// ```
/// use caesar_cipher::encrypt;
///
/// assert_eq!(encrypt("Привет, мир! Hello, world!", 3), "Тулезх, плу! Khoor, zruog!");
/// ```
pub fn encrypt(text: &str, shift: i64) -> String {
    apply(text, i128::from(shift))
}

/// Decrypts `text`; identical to encrypting with `-shift`.
///
/// The negation is done in `i128`, so `i64::MIN` round-trips too.
pub fn decrypt(text: &str, shift: i64) -> String {
    apply(text, -i128::from(shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_char_wraps_forward() {
        assert_eq!(shift_char('z', 1, Alphabet::EnglishLower), 'a');
        assert_eq!(shift_char('я', 1, Alphabet::RussianLower), 'а');
        assert_eq!(shift_char('Я', 2, Alphabet::RussianUpper), 'Б');
    }

    #[test]
    fn test_shift_char_wraps_backward() {
        assert_eq!(shift_char('a', -1, Alphabet::EnglishLower), 'z');
        assert_eq!(shift_char('А', -1, Alphabet::RussianUpper), 'Я');
        assert_eq!(shift_char('b', -53, Alphabet::EnglishLower), 'a');
    }

    #[test]
    fn test_shift_char_not_in_alphabet() {
        assert_eq!(shift_char('a', 5, Alphabet::RussianLower), 'a');
        assert_eq!(shift_char('!', 5, Alphabet::EnglishLower), '!');
    }

    #[test]
    fn test_yo_is_a_regular_position() {
        assert_eq!(shift_char('е', 1, Alphabet::RussianLower), 'ё');
        assert_eq!(shift_char('ё', 1, Alphabet::RussianLower), 'ж');
    }

    #[test]
    fn test_encrypt_mixed_text() {
        let encrypted = encrypt("Привет, мир! Hello, world!", 3);
        assert_eq!(encrypted, "Тулезх, плу! Khoor, zruog!");
        assert_eq!(decrypt(&encrypted, 3), "Привет, мир! Hello, world!");
    }

    #[test]
    fn test_encrypt_preserves_non_letters() {
        let text = "123 -- ?!\n\t«»";
        assert_eq!(encrypt(text, 17), text);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let text = "Съешь же ещё этих мягких французских булок. Jackdaws love my big sphinx.";
        assert_eq!(encrypt(text, 0), text);
    }

    #[test]
    fn test_period_per_alphabet() {
        assert_eq!(encrypt("абв", 33), "абв");
        assert_eq!(encrypt("abc", 26), "abc");
        // 33 is a no-op for Cyrillic only
        assert_eq!(encrypt("абв abc", 33), "абв hij");
    }

    #[test]
    fn test_extreme_shifts_round_trip() {
        let text = "Ёжик в тумане, Fog";
        for shift in [i64::MIN, i64::MIN + 1, i64::MAX, -1_000_000_007] {
            assert_eq!(decrypt(&encrypt(text, shift), shift), text);
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encrypt("", 5), "");
        assert_eq!(decrypt("", 5), "");
    }
}
