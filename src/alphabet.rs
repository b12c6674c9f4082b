//! The four supported alphabets.
//!
//! Each alphabet is a fixed, ordered, duplicate-free table of characters.
//! A character's position in its table is what a shift moves. Lookup is
//! case- and script-sensitive: Cyrillic `А` and Latin `A` are different
//! characters and never map onto each other.

use std::fmt;

const RUSSIAN_UPPER: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П',
    'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

const RUSSIAN_LOWER: [char; 33] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п',
    'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

const ENGLISH_UPPER: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const ENGLISH_LOWER: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q',
    'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// One script/case combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `А`..`Я`, including `Ё` (33 letters).
    RussianUpper,
    /// `а`..`я`, including `ё` (33 letters).
    RussianLower,
    /// `A`..`Z` (26 letters).
    EnglishUpper,
    /// `a`..`z` (26 letters).
    EnglishLower,
}

impl Alphabet {
    /// All alphabets in lookup priority order.
    pub const ALL: [Alphabet; 4] = [
        Alphabet::RussianUpper,
        Alphabet::RussianLower,
        Alphabet::EnglishUpper,
        Alphabet::EnglishLower,
    ];

    /// Returns the ordered character table.
    pub const fn letters(self) -> &'static [char] {
        match self {
            Alphabet::RussianUpper => &RUSSIAN_UPPER,
            Alphabet::RussianLower => &RUSSIAN_LOWER,
            Alphabet::EnglishUpper => &ENGLISH_UPPER,
            Alphabet::EnglishLower => &ENGLISH_LOWER,
        }
    }

    /// Number of letters in the alphabet.
    pub const fn len(self) -> usize {
        self.letters().len()
    }

    /// Always false; every alphabet has letters.
    pub fn is_empty(self) -> bool {
        self.letters().is_empty()
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::RussianUpper => "Russian uppercase",
            Alphabet::RussianLower => "Russian lowercase",
            Alphabet::EnglishUpper => "English uppercase",
            Alphabet::EnglishLower => "English lowercase",
        }
    }

    /// Zero-based position of `c`, or `None` if `c` is not in this alphabet.
    pub const fn index_of(self, c: char) -> Option<usize> {
        let letters = self.letters();
        let mut i = 0;
        while i < letters.len() {
            if letters[i] == c {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Returns true if `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Letter at `index`, or `None` past the end.
    pub fn char_at(self, index: usize) -> Option<char> {
        self.letters().get(index).copied()
    }

    /// Finds the alphabet owning `c`, checked in [`Alphabet::ALL`] order.
    ///
    /// The tables are disjoint, so the order only documents the tie-break.
    pub fn of(c: char) -> Option<Alphabet> {
        Self::ALL.into_iter().find(|alphabet| alphabet.contains(c))
    }

    /// Longest alphabet length; the upper bound of the brute-force search.
    pub fn max_len() -> usize {
        Self::ALL.iter().map(|alphabet| alphabet.len()).max().unwrap_or(0)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
