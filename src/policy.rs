//! Password policy constants and static lookup tables.

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 12;

/// Dictionary entries shorter than this are dropped at load time.
pub const MIN_DICT_WORD_LEN: usize = 4;

/// Leet substitutions tolerated before the normalized dictionary check stops.
pub const MAX_LEET_SUBSTITUTIONS: usize = 2;

/// Passwords at least this long are exempt from the character-class rule.
pub const DIVERSITY_EXEMPT_LENGTH: usize = 20;

/// Character classes required for passwords shorter than [`DIVERSITY_EXEMPT_LENGTH`].
pub const MIN_CHAR_CLASSES: usize = 3;

/// Shortest run of one repeated character that is reported.
pub const MIN_REPEAT_RUN: usize = 4;

/// Window lengths scanned over each weak sequence.
pub const SEQUENCE_WINDOWS: [usize; 2] = [4, 5];

/// Well-known sequences whose substrings (and their reversals) are rejected.
pub const WEAK_SEQUENCES: [&str; 4] = [
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiopasdfghjklzxcvbnm",
    "1234567890",
    "password",
];

/// Substitution characters and the letters they stand in for.
pub const LEET_MAP: [(char, char); 10] = [
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('@', 'a'),
    ('$', 's'),
    ('!', 'i'),
    ('9', 'g'),
];

/// Returns the letter a leet character stands for, if any.
pub fn leet_letter(c: char) -> Option<char> {
    LEET_MAP
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}
