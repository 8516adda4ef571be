//! Identifier and environment helpers.

use rand::seq::SliceRandom;

/// Monotonic id source.
///
/// An explicit state object rather than a process global: create one at
/// startup, pass it to whoever needs ids. Never resets.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique id, starting at 1.
    pub fn next_id(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }
}

/// The current user's name from `$USER`, or `"Anonymous"`.
pub fn username() -> String {
    std::env::var("USER").unwrap_or_else(|_| "Anonymous".to_string())
}

/// Character classes to draw random strings from.
#[derive(Debug, Clone, Copy)]
pub struct CharClasses {
    pub digits: bool,
    pub uppercase: bool,
    pub lowercase: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            digits: true,
            uppercase: true,
            lowercase: true,
        }
    }
}

/// A random string of `length` characters drawn from the enabled classes.
///
/// Returns `None` when every class is disabled.
pub fn random_string(length: usize, classes: CharClasses) -> Option<String> {
    let mut alphabet: Vec<char> = Vec::new();
    if classes.digits {
        alphabet.extend('0'..='9');
    }
    if classes.uppercase {
        alphabet.extend('A'..='Z');
    }
    if classes.lowercase {
        alphabet.extend('a'..='z');
    }
    if alphabet.is_empty() {
        return None;
    }

    let mut rng = rand::thread_rng();
    Some(
        (0..length)
            .map(|_| *alphabet.choose(&mut rng).unwrap_or(&'0'))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_username_is_nonempty() {
        assert!(!username().is_empty());
    }

    #[test]
    fn test_random_string_length() {
        let s = random_string(16, CharClasses::default()).unwrap();
        assert_eq!(s.chars().count(), 16);
    }

    #[test]
    fn test_random_string_respects_classes() {
        let digits_only = CharClasses {
            digits: true,
            uppercase: false,
            lowercase: false,
        };
        let s = random_string(32, digits_only).unwrap();
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_string_no_classes_is_none() {
        let none = CharClasses {
            digits: false,
            uppercase: false,
            lowercase: false,
        };
        assert!(random_string(10, none).is_none());
    }

    #[test]
    fn test_random_string_zero_length() {
        let s = random_string(0, CharClasses::default()).unwrap();
        assert!(s.is_empty());
    }
}
