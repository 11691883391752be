use crate::utils::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Shuffles the interior letters of every word, leaving the first and last
/// letter of each word and everything between words untouched.
#[derive(Debug, Clone)]
pub struct TextScrambler {
    word_pattern: Regex,
    min_word_length: usize,
}

/// Result of scrambling a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledText {
    pub text: String,
    pub words: usize,
    pub scrambled_words: usize,
}

impl TextScrambler {
    pub fn new(min_word_length: usize) -> Result<Self> {
        Ok(Self {
            // Letters, numbers and underscore; combining marks stay outside words.
            word_pattern: Regex::new(r"[\p{L}\p{N}_]+")?,
            min_word_length,
        })
    }

    pub fn scramble_word<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        if chars.len() < self.min_word_length.max(2) {
            return word.to_string();
        }

        let last = chars.len() - 1;
        chars[1..last].shuffle(rng);
        chars.into_iter().collect()
    }

    pub fn scramble_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ScrambledText {
        let mut out = String::with_capacity(text.len());
        let mut words = 0;
        let mut scrambled_words = 0;
        let mut cursor = 0;

        for m in self.word_pattern.find_iter(text) {
            out.push_str(&text[cursor..m.start()]);

            let word = m.as_str();
            words += 1;
            if word.chars().count() >= self.min_word_length.max(2) {
                scrambled_words += 1;
            }
            out.push_str(&self.scramble_word(word, rng));

            cursor = m.end();
        }
        out.push_str(&text[cursor..]);

        ScrambledText {
            text: out,
            words,
            scrambled_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_short_words_unchanged() {
        let scrambler = TextScrambler::new(DEFAULT_MIN_WORD_LENGTH).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for word in ["", "a", "hi", "the"] {
            assert_eq!(scrambler.scramble_word(word, &mut rng), word);
        }
    }

    #[test]
    fn test_word_keeps_edges_and_letters() {
        let scrambler = TextScrambler::new(DEFAULT_MIN_WORD_LENGTH).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for word in ["hello", "scrambling", "żółwiątko"] {
            let scrambled = scrambler.scramble_word(word, &mut rng);
            assert_eq!(scrambled.chars().next(), word.chars().next());
            assert_eq!(scrambled.chars().last(), word.chars().last());
            assert_eq!(sorted_chars(&scrambled), sorted_chars(word));
        }
    }

    #[test]
    fn test_text_preserves_separators() {
        let scrambler = TextScrambler::new(DEFAULT_MIN_WORD_LENGTH).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let input = "Hello, world!\n  The quick brown fox...\tjumps";

        let result = scrambler.scramble_text(input, &mut rng);

        assert_eq!(result.words, 7);
        assert_eq!(result.scrambled_words, 5);
        assert_eq!(result.text.chars().count(), input.chars().count());

        let separators = |s: &str| -> String { s.chars().filter(|c| !c.is_alphanumeric()).collect() };
        assert_eq!(separators(&result.text), separators(input));
        assert!(result.text.starts_with('H'));
        assert!(result.text.contains(" The "));
        assert!(result.text.contains(" fox..."));
    }

    #[test]
    fn test_same_seed_same_output() {
        let scrambler = TextScrambler::new(DEFAULT_MIN_WORD_LENGTH).unwrap();
        let input = "Reproducible scrambling requires a deterministic generator";

        let a = scrambler.scramble_text(input, &mut StdRng::seed_from_u64(99));
        let b = scrambler.scramble_text(input, &mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }

    #[test]
    fn test_combining_marks_stay_with_base_letter() {
        let scrambler = TextScrambler::new(DEFAULT_MIN_WORD_LENGTH).unwrap();
        let input = "cafe\u{301} to\u{301}rtas";

        for seed in 0..50 {
            let result = scrambler.scramble_text(input, &mut StdRng::seed_from_u64(seed));

            assert_eq!(result.words, 3, "seed {}", seed);
            assert!(result.text.starts_with('c'));
            assert!(result.text.contains("e\u{301} to\u{301}r"), "seed {}: {:?}", seed, result.text);
            assert_eq!(sorted_chars(&result.text), sorted_chars(input));
        }
    }

    #[test]
    fn test_custom_min_word_length() {
        let scrambler = TextScrambler::new(20).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let input = "nothing here is long enough";

        let result = scrambler.scramble_text(input, &mut rng);
        assert_eq!(result.text, input);
        assert_eq!(result.scrambled_words, 0);
    }
}
