//! Modifier bundle lexer
//!
//! Splits one bundle (a token with its hyphen already removed) into
//! modifier tokens. A doubling letter (`e`, `l`, `z`) immediately followed
//! by itself becomes a single doubled token, so `-aee` yields one `ee`
//! rather than an `e` and then an `ee`. Pairs are taken greedily from the
//! left: `eee` is `ee` then `e`. Only lowercase pairs double; `zZ` and
//! `ZZ` are two single letters.

use std::iter::Peekable;
use std::str::Chars;

use crate::modifier::DOUBLING_LETTERS;

/// One letter, or one doubled pair, from a modifier bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierToken {
    /// The letter as typed (first letter of a pair)
    pub typed: char,
    /// Lowercase form used for lookups
    pub letter: char,
    /// True for `ee`, `ll` and `zz`
    pub doubled: bool,
}

impl ModifierToken {
    fn single(typed: char) -> Self {
        Self {
            typed,
            letter: typed.to_ascii_lowercase(),
            doubled: false,
        }
    }
}

/// Iterator over the tokens of a bundle
pub struct BundleLexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> BundleLexer<'a> {
    pub fn new(bundle: &'a str) -> Self {
        Self {
            chars: bundle.chars().peekable(),
        }
    }
}

impl Iterator for BundleLexer<'_> {
    type Item = ModifierToken;

    fn next(&mut self) -> Option<Self::Item> {
        let mut token = ModifierToken::single(self.chars.next()?);

        if DOUBLING_LETTERS.contains(token.letter) {
            let repeats = self
                .chars
                .peek()
                .is_some_and(|&next| token.typed == token.letter && next == token.letter);
            if repeats {
                self.chars.next();
                token.doubled = true;
            }
        }

        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(bundle: &str) -> Vec<(char, bool)> {
        BundleLexer::new(bundle)
            .map(|t| (t.letter, t.doubled))
            .collect()
    }

    #[test]
    fn test_plain_letters() {
        assert_eq!(lex("rfu"), vec![('r', false), ('f', false), ('u', false)]);
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_doubled_letters() {
        assert_eq!(lex("ee"), vec![('e', true)]);
        assert_eq!(lex("ll"), vec![('l', true)]);
        assert_eq!(lex("zz"), vec![('z', true)]);
        assert_eq!(lex("rzzj"), vec![('r', false), ('z', true), ('j', false)]);
    }

    #[test]
    fn test_pairs_only_when_adjacent() {
        assert_eq!(lex("eze"), vec![('e', false), ('z', false), ('e', false)]);
    }

    #[test]
    fn test_triple_is_pair_then_single() {
        assert_eq!(lex("eee"), vec![('e', true), ('e', false)]);
        assert_eq!(lex("zzzz"), vec![('z', true), ('z', true)]);
    }

    #[test]
    fn test_non_doubling_letters_never_pair() {
        assert_eq!(lex("rr"), vec![('r', false), ('r', false)]);
    }

    #[test]
    fn test_uppercase_never_pairs() {
        for bundle in ["zZ", "Zz", "ZZ"] {
            assert_eq!(lex(bundle), vec![('z', false), ('z', false)], "bundle {bundle}");
        }
        assert_eq!(lex("EE"), vec![('e', false), ('e', false)]);
        assert_eq!(lex("LL"), vec![('l', false), ('l', false)]);

        let tokens: Vec<ModifierToken> = BundleLexer::new("E").collect();
        assert_eq!(tokens[0].typed, 'E');
        assert_eq!(tokens[0].letter, 'e');
    }
}
