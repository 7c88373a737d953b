//! Line tokenization.
//!
//! Splits one line of raw text into the words it contains. A token is the
//! text between runs of whitespace; tokens that contain a digit are treated
//! as numbers (dates, amounts, percentages) and only lose punctuation at
//! their edges, while all other tokens are split on periods to recover
//! missing spaces (`"end.Next"`) unless they look like an email address.
//!
//! Punctuation means the ASCII punctuation set. The ampersand is never
//! stripped from a word, a leading sign is kept on a number and a trailing
//! percent sign is kept on a number.

/// Characters kept at either edge of a word.
pub const WORD_KEEP: &[char] = &['&'];

/// Characters kept at the start of a number.
pub const NUMBER_KEEP_LEADING: &[char] = &['+', '-'];

/// Characters kept at the end of a number.
pub const NUMBER_KEEP_TRAILING: &[char] = &['%'];

/// How a whitespace-delimited token is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Contains at least one digit; edge punctuation stripped, never split.
    Numeric,
    /// Digit-free and email-shaped; kept whole.
    Email,
    /// Everything else; split on periods.
    Alphabetic,
}

/// Classifies a token. Digits are checked before the email shape, so
/// `phil.n2000@yahoo.co.uk` is numeric.
pub fn classify(token: &str) -> TokenKind {
    if contains_digit(token) {
        TokenKind::Numeric
    } else if looks_like_email(token) {
        TokenKind::Email
    } else {
        TokenKind::Alphabetic
    }
}

/// True if the token contains an ASCII digit anywhere.
pub fn contains_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// True if the token is non-whitespace text with an `@` that has at least
/// one character on each side.
pub fn looks_like_email(token: &str) -> bool {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return false;
    }

    token
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < token.len())
}

/// Strips ASCII punctuation from both edges of `token`, except characters
/// listed in `keep_leading` (at the start) and `keep_trailing` (at the end).
///
/// Stripping stops at the first kept or non-punctuation character, so
/// interior punctuation is never touched.
pub fn strip_edge_punctuation<'a>(
    token: &'a str,
    keep_leading: &[char],
    keep_trailing: &[char],
) -> &'a str {
    token
        .trim_start_matches(|c: char| is_strippable(c, keep_leading))
        .trim_end_matches(|c: char| is_strippable(c, keep_trailing))
}

/// Edge stripping for words: everything but `&`.
pub fn strip_word_punctuation(token: &str) -> &str {
    strip_edge_punctuation(token, WORD_KEEP, WORD_KEEP)
}

/// Edge stripping for numbers: keeps a leading `+`/`-` and a trailing `%`.
pub fn strip_number_punctuation(token: &str) -> &str {
    strip_edge_punctuation(token, NUMBER_KEEP_LEADING, NUMBER_KEEP_TRAILING)
}

fn is_strippable(c: char, keep: &[char]) -> bool {
    c.is_ascii_punctuation() && !keep.contains(&c)
}

/// Returns the words found in one line, in order.
///
/// Never fails; a token made only of punctuation yields no words.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for token in line.split_whitespace() {
        match classify(token) {
            TokenKind::Numeric => push_word(&mut words, strip_number_punctuation(token)),
            TokenKind::Email => push_word(&mut words, strip_word_punctuation(token)),
            TokenKind::Alphabetic => {
                for piece in token.split('.') {
                    push_word(&mut words, strip_word_punctuation(piece));
                }
            }
        }
    }

    words
}

/// Length of a word in characters.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

fn push_word<'a>(words: &mut Vec<&'a str>, candidate: &'a str) {
    if !candidate.is_empty() {
        words.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(line: &str) -> Vec<usize> {
        tokenize_line(line).into_iter().map(word_length).collect()
    }

    #[test]
    fn test_sample_sentence() {
        let line = "Hello world & good morning. The date is 18/05/2016";
        assert_eq!(
            tokenize_line(line),
            vec!["Hello", "world", "&", "good", "morning", "The", "date", "is", "18/05/2016"]
        );
        assert_eq!(lengths(line), vec![5, 5, 1, 4, 7, 3, 4, 2, 10]);
    }

    #[test]
    fn test_whitespace_only_lines() {
        assert!(tokenize_line("").is_empty());
        assert!(tokenize_line("   \t  ").is_empty());
        assert_eq!(tokenize_line("  one  \ttwo "), vec!["one", "two"]);
    }

    #[test]
    fn test_period_splits_missing_space() {
        assert_eq!(tokenize_line("three.(Four"), vec!["three", "Four"]);
        assert_eq!(tokenize_line("first.second"), vec!["first", "second"]);
        assert_eq!(tokenize_line("done."), vec!["done"]);
        assert_eq!(tokenize_line(".leading"), vec!["leading"]);
    }

    #[test]
    fn test_consecutive_periods_yield_no_empty_words() {
        assert_eq!(tokenize_line("dots....dots"), vec!["dots", "dots"]);
        assert_eq!(tokenize_line("aaa.bbb.ccc.ddd").len(), 4);
        assert!(tokenize_line("....").is_empty());
    }

    #[test]
    fn test_apostrophes_and_interior_punctuation_kept() {
        assert_eq!(tokenize_line("\"boy's\""), vec!["boy's"]);
        assert_eq!(tokenize_line("well-known,"), vec!["well-known"]);
        assert_eq!(tokenize_line("(rock&roll)"), vec!["rock&roll"]);
    }

    #[test]
    fn test_ampersand_never_stripped() {
        assert_eq!(tokenize_line("&"), vec!["&"]);
        assert_eq!(tokenize_line("(&)"), vec!["&"]);
        assert_eq!(tokenize_line("&co."), vec!["&co"]);
        assert_eq!(tokenize_line("AT&"), vec!["AT&"]);
    }

    #[test]
    fn test_pure_punctuation_yields_nothing() {
        assert!(tokenize_line("...").is_empty());
        assert!(tokenize_line("--- !!! ?").is_empty());
        assert!(tokenize_line("\"\"").is_empty());
    }

    #[test]
    fn test_email_kept_whole() {
        assert_eq!(tokenize_line("bob@example.com"), vec!["bob@example.com"]);
        assert_eq!(tokenize_line("(bob@example.com)."), vec!["bob@example.com"]);
    }

    #[test]
    fn test_digit_bearing_email_is_numeric() {
        assert_eq!(classify("phil.n2000@yahoo.co.uk"), TokenKind::Numeric);
        assert_eq!(
            tokenize_line("phil.n2000@yahoo.co.uk"),
            vec!["phil.n2000@yahoo.co.uk"]
        );
    }

    #[test]
    fn test_at_sign_at_edge_is_not_email() {
        assert!(!looks_like_email("@handle"));
        assert!(!looks_like_email("handle@"));
        assert!(!looks_like_email("@"));
        assert!(!looks_like_email(""));
        assert_eq!(tokenize_line("@handle"), vec!["handle"]);
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(looks_like_email("a@@b"));
        assert!(!looks_like_email("plain"));
        assert!(!looks_like_email("a @b"));
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("V9.0"));
        assert!(contains_digit("2000"));
        assert!(!contains_digit("nine"));
        assert!(!contains_digit(""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("hello"), TokenKind::Alphabetic);
        assert_eq!(classify("a@b.com"), TokenKind::Email);
        assert_eq!(classify("55%"), TokenKind::Numeric);
    }

    #[test]
    fn test_number_punctuation() {
        let cases = [
            ("100", "100"),
            ("100.9", "100.9"),
            ("+200", "+200"),
            ("£300.00", "£300.00"),
            ("55%", "55%"),
            ("2000/01/01", "2000/01/01"),
            ("01-01-2000", "01-01-2000"),
            ("1000,999.0", "1000,999.0"),
            ("-1000,999.0", "-1000,999.0"),
            ("V9.0", "V9.0"),
            ("(9999)", "9999"),
            ("****1234***", "1234"),
            (">>>>11111<<<<<", "11111"),
        ];

        for (input, expected) in cases {
            assert_eq!(strip_number_punctuation(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_numbers_are_not_split_on_periods() {
        assert_eq!(tokenize_line("100.9 01-jun-2000."), vec!["100.9", "01-jun-2000"]);
        assert_eq!(tokenize_line("(55%)."), vec!["55%"]);
    }

    #[test]
    fn test_sign_kept_only_at_start() {
        assert_eq!(strip_number_punctuation("-5-"), "-5");
        assert_eq!(strip_number_punctuation("(+5)"), "+5");
        assert_eq!(strip_number_punctuation("%5%"), "5%");
    }

    #[test]
    fn test_strip_edge_punctuation_custom_keep() {
        assert_eq!(strip_edge_punctuation("#tag#", &['#'], &[]), "#tag");
        assert_eq!(strip_edge_punctuation("!!", &[], &[]), "");
        assert_eq!(strip_edge_punctuation("a.b", &[], &[]), "a.b");
    }

    #[test]
    fn test_word_length_counts_characters() {
        assert_eq!(word_length("café"), 4);
        assert_eq!(word_length("£300.00"), 7);
    }
}
