use regex::Regex;
use std::sync::LazyLock;

/// Stored in place of a numeric answer that could not be extracted.
pub const EMPTY_ANSWER: &str = "empty";

static ANSWER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<answer>(.*?)</answer>").expect("answer block regex is invalid"));

static FLOAT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?").expect("float token regex is invalid")
});

/// First float literal in `text`, exactly as written.
#[must_use]
pub fn first_float_token(text: &str) -> Option<&str> {
    FLOAT_TOKEN.find(text).map(|token| token.as_str())
}

/// First float literal of the first `<answer>` block of a math solver response,
/// or [`EMPTY_ANSWER`].
#[must_use]
pub fn extract_numeric_answer(raw: &str) -> String {
    ANSWER_BLOCK
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .and_then(|block| first_float_token(block.as_str()))
        .unwrap_or(EMPTY_ANSWER)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_number_from_answer_block() {
        assert_eq!(extract_numeric_answer("... <answer>42.5 is it</answer> ..."), "42.5");
        assert_eq!(
            extract_numeric_answer("<thinking>3 * 7 = 21, not 20</thinking>\n<answer>\nx = -21\n</answer>"),
            "-21"
        );
    }

    #[test]
    fn test_first_block_wins() {
        assert_eq!(extract_numeric_answer("<answer>1e-3</answer><answer>7</answer>"), "1e-3");
    }

    #[test]
    fn test_missing_answer() {
        assert_eq!(extract_numeric_answer("no tags here"), EMPTY_ANSWER);
        assert_eq!(extract_numeric_answer("<answer>unknown</answer>"), EMPTY_ANSWER);
        assert_eq!(extract_numeric_answer("<answer>12 without end"), EMPTY_ANSWER);
    }

    #[test]
    fn test_float_tokens() {
        assert_eq!(first_float_token("about .5 litres"), Some(".5"));
        assert_eq!(first_float_token("+3. apples"), Some("+3."));
        assert_eq!(first_float_token("6.02E23 atoms"), Some("6.02E23"));
        assert_eq!(first_float_token("none"), None);
    }
}
