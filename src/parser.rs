//! Extract candidate jokes from free-form completion text.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<ASCII digits>.<optional spaces><rest>`
static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s*(.+)$").expect("numbered line regex is valid"));

/// Parse numbered lines (`1. ...`) out of a completion.
///
/// Matching lines keep their original order. When nothing matches, the whole
/// trimmed text becomes the single candidate, so a non-blank input never
/// yields an empty list.
pub fn parse_jokes(content: &str) -> Vec<String> {
    let jokes: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| NUMBERED_LINE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|joke| !joke.is_empty())
        .collect();

    if !jokes.is_empty() {
        return jokes;
    }

    let whole = content.trim();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines() {
        assert_eq!(
            parse_jokes("1. 笑话A\n2. 笑话B\n3. 笑话C"),
            vec!["笑话A", "笑话B", "笑话C"]
        );
    }

    #[test]
    fn test_unformatted_text_falls_back_to_whole() {
        assert_eq!(parse_jokes("随便写的一句话"), vec!["随便写的一句话"]);
        assert_eq!(parse_jokes("  第一行\n第二行  "), vec!["第一行\n第二行"]);
    }

    #[test]
    fn test_mixed_lines_keep_only_numbered() {
        let text = "好的，这是三个笑话：\n\n1.猫为什么不上班？因为周一\n随口一提\n10.   最后一个  \n";
        assert_eq!(
            parse_jokes(text),
            vec!["猫为什么不上班？因为周一", "最后一个"]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(parse_jokes("1. A\r\n2. B\r\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_leading_whitespace_is_not_numbered() {
        // The pattern is anchored at line start.
        assert_eq!(parse_jokes("  1. A"), vec!["1. A"]);
    }

    #[test]
    fn test_number_without_dot_is_not_matched() {
        assert_eq!(parse_jokes("1) A\n2、B"), vec!["1) A\n2、B"]);
    }

    #[test]
    fn test_only_ascii_digits_number_a_line() {
        assert_eq!(parse_jokes("１. 全角\n٣. 阿拉伯"), vec!["１. 全角\n٣. 阿拉伯"]);
        assert_eq!(parse_jokes("１. 全角\n2. 半角"), vec!["半角"]);
    }

    #[test]
    fn test_blank_content() {
        assert!(parse_jokes("").is_empty());
        assert!(parse_jokes(" \n \n").is_empty());
    }

    #[test]
    fn test_non_blank_input_never_empty() {
        for input in ["x", "1.", "1. ", "\n\n1.\n", "abc\n1) d"] {
            assert!(!parse_jokes(input).is_empty(), "input {:?}", input);
        }
    }
}
