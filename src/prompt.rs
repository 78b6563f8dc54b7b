//! Keyword handling and prompt construction.

use std::fmt;

/// System instruction sent with every request.
pub const SYSTEM_PROMPT: &str =
    "你是一个专业的中文冷笑话创作者，擅长创造有趣、幽默且适合社交分享的笑话。";

/// Number of jokes requested per call.
pub const JOKES_PER_REQUEST: usize = 3;

/// Maximum joke length asked of the model, in characters.
pub const MAX_JOKE_CHARS: usize = 50;

/// Styles offered by the selector. The first one is the default.
pub const STYLE_PRESETS: &[&str] = &["谐音", "双关", "反转", "无厘头", "职场", "校园"];

/// Joke style tag. Opaque: substituted into the prompt verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeStyle(String);

impl JokeStyle {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JokeStyle {
    fn default() -> Self {
        Self::new(STYLE_PRESETS[0])
    }
}

impl fmt::Display for JokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split user input into keywords.
///
/// Separators are `,` and the full-width `，`. Entries are trimmed and empty
/// ones dropped; duplicates are kept.
pub fn split_keywords(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the user prompt for a keyword list and style.
pub fn build_prompt(keywords: &[String], style: &JokeStyle) -> String {
    let joined = keywords.join("、");
    let format_lines = (1..=JOKES_PER_REQUEST)
        .map(|n| format!("{}. [笑话内容]", n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "请基于关键词\"{joined}\"创作{count}个{style}类型的中文冷笑话。\n\n\
         要求：\n\
         1. 每个笑话都要包含至少一个关键词\n\
         2. 适合社交媒体分享，长度控制在{max}字以内\n\
         3. 幽默有趣，容易理解\n\
         4. 避免敏感内容\n\n\
         请按以下格式输出：\n\
         {format_lines}",
        joined = joined,
        count = JOKES_PER_REQUEST,
        style = style,
        max = MAX_JOKE_CHARS,
        format_lines = format_lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords_trims_and_drops_empty() {
        assert_eq!(split_keywords(" 猫 , ,周一,"), vec!["猫", "周一"]);
        assert_eq!(split_keywords("猫，周一"), vec!["猫", "周一"]);
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" , ，  ").is_empty());
    }

    #[test]
    fn test_split_keywords_keeps_duplicates() {
        assert_eq!(split_keywords("猫,猫"), vec!["猫", "猫"]);
    }

    #[test]
    fn test_build_prompt_contains_keywords_and_constraints() {
        let prompt = build_prompt(
            &["猫".to_string(), "周一".to_string()],
            &JokeStyle::new("谐音"),
        );

        assert!(prompt.contains("\"猫、周一\""));
        assert!(prompt.contains("创作3个谐音类型的中文冷笑话"));
        assert!(prompt.contains("长度控制在50字以内"));
        assert!(prompt.contains("避免敏感内容"));
        assert!(prompt.ends_with("1. [笑话内容]\n2. [笑话内容]\n3. [笑话内容]"));
    }

    #[test]
    fn test_default_style_is_first_preset() {
        assert_eq!(JokeStyle::default().as_str(), STYLE_PRESETS[0]);
    }
}
