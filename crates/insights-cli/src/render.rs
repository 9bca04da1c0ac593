//! Stdout rendering for CLI results.

use std::fmt::Write as _;

use insights_core::{AnalysisStrength, OutputFormat, ProfileSummary};
use serde_json::Value;

/// Render a profile summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn summary(summary: &ProfileSummary, output: OutputFormat) -> anyhow::Result<String> {
    if output == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(summary)?));
    }

    let word_count = summary
        .word_count
        .map_or_else(|| "-".to_string(), |n| n.to_string());

    let mut out = String::new();
    writeln!(out, "author:     {}", scalar(summary.author.as_ref()))?;
    writeln!(out, "source:     {}", scalar(summary.source.as_ref()))?;
    writeln!(out, "language:   {}", scalar(summary.language.as_ref()))?;
    writeln!(out, "word count: {word_count}")?;
    if !matches!(summary.word_count_message, None | Some(Value::Null)) {
        writeln!(
            out,
            "message:    {}",
            scalar(summary.word_count_message.as_ref())
        )?;
    }
    writeln!(out, "strength:   {}", summary.analysis_level)?;
    Ok(out)
}

/// Render the strength label alone.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn level(level: AnalysisStrength, output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(level.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&level)?),
    }
}

fn scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> ProfileSummary {
        ProfileSummary {
            author: Some(json!("author-42")),
            source: Some(json!(7)),
            language: Some(json!("en")),
            word_count: Some(4200),
            word_count_message: None,
            analysis_level: AnalysisStrength::Strong,
        }
    }

    #[test]
    fn summary_text_lists_fields() {
        let out = summary(&sample(), OutputFormat::Text).unwrap();
        assert!(out.contains("author:     author-42"), "got: {out}");
        assert!(out.contains("language:   en"), "got: {out}");
        assert!(out.contains("source:     7"), "got: {out}");
        assert!(out.contains("word count: 4200"), "got: {out}");
        assert!(out.contains("strength:   Strong"), "got: {out}");
        assert!(!out.contains("message:"), "got: {out}");
    }

    #[test]
    fn summary_text_marks_missing_values() {
        let empty = ProfileSummary {
            author: None,
            source: Some(Value::Null),
            language: None,
            word_count: None,
            word_count_message: Some(json!("too few words")),
            analysis_level: AnalysisStrength::VeryWeak,
        };
        let out = summary(&empty, OutputFormat::Text).unwrap();
        assert!(out.contains("author:     -"), "got: {out}");
        assert!(out.contains("source:     -"), "got: {out}");
        assert!(out.contains("word count: -"), "got: {out}");
        assert!(out.contains("message:    too few words"), "got: {out}");
        assert!(out.contains("strength:   Very Weak"), "got: {out}");
    }

    #[test]
    fn summary_text_renders_non_string_language() {
        let mut odd = sample();
        odd.language = Some(json!(3));
        odd.word_count_message = Some(Value::Null);
        let out = summary(&odd, OutputFormat::Text).unwrap();
        assert!(out.contains("language:   3"), "got: {out}");
        assert!(!out.contains("message:"), "got: {out}");
    }

    #[test]
    fn summary_json_is_parseable() {
        let out = summary(&sample(), OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["analysis_level"], json!("Strong"));
        assert_eq!(parsed["word_count"], json!(4200));
    }

    #[test]
    fn level_formats() {
        assert_eq!(
            level(AnalysisStrength::VeryStrong, OutputFormat::Text).unwrap(),
            "Very Strong"
        );
        assert_eq!(
            level(AnalysisStrength::Weak, OutputFormat::Json).unwrap(),
            "\"Weak\""
        );
    }
}
