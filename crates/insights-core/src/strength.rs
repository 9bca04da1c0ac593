//! Analysis strength derived from the analysed word count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Word count at or above which an analysis is very strong.
pub const VERY_STRONG_MIN_WORDS: i64 = 6000;
/// Word count at or above which an analysis is strong.
pub const STRONG_MIN_WORDS: i64 = 3500;
/// Word count at or above which an analysis is weak rather than very weak.
pub const WEAK_MIN_WORDS: i64 = 100;

/// Qualitative confidence label for a profile. Ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnalysisStrength {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl AnalysisStrength {
    /// Classify a word count. A missing count sorts below every threshold.
    #[must_use]
    pub fn from_word_count(word_count: Option<i64>) -> Self {
        match word_count {
            Some(n) if n >= VERY_STRONG_MIN_WORDS => Self::VeryStrong,
            Some(n) if n >= STRONG_MIN_WORDS => Self::Strong,
            Some(n) if n >= WEAK_MIN_WORDS => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    /// `Strong` or `VeryStrong`.
    #[must_use]
    pub fn is_at_least_strong(self) -> bool {
        matches!(self, Self::Strong | Self::VeryStrong)
    }

    /// `Weak` or `VeryWeak`.
    #[must_use]
    pub fn is_at_most_weak(self) -> bool {
        matches!(self, Self::Weak | Self::VeryWeak)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for AnalysisStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Very Weak" => Ok(Self::VeryWeak),
            "Weak" => Ok(Self::Weak),
            "Strong" => Ok(Self::Strong),
            "Very Strong" => Ok(Self::VeryStrong),
            other => Err(format!("unknown analysis strength: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let cases = [
            (99, AnalysisStrength::VeryWeak),
            (100, AnalysisStrength::Weak),
            (3499, AnalysisStrength::Weak),
            (3500, AnalysisStrength::Strong),
            (5999, AnalysisStrength::Strong),
            (6000, AnalysisStrength::VeryStrong),
        ];
        for (count, expected) in cases {
            let got = AnalysisStrength::from_word_count(Some(count));
            assert_eq!(got, expected, "word_count {count}: expected {expected}, got {got}");
        }
    }

    #[test]
    fn missing_word_count_is_very_weak() {
        assert_eq!(
            AnalysisStrength::from_word_count(None),
            AnalysisStrength::VeryWeak
        );
    }

    #[test]
    fn negative_word_count_is_very_weak() {
        assert_eq!(
            AnalysisStrength::from_word_count(Some(-5)),
            AnalysisStrength::VeryWeak
        );
    }

    #[test]
    fn inclusive_predicates() {
        assert!(AnalysisStrength::VeryStrong.is_at_least_strong());
        assert!(AnalysisStrength::Strong.is_at_least_strong());
        assert!(!AnalysisStrength::Weak.is_at_least_strong());
        assert!(AnalysisStrength::VeryWeak.is_at_most_weak());
        assert!(AnalysisStrength::Weak.is_at_most_weak());
        assert!(!AnalysisStrength::Strong.is_at_most_weak());
    }

    #[test]
    fn display_uses_human_labels() {
        assert_eq!(AnalysisStrength::VeryWeak.to_string(), "Very Weak");
        assert_eq!(AnalysisStrength::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn from_str_accepts_display_labels() {
        for level in [
            AnalysisStrength::VeryWeak,
            AnalysisStrength::Weak,
            AnalysisStrength::Strong,
            AnalysisStrength::VeryStrong,
        ] {
            assert_eq!(level.to_string().parse::<AnalysisStrength>(), Ok(level));
        }
        assert!("very weak".parse::<AnalysisStrength>().is_err());
    }

    #[test]
    fn ordering_is_weakest_first() {
        assert!(AnalysisStrength::VeryWeak < AnalysisStrength::Weak);
        assert!(AnalysisStrength::Strong < AnalysisStrength::VeryStrong);
    }
}
