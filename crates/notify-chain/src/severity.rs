//! Severities, Filters and Notifications

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Classification tag carried by every notification
///
/// Ordering carries no meaning; severities are only tested for membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Severity {
    /// Accepts nothing when placed in a filter
    None,
    Info,
    Debug,
    Warning,
    Error,
    FunctionalMessage,
    FunctionalError,
    /// Wildcard: a filter holding it accepts every severity
    All,
}

impl Severity {
    /// Every severity, in declaration order
    pub const VARIANTS: [Severity; 8] = [
        Severity::None,
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
        Severity::FunctionalMessage,
        Severity::FunctionalError,
        Severity::All,
    ];

    /// Canonical upper-case token
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::FunctionalMessage => "FUNCTIONAL_MESSAGE",
            Severity::FunctionalError => "FUNCTIONAL_ERROR",
            Severity::All => "ALL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Severity::VARIANTS
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ChainError::UnknownSeverity(token.to_string()))
    }
}

impl TryFrom<String> for Severity {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self, ChainError> {
        value.parse()
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

/// Set of severities a handler is willing to act on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityFilter {
    levels: BTreeSet<Severity>,
}

impl SeverityFilter {
    /// Create a filter from the given severities
    pub fn new(levels: impl IntoIterator<Item = Severity>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    /// Filter holding only the wildcard
    pub fn all() -> Self {
        Self::new([Severity::All])
    }

    /// Filter that never matches
    pub fn none() -> Self {
        Self::new([Severity::None])
    }

    /// Whether a notification of `severity` should be emitted.
    ///
    /// `NONE` inside the set is inert: it never matches, not even a
    /// notification tagged `NONE`. Only the wildcard matches everything.
    pub fn accepts(&self, severity: Severity) -> bool {
        if self.is_wildcard() {
            return true;
        }
        severity != Severity::None && self.levels.contains(&severity)
    }

    /// Whether the set contains the wildcard
    pub fn is_wildcard(&self) -> bool {
        self.levels.contains(&Severity::All)
    }

    /// Configured severities
    pub fn levels(&self) -> impl Iterator<Item = Severity> + '_ {
        self.levels.iter().copied()
    }
}

impl FromIterator<Severity> for SeverityFilter {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.levels.iter().map(Severity::as_str).collect();
        write!(f, "{{{}}}", tokens.join(", "))
    }
}

/// Immutable message and severity pair travelling down a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity tag
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(
            " Functional_Error ".parse::<Severity>().unwrap(),
            Severity::FunctionalError
        );
        assert!(matches!(
            "CRITICAL".parse::<Severity>(),
            Err(ChainError::UnknownSeverity(token)) if token == "CRITICAL"
        ));
    }

    #[test]
    fn test_serde_tokens() {
        let parsed: Vec<Severity> = serde_json::from_str(r#"["info", "Functional_Message"]"#).unwrap();
        assert_eq!(parsed, vec![Severity::Info, Severity::FunctionalMessage]);
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), r#""ERROR""#);
        assert!(serde_json::from_str::<Severity>(r#""LOUD""#).is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for severity in Severity::VARIANTS {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn test_wildcard_accepts_everything() {
        let filter = SeverityFilter::all();
        for severity in Severity::VARIANTS {
            assert!(filter.accepts(severity), "{severity} rejected");
        }
    }

    #[test]
    fn test_none_and_empty_accept_nothing() {
        for filter in [SeverityFilter::none(), SeverityFilter::default()] {
            for severity in Severity::VARIANTS {
                assert!(!filter.accepts(severity), "{filter} accepted {severity}");
            }
        }
    }

    #[test]
    fn test_membership() {
        let filter = SeverityFilter::new([Severity::Warning, Severity::Error]);
        assert!(filter.accepts(Severity::Warning));
        assert!(filter.accepts(Severity::Error));
        assert!(!filter.accepts(Severity::Info));
        // an ALL-tagged notification only reaches wildcard filters
        assert!(!filter.accepts(Severity::All));
    }

    #[test]
    fn test_none_is_inert_alongside_other_levels() {
        let filter = SeverityFilter::new([Severity::None, Severity::Debug]);
        assert!(filter.accepts(Severity::Debug));
        assert!(!filter.accepts(Severity::None));
    }

    #[test]
    fn test_filter_display() {
        let filter = SeverityFilter::new([Severity::FunctionalError, Severity::FunctionalMessage]);
        assert_eq!(filter.to_string(), "{FUNCTIONAL_MESSAGE, FUNCTIONAL_ERROR}");
    }
}
