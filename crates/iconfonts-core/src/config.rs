//! Icon-font configuration.
//!
//! An [`IconFontsConfig`] holds the class prefix, the optional base class,
//! and per-prefix base-class overrides. It deserializes with serde (all
//! fields defaulted) and can also be built from the legacy inline options
//! string (`"prefix=fa-, base=fa"`).

use std::collections::BTreeMap;

use serde::Deserialize;

/// Characters that can never appear in a prefix: they would terminate or
/// split the token before the prefix is fully consumed.
const PREFIX_FORBIDDEN: &[char] = &['&', ';', ':', ',', '<', '>', '"', '\'', '`'];

/// Characters that would break out of the rendered `class` attribute.
const CLASS_FORBIDDEN: &[char] = &['&', ';', '<', '>', '"', '\'', '`'];

/// Configuration errors.
///
/// All configuration problems are reported at construction time
/// ([`crate::IconFonts::new`] or [`IconFontsConfig::parse_options`]), never
/// while matching.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A prefix contains a character that cannot appear in token syntax.
    #[error("invalid prefix {prefix:?}: {message}")]
    InvalidPrefix {
        /// The offending prefix.
        prefix: String,
        /// What is wrong with it.
        message: String,
    },
    /// A base class contains a character that cannot appear in a `class`
    /// attribute.
    #[error("invalid base class {base:?} for prefix {prefix:?}: {message}")]
    InvalidBase {
        /// The prefix the base class belongs to (the global prefix for the
        /// top-level `base` option).
        prefix: String,
        /// The offending base class.
        base: String,
        /// What is wrong with it.
        message: String,
    },
    /// Malformed options string.
    #[error("options parse error: {0}")]
    Options(String),
    /// The composed token pattern failed to compile.
    #[error("pattern compile error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration for icon-font token rendering.
///
/// # Example
///
/// ```
/// use iconfonts_core::IconFontsConfig;
///
/// let config = IconFontsConfig::new()
///     .with_base("icon")
///     .with_pair("fa-", "fa");
///
/// assert_eq!(config.base_for("fa-"), Some("fa"));
/// assert_eq!(config.base_for("icon-"), Some("icon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconFontsConfig {
    /// Class prefix for tokens using the default prefix.
    pub prefix: String,
    /// Base class prepended when the token's prefix has no specific override.
    /// Empty means no base class.
    pub base: String,
    /// Per-prefix base-class overrides. Each key is itself usable as a token
    /// prefix in addition to [`prefix`](Self::prefix).
    pub prefix_base_pairs: BTreeMap<String, String>,
}

impl Default for IconFontsConfig {
    fn default() -> Self {
        Self {
            prefix: "icon-".to_owned(),
            base: String::new(),
            prefix_base_pairs: BTreeMap::new(),
        }
    }
}

impl IconFontsConfig {
    /// Create a configuration with default values (`prefix = "icon-"`, no
    /// base class, no pairs).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default class prefix.
    ///
    /// An empty prefix is allowed; bare `&name;` entities then match.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the global base class.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Register an additional prefix with its own base class.
    #[must_use]
    pub fn with_pair(mut self, prefix: impl Into<String>, base: impl Into<String>) -> Self {
        self.prefix_base_pairs.insert(prefix.into(), base.into());
        self
    }

    /// Parse the legacy inline options string: comma-separated `key=value`
    /// entries, keys `prefix` and `base`.
    ///
    /// The literal value `None` coerces to the empty string; `True` and
    /// `False` are rejected since both options are strings. Per-prefix pairs
    /// are structured configuration only and cannot be expressed here.
    ///
    /// # Example
    ///
    /// ```
    /// use iconfonts_core::IconFontsConfig;
    ///
    /// let config = IconFontsConfig::parse_options("prefix=fa-, base=fa").unwrap();
    /// assert_eq!(config.prefix, "fa-");
    /// assert_eq!(config.base, "fa");
    /// ```
    pub fn parse_options(options: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for entry in options.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::Options(format!("expected key=value, got {entry:?}")))?;
            let key = key.trim();
            let value = coerce_value(key, value.trim())?;

            match key {
                "prefix" => config.prefix = value,
                "base" => config.base = value,
                _ => {
                    return Err(ConfigError::Options(format!("unknown option {key:?}")));
                }
            }
        }

        Ok(config)
    }

    /// Resolve the base class for a token's literal prefix.
    ///
    /// A pair-specific override wins over the global base; an empty global
    /// base means no base class at all.
    #[must_use]
    pub fn base_for(&self, prefix: &str) -> Option<&str> {
        if let Some(base) = self.prefix_base_pairs.get(prefix) {
            return (!base.is_empty()).then_some(base.as_str());
        }
        (!self.base.is_empty()).then_some(self.base.as_str())
    }

    /// Every prefix usable in token syntax: the default prefix plus all pair
    /// keys, deduplicated, longest first.
    ///
    /// Longest-first order is the precedence rule when one registered prefix
    /// is a prefix of another: `&a-b-x;` with both `a-` and `a-b-`
    /// registered matches `a-b-`.
    #[must_use]
    pub fn registered_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = std::iter::once(self.prefix.as_str())
            .chain(self.prefix_base_pairs.keys().map(String::as_str))
            .collect();
        prefixes.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        prefixes.dedup();
        prefixes
    }

    /// Validate all prefixes and base classes.
    ///
    /// Called by [`crate::IconFonts::new`]; exposed for callers that want to
    /// check a configuration without compiling a pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for prefix in self.registered_prefixes() {
            check_prefix(prefix)?;
        }

        if !self.base.is_empty() {
            check_base(&self.prefix, &self.base)?;
        }
        for (prefix, base) in &self.prefix_base_pairs {
            if !base.is_empty() {
                check_base(prefix, base)?;
            }
        }

        Ok(())
    }
}

/// Coerce a raw option value, handling the legacy `None` literal.
fn coerce_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match value {
        "None" => Ok(String::new()),
        "True" | "False" => Err(ConfigError::Options(format!(
            "option {key:?} expects a string, got boolean {value}"
        ))),
        other => Ok(other.to_owned()),
    }
}

fn check_prefix(prefix: &str) -> Result<(), ConfigError> {
    if let Some(c) = prefix.chars().find(|c| c.is_whitespace() || PREFIX_FORBIDDEN.contains(c)) {
        return Err(ConfigError::InvalidPrefix {
            prefix: prefix.to_owned(),
            message: format!("character {c:?} cannot appear in token syntax"),
        });
    }
    Ok(())
}

fn check_base(prefix: &str, base: &str) -> Result<(), ConfigError> {
    if let Some(c) = base.chars().find(|c| CLASS_FORBIDDEN.contains(c)) {
        return Err(ConfigError::InvalidBase {
            prefix: prefix.to_owned(),
            base: base.to_owned(),
            message: format!("character {c:?} cannot appear in a class attribute"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = IconFontsConfig::default();
        assert_eq!(config.prefix, "icon-");
        assert_eq!(config.base, "");
        assert!(config.prefix_base_pairs.is_empty());
    }

    #[test]
    fn test_base_for_global_fallback() {
        let config = IconFontsConfig::new().with_base("icon");
        assert_eq!(config.base_for("icon-"), Some("icon"));
    }

    #[test]
    fn test_base_for_empty_base() {
        let config = IconFontsConfig::new();
        assert_eq!(config.base_for("icon-"), None);
    }

    #[test]
    fn test_base_for_pair_override_wins() {
        let config = IconFontsConfig::new()
            .with_base("icon")
            .with_pair("fa-", "fa");
        assert_eq!(config.base_for("fa-"), Some("fa"));
        assert_eq!(config.base_for("icon-"), Some("icon"));
    }

    #[test]
    fn test_base_for_empty_pair_base_means_none() {
        // An explicitly empty pair base suppresses the global base for that
        // prefix family.
        let config = IconFontsConfig::new()
            .with_base("icon")
            .with_pair("fa-", "");
        assert_eq!(config.base_for("fa-"), None);
    }

    #[test]
    fn test_registered_prefixes_longest_first() {
        let config = IconFontsConfig::new()
            .with_prefix("a-")
            .with_pair("a-b-", "x")
            .with_pair("fa-", "fa");
        assert_eq!(config.registered_prefixes(), vec!["a-b-", "fa-", "a-"]);
    }

    #[test]
    fn test_registered_prefixes_dedup() {
        let config = IconFontsConfig::new()
            .with_prefix("fa-")
            .with_pair("fa-", "fa");
        assert_eq!(config.registered_prefixes(), vec!["fa-"]);
    }

    #[test]
    fn test_parse_options() {
        let config = IconFontsConfig::parse_options("prefix=mypref-").unwrap();
        assert_eq!(config.prefix, "mypref-");
        assert_eq!(config.base, "");

        let config = IconFontsConfig::parse_options("prefix=fa-, base=fa").unwrap();
        assert_eq!(config.prefix, "fa-");
        assert_eq!(config.base, "fa");
    }

    #[test]
    fn test_parse_options_none_coercion() {
        let config = IconFontsConfig::parse_options("prefix=None").unwrap();
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn test_parse_options_empty() {
        let config = IconFontsConfig::parse_options("").unwrap();
        assert_eq!(config, IconFontsConfig::default());
    }

    #[test]
    fn test_parse_options_rejects_boolean() {
        let err = IconFontsConfig::parse_options("base=True").unwrap_err();
        assert!(matches!(err, ConfigError::Options(_)));
    }

    #[test]
    fn test_parse_options_rejects_unknown_key() {
        let err = IconFontsConfig::parse_options("colour=red").unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_parse_options_rejects_bare_entry() {
        let err = IconFontsConfig::parse_options("prefix").unwrap_err();
        assert!(matches!(err, ConfigError::Options(_)));
    }

    #[test]
    fn test_validate_rejects_semicolon_in_prefix() {
        let config = IconFontsConfig::new().with_prefix("ic;on-");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix { .. }));
    }

    #[test]
    fn test_validate_rejects_quote_in_base() {
        let config = IconFontsConfig::new().with_base("ic\"on");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBase { .. }));
    }

    #[test]
    fn test_validate_accepts_empty_prefix() {
        let config = IconFontsConfig::new().with_prefix("");
        config.validate().unwrap();
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: IconFontsConfig = toml::from_str(
            r#"
            prefix = "icon-"
            base = "icon"

            [prefix_base_pairs]
            "fa-" = "fa"
            "glyphicon-" = "glyphicon"
            "#,
        )
        .unwrap();

        assert_eq!(config.base, "icon");
        assert_eq!(config.base_for("fa-"), Some("fa"));
        assert_eq!(config.base_for("glyphicon-"), Some("glyphicon"));
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let config: IconFontsConfig = toml::from_str("base = \"icon\"").unwrap();
        assert_eq!(config.prefix, "icon-");
        assert_eq!(config.base, "icon");
    }
}
