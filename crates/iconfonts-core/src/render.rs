//! Token rendering.

use std::borrow::Cow;

use crate::config::{ConfigError, IconFontsConfig};
use crate::pattern::IconPattern;
use crate::token::IconToken;

/// Icon-font renderer: a validated configuration plus its compiled pattern.
///
/// Construction validates the configuration and compiles the token pattern
/// once; after that the renderer is immutable. It is `Send + Sync` and cheap
/// to clone, so one instance per configuration can be shared across
/// concurrent rendering passes. Distinct configurations need distinct
/// instances.
///
/// # Example
///
/// ```
/// use iconfonts_core::{IconFonts, IconFontsConfig};
///
/// let icons = IconFonts::new(IconFontsConfig::default()).unwrap();
/// assert_eq!(
///     icons.process("I love &icon-html5;"),
///     r#"I love <i aria-hidden="true" class="icon-html5"></i>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct IconFonts {
    config: IconFontsConfig,
    pattern: IconPattern,
}

impl IconFonts {
    /// Build a renderer for a configuration.
    ///
    /// Fails fast on invalid configuration (bad prefix or base-class
    /// characters); matching itself never fails.
    pub fn new(config: IconFontsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = IconPattern::compile(&config)?;
        Ok(Self { config, pattern })
    }

    /// The configuration this renderer was built from.
    #[must_use]
    pub fn config(&self) -> &IconFontsConfig {
        &self.config
    }

    /// The compiled token pattern.
    #[must_use]
    pub fn pattern(&self) -> &IconPattern {
        &self.pattern
    }

    /// Byte offset of the first token in `text`, if any.
    ///
    /// The host pipeline's "did a token start here" probe.
    #[must_use]
    pub fn probe(&self, text: &str) -> Option<usize> {
        self.pattern.probe(text)
    }

    /// Render one matched token to its inline element.
    ///
    /// The element carries exactly two attributes: `aria-hidden="true"`
    /// (always, for accessibility and text-to-speech browsers) and the
    /// composed `class` list.
    #[must_use]
    pub fn render_token(&self, token: &IconToken<'_>) -> String {
        let classes = token.class_list(self.config.base_for(token.prefix));
        format!(r#"<i aria-hidden="true" class="{classes}"></i>"#)
    }

    /// Replace every token in `text`, leaving everything else untouched.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so token-free text
    /// (including already-rendered output) passes through byte-identical.
    #[must_use]
    pub fn process<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.regex().replace_all(text, |caps: &regex::Captures<'_>| {
            self.render_token(&IconPattern::token_from_captures(caps))
        })
    }
}
