//! Compiled token pattern.
//!
//! Token grammar, terminated by a semicolon:
//!
//! ```text
//! & <prefix> <name> [ : <mod>[,<mod>]* ] [ : <user>[,<user>]* ] ;
//! ```
//!
//! `<prefix>` is any registered prefix; `<name>`, `<mod>` and `<user>` use
//! the charset `[a-zA-Z0-9-]`. Text that does not match the full grammar is
//! left alone.

use regex::{Captures, Regex};

use crate::config::{ConfigError, IconFontsConfig};
use crate::token::IconToken;

/// Charset for names, modifiers and user classes.
const SEGMENT_CHARSET: &str = "[a-zA-Z0-9-]";

/// Token pattern compiled for one configuration.
///
/// Compilation happens once per configuration ([`crate::IconFonts::new`]);
/// the compiled pattern is immutable and holds no per-call state, so clones
/// are cheap and one instance may serve many concurrent rendering passes.
#[derive(Debug, Clone)]
pub struct IconPattern {
    regex: Regex,
}

impl IconPattern {
    /// Compile the token pattern for a configuration.
    ///
    /// Registered prefixes become a longest-first alternation, so when one
    /// registered prefix is a prefix of another the longer literal wins.
    pub fn compile(config: &IconFontsConfig) -> Result<Self, ConfigError> {
        let alternation = config
            .registered_prefixes()
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");

        // Both trailing colon-segments are independently optional; entries
        // within a segment may be empty (skipped at token construction).
        let segment = format!("{SEGMENT_CHARSET}*(?:,{SEGMENT_CHARSET}*)*");
        let pattern = format!(
            "&(?P<prefix>{alternation})(?P<name>{SEGMENT_CHARSET}+)\
             (?::(?P<mods>{segment}))?(?::(?P<user>{segment}))?;"
        );

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Byte offset of the first token in `text`, if any.
    #[must_use]
    pub fn probe(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.start())
    }

    /// Whether `text` contains at least one token.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// First token in `text`, with the byte range it occupies.
    #[must_use]
    pub fn first_token<'t>(&self, text: &'t str) -> Option<(std::ops::Range<usize>, IconToken<'t>)> {
        let caps = self.regex.captures(text)?;
        let m = caps.get(0)?;
        Some((m.range(), Self::token_from_captures(&caps)))
    }

    /// Iterate over all non-overlapping tokens in `text`, with the byte
    /// range each one occupies.
    pub fn tokens<'t>(
        &self,
        text: &'t str,
    ) -> impl Iterator<Item = (std::ops::Range<usize>, IconToken<'t>)> {
        self.regex.captures_iter(text).filter_map(|caps| {
            let m = caps.get(0)?;
            Some((m.range(), Self::token_from_captures(&caps)))
        })
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Build a token from a capture set produced by this pattern.
    pub(crate) fn token_from_captures<'t>(caps: &Captures<'t>) -> IconToken<'t> {
        IconToken {
            prefix: caps.name("prefix").map_or("", |m| m.as_str()),
            name: caps.name("name").map_or("", |m| m.as_str()),
            mods: split_segment(caps, "mods"),
            user_classes: split_segment(caps, "user"),
        }
    }
}

/// Split an optional comma-separated capture group, skipping empty entries.
fn split_segment<'t>(caps: &Captures<'t>, group: &str) -> Vec<&'t str> {
    caps.name(group)
        .map(|m| m.as_str().split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}
