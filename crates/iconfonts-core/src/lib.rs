//! Icon-font token matching and rendering.
//!
//! Recognizes HTML-entity-like icon tokens in text and replaces each with an
//! inline `<i>` element carrying computed CSS classes:
//!
//! ```text
//! &icon-html5;                  ->  <i aria-hidden="true" class="icon-html5"></i>
//! &icon-spinner:large,spin;     ->  <i aria-hidden="true" class="icon-spinner icon-large icon-spin"></i>
//! &fa-spinner:2x:red;           ->  <i aria-hidden="true" class="fa fa-spinner fa-2x red"></i>
//! ```
//!
//! The first optional colon-segment lists modifiers (each rendered with the
//! token's prefix); the second lists user classes appended verbatim. This
//! supports [Font Awesome](https://fontawesome.com/) style stacks as well as
//! any custom icon font.
//!
//! # Architecture
//!
//! - [`IconFontsConfig`]: prefix, base class, and per-prefix base overrides;
//!   resolves the base class for each observed prefix.
//! - [`IconPattern`]: the token grammar compiled for one configuration.
//! - [`IconFonts`]: probe-and-render surface for a host pipeline, plus
//!   whole-text [`process`](IconFonts::process).
//!
//! Markdown integration (pulldown-cmark event expansion) lives in the
//! `iconfonts-markdown` crate.
//!
//! # Example
//!
//! ```
//! use iconfonts_core::{IconFonts, IconFontsConfig};
//!
//! let config = IconFontsConfig::new()
//!     .with_base("icon")
//!     .with_pair("fa-", "fa");
//! let icons = IconFonts::new(config).unwrap();
//!
//! let html = icons.process("Loading &fa-spinner:spin; ...");
//! assert_eq!(
//!     html,
//!     r#"Loading <i aria-hidden="true" class="fa fa-spinner fa-spin"></i> ..."#
//! );
//! ```

mod config;
mod pattern;
mod render;
mod token;

pub use config::{ConfigError, IconFontsConfig};
pub use pattern::IconPattern;
pub use render::IconFonts;
pub use token::IconToken;
