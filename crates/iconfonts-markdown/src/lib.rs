//! Icon-font token expansion for pulldown-cmark pipelines.
//!
//! Wires the probe-and-render core from `iconfonts-core` into a
//! pulldown-cmark event stream: [`expand_icons`] rewrites text events so
//! that each `&icon-name;` token becomes one inline `Html` event, while
//! code blocks and inline code keep the literal syntax.
//!
//! # Example
//!
//! ```
//! use iconfonts_core::{IconFonts, IconFontsConfig};
//! use iconfonts_markdown::render_html;
//!
//! let icons = IconFonts::new(IconFontsConfig::default()).unwrap();
//! let html = render_html("I love &icon-html5; and &icon-css3;", &icons);
//! assert_eq!(
//!     html,
//!     "<p>I love <i aria-hidden=\"true\" class=\"icon-html5\"></i> \
//!      and <i aria-hidden=\"true\" class=\"icon-css3\"></i></p>\n"
//! );
//! ```

mod expand;

pub use expand::{IconExpander, expand_icons};
pub use iconfonts_core::{ConfigError, IconFonts, IconFontsConfig};

use pulldown_cmark::{Options, Parser, html};

/// Parser options used for rendering: GFM tables, strikethrough, tasklists.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML with icon tokens expanded.
#[must_use]
pub fn render_html(markdown: &str, icons: &IconFonts) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut expander = expand_icons(parser, icons);

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, &mut expander);

    tracing::debug!(tokens = expander.expanded(), "expanded icon tokens");
    output
}
