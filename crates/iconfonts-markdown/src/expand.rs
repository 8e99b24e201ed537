//! Event-stream icon expansion.

use std::collections::VecDeque;
use std::ops::Range;

use iconfonts_core::IconFonts;
use pulldown_cmark::{Event, Tag, TagEnd};

/// Expand icon tokens in a pulldown-cmark event stream.
///
/// Each text run outside a code block is rewritten into alternating `Text`
/// and `Html` events, one `Html` per token. Text inside fenced or indented
/// code blocks and inline code (`Event::Code`) passes through untouched, so
/// examples of the token syntax render literally.
pub fn expand_icons<'a, 'i, I>(events: I, icons: &'i IconFonts) -> IconExpander<'a, 'i, I>
where
    I: Iterator<Item = Event<'a>>,
{
    IconExpander {
        inner: events,
        icons,
        queue: VecDeque::new(),
        text_buffer: String::new(),
        in_code_block: false,
        expanded: 0,
    }
}

/// Iterator adapter produced by [`expand_icons`].
///
/// Adjacent `Text` events are coalesced before matching: the parser may
/// split a text run at an ampersand it failed to parse as an entity, and a
/// token must never be lost to such a split.
pub struct IconExpander<'a, 'i, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
    icons: &'i IconFonts,
    /// Pending output events from a flushed text run.
    queue: VecDeque<Event<'a>>,
    /// Coalesced text run awaiting the next non-text event.
    text_buffer: String,
    in_code_block: bool,
    expanded: usize,
}

impl<'a, I> IconExpander<'a, '_, I>
where
    I: Iterator<Item = Event<'a>>,
{
    /// Number of tokens expanded so far.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Split the buffered text run into literal text and rendered icon
    /// elements, queueing the pieces in order.
    fn flush_text(&mut self) {
        if self.text_buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text_buffer);

        let rendered: Vec<(Range<usize>, String)> = self
            .icons
            .pattern()
            .tokens(&text)
            .map(|(range, token)| (range, self.icons.render_token(&token)))
            .collect();

        if rendered.is_empty() {
            self.queue.push_back(Event::Text(text.into()));
            return;
        }

        let mut last = 0;
        for (range, html) in rendered {
            if range.start > last {
                self.queue
                    .push_back(Event::Text(text[last..range.start].to_owned().into()));
            }
            self.queue.push_back(Event::Html(html.into()));
            self.expanded += 1;
            last = range.end;
        }
        if last < text.len() {
            self.queue
                .push_back(Event::Text(text[last..].to_owned().into()));
        }
    }
}

impl<'a, I> Iterator for IconExpander<'a, '_, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Some(event);
            }

            match self.inner.next() {
                Some(Event::Text(text)) if !self.in_code_block => {
                    self.text_buffer.push_str(&text);
                }
                Some(event) => {
                    self.flush_text();
                    match &event {
                        Event::Start(Tag::CodeBlock(_)) => self.in_code_block = true,
                        Event::End(TagEnd::CodeBlock) => self.in_code_block = false,
                        _ => {}
                    }
                    self.queue.push_back(event);
                }
                None => {
                    self.flush_text();
                    return self.queue.pop_front();
                }
            }
        }
    }
}
