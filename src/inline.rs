use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::span::{SpanKind, TextSpan};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Parse a run of text into inline spans.
///
/// Passes run in a fixed order: `**` bold, `*` italic, `` ` `` code, then
/// images and links. Each pass only looks at plain spans left by earlier ones.
pub fn parse_inline_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split plain spans on `delimiter`, turning every odd fragment into `kind`.
///
/// Fragments alternate plain/`kind` starting and ending with plain, so empty
/// boundary fragments are kept as empty plain spans.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if kind.has_target() {
        return Err(Error::InvalidSpanKind { kind });
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let count = text.matches(delimiter).count();
        if count == 0 {
            out.push(TextSpan::Plain(text));
            continue;
        }
        if count % 2 != 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, fragment) in text.split(delimiter).enumerate() {
            let fragment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(fragment_kind, fragment, None)?);
        }
    }
    Ok(out)
}

/// Extract `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(
        spans,
        |text, from| IMAGE_RE.captures_at(text, from).map(|caps| Bracketed::new(&caps)),
        |alt, url| TextSpan::Image { alt, url },
    )
}

/// Extract `[text](url)` links from plain spans.
///
/// A `[` directly after `!` belongs to image syntax and never opens a link.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, find_link, |text, url| TextSpan::Link { text, url })
}

fn find_link(text: &str, mut from: usize) -> Option<Bracketed> {
    loop {
        let caps = LINK_RE.captures_at(text, from)?;
        let found = Bracketed::new(&caps);
        if !text[..found.start].ends_with('!') {
            return Some(found);
        }
        // `[` is one byte, so the next char boundary is right after it.
        from = found.start + 1;
    }
}

/// A `[label](target)` match located in a string.
struct Bracketed {
    start: usize,
    end: usize,
    label: String,
    target: String,
}

impl Bracketed {
    fn new(caps: &Captures<'_>) -> Self {
        let group = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
        let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
        Self {
            start,
            end,
            label: group(1),
            target: group(2),
        }
    }
}

fn split_bracketed<F, M>(spans: Vec<TextSpan>, find: F, make: M) -> Vec<TextSpan>
where
    F: Fn(&str, usize) -> Option<Bracketed>,
    M: Fn(String, String) -> TextSpan,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = 0;
        while let Some(found) = find(&text, rest) {
            if found.start > rest {
                out.push(TextSpan::plain(&text[rest..found.start]));
            }
            out.push(make(found.label, found.target));
            rest = found.end;
        }
        if rest == 0 {
            // Nothing matched; keep the span as is, even when empty.
            out.push(TextSpan::Plain(text));
        } else if rest < text.len() {
            out.push(TextSpan::plain(&text[rest..]));
        }
    }
    out
}
