use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::InlineNode,
};

/// Tokenizes one text field into a sequence of [`InlineNode`]s.
///
/// Sub-matchers are tried in precedence order at every character position:
/// link, code span, strong, emphasis. Each captures its inner text
/// non-greedily (the first eligible closing delimiter ends it) and never
/// re-scans it. Text between matches is emitted as `InlineNode::Text`.
///
/// Empty input yields an empty vector. There are no error cases: unmatched
/// delimiters simply stay in the surrounding text.
pub fn tokenize(s: &str) -> Vec<InlineNode<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, s: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text {
                text: &s[start..end],
            });
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let matched = try_parse_link(&mut cur)
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| try_parse_strong(&mut cur))
            .or_else(|| try_parse_emphasis(&mut cur));

        match matched {
            Some(node) => {
                flush_text(&mut out, s, text_start, start);
                out.push(node);
                text_start = cur.pos();
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts `[text](url)` at the cursor. On failure the cursor is untouched.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let text_start = cur.pos() + 1;
    // Link text cannot contain `]`, so the first one must begin `](`.
    let text_end = cur.find_byte(Link::MIDDLE[0], text_start)?;
    if text_end == text_start || !cur.starts_with_at(text_end, Link::MIDDLE) {
        return None;
    }

    let url_start = text_end + Link::MIDDLE.len();
    let url_end = cur.find_byte(Link::CLOSE, url_start)?;
    if url_end == url_start {
        return None;
    }

    cur.jump_to(url_end + 1);
    Some(InlineNode::Link {
        text: cur.slice(text_start..text_end),
        url: cur.slice(url_start..url_end),
    })
}

/// Attempts a single-backtick code span at the cursor.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let inner_start = cur.pos() + 1;
    // Inner text is at least one byte long.
    let inner_end = cur.find_byte(CodeSpan::TICK, inner_start + 1)?;

    cur.jump_to(inner_end + 1);
    Some(InlineNode::Code {
        text: cur.slice(inner_start..inner_end),
    })
}

/// Attempts `**text**` at the cursor.
fn try_parse_strong<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let inner_start = cur.pos() + Strong::DELIM.len();
    let inner_end = cur.find_seq(Strong::DELIM, inner_start + 1)?;

    cur.jump_to(inner_end + Strong::DELIM.len());
    Some(InlineNode::Strong {
        text: cur.slice(inner_start..inner_end),
    })
}

/// Attempts `*text*` at the cursor.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(Emphasis::DELIM) {
        return None;
    }

    let inner_start = cur.pos() + 1;
    let inner_end = cur.find_byte(Emphasis::DELIM, inner_start + 1)?;

    cur.jump_to(inner_end + 1);
    Some(InlineNode::Emphasis {
        text: cur.slice(inner_start..inner_end),
    })
}
