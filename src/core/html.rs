// src/core/html.rs
// Low-level HTML string helpers.
// Deliberately naive: no DOM, just case-insensitive scanning for tag blocks
// and id attributes. Good enough for server-rendered tables.
// ASCII-only lowercasing keeps byte offsets identical between `s` and its
// lowercased copy.

use super::sanitize::{normalize_entities, normalize_ws};

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Whether `lc[at..]` opens `<tag` with the name ending at whitespace,
/// `>` or `/` (so `th` does not match `<thead>`).
fn opens_tag(lc: &str, at: usize, tag: &str) -> bool {
    let b = lc.as_bytes();
    let after = at + 1 + tag.len();
    b.get(at) == Some(&b'<')
        && lc.get(at + 1..after) == Some(tag)
        && matches!(b.get(after), Some(c) if c.is_ascii_whitespace() || *c == b'>' || *c == b'/')
}

/// Position of the next `<tag` in already-lowercased `lc`, at or after `from`.
fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("<", tag);
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&pat)? + pos;
        if opens_tag(lc, start, tag) {
            return Some(start);
        }
        pos = start + pat.len();
    }
}

/// Position of the next `</tag` (name boundary as above) at or after `from`.
fn find_close_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("</", tag);
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&pat)? + pos;
        let after = start + pat.len();
        match lc.as_bytes().get(after) {
            Some(c) if c.is_ascii_whitespace() || *c == b'>' => return Some(start),
            None => return None,
            _ => pos = after,
        }
    }
}

/// Find the next complete `<tag ...> ... </tag>` block from `from` onwards,
/// case-insensitive. Returns byte range of the whole block.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lowercase_fast(s);
    next_tag_block_lc(s, &lc, tag, from)
}

/// As `next_tag_block_ci`, with the lowercased copy supplied by the caller.
/// Nested blocks of the same tag are skipped over, so a table inside a cell
/// does not end the outer table.
pub fn next_tag_block_lc(s: &str, lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let tag = to_lowercase_fast(tag);

    let start = find_open_tag(lc, &tag, from)?;
    // Jump past the end of the opening tag
    let open_end = s[start..].find('>')? + start + 1;

    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let close_start = find_close_tag(lc, &tag, pos)?;
        match find_open_tag(lc, &tag, pos) {
            Some(inner) if inner < close_start => {
                depth += 1;
                pos = inner + tag.len() + 1;
            }
            _ => {
                let end = s[close_start..].find('>').map(|e| close_start + e + 1).unwrap_or(s.len());
                depth -= 1;
                if depth == 0 {
                    return Some((start, end));
                }
                pos = end;
            }
        }
    }
}

// Elements whose content is never rendered as markup.
const INERT_TAGS: [&str; 4] = ["script", "style", "template", "textarea"];

/// Blank out comments and the bodies of `script`/`style`/`template`/
/// `textarea` elements so ids and tags inside them are never matched.
/// Masked characters become spaces of the same byte length, so offsets into
/// the result are valid in `s`.
pub fn mask_inert(s: &str) -> String {
    let lc = to_lowercase_fast(s);
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find('<') {
        let at = pos + rel;
        let end = if lc[at..].starts_with("<!--") {
            // an unterminated comment runs to the end
            Some(lc[at + 4..].find("-->").map(|e| at + 4 + e + 3).unwrap_or(lc.len()))
        } else {
            INERT_TAGS.iter().find(|t| opens_tag(&lc, at, t)).map(|t| {
                match find_close_tag(&lc, t, at) {
                    Some(c) => lc[c..].find('>').map(|g| c + g + 1).unwrap_or(lc.len()),
                    None => lc.len(),
                }
            })
        };
        match end {
            Some(e) => {
                ranges.push((at, e));
                pos = e;
            }
            None => pos = at + 1,
        }
    }
    if ranges.is_empty() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rs = ranges.iter().peekable();
    for (i, ch) in s.char_indices() {
        while rs.peek().is_some_and(|(_, e)| *e <= i) {
            rs.next();
        }
        if rs.peek().is_some_and(|(b, _)| *b <= i) {
            out.extend(std::iter::repeat_n(' ', ch.len_utf8()));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER without the wrapping tags (still may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

// Tags that start a new line of rendered text.
const BREAKING_TAGS: [&str; 24] = [
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "th", "table", "thead", "tbody",
    "tfoot", "caption", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "dt", "dd", "pre",
];

fn breaks_text(tag_body: &str) -> bool {
    let name: String = tag_body
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    BREAKING_TAGS.contains(&name.as_str())
}

/// Remove all HTML tags `<...>` from the string. Line-breaking tags
/// (`<br>`, `<p>`, `<div>`, ...) leave a space behind.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut tag: Option<String> = None;
    for ch in s.chars() {
        if let Some(body) = tag.as_mut() {
            if ch == '>' {
                if breaks_text(body) {
                    out.push(' ');
                }
                tag = None;
            } else {
                body.push(ch);
            }
        } else if ch == '<' {
            tag = Some(String::new());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Visible text of an HTML fragment: tags stripped, entities decoded,
/// whitespace collapsed.
pub fn text_content(fragment: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(fragment)))
}

/// Start (`<`) of the tag carrying `id="<id>"`. Attribute name is matched
/// case-insensitively, the value exactly. Quoted or bare values accepted.
/// Comments and script/template bodies are ignored.
pub fn find_id_ci(s: &str, id: &str) -> Option<usize> {
    let masked = mask_inert(s);
    let s = masked.as_str();
    let lc = to_lowercase_fast(s);
    let b = s.as_bytes();
    let mut from = 0;

    while let Some(rel) = lc[from..].find("id") {
        let at = from + rel;
        from = at + 2;

        // attribute name must stand alone
        if at == 0 || !b[at - 1].is_ascii_whitespace() { continue; }

        let mut i = at + 2;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if i >= b.len() || b[i] != b'=' { continue; }
        i += 1;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }

        let value = match b.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let start = i + 1;
                let Some(len) = s[start..].find(q as char) else { continue };
                &s[start..start + len]
            }
            Some(_) => {
                let start = i;
                let len = s[start..]
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(s.len() - start);
                s[start..start + len].trim_end_matches('/')
            }
            None => return None,
        };
        if value != id { continue; }

        // must sit inside an open tag
        let Some(lt) = s[..at].rfind('<') else { continue };
        if s[lt..at].contains('>') { continue; }
        return Some(lt);
    }
    None
}

/// Whether any element carries `id="<id>"`.
pub fn has_id(s: &str, id: &str) -> bool {
    find_id_ci(s, id).is_some()
}

/// The inner HTML of the `<tag>` element with the given id.
/// `None` when the id is missing or sits on a different element.
pub fn element_by_id_ci<'a>(s: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let start = find_id_ci(s, id)?;
    let lc = to_lowercase_fast(s);
    if !opens_tag(&lc, start, &to_lowercase_fast(tag)) {
        return None;
    }
    let (bs, be) = next_tag_block_lc(s, &lc, tag, start)?;
    Some(inner_after_open_tag(&s[bs..be]))
}
