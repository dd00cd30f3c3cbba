// src/core/html.rs
//
// Tolerant, case-insensitive HTML slicing. No DOM: we only ever need
// "the element with this id" and "the <tr>/<td> blocks inside it".
// Lowercasing is ASCII-only, so byte offsets in the lowercased copy are
// valid in the original.

pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// True when `lc[at..]` opens exactly that tag (`<tr` does not match `<track`).
fn opens_tag(lc: &str, at: usize, open: &str) -> bool {
    if !lc[at..].starts_with(open) { return false; }
    match lc.as_bytes().get(at + open.len()) {
        Some(b) => b.is_ascii_whitespace() || *b == b'>' || *b == b'/',
        None => false,
    }
}

fn find_open(lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(open) {
        let at = pos + rel;
        if opens_tag(lc, at, open) { return Some(at); }
        pos = at + open.len();
    }
    None
}

/// Iterator over `<tag …>…</tag>` blocks of one haystack.
/// A block without a closing tag ends where the next sibling opens
/// (or at the end of the haystack), which is how browsers read `<td>` soup.
pub struct Blocks<'a> {
    src: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = find_open(&self.lc, &self.open, self.pos)?;
        let open_end = self.src[start..].find('>').map(|e| start + e + 1)?;

        let close = self.lc[open_end..].find(&self.close).map(|e| open_end + e);
        let sibling = find_open(&self.lc, &self.open, open_end);

        let end = match (close, sibling) {
            (Some(c), Some(s)) if s < c => s,
            (Some(c), _) => {
                // swallow the rest of the closing tag, e.g. "</td >"
                self.src[c..].find('>').map(|e| c + e + 1).unwrap_or(self.src.len())
            }
            (None, Some(s)) => s,
            (None, None) => self.src.len(),
        };

        self.pos = end;
        Some(&self.src[start..end])
    }
}

/// All `<tag>` blocks in `s`, in document order. `tag` is given without brackets.
pub fn blocks<'a>(s: &'a str, tag: &str) -> Blocks<'a> {
    let tag = to_lower(tag);
    Blocks {
        src: s,
        lc: to_lower(s),
        open: format!("<{tag}"),
        close: format!("</{tag}"),
        pos: 0,
    }
}

/// Value of `name=` inside a tag opener (`<table id="x" class=y>`).
/// Quoted or bare values; attribute names compare case-insensitively.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let needle = to_lower(name);
    let bytes = lc.as_bytes();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find(&needle) {
        let at = pos + rel;
        pos = at + needle.len();

        // must be a whole attribute name
        let before_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let rest = lc[pos..].trim_start();
        if !before_ok || !rest.starts_with('=') { continue; }

        let val_start = lc.len() - rest.len() + 1;
        let val = opener[val_start..].trim_start();
        let off = opener.len() - val.len();
        return match val.as_bytes().first() {
            Some(&q @ (b'"' | b'\'')) => {
                let end = val[1..].find(q as char)?;
                Some(&opener[off + 1..off + 1 + end])
            }
            Some(_) => {
                let end = val
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .unwrap_or(val.len());
                Some(&opener[off..off + end])
            }
            None => None,
        };
    }
    None
}

/// The whole `<tag …>…</tag>` element whose `id` attribute equals `id`.
/// Nested elements of the same tag are balanced.
pub fn element_by_id<'a>(doc: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let open = format!("<{}", to_lower(tag));
    let close = format!("</{}", to_lower(tag));

    let mut pos = 0usize;
    while let Some(start) = find_open(&lc, &open, pos) {
        let open_end = doc[start..].find('>').map(|e| start + e + 1)?;
        pos = open_end;

        if attr_value(&doc[start..open_end], "id") != Some(id) { continue; }

        // balance nested <tag> … </tag>
        let mut depth = 1usize;
        let mut cur = open_end;
        loop {
            let next_close = lc[cur..].find(&close).map(|e| cur + e);
            let next_open = find_open(&lc, &open, cur);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    cur = o + open.len();
                }
                (_, Some(c)) => {
                    depth -= 1;
                    let end = doc[c..].find('>').map(|e| c + e + 1).unwrap_or(doc.len());
                    if depth == 0 { return Some(&doc[start..end]); }
                    cur = end;
                }
                // unterminated: take the rest of the document
                (_, None) => return Some(&doc[start..]),
            }
        }
    }
    None
}

/// Content between the opener's `>` and the block's own closing tag (if any).
pub fn inner_after_open_tag(block: &str) -> &str {
    let Some(oe) = block.find('>') else { return "" };
    let body = &block[oe + 1..];
    let name = tag_name(block);

    if let Some(cs) = body.rfind("</") {
        if let Some(tail) = body[cs + 2..].trim_end().strip_suffix('>') {
            if !name.is_empty() && tail.trim().eq_ignore_ascii_case(name) {
                return &body[..cs];
            }
        }
    }
    body
}

fn tag_name(block: &str) -> &str {
    let rest = block.strip_prefix('<').unwrap_or("");
    let end = rest.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(rest.len());
    &rest[..end]
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of one cell block: tags stripped, entities decoded, whitespace collapsed.
pub fn cell_text(block: &str) -> String {
    let inner = inner_after_open_tag(block);
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&strip_tags(inner)))
}
