// src/core/html.rs
//
// Tolerant, case-insensitive tag scanning over raw document text.
// No DOM build-up; local scans over known blocks only.

use super::sanitize::normalize_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<tag …>…</tag>` block at or after `from`. `o` is the open prefix
/// ("<a"), `c` the close tag ("</a>"). A tag-name boundary is enforced so
/// "<a" does not match "<abbr".
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);

    let mut at = from;
    let start = loop {
        let rel = lc.get(at..)?.find(&ol)?;
        let cand = at + rel;
        let after = cand + ol.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_alphanumeric() || *b == b'-' => at = after,
            _ => break cand,
        }
    };
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    Some((start, open_end + end_rel + c.len()))
}

/// Next self-standing `<tag …>` at or after `from` (void elements like img).
/// Returns the byte span of the open tag including the closing '>'.
pub fn next_open_tag_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pat = join!("<", &to_lower(tag));

    let mut at = from;
    loop {
        let rel = lc.get(at..)?.find(&pat)?;
        let start = at + rel;
        let after = start + pat.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_alphanumeric() || *b == b'-' => at = after,
            _ => {
                let end = s[start..].find('>')? + start + 1;
                return Some((start, end));
            }
        }
    }
}

/// Parse the attributes of one open tag ("<a href=… target=…>").
/// Names are lowercased; values are entity-normalized; bare attributes get "".
pub fn tag_attrs(open_tag: &str) -> Vec<(String, String)> {
    let bytes = open_tag.as_bytes();
    let mut i = 0;

    // skip '<' and the tag name
    if bytes.first() == Some(&b'<') {
        i = 1;
    }
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
        i += 1;
    }

    let mut out = Vec::new();
    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] == b'>' {
            break;
        }

        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'>'
            && bytes[i] != b'/'
        {
            i += 1;
        }
        let name = to_lower(&open_tag[name_start..i]);
        if name.is_empty() {
            i += 1;
            continue;
        }

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            let value = if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let vs = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                let v = &open_tag[vs..i];
                if i < bytes.len() {
                    i += 1; // past the closing quote
                }
                v
            } else {
                let vs = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                &open_tag[vs..i]
            };
            out.push((name, normalize_entities(value)));
        } else {
            out.push((name, s!()));
        }
    }
    out
}

/// First value for `name` in a parsed attribute list.
pub fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
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
