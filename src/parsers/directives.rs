//! Triple-slash directive scanning
//!
//! `/// <reference path="..." />` and `/// <reference types="..." />` only
//! count when they sit in the leading comments of a file, before any code.
//! OXC keeps comments as plain trivia, so the directives are read straight
//! from the source text.

/// Directives found at the top of a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleSlashDirectives {
    /// `path` attribute values, in source order
    pub paths: Vec<String>,
    /// `types` attribute values, in source order
    pub types: Vec<String>,
}

/// Scan the leading trivia of `source` for reference directives
pub fn scan_triple_slash_directives(source: &str) -> TripleSlashDirectives {
    let mut directives = TripleSlashDirectives::default();
    let mut rest = source.strip_prefix('\u{feff}').unwrap_or(source);
    if let Some(after) = rest.strip_prefix("#!") {
        rest = &after[after.find(['\n', '\r']).unwrap_or(after.len())..];
    }

    loop {
        rest = rest.trim_start();

        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['\n', '\r']).unwrap_or(after.len());
            let line = &after[..end];
            if let Some(body) = line.strip_prefix('/') {
                if !body.starts_with('/') {
                    parse_reference_directive(body, &mut directives);
                }
            }
            rest = &after[end..];
            continue;
        }

        if let Some(after) = rest.strip_prefix("/*") {
            match after.find("*/") {
                Some(end) => {
                    rest = &after[end + 2..];
                    continue;
                }
                None => break,
            }
        }

        break;
    }

    directives
}

fn parse_reference_directive(comment: &str, out: &mut TripleSlashDirectives) {
    let Some(mut attrs) = comment.trim_start().strip_prefix("<reference") else {
        return;
    };

    loop {
        attrs = attrs.trim_start();
        if attrs.is_empty() || attrs.starts_with('/') || attrs.starts_with('>') {
            return;
        }

        let name_len = attrs
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(attrs.len());
        if name_len == 0 {
            return;
        }
        let name = &attrs[..name_len];
        attrs = attrs[name_len..].trim_start();

        let Some(after_eq) = attrs.strip_prefix('=') else {
            continue;
        };
        attrs = after_eq.trim_start();

        let value = match attrs.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let inner = &attrs[1..];
                let end = inner.find(quote).unwrap_or(inner.len());
                attrs = inner.get(end + 1..).unwrap_or("");
                &inner[..end]
            }
            Some(_) => {
                let bytes = attrs.as_bytes();
                let mut end = 0;
                while end < bytes.len()
                    && !bytes[end].is_ascii_whitespace()
                    && bytes[end] != b'>'
                    && !(bytes[end] == b'/' && bytes.get(end + 1) == Some(&b'>'))
                {
                    end += 1;
                }
                let value = &attrs[..end];
                attrs = &attrs[end..];
                value
            }
            None => return,
        };

        if value.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case("path") {
            out.paths.push(value.to_string());
        } else if name.eq_ignore_ascii_case("types") {
            out.types.push(value.to_string());
        }
    }
}
