use std::collections::HashSet;

use objlit_value::identifier::{is_ident_continue, is_ident_start};
use objlit_value::sentinel::{
    COMMENT_KEY_SUFFIX, COMMENT_VALUE_PREFIX, SHORTHAND_VALUE, SPREAD_KEY_PREFIX, SPREAD_VALUE,
    VARIABLE_KEY_SUFFIX, VARIABLE_VALUE_PREFIX,
};

use crate::error::EncodeError;

/// Rewrite a JavaScript object-literal fragment into strict JSON text.
///
/// Every non-JSON construct is replaced by sentinel-bearing string data;
/// plain entries, punctuation, and incidental whitespace pass through
/// unchanged. Trailing commas are dropped. Fails without partial output when
/// the fragment is not a single object literal, when a real or synthesized
/// key collides with another key in the same scope, or when the rewritten
/// text does not parse as JSON.
pub fn encode(source: &str) -> Result<String, EncodeError> {
    let mut reader = Reader::new(source);
    reader.skip_ws();
    if reader.peek() != Some('{') {
        return Err(EncodeError::NotAnObject);
    }
    reader.object()?;
    reader.skip_ws();
    if reader.pos < reader.src.len() {
        return Err(EncodeError::TrailingCharacters { at: reader.pos });
    }
    reader.flush_to(source.len());
    let out = reader.out;
    serde_json::from_str::<serde_json::Value>(&out)?;
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Container {
    Object,
    Array,
}

impl Container {
    fn closer(self) -> char {
        match self {
            Container::Object => '}',
            Container::Array => ']',
        }
    }
}

/// Byte cursor over the source plus the rewritten output.
///
/// `pos` is the scan position; `copied` trails it and marks how much source
/// has been flushed to `out`. Verbatim text is flushed lazily, so a rewrite
/// only has to splice its replacement between two flush points.
struct Reader<'a> {
    src: &'a str,
    pos: usize,
    copied: usize,
    out: String,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            copied: 0,
            out: String::with_capacity(src.len()),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.src[self.pos..].starts_with(pat)
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn flush_to(&mut self, upto: usize) {
        self.out.push_str(&self.src[self.copied..upto]);
        self.copied = upto;
    }

    /// Flush up to `at` and return the output index of that position, for a
    /// later `insert_str`.
    fn mark(&mut self, at: usize) -> usize {
        self.flush_to(at);
        self.out.len()
    }

    /// Replace `src[start..end]` with `text` in the output.
    fn splice(&mut self, start: usize, end: usize, text: &str) {
        self.flush_to(start);
        self.out.push_str(text);
        self.copied = end;
    }

    /// Drop `src[start..end]` from the output.
    fn drop_span(&mut self, start: usize, end: usize) {
        self.flush_to(start);
        self.copied = end;
    }

    fn object(&mut self) -> Result<(), EncodeError> {
        self.pos += 1; // '{'
        let mut seen: HashSet<String> = HashSet::new();
        let mut spread_count: u32 = 0;
        loop {
            self.skip_ws();

            // A run of line comments binds to the entry that follows it.
            let mut comments: Vec<String> = Vec::new();
            let mut comment_at = 0;
            let mut comment_mark = 0;
            while self.starts_with("//") {
                if comments.is_empty() {
                    comment_at = self.pos;
                    comment_mark = self.mark(self.pos);
                }
                comments.push(self.read_comment_line());
                self.copied = self.pos;
                self.skip_ws();
            }

            match self.peek() {
                None => {
                    return Err(EncodeError::UnexpectedEof {
                        context: "object literal",
                    });
                }
                Some('}') => {
                    if !comments.is_empty() {
                        return Err(EncodeError::DanglingComment { at: comment_at });
                    }
                    self.pos += 1;
                    return Ok(());
                }
                _ => {}
            }

            let anchor = self.entry(&mut seen, &mut spread_count)?;

            if !comments.is_empty() {
                let key = format!("{anchor}{COMMENT_KEY_SUFFIX}");
                if !seen.insert(key.clone()) {
                    return Err(EncodeError::DuplicateKey { key });
                }
                let text = format!("{COMMENT_VALUE_PREFIX}{}", comments.join("\n"));
                let pseudo = format!("{}: {},", json_quote(&key), json_quote(&text));
                self.out.insert_str(comment_mark, &pseudo);
            }

            self.separator(Container::Object)?;
        }
    }

    fn array(&mut self) -> Result<(), EncodeError> {
        self.pos += 1; // '['
        loop {
            self.skip_ws();
            if self.starts_with("//") {
                return Err(EncodeError::CommentInArray { at: self.pos });
            }
            match self.peek() {
                None => {
                    return Err(EncodeError::UnexpectedEof {
                        context: "array literal",
                    });
                }
                Some(']') => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => {}
            }
            self.value(Container::Array)?;
            self.separator(Container::Array)?;
        }
    }

    /// Consume the `,` after an entry, dropping it when only whitespace
    /// separates it from the container's closer. The closer itself is left
    /// for the caller's loop.
    fn separator(&mut self, container: Container) -> Result<(), EncodeError> {
        self.skip_ws();
        match self.peek() {
            Some(',') => {
                let comma_at = self.pos;
                self.pos += 1;
                let mut look = self.pos;
                while let Some(c) = self.src[look..].chars().next() {
                    if c.is_whitespace() {
                        look += c.len_utf8();
                    } else {
                        break;
                    }
                }
                if self.src[look..].starts_with(container.closer()) {
                    self.drop_span(comma_at, comma_at + 1);
                }
                Ok(())
            }
            Some(c) if c == container.closer() => Ok(()),
            Some(c) => Err(EncodeError::Unexpected {
                at: self.pos,
                found: c,
                expected: "`,` or a closing bracket",
            }),
            None => Err(EncodeError::UnexpectedEof {
                context: "object literal",
            }),
        }
    }

    /// One object entry. Returns the anchor key a preceding comment binds to.
    fn entry(
        &mut self,
        seen: &mut HashSet<String>,
        spread_count: &mut u32,
    ) -> Result<String, EncodeError> {
        match self.peek() {
            Some('.') if self.starts_with("...") => {
                let start = self.pos;
                self.pos += 3;
                let (expr_start, expr_end) = self.scan_expr(Container::Object)?;
                if expr_start == expr_end {
                    return Err(EncodeError::Unexpected {
                        at: expr_start,
                        found: self.peek().unwrap_or('\0'),
                        expected: "a spread expression",
                    });
                }
                let path = self.src[expr_start..expr_end].to_string();
                *spread_count += 1;
                let key = format!("{SPREAD_KEY_PREFIX}{spread_count}{path}");
                check_unique(seen, &key)?;
                let repl = format!("{}: {}", json_quote(&key), json_quote(SPREAD_VALUE));
                self.splice(start, expr_end, &repl);
                Ok(key)
            }
            Some('[') => {
                let start = self.pos;
                let inner = self.scan_computed_key()?;
                let path = inner.trim().to_string();
                if path.is_empty() {
                    return Err(EncodeError::Unexpected {
                        at: start,
                        found: '[',
                        expected: "a computed key expression",
                    });
                }
                let key = format!("{path}{VARIABLE_KEY_SUFFIX}");
                check_unique(seen, &key)?;
                self.splice(start, self.pos, &json_quote(&key));
                self.expect_colon()?;
                self.value(Container::Object)?;
                Ok(path)
            }
            Some('\'' | '"') => {
                let start = self.pos;
                let name = self.read_string()?;
                check_unique(seen, &name)?;
                self.splice(start, self.pos, &json_quote(&name));
                self.expect_colon()?;
                self.value(Container::Object)?;
                Ok(name)
            }
            Some(c) if is_ident_start(c) => {
                let start = self.pos;
                let name = self.read_ident();
                let end = self.pos;
                check_unique(seen, &name)?;
                self.skip_ws();
                match self.peek() {
                    Some(':') => {
                        self.splice(start, end, &json_quote(&name));
                        self.pos += 1;
                        self.value(Container::Object)?;
                    }
                    Some(',' | '}') => {
                        let repl =
                            format!("{}: {}", json_quote(&name), json_quote(SHORTHAND_VALUE));
                        self.splice(start, end, &repl);
                    }
                    Some(c) => {
                        return Err(EncodeError::Unexpected {
                            at: self.pos,
                            found: c,
                            expected: "`:`, `,` or `}`",
                        });
                    }
                    None => {
                        return Err(EncodeError::UnexpectedEof {
                            context: "object literal",
                        });
                    }
                }
                Ok(name)
            }
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                let raw = self.read_number_key();
                check_unique(seen, &raw)?;
                self.splice(start, self.pos, &json_quote(&raw));
                self.expect_colon()?;
                self.value(Container::Object)?;
                Ok(raw)
            }
            Some(c) => Err(EncodeError::Unexpected {
                at: self.pos,
                found: c,
                expected: "a property",
            }),
            None => Err(EncodeError::UnexpectedEof {
                context: "object literal",
            }),
        }
    }

    fn value(&mut self, container: Container) -> Result<(), EncodeError> {
        self.skip_ws();
        match self.peek() {
            None => Err(EncodeError::UnexpectedEof { context: "value" }),
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some('\'' | '"') => {
                let start = self.pos;
                let s = self.read_string()?;
                self.splice(start, self.pos, &json_quote(&s));
                Ok(())
            }
            Some(_) => {
                let (start, end) = self.scan_expr(container)?;
                if start == end {
                    return Err(EncodeError::Unexpected {
                        at: start,
                        found: self.peek().unwrap_or('\0'),
                        expected: "a value",
                    });
                }
                let text = self.src[start..end].to_string();
                if matches!(text.as_str(), "true" | "false" | "null") || is_json_number(&text) {
                    return Ok(());
                }
                let repl = json_quote(&format!("{VARIABLE_VALUE_PREFIX}{text}"));
                self.splice(start, end, &repl);
                Ok(())
            }
        }
    }

    /// Scan a non-literal expression up to the next top-level `,` or the
    /// enclosing container's closer, respecting nested brackets and quotes.
    /// Returns the span with trailing whitespace excluded; the delimiter is
    /// not consumed.
    fn scan_expr(&mut self, container: Container) -> Result<(usize, usize), EncodeError> {
        self.skip_ws();
        let start = self.pos;
        let mut depth = 0u32;
        loop {
            let Some(c) = self.peek() else {
                return Err(EncodeError::UnexpectedEof {
                    context: "expression",
                });
            };
            match c {
                '(' | '[' | '{' => {
                    depth += 1;
                    self.pos += 1;
                }
                ')' | ']' | '}' => {
                    if depth == 0 && c == container.closer() {
                        break;
                    }
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                }
                ',' if depth == 0 => break,
                '\'' | '"' | '`' => self.skip_quoted()?,
                _ => self.pos += c.len_utf8(),
            }
        }
        let text = self.src[start..self.pos].trim_end();
        Ok((start, start + text.len()))
    }

    /// Scan the bracketed expression of a computed key, returning its inner
    /// text with the cursor left after the closing `]`.
    fn scan_computed_key(&mut self) -> Result<String, EncodeError> {
        self.pos += 1; // '['
        let inner_start = self.pos;
        let mut depth = 0u32;
        loop {
            let Some(c) = self.peek() else {
                return Err(EncodeError::UnexpectedEof {
                    context: "computed key",
                });
            };
            match c {
                '(' | '[' | '{' => {
                    depth += 1;
                    self.pos += 1;
                }
                ']' if depth == 0 => break,
                ')' | ']' | '}' => {
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                }
                '\'' | '"' | '`' => self.skip_quoted()?,
                _ => self.pos += c.len_utf8(),
            }
        }
        let inner = self.src[inner_start..self.pos].to_string();
        self.pos += 1; // ']'
        Ok(inner)
    }

    fn expect_colon(&mut self) -> Result<(), EncodeError> {
        self.skip_ws();
        match self.peek() {
            Some(':') => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(EncodeError::Unexpected {
                at: self.pos,
                found: c,
                expected: "`:`",
            }),
            None => Err(EncodeError::UnexpectedEof {
                context: "object literal",
            }),
        }
    }

    fn read_ident(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        self.src[start..self.pos].to_string()
    }

    fn read_number_key(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.src[start..self.pos].to_string()
    }

    /// Text of a `//` comment up to the end of the line, trailing whitespace
    /// trimmed. The cursor stops before the newline.
    fn read_comment_line(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.src[start..self.pos].trim_end().to_string()
    }

    /// Decode a single- or double-quoted string literal.
    fn read_string(&mut self) -> Result<String, EncodeError> {
        let start = self.pos;
        let Some(quote) = self.peek() else {
            return Err(EncodeError::UnexpectedEof { context: "string" });
        };
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(EncodeError::UnterminatedString { at: start });
            };
            if c == quote {
                self.pos += 1;
                return Ok(value);
            }
            match c {
                '\n' | '\r' => return Err(EncodeError::UnterminatedString { at: start }),
                '\\' => {
                    self.pos += 1;
                    let Some(esc) = self.peek() else {
                        return Err(EncodeError::UnterminatedString { at: start });
                    };
                    self.pos += esc.len_utf8();
                    match esc {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        'b' => value.push('\u{0008}'),
                        'f' => value.push('\u{000C}'),
                        'v' => value.push('\u{000B}'),
                        '0' => value.push('\0'),
                        'x' => {
                            let at = self.pos;
                            let code = self.read_hex(2, at)?;
                            value.push(char::from_u32(code).ok_or(EncodeError::InvalidEscape { at })?);
                        }
                        'u' => value.push(self.read_unicode_escape(start)?),
                        '\n' => {} // line continuation
                        other => value.push(other),
                    }
                }
                _ => {
                    value.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    fn read_unicode_escape(&mut self, string_start: usize) -> Result<char, EncodeError> {
        let at = self.pos;
        if self.peek() == Some('{') {
            self.pos += 1;
            let hex_start = self.pos;
            while let Some(c) = self.peek() {
                if c == '}' {
                    break;
                }
                self.pos += c.len_utf8();
            }
            if self.peek() != Some('}') {
                return Err(EncodeError::UnterminatedString { at: string_start });
            }
            let code = u32::from_str_radix(&self.src[hex_start..self.pos], 16)
                .map_err(|_| EncodeError::InvalidEscape { at })?;
            self.pos += 1;
            return char::from_u32(code).ok_or(EncodeError::InvalidEscape { at });
        }
        let first = self.read_hex(4, at)?;
        if (0xD800..=0xDBFF).contains(&first) {
            // combine a surrogate pair
            if self.starts_with("\\u") {
                self.pos += 2;
                let second = self.read_hex(4, at)?;
                if (0xDC00..=0xDFFF).contains(&second) {
                    let code = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                    return char::from_u32(code).ok_or(EncodeError::InvalidEscape { at });
                }
            }
            return Err(EncodeError::InvalidEscape { at });
        }
        char::from_u32(first).ok_or(EncodeError::InvalidEscape { at })
    }

    fn read_hex(&mut self, digits: usize, at: usize) -> Result<u32, EncodeError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let d = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or(EncodeError::InvalidEscape { at })?;
            code = code * 16 + d;
            self.pos += 1;
        }
        Ok(code)
    }

    /// Skip over a quoted string inside an expression without decoding it.
    fn skip_quoted(&mut self) -> Result<(), EncodeError> {
        let start = self.pos;
        let Some(quote) = self.peek() else {
            return Err(EncodeError::UnexpectedEof { context: "string" });
        };
        self.pos += 1;
        while let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\\' {
                if let Some(esc) = self.peek() {
                    self.pos += esc.len_utf8();
                }
            } else if c == quote {
                return Ok(());
            }
        }
        Err(EncodeError::UnterminatedString { at: start })
    }
}

fn check_unique(seen: &mut HashSet<String>, key: &str) -> Result<(), EncodeError> {
    if !seen.insert(key.to_string()) {
        return Err(EncodeError::DuplicateKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

fn is_json_number(text: &str) -> bool {
    serde_json::from_str::<serde_json::Number>(text).is_ok()
}

/// JSON-quote a string value (not a full serializer; enough for sentinel
/// payloads and decoded string literals).
fn json_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
