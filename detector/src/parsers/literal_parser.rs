//! Lenient parser for Python-literal style objects.
//!
//! Judges sometimes answer with a dict literal instead of JSON: single-quoted strings,
//! `True`/`False`/`None`, tuples, trailing commas. [`parse_literal`] accepts that syntax (and
//! plain JSON, which is a subset of it for our purposes) and produces a [`serde_json::Value`].
//!
//! The whole input must be consumed by a single literal, surrounding whitespace excepted.

use serde_json::{Map, Number, Value};
use thiserror::Error;

const MAX_DEPTH: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message} at byte {position}")]
pub struct LiteralError {
    pub position: usize,
    pub message: String,
}

/// Parses `input` as one Python-style literal.
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut parser = LiteralParser { src: input, pos: 0 };
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError {
            position: self.pos,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        self.skip_whitespace();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.error(format!("expected '{expected}', found end of input"))),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.skip_whitespace();
        match self.peek() {
            Some('{') => self.parse_dict(depth),
            Some('[') => self.parse_sequence(']', depth),
            Some('(') => self.parse_sequence(')', depth),
            Some(quote @ ('\'' | '"')) => self.parse_string(quote).map(Value::String),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.parse_number(),
            Some(c) if c.is_alphabetic() => self.parse_constant(),
            Some(c) => Err(self.error(format!("unexpected character '{c}'"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_dict(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }

            let key = match self.parse_value(depth + 1)? {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(true) => "True".to_string(),
                Value::Bool(false) => "False".to_string(),
                Value::Null => "None".to_string(),
                _ => return Err(self.error("unhashable dict key")),
            };
            self.expect(':')?;
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(map)),
                Some(c) => return Err(self.error(format!("expected ',' or '}}', found '{c}'"))),
                None => return Err(self.error("unterminated dict")),
            }
        }
    }

    /// Lists and tuples both become JSON arrays. A parenthesised single element without a
    /// trailing comma is just that element, as in Python.
    fn parse_sequence(&mut self, close: char, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        let is_tuple = close == ')';
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                break;
            }

            items.push(self.parse_value(depth + 1)?);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => saw_comma = true,
                Some(c) if c == close => break,
                Some(c) => return Err(self.error(format!("expected ',' or '{close}', found '{c}'"))),
                None => return Err(self.error("unterminated sequence")),
            }
        }

        if is_tuple && items.len() == 1 && !saw_comma {
            return Ok(items.remove(0));
        }
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.bump();
        let mut out = String::new();
        loop {
            let c = self.bump().ok_or_else(|| self.error("unterminated string"))?;
            if c == quote {
                return Ok(out);
            }
            if c != '\\' {
                out.push(c);
                continue;
            }

            let escaped = self.bump().ok_or_else(|| self.error("unterminated escape"))?;
            match escaped {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '0' => out.push('\0'),
                'a' => out.push('\u{07}'),
                'b' => out.push('\u{08}'),
                'f' => out.push('\u{0c}'),
                'v' => out.push('\u{0b}'),
                '\\' | '\'' | '"' | '/' => out.push(escaped),
                '\n' => {}
                'x' => out.push(self.parse_code_point(2)?),
                'u' => out.push(self.parse_utf16_escape()?),
                'U' => out.push(self.parse_code_point(8)?),
                other => {
                    out.push('\\');
                    out.push(other);
                }
            }
        }
    }

    fn read_hex(&mut self, digits: usize) -> Result<u32, LiteralError> {
        let end = self.pos + digits;
        let hex = self
            .src
            .get(self.pos..end)
            .ok_or_else(|| self.error("truncated escape sequence"))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| self.error("invalid escape sequence"))?;
        self.pos = end;
        Ok(value)
    }

    fn parse_code_point(&mut self, digits: usize) -> Result<char, LiteralError> {
        let code = self.read_hex(digits)?;
        char::from_u32(code).ok_or_else(|| self.error("invalid code point"))
    }

    // `\uXXXX`, combining a JSON-style surrogate pair when one follows.
    fn parse_utf16_escape(&mut self) -> Result<char, LiteralError> {
        let high = self.read_hex(4)?;
        if (0xD800..0xDC00).contains(&high) && self.src[self.pos..].starts_with("\\u") {
            let checkpoint = self.pos;
            self.pos += 2;
            let low = self.read_hex(4)?;
            if (0xDC00..0xE000).contains(&low) {
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).ok_or_else(|| self.error("invalid surrogate pair"));
            }
            self.pos = checkpoint;
        }
        char::from_u32(high).ok_or_else(|| self.error("invalid code point"))
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '_' => {}
                '.' => is_float = true,
                'e' | 'E' => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-' | '+')) {
                        self.bump();
                    }
                    continue;
                }
                _ => break,
            }
            self.bump();
        }

        let text: String = self.src[start..self.pos]
            .chars()
            .filter(|c| *c != '_' && *c != '+')
            .collect();

        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(n.into()));
            }
            if let Ok(n) = text.parse::<u64>() {
                return Ok(Value::Number(n.into()));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| LiteralError {
                position: start,
                message: format!("invalid number '{text}'"),
            })
    }

    fn parse_constant(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        match &self.src[start..self.pos] {
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            "None" | "null" => Ok(Value::Null),
            other => Err(LiteralError {
                position: start,
                message: format!("unknown name '{other}'"),
            }),
        }
    }
}
