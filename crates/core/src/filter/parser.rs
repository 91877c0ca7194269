// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter expressions.
//!
//! Parses text like `label:bug (assignee:alice OR NOT milestone:v1)` into a
//! [`FilterExpression`] tree. The output of [`FilterExpression`]'s `Display`
//! implementation parses back to an equal tree.

use chrono::NaiveDate;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};

use super::expr::{
    is_word_boundary, CompareOp, Comparison, FilterExpression, Qualifier, QualifierKind,
    QualifierValue, ValueType,
};

/// Parse a filter expression from a string.
///
/// # Examples
///
/// ```ignore
/// let expr = parse_filter("label:bug assignee:alice")?;
/// let expr = parse_filter("id:>100 OR created:>=2024-01-01")?;
/// let expr = parse_filter("NOT (label:wontfix | is:closed)")?;
/// ```
///
/// # Errors
///
/// Returns an error if the input is empty, names an unknown qualifier,
/// carries a value of the wrong type, is not well formed, or nests deeper
/// than [`MAX_DEPTH`].
pub fn parse_filter(input: &str) -> Result<FilterExpression> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(Error::FilterEmpty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end: input.len(),
    };
    let (expr, _) = parser.parse_or()?;
    match parser.tokens.get(parser.pos) {
        Some(extra) => Err(extra.unexpected()),
        None => Ok(expr),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LParen,
    RParen,
    And,
    Or,
    Not,
    Word(String),
    Quoted(String),
    Qualifier {
        name: String,
        value: String,
        quoted: bool,
    },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Not => write!(f, "NOT"),
            Token::Word(w) => write!(f, "{w}"),
            Token::Quoted(s) => write!(f, "\"{s}\""),
            Token::Qualifier { name, value, .. } => write!(f, "{name}:{value}"),
        }
    }
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    position: usize,
}

impl Spanned {
    fn unexpected(&self) -> Error {
        Error::UnexpectedToken {
            found: self.token.to_string(),
            position: self.position,
        }
    }
}

/// Split input into tokens, recording the byte offset of each.
fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let token = match c {
            '(' => {
                chars.next();
                Token::LParen
            }
            ')' => {
                chars.next();
                Token::RParen
            }
            '|' | '&' => {
                chars.next();
                // `||` and `&&` are accepted as doubled forms
                if chars.peek().is_some_and(|&(_, next)| next == c) {
                    chars.next();
                }
                if c == '|' {
                    Token::Or
                } else {
                    Token::And
                }
            }
            '!' | '-' => {
                chars.next();
                Token::Not
            }
            '"' => {
                chars.next();
                Token::Quoted(read_quoted(&mut chars, position)?)
            }
            _ => read_word_token(input, &mut chars)?,
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

fn read_word_token(input: &str, chars: &mut Peekable<CharIndices<'_>>) -> Result<Token> {
    let start = chars.peek().map_or(input.len(), |&(i, _)| i);
    let mut end = input.len();
    while let Some(&(i, c)) = chars.peek() {
        if is_word_boundary(c) {
            end = i;
            break;
        }
        chars.next();
    }
    let word = &input[start..end];

    // `name:value`; a leading colon is plain text
    if let Some(colon) = word.find(':').filter(|&i| i > 0) {
        let name = word[..colon].to_string();
        let mut value = word[colon + 1..].to_string();
        let mut quoted = false;
        if value.is_empty() {
            if let Some(&(quote_pos, '"')) = chars.peek() {
                chars.next();
                value = read_quoted(chars, quote_pos)?;
                quoted = true;
            }
        }
        return Ok(Token::Qualifier {
            name,
            value,
            quoted,
        });
    }

    Ok(match word {
        "AND" => Token::And,
        "OR" => Token::Or,
        "NOT" => Token::Not,
        _ => Token::Word(word.to_string()),
    })
}

/// Read up to the closing quote. The opening quote is already consumed.
fn read_quoted(chars: &mut Peekable<CharIndices<'_>>, start: usize) -> Result<String> {
    let mut text = String::new();
    for (_, c) in chars.by_ref() {
        if c == '"' {
            return Ok(text);
        }
        text.push(c);
    }
    Err(Error::UnterminatedQuote { position: start })
}

/// Maximum nesting of `NOT`, parentheses and binary operators in a parsed
/// tree.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent over the token stream.
///
/// Precedence from loosest to tightest: `OR`, `AND` (explicit or by
/// juxtaposition), `NOT`. Binary operators associate to the left.
///
/// Each parse method returns the subtree with its height. `depth` counts
/// the `NOT` and `(` currently open.
struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |s| s.position)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn starts_operand(&self) -> bool {
        matches!(
            self.peek(),
            Some(
                Token::LParen
                    | Token::Not
                    | Token::Word(_)
                    | Token::Quoted(_)
                    | Token::Qualifier { .. }
            )
        )
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::FilterTooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_or(&mut self) -> Result<(FilterExpression, usize)> {
        let (mut left, mut height) = self.parse_and()?;
        while self.eat(&Token::Or) {
            let position = self.position();
            let (right, right_height) = self.parse_and()?;
            height = combined_height(height, right_height, position)?;
            left = FilterExpression::or(left, right);
        }
        Ok((left, height))
    }

    fn parse_and(&mut self) -> Result<(FilterExpression, usize)> {
        let (mut left, mut height) = self.parse_unary()?;
        loop {
            if !self.eat(&Token::And) && !self.starts_operand() {
                break;
            }
            let position = self.position();
            let (right, right_height) = self.parse_unary()?;
            height = combined_height(height, right_height, position)?;
            left = FilterExpression::and(left, right);
        }
        Ok((left, height))
    }

    fn parse_unary(&mut self) -> Result<(FilterExpression, usize)> {
        let position = self.position();
        if self.eat(&Token::Not) {
            self.enter(position)?;
            let (inner, height) = self.parse_unary()?;
            self.leave();
            let height = combined_height(height, 0, position)?;
            return Ok((FilterExpression::not(inner), height));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<(FilterExpression, usize)> {
        let Some(spanned) = self.tokens.get(self.pos).cloned() else {
            return Err(Error::UnexpectedEnd {
                expected: "expected a qualifier, keyword or '('",
            });
        };
        self.pos += 1;

        match spanned.token {
            Token::LParen => {
                self.enter(spanned.position)?;
                let inner = self.parse_or()?;
                self.leave();
                match self.tokens.get(self.pos) {
                    Some(s) if s.token == Token::RParen => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(other) => Err(other.unexpected()),
                    None => Err(Error::UnexpectedEnd {
                        expected: "missing closing ')'",
                    }),
                }
            }
            Token::Word(text) | Token::Quoted(text) => Ok((
                FilterExpression::qualifier(QualifierKind::Keyword, text),
                1,
            )),
            Token::Qualifier {
                name,
                value,
                quoted,
            } => Ok((
                FilterExpression::Qualifier(build_qualifier(&name, &value, quoted)?),
                1,
            )),
            Token::RParen | Token::And | Token::Or | Token::Not => Err(spanned.unexpected()),
        }
    }
}

/// Height of a binary node over subtrees of the given heights.
fn combined_height(left: usize, right: usize, position: usize) -> Result<usize> {
    let height = left.max(right) + 1;
    if height > MAX_DEPTH {
        return Err(Error::FilterTooDeep { position });
    }
    Ok(height)
}

fn build_qualifier(name: &str, value: &str, quoted: bool) -> Result<Qualifier> {
    let kind: QualifierKind = name.parse()?;

    if value.is_empty() && !quoted {
        return Err(Error::InvalidQualifierValue {
            kind,
            reason: "missing value".to_string(),
        });
    }

    let value = match kind.value_type() {
        ValueType::Text => QualifierValue::Text(value.to_string()),
        ValueType::Number => parse_comparison(value, |s| s.parse::<u64>().ok())
            .map(QualifierValue::Number)
            .ok_or_else(|| Error::InvalidQualifierValue {
                kind,
                reason: format!("'{value}' is not a number like 5, >5, <=5 or 3..9"),
            })?,
        ValueType::Date => parse_comparison(value, parse_date)
            .map(QualifierValue::Date)
            .ok_or_else(|| Error::InvalidQualifierValue {
                kind,
                reason: format!(
                    "'{value}' is not a date like 2024-01-01, >2024-01-01 or 2024-01-01..2024-02-01"
                ),
            })?,
    };

    Ok(Qualifier::new(kind, value))
}

/// Parse `5`, `<5`, `<=5`, `>5`, `>=5`, `=5` or `3..9`.
fn parse_comparison<T, F>(s: &str, parse: F) -> Option<Comparison<T>>
where
    F: Fn(&str) -> Option<T>,
{
    if let Some((low, high)) = s.split_once("..") {
        return Some(Comparison::Between(parse(low)?, parse(high)?));
    }

    // Two-character operators first
    let (op, rest) = if let Some(rest) = s.strip_prefix("<=") {
        (CompareOp::Le, rest)
    } else if let Some(rest) = s.strip_prefix(">=") {
        (CompareOp::Ge, rest)
    } else if let Some(rest) = s.strip_prefix('<') {
        (CompareOp::Lt, rest)
    } else if let Some(rest) = s.strip_prefix('>') {
        (CompareOp::Gt, rest)
    } else if let Some(rest) = s.strip_prefix('=') {
        (CompareOp::Eq, rest)
    } else {
        (CompareOp::Eq, s)
    };

    Some(Comparison::Compare(op, parse(rest)?))
}

/// Parse a date in YYYY-MM-DD format.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
