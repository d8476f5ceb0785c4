use super::lex::*;
use super::token::*;
use super::Error;
use crate::error;
use std::convert::TryFrom;

/// One numbered program line with its tokenized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: u16,
    body: Vec<u8>,
}

impl Line {
    /// Tokenizes `text` as the body of line `number`.
    pub fn new(number: u16, text: &str) -> Line {
        Line {
            number,
            body: lex(text),
        }
    }

    /// Wraps an already tokenized body. A `0x00` byte would end the stored
    /// line early, so a body holding one is refused.
    pub fn from_bytes(number: u16, body: Vec<u8>) -> Result<Line, Error> {
        if body.contains(&0) {
            return Err(error!(SyntaxError, Some(number); "END OF LINE INSIDE BODY"));
        }
        Ok(Line { number, body })
    }

    /// Parses one physical line of program text: `<digits><whitespace><body>`.
    ///
    /// A body made only of `::` yields `Ok(None)`. A body that starts with
    /// `::` keeps one `:` separator unless what follows is a remark.
    pub fn parse(s: &str) -> Result<Option<Line>, Error> {
        let s = s.trim();
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(error!(SyntaxError; "MISSING LINE NUMBER"));
        }
        let rest = &s[digits..];
        if !rest.starts_with(char::is_whitespace) {
            return Err(error!(SyntaxError; "MISSING SPACE AFTER LINE NUMBER"));
        }
        let number = match s[..digits].parse::<u16>() {
            Ok(number) => number,
            Err(_) => return Err(error!(Overflow; "LINE NUMBER OUT OF RANGE")),
        };
        let mut text = rest.trim_start().to_string();
        if let Some(after) = text.strip_prefix("::") {
            let after = after.trim();
            text = if after.is_empty() || matches_rem(after) {
                after.to_string()
            } else {
                format!(": {}", after)
            };
        }
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(Line::new(number, &text)))
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Renders the body the way LIST shows it.
    ///
    /// Keywords print their text. A keyword outside the unspaced set gets one
    /// trailing space, except when the next byte already separates it: end of
    /// line, space, or one of `( ) , ; : "`. So `PRINT "HI"` stays single
    /// spaced and `PRINT"HI"` stays unspaced. Trailing blanks are trimmed.
    pub fn text(&self) -> String {
        let mut s = String::new();
        let mut bytes = self.body.iter().copied().peekable();
        while let Some(byte) = bytes.next() {
            match Token::try_from(byte) {
                Ok(token) => {
                    s.push_str(token.keyword());
                    if token.is_spaced() && !is_listing_delimiter(bytes.peek().copied()) {
                        s.push(' ');
                    }
                }
                Err(PI) => s.push(PI_CHAR),
                Err(byte) => s.push(char::from(byte)),
            }
        }
        s.truncate(s.trim_end().len());
        s
    }
}

fn matches_rem(s: &str) -> bool {
    s.get(..3)
        .map_or(false, |head| head.eq_ignore_ascii_case(Token::Rem.keyword()))
}

fn is_listing_delimiter(byte: Option<u8>) -> bool {
    matches!(
        byte,
        None | Some(b' ') | Some(b'(') | Some(b')') | Some(b',') | Some(b';') | Some(b':') | Some(b'"')
    )
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text())
    }
}
