use super::token::{petscii, Token};

/// Tokenizes the text of one statement line.
///
/// Never fails. Text that is not a keyword is stored as literal bytes.
pub fn lex(s: &str) -> Vec<u8> {
    BasicLexer::new(s.trim()).collect()
}

fn is_basic_delimiter(ch: Option<char>) -> bool {
    matches!(
        ch,
        None | Some(' ') | Some('(') | Some(')') | Some(',') | Some(';') | Some(':') | Some('"')
    )
}

fn is_remark_prefix(ch: Option<&char>) -> bool {
    matches!(ch, None | Some(' ') | Some(':'))
}

fn matches_at(chars: &[char], keyword: &str) -> bool {
    chars.len() >= keyword.len()
        && chars
            .iter()
            .zip(keyword.chars())
            .all(|(c, k)| c.to_ascii_uppercase() == k)
}

struct BasicLexer {
    chars: Vec<char>,
    pos: usize,
    remark: Option<usize>,
    verbatim: bool,
}

impl BasicLexer {
    fn new(s: &str) -> BasicLexer {
        let chars: Vec<char> = s.chars().collect();
        let remark = BasicLexer::find_remark(&chars);
        BasicLexer {
            chars,
            pos: 0,
            remark,
            verbatim: false,
        }
    }

    /// Position of the first REM that stands alone as a word.
    fn find_remark(chars: &[char]) -> Option<usize> {
        let rem = Token::Rem.keyword();
        (0..chars.len()).find(|&i| {
            matches_at(&chars[i..], rem)
                && (i == 0 || is_remark_prefix(chars.get(i - 1)))
                && is_remark_prefix(chars.get(i + rem.len()))
        })
    }

    /// Longest keyword at the current position, if any.
    fn keyword(&self) -> Option<Token> {
        let end = self.remark.unwrap_or_else(|| self.chars.len());
        let rest = &self.chars[self.pos..end];
        Token::keywords().iter().copied().find(|token| {
            let keyword = token.keyword();
            matches_at(rest, keyword)
                && (token.is_operator() || is_basic_delimiter(rest.get(keyword.len()).copied()))
        })
    }
}

impl Iterator for BasicLexer {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = *self.chars.get(self.pos)?;
        if self.verbatim {
            self.pos += 1;
            return Some(petscii(ch));
        }
        if self.remark == Some(self.pos) {
            self.pos += Token::Rem.keyword().len();
            self.verbatim = true;
            return Some(Token::Rem as u8);
        }
        if let Some(token) = self.keyword() {
            self.pos += token.keyword().len();
            return Some(token as u8);
        }
        self.pos += 1;
        Some(petscii(ch))
    }
}
