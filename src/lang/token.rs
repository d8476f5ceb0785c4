use std::collections::HashMap;
use std::convert::TryFrom;
use std::sync::OnceLock;

/// Reserved code rendered as the pi symbol.
pub const PI: u8 = 0xFF;

/// The pi symbol as it appears in listings.
pub const PI_CHAR: char = 'π';

struct Table {
    by_string: HashMap<&'static str, Token>,
    keywords: Vec<Token>,
}

static TABLE: OnceLock<Table> = OnceLock::new();

fn table() -> &'static Table {
    TABLE.get_or_init(|| {
        let mut keywords: Vec<Token> = Token::ALL.to_vec();
        keywords.sort_by(|a, b| {
            let (a, b) = (a.keyword(), b.keyword());
            b.len().cmp(&a.len()).then_with(|| a.cmp(b))
        });
        Table {
            by_string: Token::ALL.iter().map(|t| (t.keyword(), *t)).collect(),
            keywords,
        }
    })
}

/// One byte keyword codes of BASIC V2.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Token {
    End = 0x80,
    For,
    Next,
    Data,
    InputFile,
    Input,
    Dim,
    Read,
    Let,
    Goto,
    Run,
    If,
    Restore,
    Gosub,
    Return,
    Rem,
    Stop,
    On,
    Wait,
    Load,
    Save,
    Verify,
    Def,
    Poke,
    PrintFile,
    Print,
    Cont,
    List,
    Clr,
    Cmd,
    Sys,
    Open,
    Close,
    Get,
    New,
    Tab,
    To,
    Fn,
    Spc,
    Then,
    Not,
    Step,
    Plus,
    Minus,
    Multiply,
    Divide,
    Caret,
    And,
    Or,
    Greater,
    Equal,
    Less,
    Sgn,
    Int,
    Abs,
    Usr,
    Fre,
    Pos,
    Sqr,
    Rnd,
    Log,
    Exp,
    Cos,
    Sin,
    Tan,
    Atn,
    Peek,
    Len,
    StrS,
    Val,
    Asc,
    ChrS,
    LeftS,
    RightS,
    MidS,
    Go = 0xCB,
}

impl Token {
    pub const FIRST: u8 = Token::End as u8;
    pub const LAST: u8 = Token::Go as u8;

    #[rustfmt::skip]
    pub const ALL: [Token; 76] = {
        use Token::*;
        [
            End, For, Next, Data, InputFile, Input, Dim, Read, Let, Goto, Run, If,
            Restore, Gosub, Return, Rem, Stop, On, Wait, Load, Save, Verify, Def,
            Poke, PrintFile, Print, Cont, List, Clr, Cmd, Sys, Open, Close, Get,
            New, Tab, To, Fn, Spc, Then, Not, Step, Plus, Minus, Multiply, Divide,
            Caret, And, Or, Greater, Equal, Less, Sgn, Int, Abs, Usr, Fre, Pos,
            Sqr, Rnd, Log, Exp, Cos, Sin, Tan, Atn, Peek, Len, StrS, Val, Asc,
            ChrS, LeftS, RightS, MidS, Go,
        ]
    };

    /// Looks up an upper case keyword.
    pub fn from_string(s: &str) -> Option<Token> {
        table().by_string.get(s).copied()
    }

    /// Every token, longest keyword first, ties in lexicographic order.
    pub fn keywords() -> &'static [Token] {
        &table().keywords
    }

    /// Single symbol operators match without a following delimiter.
    pub fn is_operator(self) -> bool {
        use Token::*;
        matches!(
            self,
            Plus | Minus | Multiply | Divide | Caret | Greater | Equal | Less
        )
    }

    /// Whether a listing puts a space after this keyword.
    pub fn is_spaced(self) -> bool {
        use Token::*;
        !matches!(
            self,
            Tab | Spc
                | Plus
                | Minus
                | Multiply
                | Divide
                | Caret
                | And
                | Or
                | Greater
                | Equal
                | Less
        )
    }

    pub fn keyword(self) -> &'static str {
        use Token::*;
        match self {
            End => "END",
            For => "FOR",
            Next => "NEXT",
            Data => "DATA",
            InputFile => "INPUT#",
            Input => "INPUT",
            Dim => "DIM",
            Read => "READ",
            Let => "LET",
            Goto => "GOTO",
            Run => "RUN",
            If => "IF",
            Restore => "RESTORE",
            Gosub => "GOSUB",
            Return => "RETURN",
            Rem => "REM",
            Stop => "STOP",
            On => "ON",
            Wait => "WAIT",
            Load => "LOAD",
            Save => "SAVE",
            Verify => "VERIFY",
            Def => "DEF",
            Poke => "POKE",
            PrintFile => "PRINT#",
            Print => "PRINT",
            Cont => "CONT",
            List => "LIST",
            Clr => "CLR",
            Cmd => "CMD",
            Sys => "SYS",
            Open => "OPEN",
            Close => "CLOSE",
            Get => "GET",
            New => "NEW",
            Tab => "TAB(",
            To => "TO",
            Fn => "FN",
            Spc => "SPC(",
            Then => "THEN",
            Not => "NOT",
            Step => "STEP",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Caret => "^",
            And => "AND",
            Or => "OR",
            Greater => ">",
            Equal => "=",
            Less => "<",
            Sgn => "SGN",
            Int => "INT",
            Abs => "ABS",
            Usr => "USR",
            Fre => "FRE",
            Pos => "POS",
            Sqr => "SQR",
            Rnd => "RND",
            Log => "LOG",
            Exp => "EXP",
            Cos => "COS",
            Sin => "SIN",
            Tan => "TAN",
            Atn => "ATN",
            Peek => "PEEK",
            Len => "LEN",
            StrS => "STR$",
            Val => "VAL",
            Asc => "ASC",
            ChrS => "CHR$",
            LeftS => "LEFT$",
            RightS => "RIGHT$",
            MidS => "MID$",
            Go => "GO",
        }
    }
}

impl TryFrom<u8> for Token {
    type Error = u8;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        if (Token::FIRST..=Token::LAST).contains(&byte) {
            Ok(Token::ALL[(byte - Token::FIRST) as usize])
        } else {
            Err(byte)
        }
    }
}

impl From<Token> for u8 {
    fn from(token: Token) -> u8 {
        token as u8
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Normalizes one character to the byte stored in a program line.
///
/// Lower case letters fold to upper case because the machine keeps its
/// lower case glyphs elsewhere in the character set. `π` maps to [`PI`] and
/// `U+00CC..=U+00FE` map to their own byte, which is how a listing renders
/// those bytes. `NUL` ends a stored line, so it becomes `?` like anything
/// else outside ASCII.
pub fn petscii(ch: char) -> u8 {
    match ch {
        'a'..='z' => ch.to_ascii_uppercase() as u8,
        PI_CHAR => PI,
        '\0' => b'?',
        _ if ch.is_ascii() => ch as u8,
        '\u{CC}'..='\u{FE}' => ch as u32 as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Rem));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Token::Rem as u8, 0x8F);
        assert_eq!(Token::Print as u8, 0x99);
        assert_eq!(Token::Tab as u8, 0xA3);
        assert_eq!(Token::Plus as u8, 0xAA);
        assert_eq!(Token::Less as u8, 0xB3);
        assert_eq!(Token::MidS as u8, 0xCA);
        for (i, t) in Token::ALL.iter().enumerate() {
            assert_eq!(*t as u8, Token::FIRST + i as u8);
            assert_eq!(Token::try_from(*t as u8), Ok(*t));
            assert_eq!(Token::from_string(t.keyword()), Some(*t));
        }
        assert_eq!(Token::try_from(0x7F), Err(0x7F));
        assert_eq!(Token::try_from(0xCC), Err(0xCC));
        assert_eq!(Token::try_from(PI), Err(PI));
    }

    #[test]
    fn test_keyword_order() {
        let k = Token::keywords();
        assert_eq!(k.len(), Token::ALL.len());
        assert_eq!(k[0], Token::Restore);
        assert!(k.windows(2).all(|w| {
            let (a, b) = (w[0].keyword(), w[1].keyword());
            a.len() > b.len() || (a.len() == b.len() && a < b)
        }));
        let print_file = k.iter().position(|t| *t == Token::PrintFile);
        let print = k.iter().position(|t| *t == Token::Print);
        assert!(print_file < print);
    }

    #[test]
    fn test_petscii() {
        assert_eq!(petscii('a'), b'A');
        assert_eq!(petscii('Z'), b'Z');
        assert_eq!(petscii(':'), b':');
        assert_eq!(petscii('π'), PI);
        assert_eq!(petscii('\u{E9}'), 0xE9);
        assert_eq!(petscii('\u{C3}'), b'?');
        assert_eq!(petscii('€'), b'?');
        assert_eq!(petscii('\0'), b'?');
    }
}
