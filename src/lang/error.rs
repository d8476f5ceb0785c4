#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: u16,
    line_number: Option<u16>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> Option<u16> {
        self.line_number
    }

    pub fn in_line_number(&self, line: Option<u16>) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    NoProgram = 70,
    InvalidLength = 71,
    CorruptProgram = 72,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            70 => "NO PROGRAM",
            71 => "INVALID LENGTH",
            72 => "CORRUPT PROGRAM",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
