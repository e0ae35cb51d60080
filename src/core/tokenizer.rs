use std::fmt;

use super::buffer::{BufferError, GrowableBuffer};

/// Most tokens a single line may carry, command name included.
pub const MAX_ARGS: usize = 50;

const TOKEN_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    TooManyArguments,
    OutOfMemory,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooManyArguments => write!(f, "too many arguments"),
            ParseError::OutOfMemory => write!(f, "can't allocate memory space"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<BufferError> for ParseError {
    fn from(_: BufferError) -> Self {
        ParseError::OutOfMemory
    }
}

/// Owned, bounded list of the words on one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn command(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits `line` on runs of ASCII spaces.
///
/// Only `' '` separates words; tabs, quotes and backslashes are ordinary
/// characters. A blank line produces an empty list.
pub fn parse(line: &str) -> Result<TokenList, ParseError> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::with_capacity(MAX_ARGS);
    let mut i = skip_spaces(bytes, 0);

    while i < bytes.len() {
        if tokens.len() == MAX_ARGS {
            return Err(ParseError::TooManyArguments);
        }

        let mut token = GrowableBuffer::with_capacity(TOKEN_CAPACITY)?;
        while i < bytes.len() && bytes[i] != b' ' {
            token.push(bytes[i])?;
            i += 1;
        }
        tokens.push(token.into_string());

        i = skip_spaces(bytes, i);
    }

    Ok(TokenList { tokens })
}

fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    i
}
