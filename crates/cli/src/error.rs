use std::fmt;

/// Success - the fill placed at least one value.
pub const EXIT_SUCCESS: u8 = 0;

/// The fill ran to completion but no target accepted a value.
pub const EXIT_NOTHING_FILLED: u8 = 1;

/// Usage error - bad arguments, unreadable or malformed inputs.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug)]
pub enum CliError {
    Parse(String),
    Io(String),
}

impl CliError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn code(&self) -> u8 {
        EXIT_USAGE
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "{msg}"),
            Self::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}
