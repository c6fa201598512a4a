//! Whitespace-token reader over the command stream.

use std::iter::Peekable;
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The stream ran out in the middle of a command.
    #[error("input ended early")]
    Exhausted,

    #[error("expected {expected}, found {token:?}")]
    Malformed { token: String, expected: &'static str },
}

pub type InputResult<T> = Result<T, InputError>;

pub struct Tokens<'a> {
    iter: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { iter: text.split_whitespace().peekable() }
    }

    /// `true` once every token has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.iter.peek().is_none()
    }

    pub fn word(&mut self) -> InputResult<&'a str> {
        self.iter.next().ok_or(InputError::Exhausted)
    }

    /// Next token parsed as `T`; `expected` names `T` in the error.
    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> InputResult<T> {
        let token = self.word()?;
        token
            .parse()
            .map_err(|_| InputError::Malformed { token: token.to_string(), expected })
    }

    pub fn count(&mut self) -> InputResult<usize> {
        self.parse("a count")
    }

    pub fn words(&mut self, n: usize) -> InputResult<Vec<&'a str>> {
        (0..n).map(|_| self.word()).collect()
    }

    pub fn pair(&mut self) -> InputResult<(&'a str, &'a str)> {
        Ok((self.word()?, self.word()?))
    }
}
