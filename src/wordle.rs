use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter is not part of the solution (`x`)
    Absent,
    /// Letter is part of the solution, but at another position (`0`)
    Misplaced,
    /// Letter is at the right position (`1`)
    Correct,
}

impl LetterStatus {
    pub fn from_char(c: char) -> Option<LetterStatus> {
        match c {
            'x' => Some(LetterStatus::Absent),
            '0' => Some(LetterStatus::Misplaced),
            '1' => Some(LetterStatus::Correct),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            LetterStatus::Absent => 'x',
            LetterStatus::Misplaced => '0',
            LetterStatus::Correct => '1',
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseResultError {
    #[error("result code is empty")]
    Empty,

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// The per-letter feedback of a guess, one status per position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResultCode {
    status: Vec<LetterStatus>,
}

impl ResultCode {
    pub fn new(status: Vec<LetterStatus>) -> ResultCode {
        ResultCode { status }
    }

    pub fn len(&self) -> usize {
        self.status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<LetterStatus> {
        self.status.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.status.iter().copied()
    }

    /// True if every letter is at the right position
    ///
    /// # Example
    ///
    /// ```
    /// use wordleclient::wordle::ResultCode;
    /// assert!("11111".parse::<ResultCode>().unwrap().is_solved());
    /// assert!(!"1111x".parse::<ResultCode>().unwrap().is_solved());
    /// ```
    pub fn is_solved(&self) -> bool {
        !self.status.is_empty() && self.status.iter().all(|s| *s == LetterStatus::Correct)
    }
}

impl FromStr for ResultCode {
    type Err = ParseResultError;

    /// Parse the wire form of a result, e.g. `"0xx1x"`
    ///
    /// # Example
    ///
    /// ```
    /// use wordleclient::wordle::{LetterStatus::*, ResultCode};
    /// let code: ResultCode = "0x1".parse().unwrap();
    /// assert_eq!(code.iter().collect::<Vec<_>>(), vec![Misplaced, Absent, Correct]);
    /// assert!("01?".parse::<ResultCode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseResultError::Empty);
        }
        let status = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                LetterStatus::from_char(symbol)
                    .ok_or(ParseResultError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResultCode { status })
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.status {
            write!(f, "{}", s.as_char())?;
        }
        Ok(())
    }
}

/// A submitted word together with the feedback of the validation endpoint
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Guess {
    word: String,
    result: ResultCode,
}

impl Guess {
    pub fn new(word: &str, result: ResultCode) -> Guess {
        Guess {
            word: word.to_uppercase(),
            result,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn result(&self) -> &ResultCode {
        &self.result
    }

    /// Letters of the word paired with their status
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word.chars().zip(self.result.iter())
    }
}

use colored::Colorize;
impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ch, s) in self.letters() {
            let ch = format!(" {ch} ");
            match s {
                LetterStatus::Absent => write!(f, "{}", ch.on_black())?,
                LetterStatus::Misplaced => write!(f, "{}", ch.black().on_yellow())?,
                LetterStatus::Correct => write!(f, "{}", ch.black().on_green())?,
            }
        }
        Ok(())
    }
}
