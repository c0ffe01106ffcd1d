use tracing::debug;

use crate::wordle::{LetterStatus, ResultCode};

const LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Key {
    pub letter: char,
    /// `None` until the letter shows up in a guess
    pub status: Option<LetterStatus>,
    pub row: usize,
}

/// Status of the 26 letters of the on-screen keyboard
#[derive(Clone, Debug)]
pub struct KeyboardState {
    keys: Vec<Key>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        let keys = LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, letters)| {
                letters.chars().map(move |letter| Key {
                    letter,
                    status: None,
                    row,
                })
            })
            .collect();
        KeyboardState { keys }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Keys of one keyboard row, in layout order
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Key> {
        self.keys.iter().filter(move |k| k.row == row)
    }

    pub fn n_rows(&self) -> usize {
        LAYOUT.len()
    }

    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        let letter = letter.to_ascii_uppercase();
        self.keys
            .iter()
            .find(|k| k.letter == letter)
            .and_then(|k| k.status)
    }

    /// Overwrite the status of every letter of `word` with the status at the
    /// same position of `result`. Later positions win for repeated letters.
    ///
    /// # Example
    ///
    /// ```
    /// use wordleclient::keyboard::KeyboardState;
    /// use wordleclient::wordle::LetterStatus::*;
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.apply_guess_result("MINUS", &"0xxx1".parse().unwrap());
    /// assert_eq!(keyboard.status('M'), Some(Misplaced));
    /// assert_eq!(keyboard.status('S'), Some(Correct));
    /// assert_eq!(keyboard.status('Q'), None);
    /// ```
    pub fn apply_guess_result(&mut self, word: &str, result: &ResultCode) {
        for (letter, status) in word.chars().zip(result.iter()) {
            let letter = letter.to_ascii_uppercase();
            match self.keys.iter_mut().find(|k| k.letter == letter) {
                Some(key) => key.status = Some(status),
                None => debug!(%letter, "letter is not on the keyboard"),
            }
        }
    }
}
