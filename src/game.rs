use tracing::debug;

use crate::wordle::Guess;

pub const DEFAULT_LETTERS: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of letters of the word to guess
    pub letters: usize,
    /// Number of guesses before the game is over
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            letters: DEFAULT_LETTERS,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// State of a single game session.
///
/// Once `completed` is set neither the current word nor the guesses change
/// anymore.
#[derive(Clone, Debug)]
pub struct GameState {
    completed: bool,
    word: String,
    letters: usize,
    guesses: Vec<Guess>,
    max_guesses: usize,
    word_completed: bool,
    invalid_attempt: bool,
    submitting: bool,
    transport_error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// A word has at least one letter, smaller configs are raised to one.
    pub fn new(config: GameConfig) -> Self {
        let letters = config.letters.max(1);
        GameState {
            completed: false,
            word: String::with_capacity(letters),
            letters,
            guesses: Vec::with_capacity(config.max_guesses),
            max_guesses: config.max_guesses,
            word_completed: false,
            invalid_attempt: false,
            submitting: false,
            transport_error: None,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> usize {
        self.letters
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn word_completed(&self) -> bool {
        self.word_completed
    }

    pub fn invalid_attempt(&self) -> bool {
        self.invalid_attempt
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    /// True if the last guess matched the solution
    pub fn won(&self) -> bool {
        self.guesses
            .last()
            .map(|g| g.result().is_solved())
            .unwrap_or(false)
    }

    fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    fn input_locked(&self) -> bool {
        self.completed || self.submitting
    }

    /// Type a letter. Appends while the row has room, afterwards the last
    /// letter is overwritten.
    pub fn set_word(&mut self, letter: char) {
        if self.input_locked() || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.word_len() >= self.letters {
            self.word.pop();
        }
        self.word.push(letter.to_ascii_uppercase());
        self.word_completed = self.word_len() == self.letters;
    }

    pub fn remove_last_character(&mut self) {
        if self.input_locked() || self.word.is_empty() {
            return;
        }
        self.word.pop();
        self.word_completed = false;
    }

    /// Append a guess to the history and reset the current word.
    ///
    /// Returns false if the game is over.
    pub fn add_guess(&mut self, guess: Guess) -> bool {
        if self.completed || self.guesses.len() >= self.max_guesses {
            debug!(word = guess.word(), "game is over, guess dropped");
            return false;
        }
        let solved = guess.result().is_solved();
        self.guesses.push(guess);
        self.word.clear();
        self.word_completed = false;
        self.completed = solved || self.guesses.len() == self.max_guesses;
        true
    }

    pub fn set_invalid_attempt(&mut self, invalid: bool) {
        self.invalid_attempt = invalid;
    }

    pub fn clear_invalid_attempt(&mut self) {
        self.invalid_attempt = false;
    }

    pub(crate) fn accepts_submission(&self) -> bool {
        !self.completed && self.guesses.len() < self.max_guesses && !self.submitting
    }

    pub(crate) fn has_full_word(&self) -> bool {
        self.word_completed && self.word_len() == self.letters
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub(crate) fn set_transport_error(&mut self, error: Option<String>) {
        self.transport_error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::ResultCode;

    fn type_word(state: &mut GameState, word: &str) {
        word.chars().for_each(|c| state.set_word(c));
    }

    fn guess(word: &str, result: &str) -> Guess {
        Guess::new(word, result.parse::<ResultCode>().unwrap())
    }

    #[test]
    fn initial_state() {
        let state = GameState::default();
        assert!(!state.completed());
        assert_eq!(state.word(), "");
        assert_eq!(state.letters(), 5);
        assert_eq!(state.max_guesses(), 6);
        assert!(state.guesses().is_empty());
        assert!(!state.word_completed());
        assert!(!state.invalid_attempt());
    }

    #[test]
    fn word_grows_until_complete() {
        let mut state = GameState::default();
        for (i, c) in "GAMES".chars().enumerate() {
            assert!(!state.word_completed());
            state.set_word(c);
            assert_eq!(state.word().len(), i + 1);
        }
        assert_eq!(state.word(), "GAMES");
        assert!(state.word_completed());
    }

    #[test]
    fn full_word_overwrites_last_letter() {
        let mut state = GameState::default();
        type_word(&mut state, "GAMESX");
        assert_eq!(state.word(), "GAMEX");
        assert!(state.word_completed());
    }

    #[test]
    fn letters_are_uppercased_and_filtered() {
        let mut state = GameState::default();
        type_word(&mut state, "a1b-");
        assert_eq!(state.word(), "AB");
    }

    #[test]
    fn remove_last_character() {
        let mut state = GameState::default();
        state.remove_last_character();
        assert_eq!(state.word(), "");

        type_word(&mut state, "GAMES");
        state.remove_last_character();
        assert_eq!(state.word(), "GAME");
        assert!(!state.word_completed());
    }

    #[test]
    fn solved_guess_completes_the_game() {
        let mut state = GameState::default();
        type_word(&mut state, "GAMES");
        assert!(state.add_guess(guess("GAMES", "11111")));

        assert!(state.completed());
        assert!(state.won());
        assert_eq!(state.word(), "");
        assert!(!state.add_guess(guess("OTHER", "xxxxx")));
        assert_eq!(state.guesses().len(), 1);
    }

    #[test]
    fn completed_game_ignores_input() {
        let mut state = GameState::default();
        state.add_guess(guess("GAMES", "11111"));

        state.set_word('A');
        assert_eq!(state.word(), "");
        state.remove_last_character();
        assert_eq!(state.word(), "");
        assert!(!state.accepts_submission());
    }

    #[test]
    fn last_guess_completes_the_game() {
        let mut state = GameState::default();
        for i in 0..6 {
            assert!(!state.completed(), "completed after {i} guesses");
            assert!(state.add_guess(guess("MINUS", "0xxx1")));
        }
        assert!(state.completed());
        assert!(!state.won());
        assert!(!state.add_guess(guess("GAMES", "11111")));
    }

    #[test]
    fn input_is_locked_while_submitting() {
        let mut state = GameState::default();
        type_word(&mut state, "GAMES");
        state.set_submitting(true);

        state.remove_last_character();
        state.set_word('X');
        assert_eq!(state.word(), "GAMES");
        assert!(!state.accepts_submission());
    }

    #[test]
    fn custom_config() {
        let mut state = GameState::new(GameConfig {
            letters: 3,
            max_guesses: 2,
        });
        type_word(&mut state, "CAT");
        assert!(state.has_full_word());
        state.add_guess(guess("CAT", "x0x"));
        state.add_guess(guess("ACT", "xx1"));
        assert!(state.completed());
    }

    #[test]
    fn zero_letters_is_raised_to_one() {
        let mut state = GameState::new(GameConfig {
            letters: 0,
            max_guesses: 6,
        });
        assert_eq!(state.letters(), 1);
        type_word(&mut state, "AB");
        assert_eq!(state.word(), "B");
        assert!(state.word_completed());
    }
}
