//! The store composes the game and keyboard slices and drives the guess
//! submission: local checks, the call to the validation endpoint and the
//! reconciliation of the answer into both slices.

use tracing::{debug, info, warn};

use crate::api::{ApiError, ValidationClient, Verdict};
use crate::game::{GameConfig, GameState};
use crate::keyboard::KeyboardState;
use crate::wordle::Guess;

/// What happened to a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game over, history full or another guess in flight
    Ignored,
    /// The current word is not complete, nothing was sent
    Incomplete,
    /// The guess was appended to the history
    Accepted(Guess),
    /// The endpoint refused the word
    Rejected,
    /// The endpoint could not be reached or understood
    Failed(String),
}

/// First half of a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The word has to be validated by the endpoint
    Pending(String),
    /// Nothing to send
    Done(SubmitOutcome),
}

#[derive(Clone, Debug, Default)]
pub struct Store {
    pub game: GameState,
    pub keyboard: KeyboardState,
}

impl Store {
    pub fn new(config: GameConfig) -> Self {
        Store {
            game: GameState::new(config),
            keyboard: KeyboardState::new(),
        }
    }

    /// Run the local checks of a submission. On `Pending` the game is marked
    /// as submitting until `finish_submit` is called.
    pub fn begin_submit(&mut self) -> Submission {
        if !self.game.accepts_submission() {
            debug!(
                completed = self.game.completed(),
                submitting = self.game.submitting(),
                "submission ignored"
            );
            return Submission::Done(SubmitOutcome::Ignored);
        }
        self.game.set_transport_error(None);
        if !self.game.has_full_word() {
            debug!(word = self.game.word(), "incomplete word");
            self.game.set_invalid_attempt(true);
            return Submission::Done(SubmitOutcome::Incomplete);
        }
        self.game.set_submitting(true);
        Submission::Pending(self.game.word().to_string())
    }

    /// Reconcile the answer of the endpoint for `word` into both slices
    pub fn finish_submit(
        &mut self,
        word: &str,
        verdict: Result<Verdict, ApiError>,
    ) -> SubmitOutcome {
        self.game.set_submitting(false);
        match verdict {
            Ok(Verdict::Accepted(result)) => {
                let guess = Guess::new(word, result);
                if !self.game.add_guess(guess.clone()) {
                    return SubmitOutcome::Ignored;
                }
                self.keyboard.apply_guess_result(guess.word(), guess.result());
                info!(
                    word = guess.word(),
                    result = %guess.result(),
                    completed = self.game.completed(),
                    "guess accepted"
                );
                SubmitOutcome::Accepted(guess)
            }
            Ok(Verdict::Rejected) => {
                info!(word, "guess rejected");
                self.game.set_invalid_attempt(true);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                warn!(word, error = %e, "validation failed");
                let message = e.to_string();
                self.game.set_transport_error(Some(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Submit the current word and wait for the endpoint
    pub async fn submit_guess(&mut self, client: &ValidationClient) -> SubmitOutcome {
        match self.begin_submit() {
            Submission::Done(outcome) => outcome,
            Submission::Pending(word) => {
                let verdict = client.check(&word).await;
                self.finish_submit(&word, verdict)
            }
        }
    }
}
