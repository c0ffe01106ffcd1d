use std::time::Duration;

use tracing::debug;
use wordleclient::api::{ApiError, Verdict};
use wordleclient::store::{SubmitOutcome, Submission};

use super::*;

/// How long the current row shows the rejection
const INVALID_FEEDBACK: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub enum Action {
    Exit,
    Render,
    EnterChar(char),
    DeleteChar,
    SubmitGuess,
    GuessValidated {
        word: String,
        verdict: Result<Verdict, ApiError>,
    },
    ClearInvalidAttempt,
}

impl App {
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Exit => {
                self.token.cancel();
                self.exit = true;
            }
            Action::Render => {}
            Action::EnterChar(x) => {
                self.store.game.set_word(x);
            }
            Action::DeleteChar => {
                self.store.game.remove_last_character();
            }
            Action::SubmitGuess => match self.store.begin_submit() {
                Submission::Pending(word) => self.spawn_validation(word),
                Submission::Done(SubmitOutcome::Incomplete) => self.schedule_clear_invalid(),
                Submission::Done(_) => {}
            },
            Action::GuessValidated { word, verdict } => {
                if self.store.finish_submit(&word, verdict) == SubmitOutcome::Rejected {
                    self.schedule_clear_invalid();
                }
            }
            Action::ClearInvalidAttempt => {
                self.store.game.clear_invalid_attempt();
            }
        }
    }

    /// Ask the endpoint in the background, the answer comes back as
    /// `Action::GuessValidated`
    fn spawn_validation(&self, word: String) {
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        let token = self.token.child_token();

        tokio::spawn(async move {
            let verdict = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(%word, "validation cancelled");
                    return;
                }
                x = client.check(&word) => x,
            };
            if tx.send(Action::GuessValidated { word, verdict }).is_err() {
                debug!("event loop is gone");
            }
        });
    }

    fn schedule_clear_invalid(&self) {
        let tx = self.action_tx.clone();
        let token = self.token.child_token();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(INVALID_FEEDBACK) => {
                    let _ = tx.send(Action::ClearInvalidAttempt);
                }
            }
        });
    }
}
