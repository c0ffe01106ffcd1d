use std::io::{self, stdout, Stdout};

use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use wordleclient::api::ValidationClient;
use wordleclient::store::Store;

use actions::Action;

mod actions;
mod events;
mod ui;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    store: Store,
    client: ValidationClient,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    token: CancellationToken,
}

impl App {
    pub fn init(store: Store, client: ValidationClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        App {
            exit: false,
            store,
            client,
            action_tx,
            action_rx,
            token: CancellationToken::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events();

        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            match self.action_rx.recv().await {
                Some(action) => self.update(action),
                None => break,
            }
        }
        self.token.cancel();
        task.abort();
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}
