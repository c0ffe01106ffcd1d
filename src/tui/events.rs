use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use tracing::warn;

use super::actions::*;
use super::*;

impl App {
    /// Forward terminal events as actions until the app is cancelled
    pub fn handle_events(&self) -> tokio::task::JoinHandle<()> {
        let tx = self.action_tx.clone();
        let token = self.token.clone();

        tokio::spawn(forward_events(EventStream::new(), tx, token))
    }
}

/// Map `events` to actions. A failing or closed stream quits the app, as
/// no key could reach it anymore.
async fn forward_events<S>(
    mut events: S,
    tx: mpsc::UnboundedSender<Action>,
    token: CancellationToken,
) where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    loop {
        let event = tokio::select! {
            _ = token.cancelled() => break,
            event = events.next() => event,
        };
        let action = match event {
            Some(Ok(Event::Key(key))) => handle_key_event(key),
            Some(Ok(Event::Resize(_, _))) => Some(Action::Render),
            Some(Ok(_)) => None,
            Some(Err(e)) => {
                warn!(error = %e, "reading terminal events failed");
                let _ = tx.send(Action::Exit);
                break;
            }
            None => {
                warn!("terminal event stream closed");
                let _ = tx.send(Action::Exit);
                break;
            }
        };
        if let Some(action) = action {
            if tx.send(action).is_err() {
                break;
            }
        }
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    // crossterm also emits release and repeat events on Windows
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Exit);
    }
    // Shift is allowed, terminals report capitals with it
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Enter => Action::SubmitGuess,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Char(x) if x.is_ascii_alphabetic() => Action::EnterChar(x.to_ascii_uppercase()),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn letters_backspace_and_enter() {
        assert!(matches!(
            press(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(Action::EnterChar('G'))
        ));
        assert!(matches!(
            press(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::EnterChar('G'))
        ));
        assert!(matches!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Some(Action::DeleteChar)
        ));
        assert!(matches!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::SubmitGuess)
        ));
    }

    #[test]
    fn modifier_combinations_are_ignored() {
        assert!(press(KeyCode::Char('a'), KeyModifiers::ALT).is_none());
        assert!(press(KeyCode::Char('a'), KeyModifiers::ALT | KeyModifiers::SHIFT).is_none());
        assert!(press(KeyCode::Char('A'), KeyModifiers::CONTROL | KeyModifiers::SHIFT).is_none());
        assert!(press(KeyCode::Char('a'), KeyModifiers::CONTROL).is_none());
        assert!(press(KeyCode::Enter, KeyModifiers::SUPER).is_none());
        assert!(press(KeyCode::Char('1'), KeyModifiers::NONE).is_none());
        assert!(matches!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Exit)
        ));
    }

    async fn forwarded(events: Vec<io::Result<Event>>) -> Vec<Action> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        forward_events(futures::stream::iter(events), tx, CancellationToken::new()).await;

        let mut actions = vec![];
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[tokio::test]
    async fn closed_stream_quits() {
        let actions = forwarded(vec![key(KeyCode::Char('g'))]).await;
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::EnterChar('G')));
        assert!(matches!(actions[1], Action::Exit));
    }

    #[tokio::test]
    async fn failing_stream_quits() {
        let error = io::Error::new(io::ErrorKind::Other, "terminal is gone");
        let actions = forwarded(vec![Err(error), key(KeyCode::Enter)]).await;
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Exit));
    }

    #[tokio::test]
    async fn cancelled_forwarding_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        token.cancel();
        forward_events(futures::stream::pending(), tx, token).await;
        assert!(rx.try_recv().is_err());
    }
}
