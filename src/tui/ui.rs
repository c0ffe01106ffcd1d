use ratatui::{
    prelude::*,
    symbols,
    widgets::block::{Position, Title},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use wordleclient::keyboard::Key;
use wordleclient::wordle::{Guess, LetterStatus};

use super::App;

const CELL_WIDTH: u16 = 7;
const KEY_WIDTH: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();
        let game = &self.store.game;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3 * game.max_guesses() as u16),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3 * self.store.keyboard.n_rows() as u16),
                Constraint::Fill(1),
            ])
            .split(border.inner(area));

        self.render_board(rows[0], buf);
        self.render_guess_prompt(rows[1], buf);
        self.render_status(rows[2], buf);
        self.render_keyboard(rows[4], buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Wordle ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Guess ".into(),
            "<Enter> ".blue().bold(),
            " Delete ".into(),
            "<Backspace> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_board(&self, area: Rect, buf: &mut Buffer) {
        let game = &self.store.game;
        let word_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); game.max_guesses()])
            .split(area);

        let current = game.guesses().len();
        for (i, row) in word_rows.iter().enumerate() {
            match game.guesses().get(i) {
                Some(guess) => self.render_guess(guess, *row, buf),
                None if i == current && !game.completed() => self.render_current_row(*row, buf),
                None => self.render_empty_row(*row, buf),
            }
        }
    }

    fn row_layout(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); self.store.game.letters()])
            .flex(layout::Flex::Center)
            .split(area)
    }

    fn render_guess(&self, guess: &Guess, area: Rect, buf: &mut Buffer) {
        let cells = self.row_layout(area);
        for ((letter, status), cell) in guess.letters().zip(cells.iter()) {
            let block = Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(status_border(Some(status)));
            Paragraph::new(letter.to_string())
                .style(status_style(Some(status)))
                .bold()
                .centered()
                .block(block)
                .render(*cell, buf);
        }
    }

    fn render_current_row(&self, area: Rect, buf: &mut Buffer) {
        let game = &self.store.game;
        let cells = self.row_layout(area);
        let letters: Vec<char> = game.word().chars().collect();

        for (i, cell) in cells.iter().enumerate() {
            let border_style = if game.invalid_attempt() {
                Style::new().red()
            } else if game.submitting() {
                Style::new().dark_gray()
            } else {
                Style::new().white()
            };
            // the last typed letter is the active cell
            let border_type = if i + 1 == letters.len() {
                BorderType::Double
            } else {
                BorderType::Rounded
            };
            let block = Block::new()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style);
            let letter = letters.get(i).map(|c| c.to_string()).unwrap_or_default();
            Paragraph::new(letter)
                .bold()
                .centered()
                .block(block)
                .render(*cell, buf);
        }
    }

    fn render_empty_row(&self, area: Rect, buf: &mut Buffer) {
        for cell in self.row_layout(area).iter() {
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::new().dark_gray())
                .render(*cell, buf);
        }
    }

    fn render_guess_prompt(&self, area: Rect, buf: &mut Buffer) {
        let game = &self.store.game;
        if game.completed() {
            return;
        }
        let prompt = if game.word_completed() && !game.submitting() {
            "Guess Word <Enter>".bold().white()
        } else {
            "Guess Word <Enter>".dark_gray()
        };
        Paragraph::new(Line::from(prompt))
            .centered()
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let game = &self.store.game;
        let line: Line = if game.won() {
            Line::from(
                format!("Solved in {}/{}", game.guesses().len(), game.max_guesses())
                    .bold()
                    .light_green(),
            )
        } else if game.completed() {
            Line::from("No guesses left".bold().red())
        } else if game.submitting() {
            Line::from(format!("Checking {}...", game.word()).italic())
        } else if let Some(error) = game.transport_error() {
            Line::from(vec!["Error: ".bold().red(), error.to_string().red()])
        } else if game.invalid_attempt() {
            Line::from("Not a valid guess".yellow())
        } else {
            Line::default()
        };
        Paragraph::new(line).centered().render(area, buf);
    }

    fn render_keyboard(&self, area: Rect, buf: &mut Buffer) {
        let keyboard = &self.store.keyboard;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); keyboard.n_rows()])
            .split(area);

        let last = keyboard.n_rows() - 1;
        for (i, row) in rows.iter().enumerate() {
            let keys: Vec<&Key> = keyboard.row(i).collect();

            let mut labels: Vec<(String, Option<LetterStatus>)> = keys
                .iter()
                .map(|k| (k.letter.to_string(), k.status))
                .collect();
            if i == last {
                labels.insert(0, ("ENTER".to_string(), None));
                labels.push(("BACK".to_string(), None));
            }

            let constraints: Vec<Constraint> = labels
                .iter()
                .map(|(label, _)| Constraint::Length(KEY_WIDTH.max(label.len() as u16 + 2)))
                .collect();
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .flex(layout::Flex::Center)
                .split(*row);

            for ((label, status), cell) in labels.into_iter().zip(cells.iter()) {
                let block = Block::new()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(status_border(status));
                Paragraph::new(label)
                    .centered()
                    .style(status_style(status))
                    .block(block)
                    .render(*cell, buf);
            }
        }
    }
}

fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        None => Style::default(),
        Some(LetterStatus::Absent) => Style::default().dark_gray(),
        Some(LetterStatus::Misplaced) => Style::default().bg(Color::LightYellow).fg(Color::Black),
        Some(LetterStatus::Correct) => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .bold(),
    }
}

fn status_border(status: Option<LetterStatus>) -> Style {
    match status {
        None => Style::default().white(),
        Some(LetterStatus::Absent) => Style::default().red(),
        Some(LetterStatus::Misplaced) => Style::default().light_yellow(),
        Some(LetterStatus::Correct) => Style::default().light_green(),
    }
}

#[cfg(test)]
mod tests {
    use wordleclient::api::{ValidationClient, Verdict};
    use wordleclient::store::Store;

    use super::*;

    fn render(app: &App) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 40));
        app.render(buf.area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn app() -> App {
        let client = ValidationClient::with_client(reqwest::Client::new(), "http://localhost:0");
        App::init(Store::default(), client)
    }

    #[test]
    fn renders_current_word_and_keyboard() {
        let mut app = app();
        "GAM".chars().for_each(|c| app.store.game.set_word(c));

        let screen = render(&app);
        assert!(screen.contains("Wordle"));
        assert!(screen.contains("ENTER"));
        assert!(screen.contains("BACK"));
        assert!(screen.contains("Guess Word"));
    }

    #[test]
    fn hides_prompt_when_solved() {
        let mut app = app();
        "GAMES".chars().for_each(|c| app.store.game.set_word(c));
        app.store.begin_submit();
        app.store
            .finish_submit("GAMES", Ok(Verdict::Accepted("11111".parse().unwrap())));

        let screen = render(&app);
        assert!(!screen.contains("Guess Word"));
        assert!(screen.contains("Solved in 1/6"));
    }
}
