use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{self, App};

const TICK: Duration = Duration::from_millis(120);

struct Chat {
    app: App,
    input: String,
    transcript: Vec<Message>,
}

struct Message {
    from_user: bool,
    text: String,
}

impl Chat {
    fn new(app: App) -> Self {
        Self {
            app,
            input: String::new(),
            transcript: vec![Message {
                from_user: false,
                text: app::WELCOME.to_string(),
            }],
        }
    }

    fn submit(&mut self) {
        let text = std::mem::take(&mut self.input);
        let response = self.app.process_command(&text);
        self.transcript.push(Message {
            from_user: true,
            text,
        });
        self.transcript.push(Message {
            from_user: false,
            text: response,
        });
    }
}

pub fn run(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut chat = Chat::new(app);
    let res = loop {
        terminal.draw(|f| draw(f, &chat))?;
        if chat.app.is_exit() {
            break Ok(());
        }

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Esc => break Ok(()),
                KeyCode::Enter => chat.submit(),
                KeyCode::Backspace => {
                    chat.input.pop();
                }
                KeyCode::Char(c) => chat.input.push(c),
                _ => {}
            }
        }
    };

    cleanup_terminal(&mut terminal)?;
    res
}

fn draw(f: &mut ratatui::Frame, chat: &Chat) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(f.area());

    let items = transcript_items(chat);
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(items.len() - 1));
    }
    let transcript = List::new(items).block(Block::default().title("yaru").borders(Borders::ALL));
    f.render_stateful_widget(transcript, chunks[0], &mut state);

    f.render_widget(render_input(chat), chunks[1]);
}

fn transcript_items(chat: &Chat) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for message in &chat.transcript {
        let (name, color) = if message.from_user {
            ("you", Color::Yellow)
        } else {
            ("yaru", Color::Cyan)
        };
        let mut parts = message.text.lines();
        let first = parts.next().unwrap_or("");
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("{name}: "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(first.to_string()),
        ])));
        for part in parts {
            items.push(ListItem::new(Line::from(format!("      {part}"))));
        }
    }
    items
}

fn render_input(chat: &Chat) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::raw("> "),
        Span::styled(&chat.input, Style::default().fg(Color::Yellow)),
        Span::raw("█"),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .title("Command (Enter to send / Esc to quit)")
            .borders(Borders::ALL),
    )
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
