use std::{cmp, collections::VecDeque, io, thread, time::Duration};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use seatline_core::{BookingOutcome, BookingSystem, CancelOutcome, SeatStatus};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::format;

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_INPUT_LEN: usize = 99;
const MAX_ACTIVITY: usize = 50;
const MENU_ITEMS: [&str; 5] = [
    "Display Seats",
    "Book Seat",
    "Cancel Seat",
    "Display Waiting List",
    "Exit",
];

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Menu,
    Seats,
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    SeatCount,
    PassengerName,
    SeatNumber,
}

impl PromptKind {
    fn title(self) -> &'static str {
        match self {
            PromptKind::SeatCount => "Setup",
            PromptKind::PassengerName => "Book Seat",
            PromptKind::SeatNumber => "Cancel Seat",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            PromptKind::SeatCount => "Enter the number of seats",
            PromptKind::PassengerName => "Enter passenger name",
            PromptKind::SeatNumber => "Enter seat number to cancel",
        }
    }
}

/// Single-line text input shown as a modal. The cursor counts characters.
#[derive(Debug, Clone)]
struct PromptModal {
    kind: PromptKind,
    input: String,
    cursor: usize,
}

impl PromptModal {
    fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
            cursor: 0,
        }
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.char_len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn insert(&mut self, ch: char) {
        if self.char_len() >= MAX_INPUT_LEN || ch.is_control() {
            return;
        }
        if self.kind != PromptKind::PassengerName && !(ch.is_ascii_digit() || ch == '-') {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.input.insert(offset, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.input.remove(offset);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let offset = self.byte_offset(self.cursor);
            self.input.remove(offset);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct ActivityEntry {
    at: DateTime<Local>,
    message: String,
    tone: Tone,
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Interactive shell driving a [`BookingSystem`].
pub struct SeatlineApp {
    system: Option<BookingSystem>,
    screen: Screen,
    prompt: Option<PromptModal>,
    state: UiState,
    theme: Theme,
}

impl SeatlineApp {
    /// Build the app, creating the seat pool right away when a seat count
    /// was configured. Otherwise the user is asked for one on launch.
    pub fn new(seat_count: Option<i64>) -> Self {
        let mut app = Self {
            system: None,
            screen: Screen::Setup,
            prompt: None,
            state: UiState::default(),
            theme: Theme::default(),
        };
        match seat_count {
            Some(count) => app.initialize_system(count),
            None => app.prompt = Some(PromptModal::new(PromptKind::SeatCount)),
        }
        app
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        let result = loop {
            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }
            if self.state.should_quit {
                break Ok(());
            }
            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break Ok(());
            }
        };

        restore_terminal(&mut terminal)?;
        info!("Session ended");
        result
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(Event::Key(key))) => {
                let outcome = if self.prompt.is_some() {
                    self.handle_prompt_key(key)
                } else {
                    self.handle_key(key)
                };
                if let Err(err) = outcome {
                    error!(?err, "Input handling failed");
                    self.log(Tone::Error, format!("Error: {err}"));
                }
                true
            }
            Some(AppEvent::Input(_)) | Some(AppEvent::Tick) => true,
            None => false,
        }
    }

    fn initialize_system(&mut self, count: i64) {
        match BookingSystem::new(count) {
            Ok(system) => {
                self.system = Some(system);
                self.screen = Screen::Menu;
                self.prompt = None;
                self.log(
                    Tone::Success,
                    format!("System initialized with {count} seats"),
                );
            }
            Err(err) => {
                self.log(Tone::Error, format::error_message(&err));
                self.screen = Screen::Setup;
                self.prompt = Some(PromptModal::new(PromptKind::SeatCount));
            }
        }
    }

    fn log(&mut self, tone: Tone, message: String) {
        self.state.status = message.clone();
        self.state.status_tone = tone;
        self.state.activity.push_front(ActivityEntry {
            at: Local::now(),
            message,
            tone,
        });
        self.state.activity.truncate(MAX_ACTIVITY);
    }

    fn book(&mut self, passenger: &str) {
        let Some(system) = self.system.as_mut() else {
            return;
        };
        match system.book(passenger) {
            Ok(outcome) => {
                let tone = match outcome {
                    BookingOutcome::Assigned { .. } => Tone::Success,
                    BookingOutcome::Waitlisted { .. } => Tone::Warning,
                };
                self.log(tone, format::booking_message(passenger, &outcome));
            }
            Err(err) => self.log(Tone::Error, format::error_message(&err)),
        }
    }

    fn cancel(&mut self, seat_number: i64) {
        let Some(system) = self.system.as_mut() else {
            return;
        };
        match system.cancel(seat_number) {
            Ok(outcome) => {
                let tone = match outcome {
                    CancelOutcome::Cancelled { .. } => Tone::Success,
                    CancelOutcome::AlreadyAvailable { .. } => Tone::Warning,
                };
                self.log(tone, format::cancel_message(&outcome));
            }
            Err(err) => self.log(Tone::Error, format::error_message(&err)),
        }
    }

    fn open_menu_item(&mut self, index: usize) {
        self.state.menu_cursor = index;
        match index {
            0 => self.screen = Screen::Seats,
            1 => self.prompt = Some(PromptModal::new(PromptKind::PassengerName)),
            2 => self.prompt = Some(PromptModal::new(PromptKind::SeatNumber)),
            3 => self.screen = Screen::Waiting,
            _ => self.state.should_quit = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return Ok(());
        }
        match self.screen {
            Screen::Setup => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.state.should_quit = true;
                } else {
                    self.prompt = Some(PromptModal::new(PromptKind::SeatCount));
                }
            }
            Screen::Menu => self.handle_menu_key(key),
            Screen::Seats => self.handle_seats_key(key),
            Screen::Waiting => self.handle_waiting_key(key),
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.state.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.move_menu_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_menu_cursor(-1),
            KeyCode::Enter => self.open_menu_item(self.state.menu_cursor),
            KeyCode::Char(ch @ '1'..='5') => {
                self.open_menu_item(ch as usize - '1' as usize);
            }
            _ => {}
        }
    }

    fn handle_seats_key(&mut self, key: KeyEvent) {
        let total = self
            .system
            .as_ref()
            .map(|system| system.list_seats().len())
            .unwrap_or(0);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.screen = Screen::Menu,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_seat_cursor(1, total),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_seat_cursor(-1, total),
            KeyCode::PageDown => self.state.move_seat_cursor(10, total),
            KeyCode::PageUp => self.state.move_seat_cursor(-10, total),
            KeyCode::Home | KeyCode::Char('g') => self.state.seat_cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.state.seat_cursor = total.saturating_sub(1),
            KeyCode::Char('b') => self.prompt = Some(PromptModal::new(PromptKind::PassengerName)),
            KeyCode::Char('c') => self.prompt = Some(PromptModal::new(PromptKind::SeatNumber)),
            KeyCode::Char('x') | KeyCode::Delete => {
                let selected = self.state.seat_cursor as i64 + 1;
                self.cancel(selected);
            }
            KeyCode::Char('w') => self.screen = Screen::Waiting,
            _ => {}
        }
    }

    fn handle_waiting_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.screen = Screen::Menu,
            KeyCode::Char('s') => self.screen = Screen::Seats,
            KeyCode::Char('b') => self.prompt = Some(PromptModal::new(PromptKind::PassengerName)),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        let mut submit: Option<(PromptKind, String)> = None;
        let mut dismiss = false;
        if let Some(prompt) = self.prompt.as_mut() {
            match key.code {
                KeyCode::Esc => dismiss = true,
                KeyCode::Enter => submit = Some((prompt.kind, prompt.input.clone())),
                KeyCode::Left => prompt.move_cursor(-1),
                KeyCode::Right => prompt.move_cursor(1),
                KeyCode::Home => prompt.move_home(),
                KeyCode::End => prompt.move_end(),
                KeyCode::Backspace => prompt.backspace(),
                KeyCode::Delete => prompt.delete(),
                KeyCode::Char(ch) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        prompt.insert(ch);
                    }
                }
                _ => {}
            }
        }

        if dismiss {
            let kind = self.prompt.take().map(|prompt| prompt.kind);
            if kind == Some(PromptKind::SeatCount) && self.system.is_none() {
                self.state.should_quit = true;
            } else {
                self.log(Tone::Info, "Cancelled".to_string());
            }
            return Ok(());
        }

        let Some((kind, input)) = submit else {
            return Ok(());
        };
        match kind {
            PromptKind::SeatCount => {
                let count = format::parse_number(&input)?;
                self.initialize_system(count);
            }
            PromptKind::PassengerName => {
                self.prompt = None;
                self.book(&input);
            }
            PromptKind::SeatNumber => {
                let seat_number = format::parse_number(&input)?;
                self.prompt = None;
                self.cancel(seat_number);
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(8),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_header(frame, layout[0]);
        match self.screen {
            Screen::Setup => self.render_setup(frame, layout[1]),
            Screen::Menu => self.render_menu(frame, layout[1]),
            Screen::Seats => self.render_seats(frame, layout[1]),
            Screen::Waiting => self.render_waiting(frame, layout[1]),
        }
        self.render_activity(frame, layout[2]);
        self.render_status(frame, layout[3]);

        if let Some(prompt) = &self.prompt {
            self.render_prompt(frame, prompt);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "TICKET BOOKING SYSTEM",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(system) = &self.system {
            let occupancy = system.occupancy();
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!(
                    "{} booked · {} available · {} waiting · {:.0}% full",
                    occupancy.booked,
                    occupancy.available,
                    occupancy.waiting,
                    occupancy.utilization() * 100.0
                ),
                Style::default().fg(self.theme.muted),
            ));
        }
        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_setup(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("No seat pool configured."),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to enter a seat count, q to quit.",
                Style::default().fg(self.theme.muted),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Setup"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let menu_height = (MENU_ITEMS.len() as u16)
            .saturating_mul(2)
            .saturating_add(2)
            .min(area.height);
        let menu_width = 32.min(area.width.max(1));
        let menu_area = centered_rect(menu_width, menu_height, area);

        let menu_lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .flat_map(|(idx, item)| {
                let label = format!("{}. {item}", idx + 1);
                let line = if idx == self.state.menu_cursor {
                    Line::from(Span::styled(
                        format!("▶ {label}"),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                };
                [line, Line::from("")]
            })
            .collect();

        let menu = Paragraph::new(menu_lines)
            .block(Block::default().borders(Borders::ALL).title("Menu"));
        frame.render_widget(menu, menu_area);
    }

    fn render_seats(&mut self, frame: &mut Frame, area: Rect) {
        let Some(system) = &self.system else {
            return;
        };
        let seats = system.list_seats();
        self.state.seat_cursor = self.state.seat_cursor.min(seats.len().saturating_sub(1));

        let rows = seats.iter().map(|seat| {
            let (status_style, passenger) = match seat.status() {
                SeatStatus::Booked => (
                    Style::default().fg(self.theme.warning),
                    seat.passenger().unwrap_or_default().to_string(),
                ),
                SeatStatus::Available => (
                    Style::default().fg(self.theme.success),
                    SeatStatus::Available.label().to_string(),
                ),
            };
            Row::new(vec![
                Cell::from(seat.number.to_string()),
                Cell::from(passenger),
                Cell::from(seat.status().label()).style(status_style),
            ])
        });

        let header = Row::new(vec!["Seat No.", "Passenger Name", "Status"]).style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Min(20),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Seat Status  (b book · c cancel · x cancel selected · w waiting list · Esc menu)"),
        )
        .highlight_style(
            Style::default()
                .bg(self.theme.selection_bg)
                .fg(self.theme.selection_fg),
        )
        .highlight_symbol("▶ ");

        let mut table_state = TableState::default();
        table_state.select(Some(self.state.seat_cursor));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_waiting(&self, frame: &mut Frame, area: Rect) {
        let Some(system) = &self.system else {
            return;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Waiting List  (b book · s seats · Esc menu)");
        let queue = system.waiting_queue();
        if queue.is_empty() {
            let paragraph = Paragraph::new("Waiting list is empty.")
                .style(Style::default().fg(self.theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let rows = queue.iter().enumerate().map(|(idx, passenger)| {
            Row::new(vec![
                Cell::from((idx + 1).to_string()),
                Cell::from(passenger.to_string()),
            ])
        });
        let header = Row::new(vec!["No.", "Passenger Name"]).style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(20)])
            .header(header)
            .block(block);
        frame.render_widget(table, area);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .state
            .activity
            .iter()
            .take(visible)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.at.format("%H:%M:%S ").to_string(),
                        Style::default().fg(self.theme.muted),
                    ),
                    Span::styled(entry.message.clone(), self.tone_style(entry.tone)),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Activity"));
        frame.render_widget(list, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.state.status.clone(),
            self.tone_style(self.state.status_tone),
        )))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_prompt(&self, frame: &mut Frame, prompt: &PromptModal) {
        let frame_area = frame.size();
        let mut width = cmp::min(60_u16, frame_area.width.saturating_sub(4));
        width = cmp::max(width, 24_u16);
        let height = 6_u16.min(frame_area.height.saturating_sub(2)).max(5_u16);
        let area = centered_rect(width, height, frame_area);

        frame.render_widget(Clear, area);

        let input_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::raw(prompt.input.clone()),
        ]);
        let helper = Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" confirm  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]);

        let paragraph = Paragraph::new(vec![
            Line::from(prompt.kind.instruction()),
            input_line,
            Line::from(""),
            helper,
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(prompt.kind.title()),
        )
        .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);

        let cursor_x =
            (area.x + 3 + prompt.cursor as u16).min(area.x + area.width.saturating_sub(2));
        let cursor_y = area.y + 2;
        frame.set_cursor(cursor_x, cursor_y);
    }

    fn tone_style(&self, tone: Tone) -> Style {
        let color = match tone {
            Tone::Info => self.theme.primary_fg,
            Tone::Success => self.theme.success,
            Tone::Warning => self.theme.warning,
            Tone::Error => self.theme.danger,
        };
        Style::default().fg(color)
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

struct UiState {
    status: String,
    status_tone: Tone,
    activity: VecDeque<ActivityEntry>,
    should_quit: bool,
    menu_cursor: usize,
    seat_cursor: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            status_tone: Tone::Info,
            activity: VecDeque::new(),
            should_quit: false,
            menu_cursor: 0,
            seat_cursor: 0,
        }
    }
}

impl UiState {
    fn move_menu_cursor(&mut self, delta: isize) {
        let len = MENU_ITEMS.len() as isize;
        self.menu_cursor = (self.menu_cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn move_seat_cursor(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.seat_cursor = 0;
            return;
        }
        let max = total as isize - 1;
        self.seat_cursor = (self.seat_cursor as isize + delta).clamp(0, max) as usize;
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut SeatlineApp, text: &str) {
        for ch in text.chars() {
            app.handle_prompt_key(key(KeyCode::Char(ch))).unwrap();
        }
    }

    #[test]
    fn prompt_edits_unicode_names() {
        let mut prompt = PromptModal::new(PromptKind::PassengerName);
        for ch in "Jos".chars() {
            prompt.insert(ch);
        }
        prompt.insert('é');
        prompt.move_home();
        prompt.delete();
        prompt.move_end();
        prompt.backspace();
        assert_eq!(prompt.input, "os");
        assert_eq!(prompt.cursor, 2);
    }

    #[test]
    fn numeric_prompt_ignores_letters() {
        let mut prompt = PromptModal::new(PromptKind::SeatNumber);
        for ch in "-1a2".chars() {
            prompt.insert(ch);
        }
        assert_eq!(prompt.input, "-12");
    }

    #[test]
    fn setup_prompt_initializes_system() {
        let mut app = SeatlineApp::new(None);
        assert_eq!(app.screen, Screen::Setup);
        type_text(&mut app, "0");
        app.handle_prompt_key(key(KeyCode::Enter)).unwrap();
        assert!(app.system.is_none());
        assert!(app.state.status.starts_with("Invalid number of seats!"));

        assert_eq!(app.prompt.as_ref().map(|prompt| prompt.input.as_str()), Some(""));
        type_text(&mut app, "2");
        app.handle_prompt_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.system.as_ref().unwrap().list_seats().len(), 2);
    }

    #[test]
    fn menu_flow_books_and_promotes() {
        let mut app = SeatlineApp::new(Some(1));
        for name in ["Alice", "Bob"] {
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            type_text(&mut app, name);
            app.handle_prompt_key(key(KeyCode::Enter)).unwrap();
        }
        assert!(app.state.status.contains("Bob has been added to the waiting list"));

        app.handle_key(key(KeyCode::Char('3'))).unwrap();
        type_text(&mut app, "1");
        app.handle_prompt_key(key(KeyCode::Enter)).unwrap();
        assert!(app
            .state
            .status
            .ends_with("assigned to Bob from waiting list"));

        let system = app.system.as_ref().unwrap();
        assert_eq!(system.list_seats()[0].passenger(), Some("Bob"));
        assert!(system.list_waiting_queue().is_empty());
        assert_eq!(app.state.activity.len(), 4);
    }

    #[test]
    fn cancel_selected_seat_from_table() {
        let mut app = SeatlineApp::new(Some(3));
        app.book("Alice");
        app.handle_key(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.screen, Screen::Seats);

        app.handle_key(key(KeyCode::Char('j'))).unwrap();
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.status, "Seat 2 is already available!");

        app.handle_key(key(KeyCode::Char('k'))).unwrap();
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.status, "Seat 1 booking cancelled for Alice");
    }

    #[test]
    fn invalid_seat_number_is_reported() {
        let mut app = SeatlineApp::new(Some(2));
        app.cancel(5);
        assert!(app.state.status.starts_with("Invalid seat number!"));
        assert_eq!(app.state.status_tone, Tone::Error);
    }

    #[test]
    fn menu_cursor_wraps() {
        let mut state = UiState::default();
        state.move_menu_cursor(-1);
        assert_eq!(state.menu_cursor, MENU_ITEMS.len() - 1);
        state.move_menu_cursor(1);
        assert_eq!(state.menu_cursor, 0);
    }
}
