//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ commands.recv()
//!   ├─ events (ChatEvent from controller) ├─ controller.handle_command()
//!   └─ tick_interval                      └─ generation stream events
//!        └── commands ────────────────>──┘
//! ```
//!
//! The loop never touches business state: keys become [`ChatCommand`]s,
//! controller events are folded into [`TuiState`] by the presenter.

use super::layout::MainLayout;
use super::mode::{Action, KeyHandler};
use super::presenter::Presenter;
use super::state::TuiState;
use super::widgets::{
    ConversationWidget, HeaderWidget, InputWidget, LoadPanelWidget, StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use localchat_application::{ChatCommand, ChatEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main TUI application
pub struct TuiApp {
    commands: mpsc::UnboundedSender<ChatCommand>,
    events: mpsc::UnboundedReceiver<ChatEvent>,
    state: TuiState,
}

impl TuiApp {
    pub fn new(
        commands: mpsc::UnboundedSender<ChatCommand>,
        events: mpsc::UnboundedReceiver<ChatEvent>,
        model_name: impl Into<String>,
    ) -> Self {
        let mut state = TuiState::new();
        state.model_name = model_name.into();
        Self {
            commands,
            events,
            state,
        }
    }

    /// Run the UI until the user quits or the controller goes away.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        // Restore the terminal even if rendering panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let mut key_events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(100));

        while !self.state.should_quit {
            terminal.draw(|frame| render(frame, &self.state))?;

            tokio::select! {
                maybe_event = key_events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(_)) | None => break,
                    }
                }
                chat_event = self.events.recv() => {
                    match chat_event {
                        Some(event) => Presenter::apply(&mut self.state, event),
                        // Controller gone; nothing left to render
                        None => break,
                    }
                }
                _ = tick.tick() => {}
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match KeyHandler::handle(key) {
            Action::InsertChar(c) => {
                if self.input_active() {
                    self.state.insert_char(c);
                }
            }
            Action::DeleteChar => {
                if self.input_active() {
                    self.state.delete_char();
                }
            }
            Action::CursorLeft => self.state.cursor_left(),
            Action::CursorRight => self.state.cursor_right(),
            Action::CursorStart => self.state.cursor_home(),
            Action::CursorEnd => self.state.cursor_end(),
            Action::Submit => self.submit(),
            Action::StopGeneration => {
                if self.state.generating {
                    let _ = self.commands.send(ChatCommand::StopGeneration);
                }
            }
            Action::RetryLoad => {
                if !self.state.load_phase.is_busy() && !self.state.load_phase.is_ready() {
                    let _ = self.commands.send(ChatCommand::LoadModel);
                }
            }
            Action::ScrollUp => self.state.scroll_up(),
            Action::ScrollDown => self.state.scroll_down(),
            Action::Quit => {
                self.state.should_quit = true;
                let _ = self.commands.send(ChatCommand::Quit);
            }
            Action::None => {}
        }
    }

    fn input_active(&self) -> bool {
        self.state.load_phase.is_ready() && !self.state.generating
    }

    fn submit(&mut self) {
        if !self.input_active() {
            return;
        }
        let text = self.state.take_input();
        // The controller guards again, but don't bother it with blanks
        if text.trim().is_empty() {
            return;
        }
        let _ = self.commands.send(ChatCommand::Send(text));
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area(), !state.load_phase.is_ready());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(ConversationWidget::new(state), layout.conversation);
    if let Some(area) = layout.load_panel {
        frame.render_widget(LoadPanelWidget::new(state), area);
    }
    frame.render_widget(InputWidget::new(state), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
