use std::io;
use std::time::{Duration, Instant};

use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::config::{Config, KeyContext};
use crate::data::RegistrationForm;
use crate::ui::action::Action;
use crate::ui::components::{
    FilePicker, FilePickerState, Footer, Header, IdentityStepView, NavBar, PlaceholderStepView,
    ProgressBar, ToastState, ToastView, BORDER_DEFAULT,
};
use crate::ui::events::InputMode;
use crate::ui::terminal_guard::TerminalGuard;
use crate::wizard::{StepBody, WizardController};

mod app_input;

/// How often toasts are checked for expiry
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Step navigation and the shared registration record
    controller: WizardController,
    /// Current input mode
    input_mode: InputMode,
    /// Visible notifications
    toasts: ToastState,
    /// Path prompt for upload slots
    file_picker: FilePickerState,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let form = RegistrationForm::new(config.default_country);
        let mut controller =
            WizardController::registration(form).with_timings(config.notifications);
        if !config.show_skip {
            controller = controller.without_skip();
        }

        Self {
            config,
            controller,
            input_mode: InputMode::Normal,
            toasts: ToastState::new(),
            file_picker: FilePickerState::new(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn toasts(&self) -> &ToastState {
        &self.toasts
    }

    pub fn file_picker(&self) -> &FilePickerState {
        &self.file_picker
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Periodic housekeeping: drop expired toasts
    pub fn tick(&mut self, now: Instant) {
        if !self.toasts.is_empty() {
            self.toasts.expire(now);
        }
    }

    /// Binding context for the current mode and step
    pub fn key_context(&self) -> KeyContext {
        let editing_form = matches!(
            self.controller.active_body(),
            StepBody::IdentityAddress(_)
        );
        KeyContext::from_input_mode(self.input_mode, editing_form)
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_input_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed
                    None => break,
                },
                _ = tick.tick() => self.tick(Instant::now()),
            }
        }

        tracing::debug!(step = self.controller.current_step(), "Leaving wizard");
        Ok(())
    }

    fn key_label(&self, action: Action, context: KeyContext) -> Option<String> {
        self.config
            .keybindings
            .key_for(&action, context)
            .map(|k| k.to_string())
    }

    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();
        let context = self.key_context();

        let [card_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .padding(Padding::horizontal(1));
        let inner = card.inner(card_area);
        f.render_widget(card, card_area);

        let [header_area, _, progress_area, _, body_area, nav_area] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(ProgressBar::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let skip_key = self.key_label(Action::Skip, context);
        f.render_widget(
            Header::new(self.controller.skip_visible(), skip_key.as_deref()),
            header_area,
        );
        f.render_widget(ProgressBar::new(self.controller.progress()), progress_area);
        self.draw_body(f, body_area);

        let back_key = self.key_label(Action::PrevStep, context);
        let next_key = self.key_label(Action::NextStep, context);
        f.render_widget(
            NavBar::new(self.controller.can_retreat(), self.controller.is_last_step())
                .keys(back_key.as_deref(), next_key.as_deref()),
            nav_area,
        );

        f.render_widget(
            Footer::new(
                &self.config.keybindings,
                context,
                self.controller.skip_visible(),
            ),
            footer_area,
        );

        if let InputMode::PickingFile(slot) = self.input_mode {
            f.render_widget(
                FilePicker::new(&self.file_picker, slot, &self.config.keybindings),
                area,
            );
        }

        f.render_widget(ToastView::new(&self.toasts), area);
    }

    fn draw_body(&self, f: &mut Frame, area: Rect) {
        match self.controller.active_body() {
            StepBody::IdentityAddress(step) => {
                f.render_widget(IdentityStepView::new(step, self.controller.store()), area);
            }
            StepBody::Placeholder { title, text } => {
                f.render_widget(PlaceholderStepView::new(title, text), area);
            }
        }
    }
}
