use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyCombo;
use crate::data::{FileAttachment, FormStore, UploadSlot};
use crate::form::{IdentityStep, StepRequest};
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::events::InputMode;

impl App {
    pub(super) fn handle_input_event(&mut self, input: Event) {
        // Resize is picked up by the next draw
        if let Event::Key(key) = input {
            self.handle_key_event(key);
        }
    }

    /// Dispatch one key press: bound keys run their action, unbound
    /// printable characters are typed into whatever has focus.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let combo = KeyCombo::from_key_event(&key);
        let context = self.key_context();
        if let Some(action) = self.config.keybindings.get_action(&combo, context).cloned() {
            tracing::trace!(?action, ?context, key = %combo, "Key bound");
            self.execute_action(action);
            return;
        }

        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.insert_char(c);
            }
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        if let InputMode::PickingFile(slot) = self.input_mode {
            self.execute_picker_action(slot, action);
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::NextStep => {
                self.controller.proceed(&mut self.toasts);
            }
            Action::PrevStep => {
                self.controller.retreat();
            }
            Action::Skip => {
                self.controller.skip(&mut self.toasts);
            }
            Action::FocusNext => self.with_identity(|step, store| step.focus_next(store)),
            Action::FocusPrev => self.with_identity(|step, store| step.focus_prev(store)),
            Action::Activate => {
                let request = self
                    .controller
                    .identity_mut()
                    .and_then(|(step, store)| step.activate(store));
                if let Some(StepRequest::PickFile(slot)) = request {
                    self.open_file_picker(slot);
                }
            }
            Action::Left => self.with_identity(|step, store| step.left(store)),
            Action::Right => self.with_identity(|step, store| step.right(store)),
            Action::Backspace => self.with_identity(|step, store| step.backspace(store)),
            Action::Delete => self.with_identity(|step, store| step.delete(store)),
            Action::DeleteWordBack => {
                self.with_identity(|step, store| step.delete_word_back(store))
            }
            Action::DeleteToStart => self.with_identity(|step, store| step.delete_to_start(store)),
            Action::MoveCursorStart => self.with_identity(|step, _| step.move_start()),
            Action::MoveCursorEnd => self.with_identity(|step, store| step.move_end(store)),
            // Picker-only actions
            Action::Confirm | Action::Cancel => {}
        }
    }

    /// While the path prompt is open only its own actions and quit apply
    fn execute_picker_action(&mut self, slot: UploadSlot, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Confirm => match self.file_picker.confirm() {
                Ok(file) => {
                    self.attach(slot, file);
                    self.close_file_picker();
                }
                Err(e) => tracing::warn!(?slot, error = %e, "Could not attach file"),
            },
            Action::Cancel => {
                self.attach(slot, None);
                self.close_file_picker();
            }
            Action::Backspace => self.file_picker.delete_char(),
            Action::Delete => self.file_picker.delete_forward(),
            Action::DeleteWordBack => self.file_picker.delete_word(),
            Action::DeleteToStart => self.file_picker.delete_to_start(),
            Action::Left => self.file_picker.move_left(),
            Action::Right => self.file_picker.move_right(),
            Action::MoveCursorStart => self.file_picker.move_start(),
            Action::MoveCursorEnd => self.file_picker.move_end(),
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        match self.input_mode {
            InputMode::PickingFile(_) => self.file_picker.insert_char(c),
            InputMode::Normal => self.with_identity(|step, store| step.insert_char(c, store)),
        }
    }

    fn with_identity<F>(&mut self, f: F)
    where
        F: FnOnce(&mut IdentityStep, &mut FormStore),
    {
        if let Some((step, store)) = self.controller.identity_mut() {
            f(step, store);
        }
    }

    fn attach(&mut self, slot: UploadSlot, file: Option<FileAttachment>) {
        self.with_identity(|step, store| step.handle_file_upload(slot, file, store));
    }

    fn open_file_picker(&mut self, slot: UploadSlot) {
        tracing::debug!(?slot, "Opening file picker");
        self.file_picker.reset();
        self.input_mode = InputMode::PickingFile(slot);
    }

    fn close_file_picker(&mut self) {
        self.input_mode = InputMode::Normal;
        self.file_picker.reset();
    }
}
