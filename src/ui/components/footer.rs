use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

use super::key_hints::{hints_for, render_key_hints, KeyHintBarStyle};
use super::{FOOTER_BG, KEY_HINT_BG};

/// Bottom bar listing the keys that matter in the current context
pub struct Footer<'a> {
    bindings: &'a KeybindingConfig,
    context: KeyContext,
    skip_visible: bool,
}

impl<'a> Footer<'a> {
    pub fn new(bindings: &'a KeybindingConfig, context: KeyContext, skip_visible: bool) -> Self {
        Self {
            bindings,
            context,
            skip_visible,
        }
    }

    fn actions(&self) -> Vec<Action> {
        let mut actions = match self.context {
            KeyContext::Form => vec![
                Action::FocusNext,
                Action::Activate,
                Action::NextStep,
                Action::PrevStep,
            ],
            KeyContext::Global => vec![Action::NextStep, Action::PrevStep],
            KeyContext::FilePicker => return vec![Action::Confirm, Action::Cancel],
        };
        if self.skip_visible {
            actions.push(Action::Skip);
        }
        actions.push(Action::Quit);
        actions
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = hints_for(self.bindings, self.context, &self.actions());
        render_key_hints(
            area,
            buf,
            &hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}
