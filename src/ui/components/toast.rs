//! On-screen notifications with auto-dismiss

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::wizard::{Notification, NotificationSink, Severity};

use super::{ACCENT_SUCCESS, TEXT_PRIMARY};

/// Most toasts kept on screen at once; older ones are dropped
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    expires_at: Instant,
}

/// Queue of visible notifications, pruned on tick
#[derive(Debug, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every toast whose display time has run out
    pub fn expire(&mut self, now: Instant) {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        if self.toasts.len() != before {
            tracing::trace!(remaining = self.toasts.len(), "Toasts expired");
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|t| &t.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl NotificationSink for ToastState {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(message = %notification.message, "Notification");
        let expires_at = Instant::now() + notification.duration;
        self.toasts.push_back(Toast {
            notification,
            expires_at,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }
}

/// Stacks the visible toasts in the top-right corner of `area`
pub struct ToastView<'a> {
    state: &'a ToastState,
}

impl<'a> ToastView<'a> {
    pub fn new(state: &'a ToastState) -> Self {
        Self { state }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for notification in self.state.visible() {
            let text = format!("{} {}", notification.icon, notification.message);
            let width = (text.width() as u16 + 4).min(area.width);
            if width == 0 || y + 3 > area.bottom() {
                break;
            }
            let toast_area = Rect::new(area.right() - width, y, width, 3);
            let color = match notification.severity {
                Severity::Success => ACCENT_SUCCESS,
            };

            Clear.render(toast_area, buf);
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(TEXT_PRIMARY),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(toast_area, buf);
            y += 3;
        }
    }
}
