//! Step progress: a fill gauge over one labelled marker per step

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::wizard::{Progress, StepStatus};

use super::{ACCENT_PRIMARY, ACCENT_SUCCESS, TEXT_MUTED, TEXT_PRIMARY, TRACK_BG};

pub struct ProgressBar<'a> {
    progress: Progress<'a>,
}

impl<'a> ProgressBar<'a> {
    /// Rows needed: gauge plus marker line
    pub const HEIGHT: u16 = 2;

    pub fn new(progress: Progress<'a>) -> Self {
        Self { progress }
    }

    fn status_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Completed => Style::default().fg(ACCENT_SUCCESS),
            StepStatus::Active => Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(TEXT_MUTED),
        }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let [gauge_area, markers_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(TRACK_BG))
            .ratio(self.progress.fill_ratio())
            .label(Span::styled(
                format!("{}%", self.progress.fill_percent()),
                Style::default().fg(TEXT_PRIMARY),
            ))
            .use_unicode(true)
            .render(gauge_area, buf);

        let count = self.progress.steps().len() as u32;
        if count == 0 {
            return;
        }
        let columns = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(markers_area);

        for ((index, step, status), column) in self.progress.entries().zip(columns.iter()) {
            let style = Self::status_style(status);
            let line = Line::from(vec![
                Span::styled(format!("({})", self.progress.marker(index)), style),
                Span::raw(" "),
                Span::styled(step.name.clone(), style),
            ]);
            Paragraph::new(line).render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::default_steps;

    fn render(current: usize) -> String {
        let steps = default_steps();
        let area = Rect::new(0, 0, 120, ProgressBar::HEIGHT);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(Progress::new(&steps, current)).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_first_step_markers() {
        let out = render(1);
        assert!(out.contains("0%"));
        assert!(out.contains("(1) Identity & Address"));
        assert!(out.contains("(4) Confirmation"));
    }

    #[test]
    fn test_completed_steps_get_check_marks() {
        let out = render(3);
        assert!(out.contains("(✓) Identity & Address"));
        assert!(out.contains("(✓) Personal Details"));
        assert!(out.contains("(3) Verification"));
        assert!(out.contains("67%"));
    }
}
