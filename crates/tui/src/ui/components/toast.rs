use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::{ToastLevel, ToastState},
    ui::theme::Theme,
};

const TOAST_HEIGHT: u16 = 3;

/// Bottom-right rect sized to the message, clipped to the frame.
fn anchor(area: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(TOAST_HEIGHT + 1),
        width,
        height: TOAST_HEIGHT.min(area.height),
    }
}

fn level_color(level: ToastLevel, theme: &Theme) -> ratatui::style::Color {
    match level {
        ToastLevel::Info => theme.text,
        ToastLevel::Success => theme.positive,
        ToastLevel::Error => theme.error,
    }
}

/// Renders the transient status toast in the bottom-right corner.
pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&ToastState>) {
    let Some(toast) = toast else {
        return;
    };
    let theme = Theme::default();
    let rect = anchor(area, &toast.message);
    let style = Style::default().fg(level_color(toast.level, &theme));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(toast.message.as_str()))
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_hugs_the_bottom_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = anchor(area, "Saved");
        assert_eq!(rect.width, 9);
        assert_eq!(rect.x + rect.width, 80);
        assert_eq!(rect.y, 20);
    }

    #[test]
    fn anchor_clips_long_messages_to_the_frame() {
        let area = Rect::new(0, 0, 10, 24);
        let rect = anchor(area, "a very long status message");
        assert_eq!(rect.width, 10);
        assert_eq!(rect.x, 0);
    }
}
