use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, ScreenMode, Section},
    ui::{
        components::{centered_rect, tabs},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help_active {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(popup);

    let title = Line::from(vec![
        Span::styled("Help", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(theme.dim)),
        Span::raw(" close"),
    ]);

    frame.render_widget(
        Paragraph::new(title).block(
            Block::default()
                .title("Keybinds")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        ),
        layout[0],
    );

    let lines = help_lines(state, &theme);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), layout[1]);
}

fn key(theme: &Theme, k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(theme.accent))
}

fn help_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        key(theme, "?"),
        Span::raw(" help  "),
        key(theme, "q"),
        Span::raw(" quit  "),
        key(theme, "Ctrl+C"),
        Span::raw(" force quit"),
    ])];
    lines.push(Line::from(tabs::tab_shortcuts(theme)));

    match state.section {
        Section::Dashboard => {
            lines.push(Line::from(vec![
                key(theme, "p"),
                Span::raw(" print report  "),
                key(theme, "x"),
                Span::raw(" export CSV"),
            ]));
        }
        Section::Inventory | Section::Expenses | Section::Sales => {
            lines.push(Line::from(vec![
                key(theme, "↑/↓"),
                Span::raw(" select  "),
                key(theme, "c"),
                Span::raw(" create  "),
                key(theme, "Enter"),
                Span::raw(" edit  "),
                key(theme, "d"),
                Span::raw(" delete"),
            ]));
            lines.push(Line::from(vec![
                key(theme, "Ctrl+F"),
                Span::raw(" search  "),
                key(theme, "Esc"),
                Span::raw(" clear search"),
            ]));

            if state.screen_mode() == ScreenMode::Form {
                lines.push(Line::from(vec![
                    key(theme, "Tab"),
                    Span::raw(" next field  "),
                    key(theme, "Enter"),
                    Span::raw(" save  "),
                    key(theme, "Esc"),
                    Span::raw(" cancel"),
                ]));
            }
        }
    }

    lines.push(Line::from(vec![key(theme, "Esc"), Span::raw(" back/close")]));

    lines
}
