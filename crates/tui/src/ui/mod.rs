pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::summary;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, ScreenMode, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, layout[2], state),
        Section::Inventory => screens::inventory::render(frame, layout[2], state),
        Section::Expenses => screens::expenses::render(frame, layout[2], state),
        Section::Sales => screens::sales::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::help_overlay::render(frame, area, state);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let low = summary::low_stock(state.engine.ingredients()).len();
    let low_style = if low > 0 {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.positive)
    };

    let line = Line::from(vec![
        Span::styled(
            state.restaurant.clone(),
            Style::default().fg(theme.accent),
        ),
        Span::raw("  "),
        Span::styled("Ingredients", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.engine.ingredients().len())),
        Span::styled("Expenses", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.engine.expenses().len())),
        Span::styled("Sales", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.engine.sales().len())),
        Span::styled(format!("{low} low stock"), low_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    parts.push(components::hints::hint_separator(theme));
    parts.push(Span::styled("?", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" help"));

    let context_hints = context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(components::hints::hint_separator(theme));
        parts.extend(context_hints);
    }

    parts.push(components::hints::hint_separator(theme));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Context-specific keyboard hints for the active section and mode.
fn context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    use components::hints::{KeyHint, common, hints_to_spans};

    match state.section {
        Section::Dashboard => hints_to_spans(
            &[
                KeyHint::new("p", "print report"),
                KeyHint::new("x", "export CSV"),
            ],
            theme,
        ),
        Section::Inventory | Section::Expenses | Section::Sales => {
            if state.screen_mode() == ScreenMode::Form {
                hints_to_spans(&common::form_editing(), theme)
            } else {
                let mut hints = common::list_navigation();
                hints.extend(common::record_operations());
                hints_to_spans(&hints, theme)
            }
        }
    }
}
