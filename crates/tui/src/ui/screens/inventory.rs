use engine::{Currency, summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, IngredientField, ScreenMode, visible_indices},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let mode = match state.inventory.mode {
        ScreenMode::List => "List",
        ScreenMode::Form => {
            if state.inventory.form.editing.is_some() {
                "Edit"
            } else {
                "Create"
            }
        }
    };
    let stock_value = summary::inventory_value(state.engine.ingredients());
    let low = summary::low_stock(state.engine.ingredients()).len();

    let mut line = vec![
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}   ")),
        Span::styled("Stock value", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}   ", stock_value.format(currency))),
    ];
    if low > 0 {
        line.push(Span::styled(
            format!("{low} low"),
            Style::default().fg(theme.warning),
        ));
        line.push(Span::raw("   "));
    }
    push_search_spans(
        &mut line,
        &state.inventory.search_query,
        state.inventory.search_active,
        theme,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Inventory");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

pub(super) fn push_search_spans(
    line: &mut Vec<Span<'static>>,
    query: &str,
    active: bool,
    theme: &Theme,
) {
    let trimmed = query.trim();
    if !trimmed.is_empty() || active {
        line.push(Span::styled("Search", Style::default().fg(theme.dim)));
        line.push(Span::raw(": "));
        let shown = if trimmed.is_empty() { "…" } else { trimmed };
        let mut style = Style::default().fg(theme.text);
        if active {
            style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
        }
        line.push(Span::styled(shown.to_string(), style));
        line.push(Span::raw("   "));
    }
    line.push(Span::styled(
        "Ctrl+F: search",
        Style::default().fg(theme.dim),
    ));
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let show_form = state.inventory.mode == ScreenMode::Form;
    let (form_area, list_area) = if show_form {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(area);
        (Some(layout[0]), layout[1])
    } else {
        (None, area)
    };

    if let Some(form_area) = form_area {
        render_form(frame, form_area, state, theme);
    }

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let ingredients = state.engine.ingredients();
    let visible = visible_indices(ingredients, &state.inventory.search_query);
    let items = visible
        .iter()
        .filter_map(|idx| ingredients.get(*idx))
        .map(|item| {
            let name_style = if item.is_low_stock() {
                Style::default().fg(theme.warning)
            } else {
                Style::default().fg(theme.text)
            };
            let mut spans = vec![
                Span::styled(format!("{:<20}", item.name), name_style),
                Span::styled(
                    format!("{:<14}", item.category),
                    Style::default().fg(theme.text_muted),
                ),
                Span::raw(format!("{} {}  ", item.quantity, item.unit)),
                Span::styled(
                    format!("@ {}", item.unit_price.format(currency)),
                    Style::default().fg(theme.dim),
                ),
            ];
            if item.is_low_stock() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    "LOW",
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect::<Vec<_>>();

    if items.is_empty() {
        render_empty_list(
            frame,
            list_area,
            list_block,
            &state.inventory.search_query,
            "No ingredients. Press c to add one.",
            theme,
        );
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.inventory.selected.min(items.len() - 1)));

    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

pub(super) fn render_empty_list(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    query: &str,
    empty_hint: &str,
    theme: &Theme,
) {
    let query = query.trim();
    let mut lines = Vec::new();
    if query.is_empty() {
        lines.push(Line::from(Span::styled(
            empty_hint.to_string(),
            Style::default().fg(theme.dim),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::raw("No results for "),
            Span::styled(format!("\"{query}\""), Style::default().fg(theme.accent)),
            Span::raw("."),
        ]));
        lines.push(Line::from(Span::styled(
            "Ctrl+F to edit • Esc to clear",
            Style::default().fg(theme.dim),
        )));
    }
    let empty_msg = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(empty_msg, area);
}

pub(super) fn render_field(
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };
    let mut spans = vec![
        Span::styled(format!("{label:<12}"), label_style),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.inventory.form;
    let is_edit = form.editing.is_some();

    let mut lines = vec![
        render_field("Name", &form.name, form.focus == IngredientField::Name, theme),
        render_field(
            "Category",
            &form.category,
            form.focus == IngredientField::Category,
            theme,
        ),
        render_field(
            "Quantity",
            &form.quantity,
            form.focus == IngredientField::Quantity,
            theme,
        ),
        render_field("Unit", &form.unit, form.focus == IngredientField::Unit, theme),
        render_field(
            "Unit price",
            &form.unit_price,
            form.focus == IngredientField::UnitPrice,
            theme,
        ),
        render_field(
            "Min stock",
            &form.min_stock,
            form.focus == IngredientField::MinStock,
            theme,
        ),
    ];

    lines.push(Line::from(Span::styled(
        "Enter: save • Tab: next • Esc: cancel",
        Style::default().fg(theme.dim),
    )));

    if let Some(err) = form.error.as_ref() {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.error),
        )));
    }

    let block = Block::default()
        .title(if is_edit {
            "Edit Ingredient"
        } else {
            "New Ingredient"
        })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
