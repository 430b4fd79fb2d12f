use engine::{Currency, summary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, ExpenseField, ScreenMode, visible_indices},
    ui::{
        components::money::plain_amount,
        screens::inventory::{push_search_spans, render_empty_list, render_field},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Category breakdown strip
            Constraint::Min(0),    // List (and form)
        ])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_category_strip(frame, layout[1], state, &theme);
    render_list(frame, layout[2], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let mode = match state.expenses.mode {
        ScreenMode::List => "List",
        ScreenMode::Form => {
            if state.expenses.form.editing.is_some() {
                "Edit"
            } else {
                "Create"
            }
        }
    };
    let total: engine::Money = state
        .engine
        .expenses()
        .iter()
        .map(|expense| expense.amount)
        .sum();

    let mut line = vec![
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}   ")),
        Span::styled("Total", Style::default().fg(theme.dim)),
        Span::raw(": "),
        Span::styled(
            total.format(currency),
            Style::default().fg(theme.negative),
        ),
        Span::raw("   "),
    ];
    push_search_spans(
        &mut line,
        &state.expenses.search_query,
        state.expenses.search_active,
        theme,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Expenses");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn render_category_strip(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let totals = summary::totals_by_category(state.engine.expenses());

    let mut spans = Vec::new();
    for (i, (category, amount)) in totals.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(
            category.clone(),
            Style::default().fg(theme.text_muted),
        ));
        spans.push(Span::raw(" "));
        spans.push(plain_amount(*amount, currency, theme));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "No expenses recorded.",
            Style::default().fg(theme.dim),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("By Category");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let show_form = state.expenses.mode == ScreenMode::Form;
    let (form_area, list_area) = if show_form {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
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

    let expenses = state.engine.expenses();
    let visible = visible_indices(expenses, &state.expenses.search_query);
    let items = visible
        .iter()
        .filter_map(|idx| expenses.get(*idx))
        .map(|expense| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    expense.date.format("%m/%d").to_string(),
                    Style::default().fg(theme.dim),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<28}", expense.description),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<14}", expense.category),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    expense.amount.format(currency),
                    Style::default().fg(theme.negative),
                ),
            ]))
        })
        .collect::<Vec<_>>();

    if items.is_empty() {
        render_empty_list(
            frame,
            list_area,
            list_block,
            &state.expenses.search_query,
            "No expenses. Press c to record one.",
            theme,
        );
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.expenses.selected.min(items.len() - 1)));

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

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.expenses.form;
    let is_edit = form.editing.is_some();

    let mut lines = vec![
        render_field(
            "Description",
            &form.description,
            form.focus == ExpenseField::Description,
            theme,
        ),
        render_field(
            "Category",
            &form.category,
            form.focus == ExpenseField::Category,
            theme,
        ),
        render_field(
            "Amount",
            &form.amount,
            form.focus == ExpenseField::Amount,
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
        .title(if is_edit { "Edit Expense" } else { "New Expense" })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
