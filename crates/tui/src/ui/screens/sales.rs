use chrono::Utc;
use engine::{Currency, summary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, ScreenMode, visible_indices},
    ui::{
        components::money::{styled_amount, styled_amount_bold},
        screens::inventory::{push_search_spans, render_empty_list},
        theme::Theme,
    },
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
    let mode = match state.sales.mode {
        ScreenMode::List => "List",
        ScreenMode::Form => {
            if state.sales.form.editing.is_some() {
                "Edit"
            } else {
                "Create"
            }
        }
    };
    let (today_total, orders) = summary::sales_on(state.engine.sales(), Utc::now().date_naive());

    let mut line = vec![
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}   ")),
        Span::styled("Today", Style::default().fg(theme.dim)),
        Span::raw(": "),
        styled_amount(today_total, currency, theme),
        Span::styled(
            format!(" ({orders} orders)   "),
            Style::default().fg(theme.dim),
        ),
    ];
    push_search_spans(
        &mut line,
        &state.sales.search_query,
        state.sales.search_active,
        theme,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Sales");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let show_form = state.sales.mode == ScreenMode::Form;
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

    let sales = state.engine.sales();
    let visible = visible_indices(sales, &state.sales.search_query);
    let items = visible
        .iter()
        .filter_map(|idx| sales.get(*idx))
        .map(|sale| {
            let units: u32 = sale.items.iter().map(|item| item.quantity).sum();
            ListItem::new(Line::from(vec![
                Span::styled(
                    sale.date.format("%m/%d %H:%M").to_string(),
                    Style::default().fg(theme.dim),
                ),
                Span::raw("  "),
                Span::styled(format!("{:<30}", sale.label()), Style::default().fg(theme.text)),
                Span::styled(
                    format!("{units:>3} items  "),
                    Style::default().fg(theme.text_muted),
                ),
                styled_amount_bold(sale.total, currency, theme),
            ]))
        })
        .collect::<Vec<_>>();

    if items.is_empty() {
        render_empty_list(
            frame,
            list_area,
            list_block,
            &state.sales.search_query,
            "No sales. Press c to record one.",
            theme,
        );
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.sales.selected.min(items.len() - 1)));

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
    let form = &state.sales.form;
    let is_edit = form.editing.is_some();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Items  ", Style::default().fg(theme.accent)),
            Span::styled(form.items.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ]),
        Line::from(Span::styled(
            "qty x name @ price, separated by ; (e.g. 2 x Adobo @ 180; Rice @ 25)",
            Style::default().fg(theme.dim),
        )),
    ];

    lines.push(Line::from(Span::styled(
        "Enter: save • Esc: cancel",
        Style::default().fg(theme.dim),
    )));

    if let Some(err) = form.error.as_ref() {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.error),
        )));
    }

    let block = Block::default()
        .title(if is_edit { "Edit Sale" } else { "New Sale" })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
