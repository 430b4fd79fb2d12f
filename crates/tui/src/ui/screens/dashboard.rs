use chrono::Utc;
use engine::{Currency, Money, summary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, mini_bar_chart, render_bar_chart},
            money::styled_amount,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Stat cards
            Constraint::Length(12), // Monthly performance
            Constraint::Min(6),     // Top products and low stock
        ])
        .split(area);

    render_stat_cards(frame, layout[0], state, &theme);
    render_monthly_performance(frame, layout[1], state, &theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[2]);
    render_top_products(frame, bottom[0], state, &theme);
    render_low_stock(frame, bottom[1], state, &theme);
}

fn render_stat_cards(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let (today_total, orders) =
        summary::sales_on(state.engine.sales(), Utc::now().date_naive());
    StatCard::new("Today's Sales", today_total.format(currency), theme)
        .subtitle(format!(
            "{orders} {}",
            if orders == 1 { "order" } else { "orders" }
        ))
        .render(frame, cols[0]);

    let latest = state.engine.monthly_stats().last();
    let (month_sales, month_expenses, month_profit) = latest
        .map(|stat| (stat.sales, stat.expenses, stat.profit))
        .unwrap_or((Money::ZERO, Money::ZERO, Money::ZERO));

    let trend = mini_bar_chart(&chart_values(
        state.engine.monthly_stats().iter().map(|stat| stat.sales),
    ));
    let mut sales_card = StatCard::new("Monthly Sales", month_sales.format(currency), theme);
    if !trend.is_empty() {
        sales_card = sales_card.subtitle(trend);
    }
    sales_card.render(frame, cols[1]);

    StatCard::new("Monthly Expenses", month_expenses.format(currency), theme)
        .render(frame, cols[2]);

    let profit_label = if month_profit.is_negative() {
        "loss"
    } else {
        "profit"
    };
    StatCard::new("Monthly Profit", month_profit.format(currency), theme)
        .subtitle(profit_label)
        .render(frame, cols[3]);
}

fn render_monthly_performance(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Bars carry major units so the value labels stay short.
    let monthly: Vec<(&str, u64)> = state
        .engine
        .monthly_stats()
        .iter()
        .map(|stat| (stat.month.as_str(), to_major(stat.sales)))
        .collect();
    render_bar_chart(frame, cols[0], "Monthly Performance", &monthly, theme);

    let daily: Vec<(&str, u64)> = state
        .engine
        .daily_stats()
        .iter()
        .map(|stat| (stat.date.as_str(), to_major(stat.sales)))
        .collect();
    render_bar_chart(frame, cols[1], "Daily Sales This Week", &daily, theme);
}

fn render_top_products(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = Currency::default();
    let inner = Card::new("Top Products", theme).render(frame, area);

    let products = summary::top_products(state.engine.sales());
    if products.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No sales recorded.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let max_revenue = products
        .first()
        .map(|product| to_major(product.revenue))
        .unwrap_or(0);
    let bar_width = (inner.width as usize / 3).clamp(4, 20);

    let items: Vec<ListItem<'_>> = products
        .iter()
        .take(inner.height as usize)
        .map(|product| {
            let bar = ascii_bar(to_major(product.revenue), max_revenue, bar_width);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", product.name), Style::default().fg(theme.text)),
                Span::styled(bar, Style::default().fg(theme.accent)),
                Span::raw("  "),
                styled_amount(product.revenue, currency, theme),
                Span::styled(
                    format!("  ({} sold)", product.sold),
                    Style::default().fg(theme.dim),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_low_stock(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let low = summary::low_stock(state.engine.ingredients());
    let inner = Card::new("Low Stock Alert", theme)
        .focused(!low.is_empty())
        .render(frame, area);

    if low.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "All ingredients sufficiently stocked.",
                Style::default().fg(theme.positive),
            ))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem<'_>> = low
        .iter()
        .take(inner.height as usize)
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(item.name.clone(), Style::default().fg(theme.warning)),
                Span::styled(
                    format!("  {} {} (min {})", item.quantity, item.unit, item.min_stock),
                    Style::default().fg(theme.dim),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn to_major(amount: Money) -> u64 {
    (amount.minor() / 100).max(0) as u64
}

fn chart_values<I: Iterator<Item = Money>>(amounts: I) -> Vec<u64> {
    amounts.map(to_major).collect()
}
