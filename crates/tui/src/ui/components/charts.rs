use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    widgets::BarChart,
};

use crate::ui::{components::card::Card, theme::Theme};

/// Renders a labeled bar chart inside a card.
///
/// Wraps ratatui's `BarChart` with consistent styling. Values are in major
/// currency units so the bar labels stay readable.
pub fn render_bar_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &[(&str, u64)],
    theme: &Theme,
) {
    let chart = BarChart::default()
        .data(data)
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.dim));

    if title.is_empty() {
        frame.render_widget(chart, area);
    } else {
        let inner = Card::new(title, theme).render(frame, area);
        frame.render_widget(chart, inner);
    }
}

/// Creates a simple ASCII-based horizontal bar for inline use.
///
/// Returns a string like `████████░░░░░░░░░░░░` representing the ratio.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Creates a mini bar chart representation as a string.
///
/// Returns something like `▁▂▃▅▇▅▃▂▁` for a series of values.
#[must_use]
pub fn mini_bar_chart(values: &[u64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = *values.iter().max().unwrap_or(&1);
    if max == 0 {
        return " ".repeat(values.len());
    }

    let bars = [
        symbols::bar::ONE_EIGHTH,
        symbols::bar::ONE_QUARTER,
        symbols::bar::THREE_EIGHTHS,
        symbols::bar::HALF,
        symbols::bar::FIVE_EIGHTHS,
        symbols::bar::THREE_QUARTERS,
        symbols::bar::SEVEN_EIGHTHS,
        symbols::bar::FULL,
    ];

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                " "
            } else {
                let index = ((v as f64 / max as f64) * 7.0) as usize;
                bars[index.min(7)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_bar_handles_zero_max() {
        assert_eq!(ascii_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn ascii_bar_fills_proportionally() {
        assert_eq!(ascii_bar(10, 10, 4), "████");
        assert_eq!(ascii_bar(5, 10, 4), "██░░");
    }

    #[test]
    fn mini_bar_chart_maps_extremes() {
        let chart = mini_bar_chart(&[0, 10]);
        assert_eq!(chart.chars().count(), 2);
        assert!(chart.starts_with(' '));
        assert!(chart.ends_with(symbols::bar::FULL));
    }
}
