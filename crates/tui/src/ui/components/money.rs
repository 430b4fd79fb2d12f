use engine::{Currency, Money};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a money amount with semantic coloring.
///
/// Positive amounts render green, negative amounts red, zero in the neutral
/// text color. The sign is whatever `Money::format` produces.
#[must_use]
pub fn styled_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else if amount.is_zero() {
        theme.text
    } else {
        theme.positive
    };

    Span::styled(amount.format(currency), Style::default().fg(color))
}

/// Creates a styled span with bold modifier for emphasis (e.g., totals).
#[must_use]
pub fn styled_amount_bold(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else if amount.is_zero() {
        theme.text
    } else {
        theme.positive
    };

    Span::styled(
        amount.format(currency),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Creates a plain span for a money amount in the neutral text color.
///
/// Used for prices and values where red/green coloring would add noise.
#[must_use]
pub fn plain_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    Span::styled(amount.format(currency), Style::default().fg(theme.text))
}
