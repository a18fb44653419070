//! Display formatting for amounts, percentages, and dates (French locale).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount in euros: thousands grouped with a non-breaking space,
/// comma decimal separator, two decimals.
pub fn format_eur(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;
    let euros = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(euros.len() + euros.len() / 3);
    for (i, ch) in euros.chars().enumerate() {
        if i > 0 && (euros.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{rem:02}\u{a0}€")
}

/// Format a signed percentage with two decimals, e.g. `+12,34 %`.
pub fn format_percent(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    let body = format!("{:.2}", value.abs()).replace('.', ",");
    format!("{sign}{body}\u{a0}%")
}

/// Format an ISO date (`YYYY-MM-DD`, with or without a time part) as
/// `DD/MM/YYYY`. Anything unrecognized is returned unchanged.
pub fn format_date_fr(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None)
            if year.len() == 4 && month.len() == 2 && day.len() == 2 =>
        {
            format!("{day}/{month}/{year}")
        }
        _ => iso.to_owned(),
    }
}
