//! Number formatting for the analyzer cards and chart.
//!
//! Amounts: currency symbol + sign + grouped number, with up to three
//! fractional digits and trailing zeros dropped.
//! Percentages: exactly one decimal digit followed by `%`.

/// Format an amount with currency symbol and locale-aware grouping.
/// Example: -3000.0 -> "\u{20b9}-3,000", 1234.5 -> "\u{20b9}1,234.5",
/// 100000.0 in en-IN -> "\u{20b9}1,00,000"
pub fn format_money(amount: f64, currency: &str, locale: &str) -> String {
    // Formatting from the f64 keeps every digit of large finite amounts.
    let formatted = format!("{:.3}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, ""));
    let fraction = fraction.trim_end_matches('0');

    let is_zero = fraction.is_empty() && whole.chars().all(|c| c == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let (thousands_sep, decimal_sep) = locale_separators(locale);
    let whole_str = group_digits(whole, thousands_sep, uses_indian_grouping(locale));
    let symbol = currency_symbol(currency);

    if fraction.is_empty() {
        format!("{}{}{}", symbol, sign, whole_str)
    } else {
        format!(
            "{}{}{}{}{}",
            symbol, sign, whole_str, decimal_sep, fraction
        )
    }
}

/// Format a percentage with one decimal digit and a locale-aware separator.
/// Example: 33.333 -> "33.3%" (en-US) or "33,3%" (de-DE)
pub fn format_percent(value: f64, locale: &str) -> String {
    let (_, decimal_sep) = locale_separators(locale);
    let formatted = format!("{:.1}", round_one_decimal(value));
    if decimal_sep == '.' {
        format!("{}%", formatted)
    } else {
        format!("{}%", formatted.replace('.', &decimal_sep.to_string()))
    }
}

/// Round half away from zero to one decimal place. Never returns `-0.0`.
pub fn round_one_decimal(value: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0.
    (value * 10.0).round() / 10.0 + 0.0
}

/// Get thousands and decimal separators based on locale.
fn locale_separators(locale: &str) -> (char, char) {
    // Locales that use period as thousands separator and comma as decimal
    match locale {
        "de-DE" | "de-AT" | "de-CH" | "fr-FR" | "fr-BE" | "fr-CA" | "es-ES" | "es-AR" | "it-IT"
        | "pt-BR" | "pt-PT" | "nl-NL" | "nl-BE" | "pl-PL" | "ru-RU" | "tr-TR" | "vi-VN"
        | "id-ID" | "da-DK" | "nb-NO" | "sv-SE" | "fi-FI" | "cs-CZ" | "sk-SK" | "hu-HU"
        | "ro-RO" | "bg-BG" | "uk-UA" | "el-GR" => ('.', ','),
        _ => (',', '.'),
    }
}

/// Locales that group the lakh and crore places in pairs: 1,00,00,000.
fn uses_indian_grouping(locale: &str) -> bool {
    matches!(locale, "en-IN" | "hi-IN" | "bn-IN" | "ta-IN" | "te-IN" | "mr-IN")
}

/// Insert separators into a string of ASCII digits.
fn group_digits(digits: &str, sep: char, indian: bool) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 2);

    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        let boundary = if indian {
            remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)
        } else {
            remaining % 3 == 0
        };
        if i > 0 && boundary {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

/// Get currency symbol for a currency code.
pub fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{00a3}",
        "JPY" => "\u{00a5}",
        "CNY" => "\u{00a5}",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "CHF\u{00a0}",
        "INR" => "\u{20b9}",
        "BRL" => "R$",
        "SGD" => "S$",
        "HKD" => "HK$",
        "NZD" => "NZ$",
        _ => "$",
    }
}
