//! Currency rendering for predicted amounts.

use crate::constants::CURRENCY_SYMBOL;

/// Render an amount as `₹ 1,234.50`: two decimals, thousands separated
/// by commas, sign kept after the symbol.
pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL} {}", group_thousands(value))
}

/// Two-decimal rendering with `,` between each group of three integer digits.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let Some((int_part, frac_part)) = unsigned.split_once('.') else {
        // inf / NaN have no decimal point; nothing to group.
        return fixed;
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}
