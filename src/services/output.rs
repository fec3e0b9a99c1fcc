use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Rounded, thousands-grouped amount: 2190000.0 -> "2,190,000".
pub fn fmt_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn fmt_yuan(amount: f64) -> String {
    format!("¥{}", fmt_amount(amount))
}

/// 0.30 -> "30%".
pub fn fmt_rate(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::{fmt_amount, fmt_rate, fmt_yuan};

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(fmt_amount(0.0), "0");
        assert_eq!(fmt_amount(999.0), "999");
        assert_eq!(fmt_amount(1_000.0), "1,000");
        assert_eq!(fmt_amount(2_190_000.0), "2,190,000");
        assert_eq!(fmt_amount(-500_000.0), "-500,000");
    }

    #[test]
    fn yuan_and_rate_formats() {
        assert_eq!(fmt_yuan(1_110_000.0), "¥1,110,000");
        assert_eq!(fmt_rate(0.30), "30%");
        assert_eq!(fmt_rate(0.78), "78%");
    }
}
