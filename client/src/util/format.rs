//! Rupee price formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const RUPEE: &str = "₹";
const LAKH: u64 = 100_000;

/// Full price with Indian digit grouping: `450000` -> `₹ 4,50,000`.
///
/// The last three digits form one group and every two digits above that
/// form another.
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("{RUPEE} {digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{RUPEE} {},{tail}", groups.join(","))
}

/// Compact lakh form used on cards: `450000` -> `₹ 4.50L`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_lakhs(amount: u64) -> String {
    format!("{RUPEE} {:.2}L", amount as f64 / LAKH as f64)
}
