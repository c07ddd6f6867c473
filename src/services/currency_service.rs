/// Groups digits the Indian way: the last three, then pairs
/// (1234567 -> "12,34,567"). No decimal places.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `format_inr` with the rupee sign, as shown in tables and labels.
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", format_inr(amount))
}
