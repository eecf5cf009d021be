pub mod customer;
pub mod offer;

/// Strips control characters and collapses runs of whitespace.
pub(crate) fn sanitize_inline_text(value: &str) -> String {
    let without_control: String = value.chars().filter(|c| !c.is_control()).collect();

    without_control
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
