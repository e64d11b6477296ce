/// Category name fragments that mark an expense category as a savings pool.
pub const ACCUMULATING_KEYWORDS: [&str; 3] = ["fund", "savings", "emergency"];

/// Returns `true` when the category name looks like money being set aside rather
/// than spent. Matching is a case-insensitive substring test.
pub fn is_accumulating_category(name: &str) -> bool {
    let lowered = name.to_lowercase();
    ACCUMULATING_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keywords_regardless_of_case() {
        assert!(is_accumulating_category("Emergency Fund"));
        assert!(is_accumulating_category("SAVINGS"));
        assert!(is_accumulating_category("college fund"));
        assert!(is_accumulating_category("Refunds"));
    }

    #[test]
    fn ordinary_categories_are_not_accumulating() {
        assert!(!is_accumulating_category("Groceries"));
        assert!(!is_accumulating_category("Housing"));
        assert!(!is_accumulating_category(""));
    }
}
