//! Column auto-detection
//!
//! When the user does not name the date/sales columns explicitly, the loader
//! guesses them from the header row. The guess is a pure scoring function so
//! it can be tested in isolation: an exact keyword match outranks a substring
//! match, and ties resolve to the lowest column index.

/// Keywords identifying a date-like column
pub const DATE_KEYWORDS: &[&str] = &["date", "time"];

/// Keywords identifying a sales-like column
pub const SALES_KEYWORDS: &[&str] = &["sale", "rev", "amount"];

/// Score a single header against a keyword set
///
/// 2 = exact match (case-insensitive), 1 = substring match, 0 = no match.
fn score_header(header: &str, keywords: &[&str]) -> u8 {
    let h = header.trim().to_lowercase();
    let mut best = 0;
    for keyword in keywords {
        if h == *keyword {
            return 2;
        }
        if h.contains(keyword) {
            best = best.max(1);
        }
    }
    best
}

/// Find the best-matching column for a keyword set
///
/// Returns the index of the highest-scoring header, or `None` when no header
/// matches at all. The first column wins a tie.
pub fn best_header_match(headers: &[String], keywords: &[&str]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (idx, header) in headers.iter().enumerate() {
        let score = score_header(header, keywords);
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Guess the date column
pub fn detect_date_column(headers: &[String]) -> Option<usize> {
    best_header_match(headers, DATE_KEYWORDS)
}

/// Guess the sales column
pub fn detect_sales_column(headers: &[String]) -> Option<usize> {
    best_header_match(headers, SALES_KEYWORDS)
}
