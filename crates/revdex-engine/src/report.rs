//! Terminal formatting for search outcomes.

use revdex_core::SearchResult;

/// Formats a search outcome as a human-readable block.
///
/// A found match shows the query, the similarity score to 4 decimal
/// places, and the matched review's original text. The no-match case gets
/// its own message so it cannot be confused with "no data" or a provider
/// failure, which surface as errors before this point.
#[must_use]
pub fn format_search_result(query: &str, outcome: Option<&SearchResult>) -> String {
    match outcome {
        Some(result) => format!(
            "--- Filtered Semantic Search Result ---\n\
             Query: {query}\n\
             Best match score: {:.4}\n\
             Original review:\n{}\n\
             ---------------------------------------",
            result.score, result.text
        ),
        None => format!("No reviews matched the sentiment filter for query: {query}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_block_contains_query_score_and_text() {
        let result = SearchResult {
            key: 3,
            score: 0.731_249,
            text: "Dead pixels out of the box.".to_owned(),
        };
        let block = format_search_result("dead pixels", Some(&result));
        assert!(block.contains("Query: dead pixels"));
        assert!(block.contains("Best match score: 0.7312"));
        assert!(block.contains("Dead pixels out of the box."));
    }

    #[test]
    fn score_is_rendered_to_four_decimals() {
        let result = SearchResult {
            key: 0,
            score: 1.0,
            text: "x".to_owned(),
        };
        let block = format_search_result("q", Some(&result));
        assert!(block.contains("1.0000"));
    }

    #[test]
    fn no_match_message_is_distinct() {
        let message = format_search_result("bad return policy", None);
        assert!(message.contains("No reviews matched"));
        assert!(message.contains("bad return policy"));
        assert!(!message.contains("Best match score"));
    }
}
