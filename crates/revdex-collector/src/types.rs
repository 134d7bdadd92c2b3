use serde::Deserialize;

/// One review item as served by the `reviews.json` endpoint.
///
/// Only the body text is carried forward; the id exists so pages can be
/// logged meaningfully when a body is blank.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewItem {
    pub id: i64,
    /// Review body. May be absent or blank for rating-only reviews.
    #[serde(default)]
    pub body: Option<String>,
}

/// One page of the paginated reviews feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsPage {
    pub reviews: Vec<ReviewItem>,
}
