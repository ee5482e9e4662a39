use crate::internal::models::{Article, RankedEntry};
use std::cmp::Reverse;

/// Keep only articles with a non-empty `title` or `story_title`, in input order.
pub fn filter_articles(articles: &[Article]) -> Vec<Article> {
    articles.iter().filter(|a| a.is_valid()).cloned().collect()
}

/// Filter, then sort by comment count descending.
///
/// Missing counts sort as 0. The sort is stable, so equal counts keep their
/// input order.
pub fn filter_and_sort_articles(articles: &[Article]) -> Vec<Article> {
    let mut sorted = filter_articles(articles);
    sorted.sort_by_key(|a| Reverse(a.comment_count()));
    sorted
}

/// Take the first `num` of an already sorted list and project them to
/// `(title, comments)` entries.
pub fn get_top_n_articles(articles: &[Article], num: usize) -> Vec<RankedEntry> {
    articles
        .iter()
        .filter_map(RankedEntry::from_article)
        .take(num)
        .collect()
}

/// Filter, sort and truncate in one step.
pub fn rank(articles: &[Article], top_n: usize) -> Vec<RankedEntry> {
    get_top_n_articles(&filter_and_sort_articles(articles), top_n)
}
