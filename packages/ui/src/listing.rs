//! Search and pagination state for the news list.
//!
//! [`NewsListState`] keeps the full article set and derives the filtered set from it
//! on every query change, so clearing the search always brings every article back.
//! Page numbers are 1-based and always in `1..=page_count`.

use std::collections::HashMap;

use api::Article;

/// Articles whose title contains `query`, ignoring case. An empty query keeps all.
pub fn filter_by_title(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Current page over a list of known length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` items. An empty list still has one (empty) page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// The slice of `items` on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, total: usize) {
        if self.page < self.page_count(total) {
            self.page += 1;
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back into range after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total));
    }
}

/// Everything the list view renders, minus the author names.
#[derive(Clone, Debug, PartialEq)]
pub struct NewsListState {
    all: Vec<Article>,
    filtered: Vec<Article>,
    query: String,
    paginator: Paginator,
}

impl NewsListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            paginator: Paginator::new(page_size),
        }
    }

    /// Replace the article set, keeping the current query.
    pub fn set_articles(&mut self, articles: Vec<Article>) {
        self.all = articles;
        self.filtered = filter_by_title(&self.all, &self.query);
        self.paginator.clamp(self.filtered.len());
    }

    /// New search text. Always returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.filtered = filter_by_title(&self.all, &self.query);
        self.paginator.reset();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn all(&self) -> &[Article] {
        &self.all
    }

    pub fn filtered(&self) -> &[Article] {
        &self.filtered
    }

    /// Articles on the current page.
    pub fn visible(&self) -> &[Article] {
        self.paginator.slice(&self.filtered)
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count(self.filtered.len())
    }

    pub fn next_page(&mut self) {
        self.paginator.next(self.filtered.len());
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev();
    }

    /// Drop a deleted article from both lists without refetching.
    pub fn remove(&mut self, id: &str) {
        self.all.retain(|a| a.id != id);
        self.filtered.retain(|a| a.id != id);
        self.paginator.clamp(self.filtered.len());
    }
}

/// Name to show for an article's author: the resolved name, or a placeholder.
pub fn author_label(article: &Article, names: &HashMap<String, String>) -> String {
    article
        .author_name()
        .map(str::to_string)
        .or_else(|| {
            article
                .author_id
                .as_ref()
                .and_then(|id| names.get(id).cloned())
        })
        .unwrap_or_else(|| "Unknown author".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::ArticleRecord;
    use serde_json::json;

    fn article(id: usize, title: &str) -> Article {
        serde_json::from_value::<ArticleRecord>(json!({
            "id": id, "title": title, "body": "lorem ipsum", "author_id": 1
        }))
        .unwrap()
        .into()
    }

    fn articles(n: usize) -> Vec<Article> {
        (1..=n).map(|i| article(i, &format!("Article {i}"))).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let list = vec![article(1, "Alpha"), article(2, "beta"), article(3, "Gamma")];
        assert_eq!(filter_by_title(&list, "a").len(), 3);
        assert_eq!(filter_by_title(&list, "A").len(), 3);
        assert!(filter_by_title(&list, "z").is_empty());

        let gam = filter_by_title(&list, "GAM");
        assert_eq!(gam.len(), 1);
        assert_eq!(gam[0].title, "Gamma");
    }

    #[test]
    fn test_filter_keeps_spaces_in_query() {
        let list = vec![article(1, "Rust news"), article(2, "Rustacean"), article(3, "Old news")];
        let hits = filter_by_title(&list, "rust ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rust news");
        assert_eq!(filter_by_title(&list, " news").len(), 2);
        assert!(filter_by_title(&list, "  ").is_empty());
    }

    #[test]
    fn test_pages_of_thirteen() {
        let mut state = NewsListState::new(6);
        state.set_articles(articles(13));
        assert_eq!(state.page_count(), 3);

        let mut sizes = vec![state.visible().len()];
        state.next_page();
        sizes.push(state.visible().len());
        state.next_page();
        sizes.push(state.visible().len());
        assert_eq!(sizes, [6, 6, 1]);

        // Past the last page is a no-op.
        state.next_page();
        assert_eq!(state.page(), 3);
        assert_eq!(state.visible()[0].title, "Article 13");
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut state = NewsListState::new(6);
        state.set_articles(articles(3));
        state.prev_page();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut state = NewsListState::new(6);
        state.set_articles(articles(13));
        state.next_page();
        state.next_page();

        state.set_query("article 1");
        assert_eq!(state.page(), 1);
        // "Article 1", "Article 10" .. "Article 13"
        assert_eq!(state.filtered().len(), 5);
        assert_eq!(state.page_count(), 1);

        state.set_query("");
        assert_eq!(state.filtered().len(), 13);
    }

    #[test]
    fn test_remove_updates_both_lists() {
        let mut state = NewsListState::new(6);
        state.set_articles(articles(7));
        state.set_query("Article 7");
        state.next_page();
        assert_eq!(state.filtered().len(), 1);

        state.remove("7");
        assert_eq!(state.all().len(), 6);
        assert!(state.filtered().is_empty());
        assert_eq!(state.page(), 1);

        state.set_query("");
        assert!(state.all().iter().all(|a| a.id != "7"));
    }

    #[test]
    fn test_remove_clamps_page() {
        let mut state = NewsListState::new(6);
        state.set_articles(articles(7));
        state.next_page();
        assert_eq!(state.page(), 2);

        state.remove("7");
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible().len(), 6);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let paginator = Paginator::new(6);
        assert_eq!(paginator.page_count(0), 1);
        assert!(paginator.slice::<u8>(&[]).is_empty());
        assert_eq!(Paginator::new(0).page_size(), 1);
    }

    #[test]
    fn test_author_label() {
        let mut names = HashMap::new();
        names.insert("1".to_string(), "Grace".to_string());
        let a = article(1, "x");
        assert_eq!(author_label(&a, &names), "Grace");
        assert_eq!(author_label(&a, &HashMap::new()), "Unknown author");
    }
}
