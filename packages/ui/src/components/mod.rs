mod article_card;
pub use article_card::ArticleCard;

mod comments;
pub use comments::Comments;

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, ModalOverlay};

mod pagination;
pub use pagination::Pagination;

mod search_bar;
pub use search_bar::SearchBar;

/// `Mar 1, 2024`
pub(crate) fn format_date(ts: &api::models::Timestamp) -> String {
    ts.format("%b %-d, %Y").to_string()
}
