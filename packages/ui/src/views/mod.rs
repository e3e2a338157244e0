mod article_form;
use article_form::ArticleForm;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod news_list;
pub use news_list::NewsListView;

mod news_detail;
pub use news_detail::NewsDetailView;

mod create_news;
pub use create_news::CreateNewsView;

mod edit_news;
pub use edit_news::EditNewsView;

/// Fetch state of a single resource.
#[derive(Clone, Debug, PartialEq)]
enum Loaded<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}
