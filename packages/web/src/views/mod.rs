mod layout;
pub use layout::AppLayout;

mod login;
pub use login::{Login, Register};

mod news;
pub use news::{CreateNews, EditNews, NewsDetails, NewsList};
