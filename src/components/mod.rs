//! UI Components

mod browse_page;
mod item_detail_page;
mod listing_card;
mod load_more;
mod login_page;
mod my_items_page;
mod nav_bar;
mod post_page;
mod profile_page;
mod signup_page;

pub use browse_page::BrowsePage;
pub use item_detail_page::ItemDetailPage;
pub use listing_card::ListingCard;
pub use load_more::LoadMoreSentinel;
pub use login_page::LoginPage;
pub use my_items_page::MyItemsPage;
pub use nav_bar::NavBar;
pub use post_page::{PostPage, PostSuccessView};
pub use profile_page::ProfilePage;
pub use signup_page::SignUpPage;
