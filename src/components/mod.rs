pub mod app;
pub mod feed_list;
pub mod generic_feed;
pub mod yoga_feed;

pub use app::App;
pub use feed_list::FeedList;
pub use generic_feed::GenericFeed;
pub use yoga_feed::YogaFeed;
