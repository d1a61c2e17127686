pub mod entry;
pub mod feed_layout;
pub mod load_state;

pub use entry::{collection_from_value, Collection, Entry};
pub use feed_layout::{FeedLayout, FieldSlot};
pub use load_state::LoadState;
