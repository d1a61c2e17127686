use yew::prelude::*;

use crate::components::feed_list::FeedList;
use crate::config::CONFIG;
use crate::hooks::use_remote_data;
use crate::models::FeedLayout;

#[derive(Properties, PartialEq)]
pub struct YogaFeedProps {
    #[prop_or_else(default_yoga_locator)]
    pub locator: AttrValue,
}

fn default_yoga_locator() -> AttrValue {
    AttrValue::from(CONFIG.yoga_feed_url.clone())
}

/// Yoga poses with their benefits and hold duration
#[function_component(YogaFeed)]
pub fn yoga_feed(props: &YogaFeedProps) -> Html {
    let data = use_remote_data(props.locator.clone());

    html! {
        <FeedList layout={FeedLayout::yoga()} state={data.state} />
    }
}
