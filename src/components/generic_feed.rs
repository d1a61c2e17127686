use yew::prelude::*;

use crate::components::feed_list::FeedList;
use crate::config::CONFIG;
use crate::hooks::use_remote_data;
use crate::models::FeedLayout;

#[derive(Properties, PartialEq)]
pub struct GenericFeedProps {
    #[prop_or_else(default_generic_locator)]
    pub locator: AttrValue,
}

fn default_generic_locator() -> AttrValue {
    AttrValue::from(CONFIG.generic_feed_url.clone())
}

#[function_component(GenericFeed)]
pub fn generic_feed(props: &GenericFeedProps) -> Html {
    let data = use_remote_data(props.locator.clone());

    html! {
        <FeedList layout={FeedLayout::generic()} state={data.state} />
    }
}
