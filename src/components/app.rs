use yew::prelude::*;

use super::{GenericFeed, YogaFeed};

/// Page root. The two feeds load independently; neither can block the other.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <GenericFeed />
            <YogaFeed />
        </>
    }
}
