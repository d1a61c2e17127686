use yew::prelude::*;

use crate::models::{Entry, FeedLayout, FieldSlot, LoadState};

#[derive(Properties, PartialEq, Clone)]
pub struct FeedListProps {
    pub layout: FeedLayout,
    pub state: LoadState,
}

/// Heading plus one `<li>` per entry. Pending and failed loads both render
/// an empty list; there is no spinner and no error text.
#[function_component(FeedList)]
pub fn feed_list(props: &FeedListProps) -> Html {
    let layout = &props.layout;
    let entries = props.state.collection();

    html! {
        <>
            <h1 class="useFetch_heading">{layout.heading}</h1>
            <ul class="list_data_main">
                { for entries.into_iter().flatten().enumerate().map(|(index, entry)| {
                    // Position is a stable key: a collection never changes after load
                    html! {
                        <li key={index} class="list_data">
                            <h3>{entry.field(layout.title_field)}</h3>
                            { for layout.fields.iter().map(|slot| field_row(entry, slot)) }
                        </li>
                    }
                }) }
            </ul>
        </>
    }
}

fn field_row(entry: &Entry, slot: &FieldSlot) -> Html {
    html! {
        <p>
            if !slot.label.is_empty() {
                <strong>{slot.label}</strong>
            }
            {entry.field(slot.field)}
        </p>
    }
}
