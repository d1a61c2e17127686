use feed_lists::components::feed_list::FeedListProps;
use feed_lists::components::yoga_feed::YogaFeedProps;
use feed_lists::components::{App, FeedList, YogaFeed};
use feed_lists::hooks::{use_load_observer, LoadObserverProvider};
use feed_lists::models::{collection_from_value, FeedLayout, LoadState};
use feed_lists::services::ObserverHandle;
use feed_lists::FetchError;
use serde_json::{json, Value};
use yew::prelude::*;
use yew::ServerRenderer;

/// Send-able description of a load state; the `Rc` inside `LoadState` is
/// built on the renderer's side.
#[derive(Clone)]
enum Fixture {
    Pending,
    Loaded(Value),
    Failed(FetchError),
}

impl Fixture {
    fn into_state(self) -> LoadState {
        match self {
            Fixture::Pending => LoadState::Pending,
            Fixture::Loaded(raw) => LoadState::loaded(collection_from_value(raw).unwrap()),
            Fixture::Failed(err) => LoadState::Failed(err),
        }
    }
}

async fn render_list(layout: fn() -> FeedLayout, fixture: Fixture) -> String {
    ServerRenderer::<FeedList>::with_props(move || FeedListProps {
        layout: layout(),
        state: fixture.into_state(),
    })
    .hydratable(false)
    .render()
    .await
}

fn item_count(html: &str) -> usize {
    html.matches("<li").count()
}

#[tokio::test]
async fn tree_pose_renders_one_item() {
    let html = render_list(
        FeedLayout::yoga,
        Fixture::Loaded(json!([
            {"name": "Tree Pose", "benefits": "Balance", "time_duration": "30s"}
        ])),
    )
    .await;

    assert!(html.contains(r#"<h1 class="useFetch_heading">Yoga benefits</h1>"#));
    assert_eq!(item_count(&html), 1);
    assert!(html.contains("<h3>Tree Pose</h3>"));
    assert!(html.contains("<strong>Benefits: </strong>Balance"));
    assert!(html.contains("<strong>Duration: </strong>30s"));
}

#[tokio::test]
async fn empty_feed_renders_heading_and_empty_list() {
    let html = render_list(FeedLayout::yoga, Fixture::Loaded(json!([]))).await;

    assert!(html.contains("Yoga benefits"));
    assert!(html.contains(r#"<ul class="list_data_main"></ul>"#));
    assert_eq!(item_count(&html), 0);
}

#[tokio::test]
async fn items_follow_feed_order() {
    let html = render_list(
        FeedLayout::yoga,
        Fixture::Loaded(json!([
            {"name": "Mountain"},
            {"name": "Warrior"},
            {"name": "Child"},
        ])),
    )
    .await;

    assert_eq!(item_count(&html), 3);
    let mountain = html.find("Mountain").unwrap();
    let warrior = html.find("Warrior").unwrap();
    let child = html.find("Child").unwrap();
    assert!(mountain < warrior && warrior < child);
}

#[tokio::test]
async fn missing_benefits_renders_empty_body() {
    let html = render_list(
        FeedLayout::yoga,
        Fixture::Loaded(json!([{"name": "Cobra", "time_duration": "1m"}])),
    )
    .await;

    assert_eq!(item_count(&html), 1);
    assert!(html.contains("<p><strong>Benefits: </strong></p>"));
    assert!(html.contains("<strong>Duration: </strong>1m"));
}

#[tokio::test]
async fn failure_looks_like_not_loaded() {
    let pending = render_list(FeedLayout::yoga, Fixture::Pending).await;
    let failed = render_list(
        FeedLayout::yoga,
        Fixture::Failed(FetchError::Network("connection refused".into())),
    )
    .await;

    assert_eq!(pending, failed);
    assert_eq!(item_count(&failed), 0);
    assert!(!failed.contains("connection refused"));
    assert!(!failed.to_lowercase().contains("error"));
}

#[tokio::test]
async fn rerender_is_identical() {
    let fixture = Fixture::Loaded(json!([
        {"title": "hello", "body": "first post"},
        {"title": "again", "body": "second post"},
    ]));

    let first = render_list(FeedLayout::generic, fixture.clone()).await;
    let second = render_list(FeedLayout::generic, fixture).await;

    assert_eq!(first, second);
    assert!(first.contains("<h3>hello</h3>"));
    assert!(first.contains("<p>first post</p>"));
}

#[tokio::test]
async fn mounted_feed_starts_without_data_for_any_locator() {
    for locator in ["not a url", "https://api.npoint.io/4459a9a10e43812e1152"] {
        let html = ServerRenderer::<YogaFeed>::with_props(move || YogaFeedProps {
            locator: AttrValue::from(locator),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Yoga benefits"));
        assert_eq!(item_count(&html), 0);
    }
}

#[tokio::test]
async fn app_renders_both_feeds_in_order() {
    let html = ServerRenderer::<App>::new().hydratable(false).render().await;

    let generic = html.find("Latest posts").unwrap();
    let yoga = html.find("Yoga benefits").unwrap();
    assert!(generic < yoga);
    assert_eq!(html.matches("list_data_main").count(), 2);
}

#[derive(Properties, PartialEq)]
struct TwoFeedsProps {
    generic: LoadState,
    yoga: LoadState,
}

#[function_component(TwoFeeds)]
fn two_feeds(props: &TwoFeedsProps) -> Html {
    html! {
        <>
            <FeedList layout={FeedLayout::generic()} state={props.generic.clone()} />
            <FeedList layout={FeedLayout::yoga()} state={props.yoga.clone()} />
        </>
    }
}

#[tokio::test]
async fn one_failed_feed_does_not_affect_the_other() {
    let html = ServerRenderer::<TwoFeeds>::with_props(|| TwoFeedsProps {
        generic: LoadState::Failed(FetchError::Status {
            status: 500,
            text: "Internal Server Error".into(),
        }),
        yoga: Fixture::Loaded(json!([
            {"name": "Tree Pose", "benefits": "Balance", "time_duration": "30s"}
        ]))
        .into_state(),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains("Latest posts"));
    assert!(html.contains("<h3>Tree Pose</h3>"));
    assert_eq!(item_count(&html), 1);
}

#[derive(Properties, PartialEq)]
struct ProbeProps {
    expected: Option<ObserverHandle>,
}

#[function_component(ObserverProbe)]
fn observer_probe(props: &ProbeProps) -> Html {
    let observer = use_load_observer();
    let label = if props.expected.as_ref() == Some(&observer) {
        "injected"
    } else {
        "default"
    };
    html! { <span>{label}</span> }
}

#[derive(Properties, PartialEq)]
struct ProvidedProps {
    observer: ObserverHandle,
}

#[function_component(Provided)]
fn provided(props: &ProvidedProps) -> Html {
    html! {
        <LoadObserverProvider observer={props.observer.clone()}>
            <ObserverProbe expected={Some(props.observer.clone())} />
        </LoadObserverProvider>
    }
}

#[tokio::test]
async fn injected_observer_reaches_the_hook() {
    let html = ServerRenderer::<Provided>::with_props(|| ProvidedProps {
        observer: ObserverHandle::noop(),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains("injected"));
}

#[tokio::test]
async fn observer_falls_back_without_provider() {
    let html = ServerRenderer::<ObserverProbe>::with_props(|| ProbeProps {
        expected: Some(ObserverHandle::noop()),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains("default"));
}
