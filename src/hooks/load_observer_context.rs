// ============================================================================
// LOAD OBSERVER CONTEXT - inject where load diagnostics go
// ============================================================================

use yew::prelude::*;

use crate::services::ObserverHandle;

/// Provider component; every `use_remote_data` below it reports to `observer`
#[function_component(LoadObserverProvider)]
pub fn load_observer_provider(props: &LoadObserverProviderProps) -> Html {
    html! {
        <ContextProvider<ObserverHandle> context={props.observer.clone()}>
            {props.children.clone()}
        </ContextProvider<ObserverHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadObserverProviderProps {
    pub observer: ObserverHandle,
    pub children: Children,
}

/// Observer from context, or the configured default when none is provided
#[hook]
pub fn use_load_observer() -> ObserverHandle {
    let provided = use_context::<ObserverHandle>();
    let fallback = use_memo((), |_| ObserverHandle::from_config());
    provided.unwrap_or_else(|| (*fallback).clone())
}
