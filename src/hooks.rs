//! Page Load Hook
//!
//! Wires a `LoadCycle` into a component: reloads whenever the tracked key
//! changes, and drops late results once the component is gone.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use bookable_client::{ApiResult, LoadCycle, LoadState};

/// Load page data keyed by `key` (usually route params).
///
/// `key` is tracked: reading a signal inside it re-runs the load when that
/// signal changes. Each run starts from `LoadState::Loading`.
pub fn use_page_load<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    load: impl Fn(K) -> Fut + 'static,
) -> ReadSignal<LoadState<T>>
where
    K: 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let (state, set_state) = signal(LoadState::<T>::Loading);
    let cycle = LoadCycle::new();

    on_cleanup({
        let cycle = cycle.clone();
        move || cycle.cancel()
    });

    Effect::new(move |_| {
        let pending = load(key());
        let ticket = cycle.begin();
        let cycle = cycle.clone();
        spawn_local(async move {
            cycle.run_with(ticket, pending, |next| set_state.set(next)).await;
        });
    });

    state
}

/// Route parameter by name; missing parameters read as empty
pub fn use_route_param(name: &'static str) -> impl Fn() -> String + Copy + 'static {
    let params = leptos_router::hooks::use_params_map();
    move || params.with(|p| p.get(name).unwrap_or_default())
}
