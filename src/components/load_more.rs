//! Load-More Sentinel Component
//!
//! Invisible marker below the listing grid. When it scrolls into view (and
//! more filtered items remain) it asks the parent to reveal the next page.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Observer fires once 10% of the sentinel is visible
const VISIBILITY_THRESHOLD: f64 = 0.1;

#[component]
pub fn LoadMoreSentinel(
    /// Called when the sentinel enters the viewport
    on_visible: Callback<()>,
    /// Gate: more filtered items remain and no load is in flight
    active: Signal<bool>,
) -> impl IntoView {
    let sentinel = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let Some(el) = sentinel.get() else {
            return;
        };

        let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer| {
                let intersecting = entries
                    .get(0)
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false);
                if intersecting && active.get_untracked() {
                    on_visible.run(());
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            cb.as_ref().unchecked_ref(),
            &options,
        ) {
            observer.observe(&el);
            on_cleanup(move || observer.disconnect());
        }
        cb.forget();
    });

    view! { <div class="load-more-sentinel" node_ref=sentinel></div> }
}
