use icons::Loader;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Loading indicator shared by buttons and anything else that waits.
#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 shrink-0 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label="Loading" attr:data-name="Spinner" /> }
}
