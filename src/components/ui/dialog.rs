use icons::X;
use leptos::context::Provider;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_overlay_id::use_overlay_id;
use crate::components::ui::button::{Attributes, Button, ButtonColor, ButtonSize, ButtonStyling};

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogHeader, div, "flex flex-col gap-2 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold text-gray-950"}
    clx! {DialogDescription, p, "text-sm text-gray-500"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

/// Outcome of asking the dialog to open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenChange {
    /// New value for the internal state, uncontrolled dialogs only.
    pub store: Option<bool>,
    /// Value to report through `on_open_change`.
    pub notify: Option<bool>,
}

pub(crate) fn request_open(controlled: bool, current: bool, requested: bool) -> OpenChange {
    if current == requested {
        return OpenChange { store: None, notify: None };
    }
    OpenChange {
        store: (!controlled).then_some(requested),
        notify: Some(requested),
    }
}

#[derive(Clone)]
struct DialogContext {
    target_id: String,
    open: Signal<bool>,
    set_open: Callback<bool>,
    modal: bool,
}

#[component]
pub fn Dialog(
    children: Children,
    #[prop(optional, into)] class: String,
    /// Controlled open state. When set, the dialog only reports changes.
    #[prop(optional, into)]
    open: MaybeProp<bool>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(default = true)] modal: bool,
) -> impl IntoView {
    let internal = RwSignal::new(default_open);
    let is_open = Signal::derive(move || open.get().unwrap_or_else(|| internal.get()));

    let set_open = Callback::new(move |requested: bool| {
        let change = request_open(open.get_untracked().is_some(), is_open.get_untracked(), requested);
        if let Some(value) = change.store {
            internal.set(value);
        }
        if let (Some(value), Some(on_open_change)) = (change.notify, on_open_change.as_ref()) {
            on_open_change.run(value);
        }
    });

    let ctx = DialogContext {
        target_id: use_overlay_id("dialog"),
        open: is_open,
        set_open,
        modal,
    };

    let merged_class = tw_merge!("w-fit", class);

    view! {
        <Provider value=ctx>
            <div class=merged_class data-name="Dialog">
                {children()}
            </div>
        </Provider>
    }
}

/// Button that opens the dialog. Takes the same style props as `Button`.
#[component]
pub fn DialogTrigger(
    children: ChildrenFn,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] styling: ButtonStyling,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = expect_context::<DialogContext>();
    let DialogContext { target_id, open, set_open, .. } = ctx;

    let attributes = Signal::derive(move || {
        Some(
            Attributes::new()
                .with("aria-haspopup", "dialog")
                .with("aria-controls", target_id.clone())
                .with("aria-expanded", open.get().to_string()),
        )
    });

    view! {
        <Button
            color=color
            styling=styling
            size=size
            class=class
            attributes=attributes
            on_click=Callback::new(move |_| set_open.run(true))
        >
            {children()}
        </Button>
    }
}

/// Wraps an element that dismisses the dialog.
#[component]
pub fn DialogClose(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let ctx = expect_context::<DialogContext>();
    let set_open = ctx.set_open;
    let merged_class = tw_merge!("contents", class);

    view! {
        <div
            data-name="DialogClose"
            class=merged_class
            data-dialog-close=ctx.target_id
            on:click=move |_| set_open.run(false)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn DialogContent(
    children: ChildrenFn,
    #[prop(optional, into)] class: String,
    #[prop(optional)] hide_close_button: bool,
) -> impl IntoView {
    let ctx = expect_context::<DialogContext>();
    let DialogContext { target_id, open, set_open, modal } = ctx;

    let merged_class = tw_merge!(
        "fixed top-[50%] left-[50%] z-100 grid w-full max-w-[calc(100%-2rem)] max-h-[85vh] translate-x-[-50%] translate-y-[-50%] gap-4 overflow-y-auto rounded-2xl border border-gray-200 bg-white p-6 shadow-lg sm:max-w-lg",
        class
    );
    let close_class = format!(
        "absolute top-4 right-4 rounded-sm p-1 text-gray-500 hover:text-gray-900 focus:outline-none focus:ring-2 focus:ring-violet-500 [&_svg:not([class*='size-'])]:size-4{}",
        if hide_close_button { " hidden" } else { "" },
    );

    let on_escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            set_open.run(false);
        }
    });
    on_cleanup(move || on_escape.remove());

    if modal {
        Effect::new(move |_| lock_scroll(open.get()));
        on_cleanup(|| lock_scroll(false));
    }

    view! {
        <Show when=move || open.get()>
            {modal
                .then(|| {
                    view! {
                        <div
                            data-name="DialogBackdrop"
                            class="fixed inset-0 z-60 bg-black/50"
                            on:click=move |_| set_open.run(false)
                        />
                    }
                })}
            <div
                data-name="DialogContent"
                role="dialog"
                aria-modal=modal.to_string()
                id=target_id.clone()
                class=merged_class.clone()
                data-state="open"
            >
                <button
                    type="button"
                    class=close_class.clone()
                    aria-label="Close dialog"
                    on:click=move |_| set_open.run(false)
                >
                    <span class="sr-only">"Close Dialog"</span>
                    <X />
                </button>

                {children()}
            </div>
        </Show>
    }
}

fn lock_scroll(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_stores_and_notifies() {
        let change = request_open(false, false, true);
        assert_eq!(change, OpenChange { store: Some(true), notify: Some(true) });
    }

    #[test]
    fn test_controlled_only_notifies() {
        let change = request_open(true, true, false);
        assert_eq!(change, OpenChange { store: None, notify: Some(false) });
    }

    #[test]
    fn test_no_op_request_is_silent() {
        assert_eq!(request_open(false, true, true), OpenChange { store: None, notify: None });
        assert_eq!(request_open(true, false, false), OpenChange { store: None, notify: None });
    }
}
