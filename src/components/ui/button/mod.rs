mod delegate;
mod error;
mod state;
mod variants;

pub use delegate::*;
pub use error::*;
pub use state::*;
pub use variants::*;

use std::borrow::Cow;

use leptos::attr::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::attr::custom::custom_attribute;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::ui::spinner::Spinner;

/// Button element handed to `as_child`: attributes are forwarded onto it.
pub type SlotChild = ChildElement<ViewFn>;

#[component]
pub fn Button(
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] styling: ButtonStyling,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] shape: ButtonShape,
    #[prop(optional)] font_weight: FontWeight,
    #[prop(default = false.into(), into)] is_loading: Signal<bool>,
    #[prop(optional, into)] loading_text: MaybeProp<String>,
    #[prop(default = false.into(), into)] disabled: Signal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(into, default = None)] icon_left: Option<ViewFn>,
    #[prop(into, default = None)] icon_right: Option<ViewFn>,

    // Passthrough
    #[prop(optional)] as_child: bool,
    #[prop(optional)] child_elements: Vec<SlotChild>,

    // Host attributes
    #[prop(optional, into)] class: String,
    #[prop(into, default = "button")] r#type: &'static str,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    /// Extra host attributes, layered over the resolved ones on every render pass.
    #[prop(optional, into)]
    attributes: MaybeProp<Attributes>,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let bundle = resolve(color, styling, size, shape, font_weight, full_width);
    let resolved = Attributes::new()
        .with("class", bundle.with_class(&class))
        .with("data-color", color.to_string())
        .with("data-styling", styling.to_string())
        .with("data-size", size.to_string());
    let mode = RenderMode::from_as_child(as_child);
    let body = children.map(|children| ViewFn::from(move || children()));

    // One render pass per change of `is_loading` / `disabled` / host attributes.
    let render_pass = move || -> Result<AnyView, ConfigurationError> {
        let mut host = resolved.clone();
        if let Some(label) = aria_label.get() {
            host.insert("aria-label", label);
        }
        if let Some(extra) = attributes.get() {
            host.overlay(&extra);
        }

        let request = StyleRequest {
            color,
            styling,
            size,
            shape,
            font_weight,
            is_loading: is_loading.get(),
            loading_text: loading_text.get(),
            disabled: disabled.get(),
            full_width,
            icon_left: icon_left.clone(),
            icon_right: icon_right.clone(),
            as_child,
            children: body.clone(),
        };
        let emitted = render(mode, host, request.into_state(), child_elements.clone())
            .inspect_err(|err| warn!("Button: {err}"))?;

        Ok(match emitted {
            Emitted::Native(element) => native_view(element, r#type, on_click),
            Emitted::Passthrough(child) => passthrough_view(child, on_click),
        })
    };

    view! { {render_pass} }
}

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

fn dom_attributes(attributes: &Attributes) -> Vec<AnyAttribute> {
    attributes
        .iter()
        .map(|(key, value)| custom_attribute(Cow::Owned(key.to_string()), value.to_string()).into_any_attr())
        .collect()
}

fn native_view(
    element: NativeElement<ViewFn>,
    r#type: &'static str,
    on_click: Option<Callback<web_sys::MouseEvent>>,
) -> AnyView {
    let NativeElement { attributes, disabled, content } = element;
    let attrs = dom_attributes(&attributes);

    let body = match content {
        EffectiveContent::Normal(Content { icon_left, body, icon_right }) => view! {
            {icon_left.map(|icon| icon.run())}
            {body.map(|body| body.run())}
            {icon_right.map(|icon| icon.run())}
        }
        .into_any(),
        EffectiveContent::Loading { text } => view! {
            <Spinner />
            {text.map(|text| view! { <span>{text}</span> })}
        }
        .into_any(),
    };

    view! {
        <button
            data-name="Button"
            type=r#type
            disabled=disabled
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
            {..attrs}
        >
            {body}
        </button>
    }
    .into_any()
}

fn passthrough_view(child: SlotChild, on_click: Option<Callback<web_sys::MouseEvent>>) -> AnyView {
    let ChildElement { tag, attributes, body } = child;
    let inert = attributes.get("aria-disabled") == Some("true");
    let attrs = dom_attributes(&attributes);
    let body = body.map(|body| body.run());

    let on_click = move |ev: web_sys::MouseEvent| {
        if inert {
            ev.prevent_default();
            return;
        }
        if let Some(on_click) = on_click.as_ref() {
            on_click.run(ev);
        }
    };

    match tag {
        ChildTag::A => view! { <a on:click={on_click} {..attrs}>{body}</a> }.into_any(),
        ChildTag::Span => view! { <span on:click={on_click} {..attrs}>{body}</span> }.into_any(),
        ChildTag::Div => view! { <div on:click={on_click} {..attrs}>{body}</div> }.into_any(),
        ChildTag::Label => view! { <label on:click={on_click} {..attrs}>{body}</label> }.into_any(),
    }
}
