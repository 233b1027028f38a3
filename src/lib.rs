mod app;
pub mod catalog;
pub mod components;
pub mod config;
mod pages;

pub use app::App;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::components::ui::{
        Button, ButtonColor, ButtonSize, ButtonStyling, ChildElement, ChildTag, Dialog, DialogClose,
        DialogContent, DialogTitle, DialogTrigger, SlotChild,
    };
    use crate::catalog::Catalog;
    use crate::pages::{ButtonPlayground, DialogStory, StoryBoundary};
    use leptos::mount::mount_to;
    use leptos::task::Executor;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let doc = document();
        let el = doc
            .create_element("div")
            .expect("should create container")
            .unchecked_into::<HtmlElement>();
        doc.body().expect("document should have a body").append_child(&el).expect("should append container");
        el
    }

    fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
        root.query_selector(selector).expect("selector should be valid")
    }

    fn click(root: &HtmlElement, selector: &str) {
        find(root, selector)
            .unwrap_or_else(|| panic!("{selector} should render"))
            .unchecked_into::<HtmlElement>()
            .click();
    }

    fn simple_dialog(default_open: bool) -> impl IntoView {
        view! {
            <Dialog default_open=default_open>
                <DialogTrigger>"Open"</DialogTrigger>
                <DialogContent>
                    <DialogTitle>"Hello"</DialogTitle>
                    <DialogClose>
                        <Button class="cancel">"Cancel"</Button>
                    </DialogClose>
                </DialogContent>
            </Dialog>
        }
    }

    async fn settle() {
        Executor::tick().await;
        Executor::tick().await;
    }

    #[wasm_bindgen_test]
    fn test_button_renders_resolved_classes() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <Button color=ButtonColor::Primary styling=ButtonStyling::Fill class="mt-2">
                    "Save"
                </Button>
            }
        });

        let button = find(&root, "button[data-name='Button']").expect("button should render");
        let class = button.get_attribute("class").unwrap_or_default();
        assert!(class.contains("mt-2"));
        assert_eq!(button.get_attribute("data-color").as_deref(), Some("primary"));
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Save"));
    }

    #[wasm_bindgen_test]
    fn test_loading_button_shows_spinner_and_text() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <Button is_loading=true loading_text="Saving...".to_string()>
                    "Save"
                </Button>
            }
        });

        let button = find(&root, "button").expect("button should render");
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("true"));
        assert!(find(&root, "[data-name='Spinner']").is_some());
        assert_eq!(button.text_content().as_deref(), Some("Saving..."));
    }

    #[wasm_bindgen_test]
    fn test_loading_icon_button_has_no_text() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <Button size=ButtonSize::IconMd is_loading=true loading_text="Saving...".to_string()>
                    "+"
                </Button>
            }
        });

        let button = find(&root, "button").expect("button should render");
        assert!(find(&root, "[data-name='Spinner']").is_some());
        assert_eq!(button.text_content().unwrap_or_default(), "");
    }

    #[wasm_bindgen_test]
    fn test_as_child_styles_the_link() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            let link: SlotChild = ChildElement::new(ChildTag::A)
                .attr("href", "/docs")
                .attr("class", "underline")
                .body(ViewFn::from(|| "Docs"));
            view! {
                <Button as_child=true child_elements=vec![link] disabled=true styling=ButtonStyling::Stroke />
            }
        });

        assert!(find(&root, "button").is_none());
        let link = find(&root, "a").expect("link should render");
        let class = link.get_attribute("class").unwrap_or_default();
        assert!(class.ends_with("underline"));
        assert_eq!(link.get_attribute("href").as_deref(), Some("/docs"));
        assert_eq!(link.get_attribute("aria-disabled").as_deref(), Some("true"));
        assert_eq!(link.get_attribute("tabindex").as_deref(), Some("-1"));
        assert_eq!(link.text_content().as_deref(), Some("Docs"));
    }

    #[wasm_bindgen_test]
    fn test_as_child_without_child_reports_error() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <ErrorBoundary fallback=|_| view! { <p class="fallback">"broken"</p> }>
                    <Button as_child=true />
                </ErrorBoundary>
            }
        });

        assert!(find(&root, "p.fallback").is_some());
        assert!(find(&root, "button").is_none());
    }

    #[wasm_bindgen_test]
    fn test_story_boundary_shows_render_error() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <StoryBoundary>
                    <Button as_child=true />
                </StoryBoundary>
            }
        });

        let alert = find(&root, "[role='alert']").expect("error alert should render");
        assert!(alert.text_content().unwrap_or_default().contains("exactly one child"));
    }

    #[wasm_bindgen_test]
    fn test_playground_lists_control_options() {
        let entry = Catalog::new().button;
        let root = container();
        let _handle = mount_to(root.clone(), move || {
            view! { <ButtonPlayground controls=entry.controls.clone() defaults=entry.default_args.clone() /> }
        });

        let option = find(&root, "option[value='primary']").expect("color option should render");
        assert_eq!(option.text_content().as_deref(), Some("primary"));
        assert!(find(&root, "option[value='icon-md']").is_some());
        assert!(find(&root, "button[data-name='Button']").is_some());
    }

    #[wasm_bindgen_test]
    fn test_profile_story_renders_form_body() {
        let mut args = Catalog::new().dialog.story("EditProfileExample").expect("story").args.clone();
        args.default_open = true;
        let root = container();
        let _handle = mount_to(root.clone(), move || view! { <DialogStory args=args /> });

        let dialog = find(&root, "[role='dialog']").expect("dialog should start open");
        assert!(dialog.query_selector("#profile-name").expect("valid selector").is_some());
        assert!(dialog.query_selector("textarea#profile-bio").expect("valid selector").is_some());
    }

    #[wasm_bindgen_test]
    fn test_as_child_keeps_every_child_attribute() {
        let root = container();
        let _handle = mount_to(root.clone(), || {
            let link: SlotChild = ChildElement::new(ChildTag::A)
                .attr("href", "/docs")
                .attr("title", "Read the docs")
                .attr("data-testid", "docs-link")
                .attr("style", "margin: 0")
                .attr("download", "guide.pdf")
                .body(ViewFn::from(|| "Docs"));
            view! { <Button as_child=true child_elements=vec![link] aria_label="Docs button".to_string() /> }
        });

        let link = find(&root, "a").expect("link should render");
        assert_eq!(link.get_attribute("title").as_deref(), Some("Read the docs"));
        assert_eq!(link.get_attribute("data-testid").as_deref(), Some("docs-link"));
        assert_eq!(link.get_attribute("style").as_deref(), Some("margin: 0"));
        assert_eq!(link.get_attribute("download").as_deref(), Some("guide.pdf"));
        assert_eq!(link.get_attribute("aria-label").as_deref(), Some("Docs button"));
        assert_eq!(link.get_attribute("data-color").as_deref(), Some("primary"));
    }

    #[wasm_bindgen_test]
    async fn test_loading_signal_starts_a_fresh_render_pass() {
        let loading = RwSignal::new(false);
        let root = container();
        let _handle = mount_to(root.clone(), move || {
            view! { <Button is_loading=loading>"Save"</Button> }
        });

        let button = find(&root, "button").expect("button should render");
        assert!(!button.has_attribute("disabled"));
        assert!(find(&root, "[data-name='Spinner']").is_none());

        loading.set(true);
        settle().await;
        let button = find(&root, "button").expect("button should render");
        assert!(button.has_attribute("disabled"));
        assert!(find(&root, "[data-name='Spinner']").is_some());
        assert_eq!(button.text_content().unwrap_or_default(), "");

        loading.set(false);
        settle().await;
        let button = find(&root, "button").expect("button should render");
        assert!(!button.has_attribute("disabled"));
        assert!(find(&root, "[data-name='Spinner']").is_none());
        assert_eq!(button.text_content().as_deref(), Some("Save"));
    }

    #[wasm_bindgen_test]
    async fn test_dialog_opens_from_trigger() {
        let root = container();
        let _handle = mount_to(root.clone(), || simple_dialog(false));

        let trigger = find(&root, "button[aria-haspopup='dialog']").expect("trigger should render");
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(find(&root, "[role='dialog']").is_none());

        click(&root, "button[aria-haspopup='dialog']");
        settle().await;

        let dialog = find(&root, "[role='dialog']").expect("dialog should open");
        assert_eq!(dialog.get_attribute("aria-modal").as_deref(), Some("true"));
        let trigger = find(&root, "button[aria-haspopup='dialog']").expect("trigger should render");
        assert_eq!(trigger.get_attribute("aria-controls"), dialog.get_attribute("id"));
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));

        click(&root, "button[aria-label='Close dialog']");
        settle().await;
        assert!(find(&root, "[role='dialog']").is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dialog_closes_on_escape() {
        let root = container();
        let _handle = mount_to(root.clone(), || simple_dialog(true));
        assert!(find(&root, "[role='dialog']").is_some());

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("should build keydown");
        window().dispatch_event(&event).expect("should dispatch keydown");
        settle().await;

        assert!(find(&root, "[role='dialog']").is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dialog_backdrop_click_closes_and_unlocks_scroll() {
        let root = container();
        let _handle = mount_to(root.clone(), || simple_dialog(true));
        settle().await;

        let body = document().body().expect("document should have a body");
        assert_eq!(body.style().get_property_value("overflow").unwrap_or_default(), "hidden");

        click(&root, "[data-name='DialogBackdrop']");
        settle().await;

        assert!(find(&root, "[role='dialog']").is_none());
        assert_eq!(body.style().get_property_value("overflow").unwrap_or_default(), "");
    }

    #[wasm_bindgen_test]
    async fn test_dialog_close_slot_dismisses() {
        let root = container();
        let _handle = mount_to(root.clone(), || simple_dialog(true));

        click(&root, "button.cancel");
        settle().await;

        assert!(find(&root, "[role='dialog']").is_none());
    }

    #[wasm_bindgen_test]
    async fn test_controlled_dialog_only_reports_requests() {
        let requested = RwSignal::new(None::<bool>);
        let root = container();
        let _handle = mount_to(root.clone(), move || {
            view! {
                <Dialog open=false on_open_change=Callback::new(move |value: bool| requested.set(Some(value)))>
                    <DialogTrigger>"Open"</DialogTrigger>
                    <DialogContent>
                        <DialogTitle>"Hello"</DialogTitle>
                    </DialogContent>
                </Dialog>
            }
        });

        click(&root, "button[aria-haspopup='dialog']");
        settle().await;

        assert_eq!(requested.get_untracked(), Some(true));
        assert!(find(&root, "[role='dialog']").is_none());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
