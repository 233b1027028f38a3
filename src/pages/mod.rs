mod stories;

pub use stories::*;

use icons::{Info, Settings, Terminal};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::{Catalog, CatalogEntry, Story};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, AlertVariant, Button, ButtonColor, ButtonSize, ButtonStyling, Dialog,
    DialogClose, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle, DialogTrigger,
};
use crate::config::ShowcaseConfig;

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-6 rounded-lg border p-6 shadow-md">
            <h2 class="mb-8 border-b pb-1 text-xl font-semibold text-gray-800">{title}</h2>
            {children()}
        </section>
    }
}

/* ========================================================== */
/*                     ✨ DEMO ✨                             */
/* ========================================================== */

#[component]
pub fn DemoPage() -> impl IntoView {
    let saving: RwSignal<bool> = RwSignal::new(false);

    view! {
        <div class="space-y-12 p-10">
            <h1 class="mb-4 text-center text-3xl font-bold text-gray-950">"KPDS Component Test Page"</h1>

            <Section title="Buttons">
                <div class="flex flex-wrap items-center gap-4">
                    <Button color=ButtonColor::Primary styling=ButtonStyling::Fill size=ButtonSize::Md>
                        "Primary Fill Button"
                    </Button>
                    <Button
                        color=ButtonColor::Secondary
                        styling=ButtonStyling::Stroke
                        size=ButtonSize::Md
                        icon_left=ViewFn::from(|| view! { <Settings /> })
                    >
                        "Secondary Stroke Button"
                    </Button>
                    <Button
                        color=ButtonColor::Tertiary
                        styling=ButtonStyling::LightFill
                        is_loading=saving
                        loading_text="Saving...".to_string()
                        on_click=Callback::new(move |_| saving.set(true))
                    >
                        "Save"
                    </Button>
                    <Button
                        color=ButtonColor::Secondary
                        styling=ButtonStyling::Text
                        disabled=Signal::derive(move || !saving.get())
                        on_click=Callback::new(move |_| saving.set(false))
                    >
                        "Reset"
                    </Button>
                </div>
            </Section>

            <Section title="Alerts">
                <div class="space-y-3">
                    <Alert>
                        <Terminal />
                        <AlertTitle>"Branded Alert (Default)"</AlertTitle>
                        <AlertDescription>
                            "This is the default alert, styled with your brand's primary (purple) color scheme."
                        </AlertDescription>
                    </Alert>
                    <Alert variant=AlertVariant::Destructive>
                        <Info />
                        <AlertTitle>"Destructive Alert"</AlertTitle>
                        <AlertDescription>"This alert is for critical messages or error feedback."</AlertDescription>
                    </Alert>
                </div>
            </Section>

            <Section title="Dialog">
                <div class="flex justify-center">
                    <Dialog>
                        <DialogTrigger color=ButtonColor::Primary styling=ButtonStyling::LightFill>
                            "Open Simple Dialog"
                        </DialogTrigger>
                        <DialogContent class="sm:max-w-md">
                            <DialogHeader>
                                <DialogTitle>"Simple Dialog Title"</DialogTitle>
                                <DialogDescription>
                                    "This is a basic description for the dialog content. You can add more details here."
                                </DialogDescription>
                            </DialogHeader>
                            <div class="py-4">
                                <p class="text-sm text-gray-700">
                                    "This is the main body of the dialog. You can place forms, text, or other components here."
                                </p>
                            </div>
                            <DialogFooter>
                                <DialogClose>
                                    <Button r#type="button" color=ButtonColor::Secondary styling=ButtonStyling::Stroke>
                                        "Cancel"
                                    </Button>
                                </DialogClose>
                                <Button r#type="button" color=ButtonColor::Primary styling=ButtonStyling::Fill>
                                    "Confirm Action"
                                </Button>
                            </DialogFooter>
                        </DialogContent>
                    </Dialog>
                </div>
            </Section>
        </div>
    }
}

/* ========================================================== */
/*                     ✨ CATALOG ✨                          */
/* ========================================================== */

fn catalog_enabled() -> bool {
    use_context::<ShowcaseConfig>()
        .map(|config| config.catalog_enabled)
        .unwrap_or(true)
}

#[component]
fn CatalogDisabled() -> impl IntoView {
    view! {
        <div class="px-4 py-8 text-xs text-gray-500">"The component catalog is disabled for this deployment."</div>
    }
}

#[component]
pub fn CatalogIndexPage() -> impl IntoView {
    if !catalog_enabled() {
        return view! { <CatalogDisabled /> }.into_any();
    }

    let catalog = Catalog::new();
    let summaries = catalog.summaries();
    let export = catalog.to_json().unwrap_or_else(|err| {
        warn!("catalog export failed: {err}");
        String::new()
    });

    view! {
        <div class="mx-auto w-full max-w-[1080px] space-y-6 px-4 py-8">
            <h1 class="text-xl font-semibold">"Component catalog"</h1>
            <ul class="grid gap-4 sm:grid-cols-3">
                {summaries
                    .into_iter()
                    .map(|summary| {
                        view! {
                            <li class="rounded-lg border px-4 py-3">
                                <a class="font-medium text-violet-700 underline-offset-4 hover:underline" href=format!("/catalog/{}", summary.id)>
                                    {summary.display_name}
                                </a>
                                <div class="text-xs text-gray-500">{summary.title}</div>
                                <div class="text-xs text-gray-500">{format!("{} stories", summary.stories)}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <details data-name="CatalogExport" class="rounded-lg border px-4 py-3 text-sm">
                <summary class="cursor-pointer font-medium">"JSON export"</summary>
                <pre class="mt-3 max-h-96 overflow-auto text-xs">{export}</pre>
            </details>
        </div>
    }
    .into_any()
}

#[component]
pub fn CatalogEntryPage() -> impl IntoView {
    let params = use_params_map();
    let entry_id = move || params.read().get("entry").unwrap_or_default();

    move || {
        if !catalog_enabled() {
            return view! { <CatalogDisabled /> }.into_any();
        }

        let catalog = Catalog::new();
        match entry_id().as_str() {
            "button" => {
                let entry = catalog.button;
                let playground = view! {
                    <ButtonPlayground controls=entry.controls.clone() defaults=entry.default_args.clone() />
                };
                entry_view(entry, Some(playground.into_any()), |args| view! { <ButtonStory args=args /> }.into_any())
            }
            "alert" => entry_view(catalog.alert, None, |args| view! { <AlertStory args=args /> }.into_any()),
            "dialog" => entry_view(catalog.dialog, None, |args| view! { <DialogStory args=args /> }.into_any()),
            other => view! {
                <div class="px-4 py-8 text-xs text-gray-500">{format!("No catalog entry named `{other}`.")}</div>
            }
            .into_any(),
        }
    }
}

fn entry_view<A>(entry: CatalogEntry<A>, playground: Option<AnyView>, render: fn(A) -> AnyView) -> AnyView
where
    A: Send + Sync + 'static,
{
    let CatalogEntry { title, display_name, controls, stories, .. } = entry;

    view! {
        <div class="mx-auto w-full max-w-[1080px] space-y-8 px-4 py-8">
            <div class="space-y-1">
                <p class="text-xs text-gray-500">{title}</p>
                <h1 class="text-2xl font-semibold">{display_name}</h1>
            </div>

            {playground}

            <ControlsTable controls=controls />

            <div class="grid gap-6 sm:grid-cols-2">
                {stories
                    .into_iter()
                    .map(|Story { name, args }| {
                        view! {
                            <div class="space-y-3 rounded-lg border p-4">
                                <h3 class="font-mono text-xs text-gray-500">{name}</h3>
                                <div class="flex min-h-24 items-center justify-center">
                                    <StoryBoundary>{render(args)}</StoryBoundary>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
