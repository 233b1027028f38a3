use icons::{CirclePlus, Info, Settings, Terminal, Trash2, TriangleAlert, User, Zap};
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::catalog::{
    AlertArgs, ButtonArgs, Control, ControlKind, DialogArgs, DialogBodyArgs, IconToken, StorySlot,
};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, AlertVariant, Button, ButtonColor, ButtonStyling, ChildElement, ChildTag,
    Dialog, DialogBody, DialogClose, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle,
    DialogTrigger, SlotChild,
};

pub(crate) fn icon_view(icon: IconToken) -> AnyView {
    match icon {
        IconToken::Zap => view! { <Zap /> }.into_any(),
        IconToken::Settings => view! { <Settings /> }.into_any(),
        IconToken::User => view! { <User /> }.into_any(),
        IconToken::Trash2 => view! { <Trash2 /> }.into_any(),
        IconToken::CirclePlus => view! { <CirclePlus /> }.into_any(),
        IconToken::Terminal => view! { <Terminal /> }.into_any(),
        IconToken::Info => view! { <Info /> }.into_any(),
        IconToken::TriangleAlert => view! { <TriangleAlert /> }.into_any(),
    }
}

fn slot_view(slot: StorySlot) -> ViewFn {
    match slot {
        StorySlot::Text(text) => ViewFn::from(move || text.clone()),
        StorySlot::Icon { icon } => ViewFn::from(move || icon_view(icon)),
    }
}

/* ========================================================== */
/*                     ✨ STORIES ✨                          */
/* ========================================================== */

/// Shows a story's render error in place instead of an empty frame.
#[component]
pub fn StoryBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <Alert variant=AlertVariant::Destructive>
                    <AlertTitle>"Story failed to render"</AlertTitle>
                    <AlertDescription>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| err.to_string())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }}
                    </AlertDescription>
                </Alert>
            }
        }>{children()}</ErrorBoundary>
    }
}

#[component]
pub fn ButtonStory(args: ButtonArgs) -> impl IntoView {
    let ButtonArgs { request, aria_label, child_links } = args;

    let child_elements: Vec<SlotChild> = child_links
        .into_iter()
        .map(|link| {
            let text = link.text;
            ChildElement::new(ChildTag::A)
                .attr("href", link.href)
                .body(ViewFn::from(move || text.clone()))
        })
        .collect();
    let body = request.children.map(slot_view);

    view! {
        <Button
            color=request.color
            styling=request.styling
            size=request.size
            shape=request.shape
            font_weight=request.font_weight
            is_loading=request.is_loading
            loading_text=request.loading_text
            disabled=request.disabled
            full_width=request.full_width
            icon_left=request.icon_left.map(slot_view)
            icon_right=request.icon_right.map(slot_view)
            as_child=request.as_child
            child_elements=child_elements
            aria_label=aria_label
        >
            {body.clone().map(|body| body.run())}
        </Button>
    }
}

#[component]
pub fn AlertStory(args: AlertArgs) -> impl IntoView {
    let AlertArgs { variant, icon, title, description, text } = args;

    view! {
        <Alert variant=variant class="w-[420px] max-w-full">
            {icon.map(icon_view)}
            {title.map(|title| view! { <AlertTitle>{title}</AlertTitle> })}
            {description.map(|description| view! { <AlertDescription>{description}</AlertDescription> })}
            {text}
        </Alert>
    }
}

#[component]
pub fn DialogStory(args: DialogArgs) -> impl IntoView {
    let DialogArgs {
        trigger_text,
        title,
        description,
        body,
        confirm_text,
        cancel_text,
        default_open,
        open,
        modal,
    } = args;

    // Controlled stories keep their own state and follow every change request.
    let controlled = open.map(RwSignal::new);
    let on_open_change = Callback::new(move |value: bool| {
        log!("dialog story: open -> {value}");
        if let Some(controlled) = controlled {
            controlled.set(value);
        }
    });

    let title = StoredValue::new(title);
    let description = StoredValue::new(description);
    let body = StoredValue::new(body);
    let confirm_text = StoredValue::new(confirm_text);
    let cancel_text = StoredValue::new(cancel_text);

    view! {
        <Dialog
            open=Signal::derive(move || controlled.map(|open| open.get()))
            default_open=default_open
            modal=modal
            on_open_change=on_open_change
        >
            <DialogTrigger color=ButtonColor::Secondary styling=ButtonStyling::Stroke>
                {trigger_text.clone()}
            </DialogTrigger>
            <DialogContent class="sm:max-w-[425px]">
                <DialogHeader>
                    <DialogTitle>{title.get_value()}</DialogTitle>
                    {description
                        .get_value()
                        .map(|description| view! { <DialogDescription>{description}</DialogDescription> })}
                </DialogHeader>
                {dialog_body(body.get_value())}
                <DialogFooter>
                    <DialogClose>
                        <Button r#type="button" color=ButtonColor::Secondary styling=ButtonStyling::LightStroke>
                            {cancel_text.get_value()}
                        </Button>
                    </DialogClose>
                    <Button r#type="submit" color=ButtonColor::Primary styling=ButtonStyling::Fill>
                        {confirm_text.get_value()}
                    </Button>
                </DialogFooter>
            </DialogContent>
        </Dialog>
    }
}

fn dialog_body(body: DialogBodyArgs) -> AnyView {
    match body {
        DialogBodyArgs::Paragraphs { paragraphs } => view! {
            <DialogBody class="gap-2 py-4 text-sm text-gray-700">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </DialogBody>
        }
        .into_any(),
        DialogBodyArgs::Scrolling { paragraphs } => view! {
            <div class="max-h-64 overflow-y-auto pr-2 space-y-2 text-sm">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        }
        .into_any(),
        DialogBodyArgs::ProfileForm => view! {
            <DialogBody class="py-4">
                <div class="grid grid-cols-4 items-center gap-4">
                    <label r#for="profile-name" class="text-right">"Full Name"</label>
                    <input id="profile-name" placeholder="Enter your full name" class="col-span-3 rounded-md border border-gray-300 p-2" />
                </div>
                <div class="grid grid-cols-4 items-center gap-4">
                    <label r#for="profile-email" class="text-right">"Email Address"</label>
                    <input id="profile-email" type="email" placeholder="your@email.com" class="col-span-3 rounded-md border border-gray-300 p-2" />
                </div>
                <div class="grid grid-cols-4 items-center gap-4">
                    <label r#for="profile-bio" class="text-right">"Bio"</label>
                    <textarea id="profile-bio" placeholder="Tell us about yourself..." class="col-span-3 h-24 rounded-md border border-gray-300 p-2" />
                </div>
            </DialogBody>
        }
        .into_any(),
    }
}

/* ========================================================== */
/*                     ✨ DOCS ✨                             */
/* ========================================================== */

#[component]
pub fn ControlsTable(controls: Vec<Control>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm">
            <thead class="border-b text-xs uppercase text-gray-500">
                <tr>
                    <th class="py-2 pr-4">"Name"</th>
                    <th class="py-2 pr-4">"Description"</th>
                    <th class="py-2 pr-4">"Options"</th>
                    <th class="py-2">"Default"</th>
                </tr>
            </thead>
            <tbody>
                {controls
                    .into_iter()
                    .map(|control| {
                        view! {
                            <tr class="border-b last:border-0">
                                <td class="py-2 pr-4 font-mono">{control.field}</td>
                                <td class="py-2 pr-4">{control.description}</td>
                                <td class="py-2 pr-4 font-mono text-xs">{control.options.join(" | ")}</td>
                                <td class="py-2 font-mono text-xs">{control.default_summary.unwrap_or("-")}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Live button whose args are edited through the catalog controls.
#[component]
pub fn ButtonPlayground(controls: Vec<Control>, defaults: ButtonArgs) -> impl IntoView {
    let initial = serde_json::to_value(&defaults).unwrap_or_default();
    let args = RwSignal::new(defaults);

    let edit = move |field: &'static str, value: String| {
        args.update(|args| {
            if let Err(err) = args.set_control(field, &value) {
                warn!("playground: {err}");
            }
        });
    };

    let inputs = controls
        .into_iter()
        .filter_map(|control| {
            let field = control.field;
            let current = &initial[field];
            let input = match control.kind {
                ControlKind::Select | ControlKind::Radio => {
                    let selected = current.as_str().map(str::to_string);
                    view! {
                        <select
                            class="rounded-md border border-gray-300 px-2 py-1"
                            on:change=move |ev| edit(field, event_target_value(&ev))
                        >
                            {control
                                .options
                                .into_iter()
                                .map(|option| {
                                    let is_selected = selected.as_deref() == Some(option.as_str());
                                    let label = option.clone();
                                    view! { <option value=option selected=is_selected>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                    }
                    .into_any()
                }
                ControlKind::Boolean => view! {
                    <input
                        type="checkbox"
                        checked=current.as_bool().unwrap_or(false)
                        on:change=move |ev| edit(field, event_target_checked(&ev).to_string())
                    />
                }
                .into_any(),
                ControlKind::Text => view! {
                    <input
                        type="text"
                        class="rounded-md border border-gray-300 px-2 py-1"
                        value=current.as_str().unwrap_or_default().to_string()
                        on:input=move |ev| edit(field, event_target_value(&ev))
                    />
                }
                .into_any(),
                ControlKind::Object | ControlKind::None => return None,
            };
            Some(view! {
                <label class="flex items-center justify-between gap-4 text-sm">
                    <span class="font-mono">{field}</span>
                    {input}
                </label>
            })
        })
        .collect_view();

    view! {
        <div class="grid gap-6 md:grid-cols-[1fr_280px]">
            <div class="flex min-h-40 items-center justify-center rounded-lg border border-dashed p-10">
                {move || {
                    view! {
                        <StoryBoundary>
                            <ButtonStory args=args.get() />
                        </StoryBoundary>
                    }
                }}
            </div>
            <div class="flex flex-col gap-2">{inputs}</div>
        </div>
    }
}
