use serde::{Deserialize, Serialize};

use super::{CatalogEntry, Control, IconToken, Story, StorySlot};
use crate::components::ui::{
    parse_option, ButtonColor, ButtonShape, ButtonSize, ButtonStyling, ConfigurationError, FontWeight,
    StyleRequest,
};

/// Link rendered as the single child of an `as_child` story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryLink {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonArgs {
    #[serde(flatten)]
    pub request: StyleRequest<StorySlot>,
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_links: Vec<StoryLink>,
}

impl ButtonArgs {
    /// Applies a control edit by field name and string token.
    pub fn set_control(&mut self, field: &str, value: &str) -> Result<(), ConfigurationError> {
        let req = &mut self.request;
        match field {
            "color" => req.color = parse_option("color", value)?,
            "styling" => req.styling = parse_option("styling", value)?,
            "size" => req.size = parse_option("size", value)?,
            "shape" => req.shape = parse_option("shape", value)?,
            "fontWeight" | "fontWeightCustom" => req.font_weight = parse_option("fontWeight", value)?,
            "isLoading" => req.is_loading = parse_option("isLoading", value)?,
            "disabled" => req.disabled = parse_option("disabled", value)?,
            "fullWidth" => req.full_width = parse_option("fullWidth", value)?,
            "asChild" => req.as_child = parse_option("asChild", value)?,
            "loadingText" => req.loading_text = non_empty(value),
            "children" => req.children = non_empty(value).map(StorySlot::Text),
            _ => {
                return Err(ConfigurationError::UnknownOption {
                    field: "control",
                    value: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub(super) fn entry() -> CatalogEntry<ButtonArgs> {
    let defaults = ButtonArgs {
        request: StyleRequest {
            children: Some("Button Text".into()),
            ..StyleRequest::default()
        },
        ..ButtonArgs::default()
    };

    let story = |name, edit: fn(&mut StyleRequest<StorySlot>)| Story::derive(name, &defaults, |args: &mut ButtonArgs| edit(&mut args.request));

    let stories = vec![
        story("PrimaryFill", |r| {
            r.children = Some("Primary Fill".into());
        }),
        story("PrimaryLightFill", |r| {
            r.styling = ButtonStyling::LightFill;
            r.children = Some("Primary Light Fill".into());
            r.icon_left = Some(IconToken::Zap.into());
        }),
        story("PrimaryStroke", |r| {
            r.styling = ButtonStyling::Stroke;
            r.children = Some("Primary Stroke".into());
            r.icon_right = Some(IconToken::Settings.into());
        }),
        story("PrimaryLightStroke", |r| {
            r.styling = ButtonStyling::LightStroke;
            r.children = Some("Primary Light Stroke".into());
        }),
        story("PrimaryText", |r| {
            r.styling = ButtonStyling::Text;
            r.children = Some("Primary Text".into());
        }),
        story("SecondaryFill", |r| {
            r.color = ButtonColor::Secondary;
            r.children = Some("Secondary Fill".into());
        }),
        story("SecondaryStroke", |r| {
            r.color = ButtonColor::Secondary;
            r.styling = ButtonStyling::Stroke;
            r.font_weight = FontWeight::Regular;
            r.children = Some("Secondary Stroke".into());
        }),
        story("SecondaryText", |r| {
            r.color = ButtonColor::Secondary;
            r.styling = ButtonStyling::Text;
            r.children = Some("Secondary Text".into());
        }),
        story("DangerFill", |r| {
            r.color = ButtonColor::Danger;
            r.children = Some("Danger Fill".into());
            r.icon_left = Some(IconToken::Trash2.into());
        }),
        story("DangerStroke", |r| {
            r.color = ButtonColor::Danger;
            r.styling = ButtonStyling::Stroke;
            r.children = Some("Danger Stroke".into());
        }),
        story("Small", |r| {
            r.size = ButtonSize::Sm;
            r.children = Some("Small Button".into());
        }),
        story("Large", |r| {
            r.size = ButtonSize::Lg;
            r.children = Some("Large Button".into());
        }),
        story("ExtraLarge", |r| {
            r.size = ButtonSize::Xl;
            r.children = Some("Extra Large Button".into());
        }),
        story("Capsule", |r| {
            r.shape = ButtonShape::Capsule;
            r.children = Some("Capsule Shape".into());
        }),
        story("Loading", |r| {
            r.is_loading = true;
            r.children = Some("Processing".into());
            r.loading_text = Some("Loading...".to_string());
        }),
        story("Disabled", |r| {
            r.color = ButtonColor::Secondary;
            r.disabled = true;
            r.children = Some("Disabled Button".into());
        }),
        Story::derive("IconOnlyPrimary", &defaults, |args| {
            args.request.styling = ButtonStyling::Stroke;
            args.request.size = ButtonSize::IconMd;
            args.request.children = None;
            args.request.icon_left = Some(IconToken::User.into());
            args.aria_label = Some("User Profile".to_string());
        }),
        Story::derive("IconOnlyWithTextLoading", &defaults, |args| {
            args.request.color = ButtonColor::Secondary;
            args.request.size = ButtonSize::IconLg;
            args.request.is_loading = true;
            args.request.loading_text = Some(String::new());
            args.request.children = Some(IconToken::CirclePlus.into());
            args.aria_label = Some("Add Item Loading".to_string());
        }),
        story("FullWidthButton", |r| {
            r.full_width = true;
            r.children = Some("Full Width Primary Button".into());
        }),
        story("RegularWeight", |r| {
            r.color = ButtonColor::Secondary;
            r.styling = ButtonStyling::Stroke;
            r.font_weight = FontWeight::Regular;
            r.children = Some("Regular Weight Stroke".into());
        }),
        story("DefaultProps", |r| {
            r.children = Some("Default Button".into());
        }),
        Story::derive("AsChildExample", &defaults, |args| {
            args.request.color = ButtonColor::Tertiary;
            args.request.as_child = true;
            args.child_links = vec![StoryLink {
                href: "#".to_string(),
                text: "Link Styled as Button".to_string(),
            }];
        }),
    ];

    CatalogEntry {
        id: "button",
        title: "Components/KPDS/Button",
        display_name: "Button",
        layout: "centered",
        tags: vec!["autodocs"],
        controls: vec![
            Control::select::<ButtonColor>("color", "Button color theme").default_summary("primary"),
            Control::select::<ButtonStyling>("styling", "Button visual style").default_summary("fill"),
            Control::select::<ButtonSize>("size", "Button size").default_summary("md"),
            Control::radio::<ButtonShape>("shape", "Button shape").default_summary("default"),
            Control::radio::<FontWeight>("fontWeight", "Button font weight").default_summary("semibold"),
            Control::boolean("isLoading", "Show loading state").default_summary("false"),
            Control::text("loadingText", "Text to display when isLoading is true (not for icon-only buttons)"),
            Control::boolean("disabled", "Disable the button").default_summary("false"),
            Control::boolean("fullWidth", "Make button take full width of its container").default_summary("false"),
            Control::object("iconLeft", "Icon to display on the left"),
            Control::object("iconRight", "Icon to display on the right"),
            Control::text("children", "Button content (text or other elements)"),
            Control::boolean("asChild", "Render as a child component (e.g., for linking)").default_summary("false"),
        ],
        default_args: defaults,
        stories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ui::{EffectiveContent, ButtonSize};

    #[test]
    fn test_entry_defaults_match_component_defaults() {
        let entry = entry();
        let r = &entry.default_args.request;
        assert_eq!(r.color, ButtonColor::Primary);
        assert_eq!(r.styling, ButtonStyling::Fill);
        assert_eq!(r.size, ButtonSize::Md);
        assert_eq!(r.shape, ButtonShape::Default);
        assert_eq!(r.font_weight, FontWeight::Semibold);
        assert!(!r.is_loading && !r.disabled && !r.full_width && !r.as_child);
        assert_eq!(r.children, Some(StorySlot::from("Button Text")));
    }

    #[test]
    fn test_controls_enumerate_the_full_domain() {
        let entry = entry();
        let size = entry.control("size").expect("size control");
        assert_eq!(size.options, ["sm", "md", "lg", "xl", "icon-sm", "icon-md", "icon-lg", "icon-xl"]);
        let styling = entry.control("styling").expect("styling control");
        assert_eq!(styling.options, ["fill", "lightFill", "stroke", "lightStroke", "text"]);
        assert_eq!(entry.control("color").map(|c| c.options.len()), Some(4));
        assert_eq!(entry.control("shape").map(|c| c.options.len()), Some(2));
        assert_eq!(entry.control("fontWeight").map(|c| c.options.len()), Some(2));
    }

    #[test]
    fn test_stories_inherit_defaults() {
        let entry = entry();
        assert_eq!(entry.stories.len(), 22);
        let capsule = entry.story("Capsule").expect("capsule story");
        assert_eq!(capsule.args.request.shape, ButtonShape::Capsule);
        assert_eq!(capsule.args.request.color, ButtonColor::Primary);
        assert_eq!(capsule.args.request.resolve().rounding, "rounded-full");
    }

    #[test]
    fn test_icon_loading_story_shows_spinner_only() {
        let entry = entry();
        let story = entry.story("IconOnlyWithTextLoading").expect("story");
        let state = story.args.request.clone().into_state();
        assert!(state.disabled);
        assert_eq!(state.content, EffectiveContent::Loading { text: None });
    }

    #[test]
    fn test_loading_story_replaces_children() {
        let entry = entry();
        let story = entry.story("Loading").expect("story");
        let state = story.args.request.clone().into_state();
        assert_eq!(state.content, EffectiveContent::Loading { text: Some("Loading...".to_string()) });
    }

    #[test]
    fn test_set_control_accepts_tokens() {
        let mut args = entry().default_args;
        args.set_control("size", "icon-sm").expect("size");
        args.set_control("fontWeightCustom", "regular").expect("legacy weight name");
        args.set_control("isLoading", "true").expect("bool");
        args.set_control("loadingText", "").expect("text");
        assert_eq!(args.request.size, ButtonSize::IconSm);
        assert_eq!(args.request.font_weight, FontWeight::Regular);
        assert!(args.request.is_loading);
        assert_eq!(args.request.loading_text, None);
    }

    #[test]
    fn test_set_control_rejects_unknown_input() {
        let mut args = entry().default_args;
        assert_eq!(
            args.set_control("color", "purple"),
            Err(ConfigurationError::UnknownOption { field: "color", value: "purple".to_string() })
        );
        assert_eq!(
            args.set_control("variant", "ghost"),
            Err(ConfigurationError::UnknownOption { field: "control", value: "variant".to_string() })
        );
        assert_eq!(args.request.color, ButtonColor::Primary);
    }

    #[test]
    fn test_button_args_round_trip_aria_label() {
        let entry = entry();
        let story = entry.story("IconOnlyPrimary").expect("story");
        let v = serde_json::to_value(&story.args).expect("serialize");
        assert_eq!(v["aria-label"], "User Profile");
        assert_eq!(v["size"], "icon-md");
        assert_eq!(v["iconLeft"]["icon"], "user");
        assert!(v.get("children").is_none());
    }
}
