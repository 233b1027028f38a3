use serde::{Deserialize, Serialize};

use super::{CatalogEntry, Control, IconToken, Story};
use crate::components::ui::AlertVariant;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertArgs {
    pub variant: AlertVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Plain text content, used instead of the title/description slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

pub(super) fn entry() -> CatalogEntry<AlertArgs> {
    let defaults = AlertArgs::default();

    let stories = vec![
        Story::derive("DefaultBranded", &defaults, |a| {
            a.icon = Some(IconToken::Terminal);
            a.title = Some("Branded Alert!".to_string());
            a.description = Some("This is the default alert with your custom purple brand colors.".to_string());
        }),
        Story::derive("Destructive", &defaults, |a| {
            a.variant = AlertVariant::Destructive;
            a.icon = Some(IconToken::TriangleAlert);
            a.title = Some("Critical Error!".to_string());
            a.description = Some("This alert is for important, destructive action feedback.".to_string());
        }),
        Story::derive("WithTitleOnly", &defaults, |a| {
            a.icon = Some(IconToken::Info);
            a.title = Some("Informational Title Only".to_string());
        }),
        Story::derive("WithDescriptionOnly", &defaults, |a| {
            a.icon = Some(IconToken::Info);
            a.description = Some("This alert contains only a description, providing a concise message.".to_string());
        }),
        Story::derive("SimpleTextContent", &defaults, |a| {
            a.text = Some(
                "This is a simple text content directly inside the alert, without specific Title or Description components."
                    .to_string(),
            );
        }),
    ];

    CatalogEntry {
        id: "alert",
        title: "Components/KPDS/Alert",
        display_name: "Alert",
        layout: "centered",
        tags: vec!["autodocs"],
        controls: vec![
            Control::select::<AlertVariant>("variant", "Alert variant").default_summary("default"),
            Control::object("children", "Content of the alert, typically AlertTitle and AlertDescription"),
        ],
        default_args: defaults,
        stories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_entry() {
        let entry = entry();
        assert_eq!(entry.stories.len(), 5);
        assert_eq!(entry.control("variant").map(|c| c.options.clone()), Some(vec!["default".to_string(), "destructive".to_string()]));

        let destructive = entry.story("Destructive").expect("story");
        assert_eq!(destructive.args.variant, AlertVariant::Destructive);

        let plain = entry.story("SimpleTextContent").expect("story");
        assert!(plain.args.title.is_none() && plain.args.text.is_some());
    }
}
