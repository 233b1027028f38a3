use serde::{Deserialize, Serialize};

use super::{CatalogEntry, Control, Story};

/// Body variants used by the dialog stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DialogBodyArgs {
    Paragraphs { paragraphs: Vec<String> },
    ProfileForm,
    /// Long text in a height-limited scrolling area.
    Scrolling { paragraphs: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogArgs {
    pub trigger_text: String,
    pub title: String,
    pub description: Option<String>,
    pub body: DialogBodyArgs,
    pub confirm_text: String,
    pub cancel_text: String,
    pub default_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    pub modal: bool,
}

impl Default for DialogArgs {
    fn default() -> Self {
        Self {
            trigger_text: "Open Default Dialog".to_string(),
            title: "Default Dialog Title".to_string(),
            description: Some("This is a default description.".to_string()),
            body: DialogBodyArgs::Paragraphs {
                paragraphs: vec![
                    "Default main content for the dialog.".to_string(),
                    "You can replace this by providing the body arg in a specific story.".to_string(),
                ],
            },
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            default_open: false,
            open: None,
            modal: true,
        }
    }
}

const TERMS: [&str; 5] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt.",
    "Neque porro quisquam est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit, sed quia non numquam eius modi tempora incidunt ut labore et dolore magnam aliquam quaerat voluptatem.",
];

fn paragraphs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

pub(super) fn entry() -> CatalogEntry<DialogArgs> {
    let defaults = DialogArgs::default();

    let stories = vec![
        Story::derive("Default", &defaults, |_| {}),
        Story::derive("InitiallyOpen", &defaults, |a| {
            a.trigger_text = "Dialog (Was Initially Open)".to_string();
            a.title = "Initially Open Dialog".to_string();
            a.description = Some("This dialog was opened by default using the defaultOpen arg.".to_string());
            a.default_open = true;
        }),
        Story::derive("EditProfileExample", &defaults, |a| {
            a.trigger_text = "Edit Profile".to_string();
            a.title = "Edit Your Profile".to_string();
            a.description = Some("Make changes to your profile here. Click save when you're done.".to_string());
            a.body = DialogBodyArgs::ProfileForm;
            a.confirm_text = "Save Changes".to_string();
            a.cancel_text = "Discard".to_string();
        }),
        Story::derive("SimpleNotification", &defaults, |a| {
            a.trigger_text = "Show Notification".to_string();
            a.title = "Important Update".to_string();
            a.description = Some("Your subscription has been renewed successfully for another year.".to_string());
            a.body = DialogBodyArgs::Paragraphs {
                paragraphs: paragraphs(&[
                    "Thank you for being a valued customer. Your new billing cycle starts on the 1st of next month.",
                ]),
            };
            a.confirm_text = "Okay, Got It!".to_string();
            a.cancel_text = "Dismiss".to_string();
        }),
        Story::derive("WithoutDescription", &defaults, |a| {
            a.trigger_text = "Dialog (No Description)".to_string();
            a.title = "Action Required".to_string();
            a.description = None;
            a.body = DialogBodyArgs::Paragraphs {
                paragraphs: paragraphs(&["Please confirm this important action before proceeding."]),
            };
        }),
        Story::derive("LongContent", &defaults, |a| {
            a.trigger_text = "Dialog (Long Content)".to_string();
            a.title = "Terms and Conditions".to_string();
            a.description = Some("Please read the following terms and conditions carefully.".to_string());
            a.body = DialogBodyArgs::Scrolling { paragraphs: paragraphs(&TERMS) };
            a.confirm_text = "I Agree".to_string();
            a.cancel_text = "Decline".to_string();
        }),
    ];

    CatalogEntry {
        id: "dialog",
        title: "Components/KPDS/Dialog",
        display_name: "Dialog",
        layout: "centered",
        tags: vec!["autodocs"],
        controls: vec![
            Control::text("triggerText", "Text for the button that triggers the dialog.")
                .category("Story Args")
                .default_summary("Open Default Dialog"),
            Control::text("title", "Title displayed in the dialog header.")
                .category("Story Args")
                .default_summary("Default Dialog Title"),
            Control::text("description", "Description displayed below the title in the dialog header.")
                .category("Story Args"),
            Control::none("body", "Main content for the dialog body.").category("Story Args"),
            Control::text("confirmText", "Text for the confirm/submit button in the footer.")
                .category("Story Args")
                .default_summary("Confirm"),
            Control::text("cancelText", "Text for the cancel/close button in the footer.")
                .category("Story Args")
                .default_summary("Cancel"),
            Control::boolean("defaultOpen", "Whether the dialog is open by default.")
                .category("Dialog Props")
                .default_summary("false"),
            Control::boolean("open", "Controlled open state of the dialog.").category("Dialog Props"),
            Control::boolean("modal", "Is the dialog modal.")
                .category("Dialog Props")
                .default_summary("true"),
        ],
        default_args: defaults,
        stories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_override_only_what_they_name() {
        let entry = entry();
        let open = entry.story("InitiallyOpen").expect("story");
        assert!(open.args.default_open);
        assert_eq!(open.args.confirm_text, "Confirm");
        assert!(open.args.modal);

        let bare = entry.story("WithoutDescription").expect("story");
        assert!(bare.args.description.is_none());
        assert_eq!(bare.args.cancel_text, "Cancel");
    }

    #[test]
    fn test_long_content_scrolls() {
        let entry = entry();
        let long = entry.story("LongContent").expect("story");
        match &long.args.body {
            DialogBodyArgs::Scrolling { paragraphs } => assert_eq!(paragraphs.len(), 5),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_body_serializes_with_kind_tag() {
        let v = serde_json::to_value(DialogBodyArgs::ProfileForm).expect("serialize");
        assert_eq!(v["kind"], "profileForm");
    }
}
