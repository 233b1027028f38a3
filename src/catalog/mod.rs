//! Declarative catalog records for each component: control tables and named
//! stories. Pages render from these, and `Catalog::to_json` exports them for
//! external cataloging tools.

mod alert;
mod button;
mod dialog;

pub use alert::AlertArgs;
pub use button::{ButtonArgs, StoryLink};
pub use dialog::{DialogArgs, DialogBodyArgs};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/* ========================================================== */
/*                       🧬 STRUCT 🧬                         */
/* ========================================================== */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    Select,
    Radio,
    Boolean,
    Text,
    Object,
    /// Documented but not editable.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub field: &'static str,
    pub kind: ControlKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_summary: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
}

impl Control {
    fn new(field: &'static str, kind: ControlKind, description: &'static str) -> Self {
        Self {
            field,
            kind,
            options: Vec::new(),
            description,
            default_summary: None,
            category: None,
        }
    }

    /// Select control whose options are exactly the enum's tokens.
    pub fn select<E: IntoEnumIterator + AsRef<str>>(field: &'static str, description: &'static str) -> Self {
        Self {
            options: enum_options::<E>(),
            ..Self::new(field, ControlKind::Select, description)
        }
    }

    pub fn radio<E: IntoEnumIterator + AsRef<str>>(field: &'static str, description: &'static str) -> Self {
        Self {
            options: enum_options::<E>(),
            ..Self::new(field, ControlKind::Radio, description)
        }
    }

    pub fn boolean(field: &'static str, description: &'static str) -> Self {
        Self::new(field, ControlKind::Boolean, description)
    }

    pub fn text(field: &'static str, description: &'static str) -> Self {
        Self::new(field, ControlKind::Text, description)
    }

    pub fn object(field: &'static str, description: &'static str) -> Self {
        Self::new(field, ControlKind::Object, description)
    }

    pub fn none(field: &'static str, description: &'static str) -> Self {
        Self::new(field, ControlKind::None, description)
    }

    pub fn default_summary(mut self, summary: &'static str) -> Self {
        self.default_summary = Some(summary);
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }
}

fn enum_options<E: IntoEnumIterator + AsRef<str>>() -> Vec<String> {
    E::iter().map(|e| e.as_ref().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story<A> {
    pub name: &'static str,
    pub args: A,
}

impl<A: Clone> Story<A> {
    /// Story args are the entry defaults with `edit` applied on top.
    fn derive(name: &'static str, defaults: &A, edit: impl FnOnce(&mut A)) -> Self {
        let mut args = defaults.clone();
        edit(&mut args);
        Self { name, args }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry<A> {
    pub id: &'static str,
    pub title: &'static str,
    pub display_name: &'static str,
    pub layout: &'static str,
    pub tags: Vec<&'static str>,
    pub controls: Vec<Control>,
    pub default_args: A,
    pub stories: Vec<Story<A>>,
}

impl<A> CatalogEntry<A> {
    pub fn story(&self, name: &str) -> Option<&Story<A>> {
        self.stories.iter().find(|s| s.name == name)
    }

    pub fn control(&self, field: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.field == field)
    }

    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            id: self.id,
            title: self.title,
            display_name: self.display_name,
            stories: self.stories.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: &'static str,
    pub title: &'static str,
    pub display_name: &'static str,
    pub stories: usize,
}

/// Icons the catalog can reference by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IconToken {
    Zap,
    Settings,
    User,
    Trash2,
    CirclePlus,
    Terminal,
    Info,
    TriangleAlert,
}

/// Label or icon content for a story slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorySlot {
    Text(String),
    Icon { icon: IconToken },
}

impl From<&str> for StorySlot {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<IconToken> for StorySlot {
    fn from(icon: IconToken) -> Self {
        Self::Icon { icon }
    }
}

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub button: CatalogEntry<ButtonArgs>,
    pub dialog: CatalogEntry<DialogArgs>,
    pub alert: CatalogEntry<AlertArgs>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            button: button::entry(),
            dialog: dialog::entry(),
            alert: alert::entry(),
        }
    }

    pub fn summaries(&self) -> Vec<EntrySummary> {
        vec![self.button.summary(), self.alert.summary(), self.dialog.summary()]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
