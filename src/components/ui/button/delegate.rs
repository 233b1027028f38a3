use std::collections::BTreeMap;

use strum::{AsRefStr, Display};
use tw_merge::tw_merge;

use super::error::ConfigurationError;
use super::state::{EffectiveContent, InteractionState};

/// Ordered attribute set for one element. `class` is treated as a mergeable list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts only when the key is absent. Returns whether it was inserted.
    pub fn insert_missing(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn class(&self) -> &str {
        self.get("class").unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Folds `incoming` under the existing attributes: classes are merged with
    /// ours last, every other key we already hold is left untouched.
    pub fn merge_under(&mut self, incoming: &Attributes) {
        for (key, value) in incoming.iter() {
            if key == "class" {
                let merged = tw_merge!(value, self.class());
                self.insert("class", merged);
            } else {
                self.insert_missing(key, value);
            }
        }
    }

    /// Layers host attributes on top: classes are merged with `host` last,
    /// every other key from `host` replaces ours.
    pub fn overlay(&mut self, host: &Attributes) {
        for (key, value) in host.iter() {
            if key == "class" {
                let merged = tw_merge!(self.class(), value);
                self.insert("class", merged);
            } else {
                self.insert(key, value);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChildTag {
    A,
    Span,
    Div,
    Label,
}

/// A caller-supplied element that receives the button's attributes in passthrough mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildElement<C> {
    pub tag: ChildTag,
    pub attributes: Attributes,
    pub body: Option<C>,
}

impl<C> ChildElement<C> {
    pub fn new(tag: ChildTag) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            body: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn body(mut self, body: C) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Native,
    Passthrough,
}

impl RenderMode {
    pub fn from_as_child(as_child: bool) -> Self {
        if as_child {
            Self::Passthrough
        } else {
            Self::Native
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeElement<C> {
    pub attributes: Attributes,
    pub disabled: bool,
    pub content: EffectiveContent<C>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Emitted<C> {
    Native(NativeElement<C>),
    Passthrough(ChildElement<C>),
}

pub fn render<C>(
    mode: RenderMode,
    resolved: Attributes,
    state: InteractionState<C>,
    children: Vec<ChildElement<C>>,
) -> Result<Emitted<C>, ConfigurationError> {
    let loading = state.content.is_loading();

    match mode {
        RenderMode::Native => {
            let mut attributes = resolved;
            if loading {
                attributes.insert("aria-busy", "true");
            }
            Ok(Emitted::Native(NativeElement {
                attributes,
                disabled: state.disabled,
                content: state.content,
            }))
        }
        RenderMode::Passthrough => {
            let found = children.len();
            let mut child = match <[ChildElement<C>; 1]>::try_from(children) {
                Ok([child]) => child,
                Err(_) => return Err(ConfigurationError::ChildCount { found }),
            };

            child.attributes.merge_under(&resolved);
            if state.disabled {
                child.attributes.insert_missing("aria-disabled", "true");
                child.attributes.insert_missing("data-disabled", "");
                child.attributes.insert_missing("tabindex", "-1");
            }
            if loading {
                child.attributes.insert_missing("aria-busy", "true");
            }
            Ok(Emitted::Passthrough(child))
        }
    }
}

/* ========================================================== */
/*                        🧪 TESTS 🧪                         */
/* ========================================================== */
