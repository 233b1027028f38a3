use super::variants::ButtonSize;

/// Label and icon slots as the caller supplied them.
#[derive(Debug, Clone, PartialEq)]
pub struct Content<C> {
    pub icon_left: Option<C>,
    pub body: Option<C>,
    pub icon_right: Option<C>,
}

impl<C> Default for Content<C> {
    fn default() -> Self {
        Self {
            icon_left: None,
            body: None,
            icon_right: None,
        }
    }
}

/// What the button actually shows for this render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveContent<C> {
    Normal(Content<C>),
    /// Spinner first, then the optional text. Never carries caller content.
    Loading { text: Option<String> },
}

impl<C> EffectiveContent<C> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState<C> {
    pub content: EffectiveContent<C>,
    pub disabled: bool,
}

pub fn apply_state<C>(
    content: Content<C>,
    is_loading: bool,
    loading_text: Option<&str>,
    size: ButtonSize,
    disabled: bool,
) -> InteractionState<C> {
    let disabled = disabled || is_loading;

    if !is_loading {
        return InteractionState {
            content: EffectiveContent::Normal(content),
            disabled,
        };
    }

    // Loading replaces the caller's content entirely; icon sizes stay spinner-only.
    let text = match loading_text.unwrap_or_default() {
        _ if size.is_icon() => None,
        "" => None,
        text => Some(text.to_string()),
    };

    InteractionState {
        content: EffectiveContent::Loading { text },
        disabled,
    }
}

/* ========================================================== */
/*                        🧪 TESTS 🧪                         */
/* ========================================================== */

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn labelled() -> Content<&'static str> {
        Content {
            icon_left: Some("zap"),
            body: Some("Processing"),
            icon_right: Some("settings"),
        }
    }

    #[test]
    fn test_loading_always_disables() {
        for size in ButtonSize::iter() {
            let state = apply_state(labelled(), true, None, size, false);
            assert!(state.disabled, "size {size}");
        }
    }

    #[test]
    fn test_disabled_without_loading_keeps_content() {
        let state = apply_state(labelled(), false, Some("Loading..."), ButtonSize::Md, true);
        assert!(state.disabled);
        assert_eq!(state.content, EffectiveContent::Normal(labelled()));
    }

    #[test]
    fn test_idle_button_is_enabled() {
        let state = apply_state(labelled(), false, None, ButtonSize::Lg, false);
        assert!(!state.disabled);
        assert!(!state.content.is_loading());
    }

    #[test]
    fn test_icon_size_loading_is_spinner_only() {
        let content = Content {
            icon_left: None,
            body: Some("plus-circle"),
            icon_right: None,
        };
        let state = apply_state(content, true, Some("Loading..."), ButtonSize::IconMd, false);
        assert_eq!(state.content, EffectiveContent::Loading { text: None });

        for size in ButtonSize::iter().filter(|s| s.is_icon()) {
            let state = apply_state(labelled(), true, Some("Loading..."), size, false);
            assert_eq!(state.content, EffectiveContent::Loading { text: None });
        }
    }

    #[test]
    fn test_text_size_loading_shows_loading_text_and_drops_children() {
        let state = apply_state(labelled(), true, Some("Loading..."), ButtonSize::Md, false);
        assert_eq!(
            state.content,
            EffectiveContent::Loading { text: Some("Loading...".to_string()) }
        );
    }

    #[test]
    fn test_empty_or_missing_loading_text_is_spinner_only() {
        let empty = apply_state(labelled(), true, Some(""), ButtonSize::Xl, false);
        assert_eq!(empty.content, EffectiveContent::Loading { text: None });

        let missing = apply_state(labelled(), true, None, ButtonSize::Sm, false);
        assert_eq!(missing.content, EffectiveContent::Loading { text: None });
    }
}
