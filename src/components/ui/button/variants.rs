use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tw_merge::tw_merge;

use super::error::ConfigurationError;
use super::state::{apply_state, Content, InteractionState};

/* ========================================================== */
/*                       🧬 ENUMS 🧬                          */
/* ========================================================== */

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Danger,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ButtonStyling {
    #[default]
    Fill,
    LightFill,
    Stroke,
    LightStroke,
    Text,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    IconSm,
    IconMd,
    IconLg,
    IconXl,
}

impl ButtonSize {
    /// Icon sizes hold a single piece of content and never show text.
    pub fn is_icon(self) -> bool {
        matches!(self, Self::IconSm | Self::IconMd | Self::IconLg | Self::IconXl)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ButtonShape {
    #[default]
    Default,
    Capsule,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FontWeight {
    Regular,
    #[default]
    Semibold,
}

/// Parses a caller-supplied token, rejecting anything outside the enum's domain.
pub fn parse_option<T>(field: &'static str, value: &str) -> Result<T, ConfigurationError>
where
    T: std::str::FromStr,
{
    value.parse::<T>().map_err(|_| ConfigurationError::UnknownOption {
        field,
        value: value.to_string(),
    })
}

/* ========================================================== */
/*                     🧬 STYLE REQUEST 🧬                    */
/* ========================================================== */

/// Everything a caller can ask of a button for one render pass.
///
/// `C` is the opaque content carried by the label and icon slots: views in the
/// component, plain values in the catalog and in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleRequest<C> {
    pub color: ButtonColor,
    pub styling: ButtonStyling,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    #[serde(alias = "fontWeightCustom")]
    pub font_weight: FontWeight,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_text: Option<String>,
    pub disabled: bool,
    pub full_width: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_left: Option<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_right: Option<C>,
    pub as_child: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<C>,
}

impl<C> Default for StyleRequest<C> {
    fn default() -> Self {
        Self {
            color: ButtonColor::default(),
            styling: ButtonStyling::default(),
            size: ButtonSize::default(),
            shape: ButtonShape::default(),
            font_weight: FontWeight::default(),
            is_loading: false,
            loading_text: None,
            disabled: false,
            full_width: false,
            icon_left: None,
            icon_right: None,
            as_child: false,
            children: None,
        }
    }
}

impl<C> StyleRequest<C> {
    pub fn resolve(&self) -> ClassBundle {
        resolve(
            self.color,
            self.styling,
            self.size,
            self.shape,
            self.font_weight,
            self.full_width,
        )
    }

    /// Consumes the request's content slots and applies the loading/disabled rules.
    pub fn into_state(self) -> InteractionState<C> {
        let content = Content {
            icon_left: self.icon_left,
            body: self.children,
            icon_right: self.icon_right,
        };
        apply_state(
            content,
            self.is_loading,
            self.loading_text.as_deref(),
            self.size,
            self.disabled,
        )
    }
}

/* ========================================================== */
/*                     🧬 CLASS BUNDLE 🧬                     */
/* ========================================================== */

const BASE: &str = "inline-flex items-center justify-center whitespace-nowrap border transition-colors duration-150 outline-none focus-visible:ring-2 focus-visible:ring-violet-500 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-40 aria-disabled:pointer-events-none aria-disabled:opacity-40 [&_svg]:pointer-events-none [&_svg]:shrink-0 hover:cursor-pointer select-none touch-manipulation";

/// Resolved presentation classes, one slot per concern so no two slots fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassBundle {
    pub base: &'static str,
    pub palette: &'static str,
    pub dimension: &'static str,
    pub rounding: &'static str,
    pub weight: &'static str,
    pub width: Option<&'static str>,
}

impl ClassBundle {
    pub fn to_class(&self) -> String {
        let width = self.width.unwrap_or_default();
        tw_merge!(self.base, self.palette, self.dimension, self.rounding, self.weight, width)
    }

    /// Caller classes come last so they win any conflict.
    pub fn with_class(&self, class: &str) -> String {
        tw_merge!(self.to_class(), class)
    }
}

pub fn resolve(
    color: ButtonColor,
    styling: ButtonStyling,
    size: ButtonSize,
    shape: ButtonShape,
    font_weight: FontWeight,
    full_width: bool,
) -> ClassBundle {
    ClassBundle {
        base: BASE,
        palette: palette(color, styling),
        dimension: dimension(size),
        rounding: rounding(size, shape),
        weight: match font_weight {
            FontWeight::Regular => "font-normal",
            FontWeight::Semibold => "font-semibold",
        },
        width: full_width.then_some("w-full"),
    }
}

fn palette(color: ButtonColor, styling: ButtonStyling) -> &'static str {
    use ButtonColor as C;
    use ButtonStyling as S;

    match (color, styling) {
        (C::Primary, S::Fill) => "bg-violet-600 text-white border-transparent hover:bg-violet-700 active:bg-violet-800",
        (C::Primary, S::LightFill) => "bg-violet-100 text-violet-700 border-transparent hover:bg-violet-200 active:bg-violet-300",
        (C::Primary, S::Stroke) => "bg-white text-violet-600 border-violet-600 hover:bg-violet-50 active:bg-violet-100",
        (C::Primary, S::LightStroke) => "bg-white text-violet-600 border-violet-200 hover:bg-violet-50 active:bg-violet-100",
        (C::Primary, S::Text) => "bg-transparent text-violet-600 border-transparent hover:bg-violet-50 active:bg-violet-100",

        (C::Secondary, S::Fill) => "bg-gray-800 text-white border-transparent hover:bg-gray-900 active:bg-gray-950",
        (C::Secondary, S::LightFill) => "bg-gray-100 text-gray-800 border-transparent hover:bg-gray-200 active:bg-gray-300",
        (C::Secondary, S::Stroke) => "bg-white text-gray-800 border-gray-800 hover:bg-gray-50 active:bg-gray-100",
        (C::Secondary, S::LightStroke) => "bg-white text-gray-700 border-gray-300 hover:bg-gray-50 active:bg-gray-100",
        (C::Secondary, S::Text) => "bg-transparent text-gray-700 border-transparent hover:bg-gray-100 active:bg-gray-200",

        (C::Tertiary, S::Fill) => "bg-sky-600 text-white border-transparent hover:bg-sky-700 active:bg-sky-800",
        (C::Tertiary, S::LightFill) => "bg-sky-100 text-sky-700 border-transparent hover:bg-sky-200 active:bg-sky-300",
        (C::Tertiary, S::Stroke) => "bg-white text-sky-600 border-sky-600 hover:bg-sky-50 active:bg-sky-100",
        (C::Tertiary, S::LightStroke) => "bg-white text-sky-600 border-sky-200 hover:bg-sky-50 active:bg-sky-100",
        (C::Tertiary, S::Text) => "bg-transparent text-sky-600 border-transparent hover:bg-sky-50 active:bg-sky-100",

        (C::Danger, S::Fill) => "bg-red-600 text-white border-transparent hover:bg-red-700 active:bg-red-800",
        (C::Danger, S::LightFill) => "bg-red-100 text-red-700 border-transparent hover:bg-red-200 active:bg-red-300",
        (C::Danger, S::Stroke) => "bg-white text-red-600 border-red-600 hover:bg-red-50 active:bg-red-100",
        (C::Danger, S::LightStroke) => "bg-white text-red-600 border-red-200 hover:bg-red-50 active:bg-red-100",
        (C::Danger, S::Text) => "bg-transparent text-red-600 border-transparent hover:bg-red-50 active:bg-red-100",
    }
}

fn dimension(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "h-8 px-3 gap-1 text-sm [&_svg:not([class*='size-'])]:size-4",
        ButtonSize::Md => "h-10 px-4 gap-1.5 text-sm [&_svg:not([class*='size-'])]:size-4",
        ButtonSize::Lg => "h-12 px-5 gap-2 text-base [&_svg:not([class*='size-'])]:size-5",
        ButtonSize::Xl => "h-14 px-6 gap-2 text-lg [&_svg:not([class*='size-'])]:size-5",
        ButtonSize::IconSm => "size-8 px-0 [&_svg:not([class*='size-'])]:size-4",
        ButtonSize::IconMd => "size-10 px-0 [&_svg:not([class*='size-'])]:size-4",
        ButtonSize::IconLg => "size-12 px-0 [&_svg:not([class*='size-'])]:size-5",
        ButtonSize::IconXl => "size-14 px-0 [&_svg:not([class*='size-'])]:size-6",
    }
}

fn rounding(size: ButtonSize, shape: ButtonShape) -> &'static str {
    if shape == ButtonShape::Capsule {
        return "rounded-full";
    }
    match size {
        ButtonSize::Sm | ButtonSize::IconSm => "rounded-md",
        ButtonSize::Md | ButtonSize::IconMd => "rounded-lg",
        ButtonSize::Lg | ButtonSize::IconLg => "rounded-lg",
        ButtonSize::Xl | ButtonSize::IconXl => "rounded-xl",
    }
}

/* ========================================================== */
/*                        🧪 TESTS 🧪                         */
/* ========================================================== */
