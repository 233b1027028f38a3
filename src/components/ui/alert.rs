use leptos::prelude::*;
use leptos_ui::clx;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {AlertTitle, h5, "mb-1 font-semibold tracking-tight leading-none"}
    clx! {AlertDescription, div, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border-violet-200 bg-violet-50 text-violet-900 [&>svg]:text-violet-600",
            Self::Destructive => "border-red-200 bg-red-50 text-red-900 [&>svg]:text-red-600",
        }
    }
}

const ALERT_BASE: &str = "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg~*]:pl-7";

#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(ALERT_BASE, variant.class(), class);

    view! {
        <div data-name="Alert" role="alert" data-variant=variant.to_string() class=merged_class>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_have_distinct_palettes() {
        assert_ne!(AlertVariant::Default.class(), AlertVariant::Destructive.class());
        assert_eq!(AlertVariant::default(), AlertVariant::Default);
        assert_eq!("destructive".parse::<AlertVariant>(), Ok(AlertVariant::Destructive));
    }
}
