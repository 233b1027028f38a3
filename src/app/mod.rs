use crate::config::ShowcaseConfig;
use crate::pages::{CatalogEntryPage, CatalogIndexPage, DemoPage};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

#[component]
fn Nav(catalog_enabled: bool) -> impl IntoView {
    view! {
        <nav class="flex items-center gap-6 border-b px-10 py-3 text-sm">
            <span class="font-semibold">"KPDS"</span>
            <A href="/">"Demo"</A>
            {catalog_enabled.then(|| view! { <A href="/catalog">"Catalog"</A> })}
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ShowcaseConfig::load();
    log!("showcase: theme={}, catalog={}", config.theme, config.catalog_enabled);

    let root_class = config.root_class();
    let catalog_enabled = config.catalog_enabled;
    provide_context(config);

    // router hooks require a <Router> context.
    view! {
        <Router>
            <div class=root_class data-name="Showcase">
                <Nav catalog_enabled=catalog_enabled />
                <main>
                    <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-gray-500">"Not found"</div> }>
                        <Route path=path!("catalog/:entry") view=CatalogEntryPage />
                        <Route path=path!("catalog") view=CatalogIndexPage />
                        <Route path=path!("") view=DemoPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
