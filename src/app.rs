mod cards;
mod contact;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod sections;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_local_storage, use_preferred_dark};

#[cfg(feature = "hydrate")]
use crate::theme::{initial_theme, THEME_STORAGE_KEY};
#[cfg(not(feature = "hydrate"))]
use crate::theme::MemoryThemeStore;
use crate::theme::{toggle_theme, Theme, ThemeStore};

use homepage::HomePage;
use toast::{Toaster, Toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth overflow-x-hidden">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-white font-sans">
                <App />
            </body>
        </html>
    }
}

/// The page-wide light/dark mode, provided once at the root.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    toggle: Callback<()>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.toggle.run(());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Theme persisted in browser local storage as a plain `"light"`/`"dark"`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
struct LocalThemeStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

#[cfg(feature = "hydrate")]
impl LocalThemeStore {
    fn new() -> Self {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
        Self { stored, set_stored }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        self.stored.get_untracked().parse().ok()
    }

    fn save(&self, theme: Theme) {
        self.set_stored.set(theme.to_string());
    }
}

fn provide_theme(store: impl ThemeStore + Clone + Send + Sync + 'static) -> ThemeContext {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = use_preferred_dark();
        let store = store.clone();
        Effect::watch(
            || (),
            move |_, _, _| {
                theme.set(initial_theme(&store, prefers_dark.get_untracked()));
            },
            true,
        );
    }

    let ctx = ThemeContext {
        theme: theme.into(),
        toggle: Callback::new(move |_: ()| {
            theme.update(|t| *t = toggle_theme(&store, *t));
        }),
    };
    provide_context(ctx);
    ctx
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let store = LocalThemeStore::new();
    #[cfg(not(feature = "hydrate"))]
    let store = MemoryThemeStore::default();

    let theme = provide_theme(store);
    provide_context(Toaster::new());

    view! {
        <Router>
            <div class=move || {
                if theme.theme.get().is_dark() {
                    "dark min-h-screen overflow-hidden transition-colors duration-300 bg-gray-900"
                } else {
                    "min-h-screen overflow-hidden transition-colors duration-300"
                }
            }>
                <Toasts />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}
