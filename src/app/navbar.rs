use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::use_theme;
use crate::layout::{shows_scroll_to_top, NavLink, NAV_LINKS};

const LINK_CLASS: &str = "text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 px-3 py-2 rounded-md text-sm font-bold transition-colors duration-300";
const ICON_BUTTON_CLASS: &str = "p-2 rounded-full text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors duration-300";

#[component]
pub fn Navbar(initials: String) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="bg-white/80 backdrop-blur-sm dark:bg-gray-800/90 shadow-md fixed w-full z-50 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                        {initials}
                    </a>
                    <div class="hidden md:flex items-center space-x-4">
                        {NAV_LINKS
                            .into_iter()
                            .map(|NavLink { label, target }| {
                                view! {
                                    <a href=target.href() class=LINK_CLASS>
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle />
                        <button
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-indigo-500"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden px-2 pt-2 pb-3 space-y-1 sm:px-3">
                    {NAV_LINKS
                        .into_iter()
                        .map(|NavLink { label, target }| {
                            view! {
                                <a
                                    href=target.href()
                                    class="text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 block px-3 py-2 rounded-md text-base font-bold transition-colors duration-300"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button class=ICON_BUTTON_CLASS aria-label="Toggle theme" on:click=move |_| theme.toggle()>
            {move || if theme.theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <Show when=move || shows_scroll_to_top(scroll_y.get())>
            <button
                class="fixed bottom-5 right-5 cursor-pointer p-3 bg-indigo-600 text-white rounded-full shadow-lg transition-transform transform hover:scale-110 z-10"
                title="Back to Top"
                aria-label="Back to Top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>
        </Show>
    }
}
