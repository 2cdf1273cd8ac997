use leptos::prelude::*;

use crate::{content::Profile, layout::SectionId};

const OUTLINE_BUTTON: &str = "inline-flex items-center bg-transparent border-2 border-black dark:border-white dark:text-white px-6 py-3 rounded-full font-semibold hover:bg-blue-500 dark:hover:bg-white/10 transition-colors duration-300";

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute top-1/4 left-1/4 w-72 h-72 bg-indigo-300 dark:bg-indigo-900 rounded-full mix-blend-multiply blur-xl opacity-70 animate-drift"></div>
            <div class="absolute top-1/3 right-1/4 w-96 h-96 bg-purple-300 dark:bg-purple-900 rounded-full mix-blend-multiply blur-xl opacity-70 animate-drift-slow"></div>
            <div class="absolute bottom-1/4 right-1/3 w-80 h-80 bg-pink-300 dark:bg-pink-900 rounded-full mix-blend-multiply blur-xl opacity-70 animate-drift"></div>
        </div>
        <section id="home" class="relative min-h-screen pt-16 z-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid items-center grid-cols-1 md:grid-cols-2 gap-8 min-h-[calc(100vh-4rem)]">
                    <div class="text-black dark:text-white section-content">
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-4">
                            {profile.name.clone()}
                        </h1>
                        <p class="text-xl sm:text-2xl md:text-3xl mb-8">
                            {profile.headline.clone()}
                        </p>
                        <p class="max-w-lg mt-3 text-lg leading-relaxed opacity-90 md:mt-8">
                            {profile.tagline.clone()}
                        </p>
                        <div class="mt-8 flex flex-wrap gap-4">
                            <a
                                href=SectionId::About.href()
                                class="inline-flex items-center bg-white dark:bg-indigo-600 text-indigo-600 dark:text-white px-6 py-3 rounded-full font-semibold hover:bg-indigo-100 dark:hover:bg-indigo-700 transition-colors duration-300"
                            >
                                "Learn More"
                                <span class="ml-2">"↓"</span>
                            </a>
                            <a href=SectionId::Contact.href() class=OUTLINE_BUTTON>
                                "Get in Touch"
                            </a>
                            <a
                                href=profile.cv.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=OUTLINE_BUTTON
                            >
                                "Get CV"
                            </a>
                        </div>
                    </div>
                    <div class="relative md:block">
                        <div class="absolute inset-0 bg-gray-400/10 dark:bg-indigo-500/10 rounded-full blur-3xl"></div>
                        <img
                            class="relative w-full max-w-lg mx-auto rounded-lg shadow-lg animate-float"
                            src=profile.portrait.clone()
                            alt=profile.name.clone()
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
