use leptos::prelude::*;

use super::contact::SocialLinks;
use crate::content::Profile;

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="relative z-10 bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <span class="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                    {profile.initials.clone()}
                </span>
                <p class="text-sm">
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), profile.name)}
                </p>
                <SocialLinks links=profile.socials.as_slice() />
            </div>
        </footer>
    }
}
