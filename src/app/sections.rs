use leptos::prelude::*;

use crate::{
    content::{Job, Publication, Talk},
    layout::{ticker_items, SectionId},
};

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-5xl font-bold text-center mb-12 section-content">{text}</h2> }
}

#[component]
pub fn About(paragraphs: &'static [String]) -> impl IntoView {
    view! {
        <section id=SectionId::About.anchor() class="py-20">
            <div class="container mx-auto px-4 text-black dark:text-white">
                <SectionHeading text="About Me" />
                <div class="max-w-3xl mx-auto space-y-6">
                    {paragraphs
                        .iter()
                        .map(|p| view! { <p class="text-lg">{p.clone()}</p> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience(jobs: &'static [Job]) -> impl IntoView {
    view! {
        <section id=SectionId::Experience.anchor() class="py-20 text-black dark:text-white">
            <div class="container mx-auto px-4">
                <SectionHeading text="Work Experience" />
                <div class="max-w-4xl mx-auto">
                    {jobs
                        .iter()
                        .map(|job| {
                            view! {
                                <div class="mb-12 relative pl-8 border-l-2 border-indigo-500">
                                    <div class="absolute w-4 h-4 bg-indigo-500 rounded-full -left-[9px] top-1"></div>
                                    <h3 class="text-xl font-semibold mb-2">{job.title.clone()}</h3>
                                    <p class="text-lg font-medium mb-2">{job.company.clone()}</p>
                                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                        {job.period.clone()}
                                    </p>
                                    <ul class="list-disc list-inside">
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|item| view! { <li class="mb-2">{item.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(skills: &'static [String]) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="py-20 overflow-hidden">
            <div class="container mx-auto px-4">
                <SectionHeading text="Skills" />
                <div class="relative overflow-hidden">
                    <div class="flex gap-4 flex-nowrap w-max animate-ticker hover:[animation-play-state:paused]">
                        {ticker_items(skills)
                            .map(|skill| {
                                view! {
                                    <div class="bg-white dark:bg-gray-800 rounded-full px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 shadow-md flex-shrink-0 hover:scale-110 transition-transform duration-200">
                                        {skill.clone()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Publications(publications: &'static [Publication]) -> impl IntoView {
    view! {
        <section id=SectionId::Publications.anchor() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading text="Publications" />
                {publications
                    .iter()
                    .map(|publication| {
                        view! {
                            <div class="mb-8 p-6 bg-gray-50 dark:bg-gray-700 rounded-lg shadow-md">
                                <h3 class="text-xl font-semibold mb-2">{publication.title.clone()}</h3>
                                <p class="text-sm text-gray-600 dark:text-gray-400 mb-2">
                                    {publication.authors.clone()}
                                </p>
                                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                    {publication.year}
                                </p>
                                <p class="mb-4">{publication.summary.clone()}</p>
                                <a
                                    href=publication.link.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-indigo-600 dark:text-indigo-400 hover:underline"
                                >
                                    "Read Publication"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Conferences, seminars and webinars.
#[component]
pub fn Talks(talks: &'static [Talk]) -> impl IntoView {
    view! {
        <section id=SectionId::Talks.anchor() class="text-black dark:text-white sm:px-6 px-4 py-12">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-5xl text-center font-extrabold section-content">
                    "CONFERENCES AND SEMINARS"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-12 mt-16 max-md:max-w-lg mx-auto">
                    {talks
                        .iter()
                        .map(|talk| {
                            view! {
                                <div class="rounded overflow-hidden group hover:scale-[1.02] transition-transform">
                                    <span class="text-sm block mb-2">
                                        {format!("{} - {}", talk.date.format("%d/%m/%Y"), talk.format)}
                                    </span>
                                    <h3 class="text-xl font-bold group-hover:text-blue-500 transition-all">
                                        {talk.title.clone()}
                                    </h3>
                                    <p class="mt-4 text-sm">{talk.subtitle.clone()}</p>
                                    <hr class="my-5 border-gray-300" />
                                    <a
                                        href=talk.link.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-xs text-blue-500 hover:text-blue-700 font-semibold"
                                    >
                                        "READ MORE →"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
