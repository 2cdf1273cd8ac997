use leptos::prelude::*;

use super::sections::SectionHeading;
use crate::{
    content::{Award, Certification, Education as EducationContent, Volunteering as VolunteeringContent},
    layout::{AccordionState, SectionId},
};

const CARD_CLASS: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-md p-6 transition-transform duration-300 hover:scale-105";
const CARD_LINK_CLASS: &str = "inline-flex items-center text-indigo-600 dark:text-indigo-400 hover:underline font-medium";

#[component]
fn ExternalLink(href: String, text: &'static str) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=CARD_LINK_CLASS>
            {text}
            <span class="ml-1">"↗"</span>
        </a>
    }
}

#[component]
pub fn Education(education: &'static EducationContent) -> impl IntoView {
    view! {
        <section id=SectionId::Education.anchor() class="py-20 text-black dark:text-white">
            <div class="container mx-auto px-4">
                <SectionHeading text="Education" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {education
                        .degrees
                        .iter()
                        .map(|degree| {
                            view! {
                                <div class=CARD_CLASS>
                                    <h3 class="text-xl font-semibold mb-2">{degree.degree.clone()}</h3>
                                    <p class="text-lg mb-1">{degree.institution.clone()}</p>
                                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                        {degree.period.clone()}
                                    </p>
                                    <ExternalLink href=degree.website.clone() text="Visit Website" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-3xl font-bold text-center mt-16 mb-8">"Certifications"</h3>
                <Certifications certifications=education.certifications.as_slice() />
            </div>
        </section>
    }
}

#[component]
fn Certifications(certifications: &'static [Certification]) -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <div class="max-w-3xl mx-auto divide-y divide-gray-300 dark:divide-gray-700">
            {certifications
                .iter()
                .enumerate()
                .map(|(index, cert)| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="py-4">
                            <button
                                class="w-full flex items-center justify-between text-left font-semibold"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                            >
                                <span>
                                    <span class="text-indigo-600 dark:text-indigo-400 mr-3">
                                        {format!("{:02}", index + 1)}
                                    </span>
                                    {cert.name.clone()}
                                </span>
                                <span class=move || {
                                    if is_open() {
                                        "text-2xl transition-transform duration-300 rotate-45"
                                    } else {
                                        "text-2xl transition-transform duration-300"
                                    }
                                }>"+"</span>
                            </button>
                            <Show when=is_open>
                                <div class="mt-3 pl-9 text-sm space-y-1">
                                    <p>{cert.institution.clone()}</p>
                                    <p class="text-gray-600 dark:text-gray-400">{cert.period.clone()}</p>
                                    <ExternalLink href=cert.website.clone() text="Visit Website" />
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Awards(awards: &'static [Award]) -> impl IntoView {
    view! {
        <section id=SectionId::Awards.anchor() class="py-20 text-black dark:text-white">
            <div class="container mx-auto px-4">
                <SectionHeading text="Awards and Recognition" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {awards
                        .iter()
                        .map(|award| {
                            view! {
                                <div class=CARD_CLASS>
                                    <h3 class="text-xl font-semibold mb-2">{award.title.clone()}</h3>
                                    <p class="text-lg mb-1">{award.organization.clone()}</p>
                                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                        {award.date.format("%B %-d, %Y").to_string()}
                                    </p>
                                    <p class="mb-4">{award.description.clone()}</p>
                                    {award
                                        .link
                                        .clone()
                                        .map(|href| view! { <ExternalLink href text="Learn More" /> })}
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
pub fn Volunteering(roles: &'static [VolunteeringContent]) -> impl IntoView {
    view! {
        <section id=SectionId::Volunteering.anchor() class="py-20 text-black dark:text-white">
            <div class="container mx-auto px-4">
                <SectionHeading text="Volunteering" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {roles
                        .iter()
                        .map(|role| {
                            view! {
                                <div class=CARD_CLASS>
                                    <h3 class="text-xl font-semibold mb-2">{role.role.clone()}</h3>
                                    <p class="text-lg mb-1">{role.organization.clone()}</p>
                                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                        {role.period.clone()}
                                    </p>
                                    <p class="mb-4">{role.description.clone()}</p>
                                    {role
                                        .link
                                        .clone()
                                        .map(|href| view! { <ExternalLink href text="Learn More" /> })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
