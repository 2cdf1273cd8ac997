use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::{
    cards::{Awards, Education, Volunteering},
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navbar::{Navbar, ScrollToTop},
    sections::{About, Experience, Publications, Skills, Talks},
};
use crate::{
    content::{site_content, SiteContent},
    layout::SectionId,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match site_content() {
        Ok(content) => view! { <Portfolio content /> }.into_any(),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            view! {
                <Title text="Portfolio" />
                <p class="p-8 text-center text-black dark:text-white">
                    "This page is temporarily unavailable."
                </p>
            }
            .into_any()
        }
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    let profile = &content.profile;

    view! {
        <Title text=format!("{} | {}", profile.name, profile.headline) />
        <Meta name="description" content=profile.description.clone() />
        <Navbar initials=profile.initials.clone() />
        <Hero profile />
        <main class="relative z-10">
            {SectionId::PAGE_ORDER
                .into_iter()
                .map(|section| render_section(section, content))
                .collect_view()}
        </main>
        <Footer profile />
        <ScrollToTop />
    }
}

fn render_section(section: SectionId, content: &'static SiteContent) -> AnyView {
    match section {
        SectionId::About => view! { <About paragraphs=content.profile.about.as_slice() /> }.into_any(),
        SectionId::Experience => view! { <Experience jobs=content.experience.as_slice() /> }.into_any(),
        SectionId::Education => view! { <Education education={&content.education} /> }.into_any(),
        SectionId::Skills => view! { <Skills skills=content.skills.as_slice() /> }.into_any(),
        SectionId::Publications => {
            view! { <Publications publications=content.publications.as_slice() /> }.into_any()
        }
        SectionId::Talks => view! { <Talks talks=content.talks.as_slice() /> }.into_any(),
        SectionId::Awards => view! { <Awards awards=content.awards.as_slice() /> }.into_any(),
        SectionId::Volunteering => {
            view! { <Volunteering roles=content.volunteering.as_slice() /> }.into_any()
        }
        SectionId::Contact => view! { <Contact profile={&content.profile} /> }.into_any(),
    }
}
