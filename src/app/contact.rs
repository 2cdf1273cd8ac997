use leptos::{ev::SubmitEvent, prelude::*};

use super::{
    sections::SectionHeading,
    toast::{use_toaster, Toaster},
};
#[cfg(feature = "hydrate")]
use crate::contact::{BrowserScheduler, ContactSubmission, RevertTimer};
use crate::{
    contact::{ContactForm, Field},
    content::{Profile, SocialLink},
    layout::SectionId,
};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500";

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toaster = use_toaster();
    #[cfg(feature = "hydrate")]
    let revert = RevertTimer::new(form, BrowserScheduler, chrono::Utc::now);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = form.try_update(ContactForm::begin_submit).flatten();
        flush_notices(form, toaster);
        #[cfg(feature = "hydrate")]
        if let Some(submission) = submission {
            send(submission, form, toaster, revert);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let details = &profile.contact;

    view! {
        <section id=SectionId::Contact.anchor() class="py-20 text-black dark:text-white">
            <div class="container mx-auto px-4">
                <SectionHeading text="Get in Touch" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div class="space-y-6">
                        <p class="text-lg">
                            "Have a question or want to work together? Send me a message."
                        </p>
                        <a href=details.tel_href() class="flex items-center gap-3 hover:underline">
                            <span aria-hidden="true">"☎"</span>
                            {details.phone.clone()}
                        </a>
                        <a href=details.mailto_href() class="flex items-center gap-3 hover:underline">
                            <span aria-hidden="true">"✉"</span>
                            {details.email.clone()}
                        </a>
                        <p class="flex items-center gap-3">
                            <span aria-hidden="true">"⌖"</span>
                            {details.location.clone()}
                        </p>
                        <SocialLinks links=profile.socials.as_slice() />
                    </div>
                    <div>
                        <Show
                            when=move || form.with(ContactForm::is_submitted)
                            fallback=move || {
                                view! {
                                    <form class="space-y-4" novalidate=true on:submit=on_submit>
                                        <FormField form field=Field::Name label="Name" />
                                        <FormField form field=Field::Email label="Email" input_type="email" />
                                        <FormField form field=Field::Subject label="Subject" />
                                        <FormField form field=Field::Message label="Message" multiline=true />
                                        {move || {
                                            form.with(|f| f.form_error().map(str::to_string))
                                                .map(|banner| {
                                                    view! {
                                                        <p role="alert" class="text-sm text-red-600 dark:text-red-400">
                                                            {banner}
                                                        </p>
                                                    }
                                                })
                                        }}
                                        <button
                                            type="submit"
                                            class="w-full bg-indigo-600 text-white px-6 py-3 rounded-md font-semibold hover:bg-indigo-700 transition-colors duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                                            disabled=move || form.with(ContactForm::is_submitting)
                                        >
                                            {move || {
                                                if form.with(ContactForm::is_submitting) {
                                                    "Sending..."
                                                } else {
                                                    "Send Message"
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="text-center p-8 bg-green-50 dark:bg-green-900/30 rounded-lg">
                                <p class="text-5xl text-green-600 mb-4">"✓"</p>
                                <h3 class="text-2xl font-semibold mb-2">"Message Sent!"</h3>
                                <p>"Thank you for reaching out. I'll get back to you as soon as possible."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));
    let class = move || {
        if error().is_some() {
            format!("{INPUT_CLASS} border-red-500")
        } else {
            format!("{INPUT_CLASS} border-gray-300 dark:border-gray-600")
        }
    };

    let input = if multiline {
        view! { <textarea id=id name=id rows="5" class=class prop:value=value on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input id=id name=id type=input_type class=class prop:value=value on:input=on_input /> }
            .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-1">
                {label}
            </label>
            {input}
            {move || error().map(|msg| view! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{msg}</p> })}
        </div>
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.kind.label()
                            class="text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors duration-300"
                        >
                            {link.kind.label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn flush_notices(form: RwSignal<ContactForm>, toaster: Toaster) {
    if let Some(notices) = form.try_update(ContactForm::take_notices) {
        toaster.push_all(notices);
    }
}

#[cfg(feature = "hydrate")]
fn send(
    submission: ContactSubmission,
    form: RwSignal<ContactForm>,
    toaster: Toaster,
    revert: RevertTimer<BrowserScheduler>,
) {
    use chrono::Utc;

    use crate::contact::{ContactTransport, HttpTransport};

    leptos::task::spawn_local(async move {
        let result = match HttpTransport::same_origin() {
            Ok(transport) => transport.send(&submission).await,
            Err(e) => Err(e),
        };
        // the section may have been unmounted while the request was out
        let shown_for = form
            .try_update(|f| f.finish_submit(result, Utc::now()))
            .flatten();
        flush_notices(form, toaster);
        if let Some(delay) = shown_for {
            revert.schedule(delay);
        }
    });
}
