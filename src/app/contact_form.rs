use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    self, EmailJsClient, Field, FormStore, SentTicket, SubmissionController, SubmissionState,
    SubmitOutcome, SENT_DISPLAY_WINDOW,
};

const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

impl FormStore for RwSignal<contact::ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut contact::ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(contact::ContactForm::default());
    let controller =
        StoredValue::new_local(SubmissionController::new(EmailJsClient::from_build_env()));

    // cleared on unmount by use_timeout_fn
    let UseTimeoutFnReturn {
        start: start_expiry,
        ..
    } = use_timeout_fn(
        move |ticket: SentTicket| {
            form.try_update(|f| f.expire_sent(ticket));
        },
        SENT_DISPLAY_WINDOW.as_millis() as f64,
    );

    let sending = Memo::new(move |_| form.with(|f| f.state().is_sending()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let controller = controller.get_value();
        let start_expiry = start_expiry.clone();
        spawn_local(async move {
            match controller.submit(&form).await {
                SubmitOutcome::Sent(ticket) => start_expiry(ticket),
                SubmitOutcome::Rejected => log::debug!("contact form has validation errors"),
                outcome => log::debug!("contact form submit: {outcome:?}"),
            }
        });
    };

    view! {
        <form class="card space-y-6 text-left" novalidate=true on:submit=on_submit>
            <div class="grid sm:grid-cols-2 gap-6">
                <FormField
                    form
                    field=Field::Name
                    input_type="text"
                    placeholder="Your name"
                    disabled=sending
                />
                <FormField
                    form
                    field=Field::Email
                    input_type="email"
                    placeholder="you@example.com"
                    disabled=sending
                />
            </div>
            <FormField
                form
                field=Field::Phone
                input_type="tel"
                placeholder="+254 700 000000"
                disabled=sending
            />
            <FormField
                form
                field=Field::Message
                input_type="textarea"
                placeholder="How can I help?"
                disabled=sending
            />
            {move || match form.with(|f| f.state().clone()) {
                SubmissionState::Sent => {
                    Some(
                        view! {
                            <p
                                role="status"
                                class="p-3 rounded-md bg-green/20 text-green border border-green/30"
                            >
                                {SENT_MESSAGE}
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmissionState::Failed(msg) => {
                    Some(
                        view! {
                            <p role="alert" class="p-3 rounded-md bg-red/20 text-red border border-red/30">
                                {msg}
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmissionState::Idle | SubmissionState::Sending => None,
            }}
            <button
                type="submit"
                class="btn-primary w-full disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || sending.get()
                aria-busy=move || sending.get().then_some("true")
            >
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

/// Labelled input with its error message right below it.
#[component]
fn FormField(
    form: RwSignal<contact::ContactForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let id = field.key();
    let error_id = format!("{id}-error");
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let error = move || form.with(|f| f.errors().message(field));
    let invalid = move || form.with(|f| f.errors().contains(field));
    let on_input = move |ev: web_sys::Event| {
        form.update(|f| f.set_field(field, event_target_value(&ev)));
    };
    let input_class = move || {
        if invalid() {
            "w-full px-4 py-2 rounded-md border border-red bg-background focus:outline-none focus:ring-2 focus:ring-red"
        } else {
            "w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary"
        }
    };
    let described_by = {
        let error_id = error_id.clone();
        move || invalid().then(|| error_id.clone())
    };

    let control = if input_type == "textarea" {
        Either::Left(view! {
            <textarea
                id=id
                name=id
                rows=5
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
                aria-invalid=move || invalid().then_some("true")
                aria-describedby=described_by
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
                aria-invalid=move || invalid().then_some("true")
                aria-describedby=described_by
            />
        })
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            {control}
            {move || {
                error()
                    .map(|msg| {
                        view! {
                            <p id=error_id.clone() class="mt-1 text-sm text-red">
                                {msg}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
