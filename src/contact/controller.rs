use std::cell::RefCell;
use std::time::Duration;

use super::fields::{Field, FormFields};
use super::relay::{EmailRelayClient, Receipt, TransportError};
use super::validate::{validate, ValidationErrors};

/// How long the "sent" banner stays up before the form returns to idle.
pub const SENT_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// What the user sees when the relay fails. Transport detail only goes to the log.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Identifies the attempt whose "sent" banner a scheduled expiry may dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed locally; errors were stored and nothing was sent.
    Rejected,
    /// A send is already in flight.
    Busy,
    /// Relay accepted the message; schedule `expire_sent` with the ticket.
    Sent(SentTicket),
    Failed,
    /// The form went away before the relay answered.
    Detached,
}

/// Everything the contact form renders: inputs, per-field errors and submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    errors: ValidationErrors,
    state: SubmissionState,
    attempt: u64,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Stores a keystroke. The field's own error is dropped right away; other
    /// fields keep theirs until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validates and, when clean, moves to `Sending`, returning a snapshot of
    /// the values to relay.
    pub fn begin_submit(&mut self) -> Result<FormFields, SubmitOutcome> {
        match self.state {
            SubmissionState::Sending => return Err(SubmitOutcome::Busy),
            // a new submit dismisses the banner before anything else
            SubmissionState::Sent => self.state = SubmissionState::Idle,
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitOutcome::Rejected);
        }

        self.errors = ValidationErrors::default();
        self.attempt += 1;
        self.state = SubmissionState::Sending;
        Ok(self.fields.clone())
    }

    /// Applies the relay result of the attempt started by `begin_submit`.
    pub fn complete(&mut self, result: Result<Receipt, TransportError>) -> SubmitOutcome {
        if !self.state.is_sending() {
            log::warn!("relay result arrived while form was {:?}", self.state);
            return SubmitOutcome::Detached;
        }
        match result {
            Ok(receipt) => {
                log::debug!("contact message relayed ({})", receipt.status);
                self.fields.clear();
                self.state = SubmissionState::Sent;
                SubmitOutcome::Sent(SentTicket(self.attempt))
            }
            Err(err) => {
                log::error!("contact message relay failed: {err}");
                self.state = SubmissionState::Failed(SEND_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Called when the display window of a sent banner runs out. Tickets from
    /// older attempts are ignored.
    pub fn expire_sent(&mut self, ticket: SentTicket) {
        if self.state == SubmissionState::Sent && ticket.0 == self.attempt {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Shared holder of a [`ContactForm`]. Returns `None` once the holder has
/// been torn down so late async results are dropped instead of applied.
pub trait FormStore {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Drives one contact form: validate, relay, reflect the result.
#[derive(Debug, Clone)]
pub struct SubmissionController<C> {
    client: C,
}

impl<C: EmailRelayClient> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn submit<S: FormStore>(&self, store: &S) -> SubmitOutcome {
        let fields = match store.with_form(ContactForm::begin_submit) {
            Some(Ok(fields)) => fields,
            Some(Err(outcome)) => return outcome,
            None => return SubmitOutcome::Detached,
        };

        let result = self.client.send(&fields).await;

        store
            .with_form(|form| form.complete(result))
            .unwrap_or(SubmitOutcome::Detached)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::executor::block_on;
    use futures::future::join;

    use super::*;

    /// Resolves after being polled twice, so a second submit can interleave.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct FakeRelay {
        succeed: bool,
        calls: Cell<usize>,
        last: RefCell<Option<FormFields>>,
    }

    impl FakeRelay {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl EmailRelayClient for FakeRelay {
        async fn send(&self, fields: &FormFields) -> Result<Receipt, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(fields.clone());
            YieldOnce(false).await;
            if self.succeed {
                Ok(Receipt {
                    status: http::StatusCode::OK,
                    body: "OK".to_string(),
                })
            } else {
                Err(TransportError::Network("connection reset".to_string()))
            }
        }
    }

    /// Lets `begin_submit` through, then behaves like an unmounted component.
    struct Unmounted {
        form: RefCell<ContactForm>,
        alive: Cell<bool>,
    }

    impl FormStore for Unmounted {
        fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            if !self.alive.replace(false) {
                return None;
            }
            Some(f(&mut self.form.borrow_mut()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Victor Mulinge");
        form.set_field(Field::Email, "victor@example.com");
        form.set_field(Field::Phone, "+254722253660");
        form.set_field(Field::Message, "Let's build something together.");
        form
    }

    #[test]
    fn test_blank_name_never_reaches_relay() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Phone, "+254722253660");
        form.set_field(Field::Message, "hello there friend");
        let store = RefCell::new(form);
        let controller = SubmissionController::new(FakeRelay::new(true));

        let outcome = block_on(controller.submit(&store));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(controller.client().calls.get(), 0);
        let form = store.borrow();
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().message(Field::Name).unwrap(),
            "Name is required"
        );
    }

    #[test]
    fn test_every_blank_field_blocks_send() {
        let store = RefCell::new(ContactForm::default());
        let controller = SubmissionController::new(FakeRelay::new(true));

        assert_eq!(block_on(controller.submit(&store)), SubmitOutcome::Rejected);
        assert_eq!(controller.client().calls.get(), 0);
        assert_eq!(store.borrow().errors().len(), 4);
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "nope");
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Rejected));
        assert_eq!(form.errors().len(), 4);

        form.set_field(Field::Email, "nope@");
        assert!(!form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Phone));
        assert!(form.errors().contains(Field::Message));
    }

    #[test]
    fn test_successful_send_clears_and_expires() {
        let store = RefCell::new(filled());
        let controller = SubmissionController::new(FakeRelay::new(true));

        let fut = controller.submit(&store);
        let mut fut = Box::pin(fut);
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert_eq!(store.borrow().state(), &SubmissionState::Sending);

        let outcome = match fut.as_mut().poll(&mut cx) {
            Poll::Ready(outcome) => outcome,
            Poll::Pending => panic!("relay should have resolved"),
        };
        let ticket = match outcome {
            SubmitOutcome::Sent(ticket) => ticket,
            other => panic!("expected sent, got {:?}", other),
        };

        {
            let form = store.borrow();
            assert_eq!(form.state(), &SubmissionState::Sent);
            assert!(form.fields().is_empty());
            assert!(form.errors().is_empty());
        }
        let sent = controller.client().last.borrow().clone().unwrap();
        assert_eq!(sent.name, "Victor Mulinge");

        // the view arms this via use_timeout_fn in app/contact_form.rs
        store.borrow_mut().expire_sent(ticket);
        assert_eq!(store.borrow().state(), &SubmissionState::Idle);
        assert_eq!(SENT_DISPLAY_WINDOW, Duration::from_secs(5));
    }

    #[test]
    fn test_failed_send_keeps_input() {
        let store = RefCell::new(filled());
        let before = store.borrow().fields().clone();
        let controller = SubmissionController::new(FakeRelay::new(false));

        let outcome = block_on(controller.submit(&store));

        assert_eq!(outcome, SubmitOutcome::Failed);
        let form = store.borrow();
        assert_eq!(
            form.state(),
            &SubmissionState::Failed(SEND_FAILED_MESSAGE.to_string())
        );
        assert_eq!(form.fields(), &before);
        assert_eq!(controller.client().calls.get(), 1);
    }

    #[test]
    fn test_retry_after_failure() {
        let store = RefCell::new(filled());
        let failing = SubmissionController::new(FakeRelay::new(false));
        assert_eq!(block_on(failing.submit(&store)), SubmitOutcome::Failed);

        let working = SubmissionController::new(FakeRelay::new(true));
        assert!(matches!(
            block_on(working.submit(&store)),
            SubmitOutcome::Sent(_)
        ));
        assert_eq!(store.borrow().state(), &SubmissionState::Sent);
    }

    #[test]
    fn test_double_submit_sends_once() {
        let store = RefCell::new(filled());
        let controller = SubmissionController::new(FakeRelay::new(true));

        let (first, second) = block_on(join(controller.submit(&store), controller.submit(&store)));

        assert!(matches!(first, SubmitOutcome::Sent(_)));
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(controller.client().calls.get(), 1);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let first = match form.complete(Ok(Receipt {
            status: http::StatusCode::OK,
            body: String::new(),
        })) {
            SubmitOutcome::Sent(t) => t,
            other => panic!("unexpected {:?}", other),
        };

        // submitting again while the banner is up dismisses it
        form = ContactForm {
            fields: filled().fields,
            ..form
        };
        form.begin_submit().unwrap();
        form.complete(Ok(Receipt {
            status: http::StatusCode::OK,
            body: String::new(),
        }));
        assert_eq!(form.state(), &SubmissionState::Sent);

        form.expire_sent(first);
        assert_eq!(form.state(), &SubmissionState::Sent);
    }

    #[test]
    fn test_sent_banner_dismissed_by_invalid_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Ok(Receipt {
            status: http::StatusCode::OK,
            body: String::new(),
        }));

        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Rejected));
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn test_late_result_without_sending_is_dropped() {
        let mut form = filled();
        let outcome = form.complete(Err(TransportError::NotConfigured("EMAILJS_SERVICE_ID")));
        assert_eq!(outcome, SubmitOutcome::Detached);
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let store = Unmounted {
            form: RefCell::new(filled()),
            alive: Cell::new(true),
        };
        let controller = SubmissionController::new(FakeRelay::new(true));

        let outcome = block_on(controller.submit(&store));

        assert_eq!(outcome, SubmitOutcome::Detached);
        assert_eq!(controller.client().calls.get(), 1);
        let form = store.form.borrow();
        assert_eq!(form.state(), &SubmissionState::Sending);
        assert_eq!(form.fields(), filled().fields());
    }
}
