//! Contact form core: field values, validation rules, the submission state
//! machine and the outbound email relay. Nothing in here touches the DOM, so
//! it runs the same in the browser, on the server and under `cargo test`.

mod controller;
mod fields;
mod relay;
mod validate;

pub use controller::{
    ContactForm, FormStore, SentTicket, SubmissionController, SubmissionState, SubmitOutcome,
    SEND_FAILED_MESSAGE, SENT_DISPLAY_WINDOW,
};
pub use fields::{Field, FormFields};
pub use relay::{
    ConfigError, EmailJsClient, EmailRelayClient, Receipt, RelayConfig, TransportError,
    EMAILJS_SEND_URL,
};
pub use validate::{validate, FieldError, ValidationErrors, MIN_MESSAGE_LEN, MIN_NAME_LEN};
