//! Lead forms: validation, wire encoding and submission outcome.
//!
//! The crate never performs I/O itself. Requests are described as
//! [`OutboundRequest`] values and sent through a [`Submitter`], so the
//! browser uses `fetch` and tests use a canned reply.

pub mod booking;
pub mod choices;
pub mod contact;
pub mod encode;
pub mod endpoints;
pub mod fields;
pub mod submit;

pub use booking::{BookingSubmission, DemoBooking};
pub use contact::{ContactForm, ContactSubmission, is_valid_email};
pub use endpoints::FormEndpoints;
pub use fields::{Field, FieldErrors};
pub use submit::{
    FormKind, HttpReply, Method, OutboundRequest, StatusKind, StatusMessage, SubmitError, SubmitOutcome,
    Submitter, submit_booking, submit_contact,
};
