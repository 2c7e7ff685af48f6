//! Request descriptions, reply interpretation and user-facing status.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::booking::BookingSubmission;
use crate::contact::ContactSubmission;
use crate::endpoints::{FormEndpoints, is_configured_url};

/// How long the contact success banner stays up.
pub const CONTACT_SUCCESS_HIDE_MS: f64 = 5000.0;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} endpoint is not configured")]
    NotConfigured(FormKind),

    #[error("request could not be built: {0}")]
    Encode(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Booking,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FormKind::Contact => "contact",
            FormKind::Booking => "booking",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub content_type: Option<&'static str>,
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam. The browser implements it over `fetch`.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, SubmitError>;
}

pub type SubmitOutcome = Result<(), SubmitError>;

pub fn contact_request(endpoints: &FormEndpoints, submission: &ContactSubmission) -> Result<OutboundRequest, SubmitError> {
    if !is_configured_url(&endpoints.contact_url) {
        return Err(SubmitError::NotConfigured(FormKind::Contact));
    }
    let body = submission.to_json().map_err(|e| SubmitError::Encode(e.to_string()))?;
    Ok(OutboundRequest {
        method: Method::Post,
        url: endpoints.contact_url.clone(),
        body: Some(body),
        content_type: Some("application/json"),
    })
}

pub fn booking_request(endpoints: &FormEndpoints, submission: &BookingSubmission) -> Result<OutboundRequest, SubmitError> {
    if !is_configured_url(&endpoints.booking_url) {
        return Err(SubmitError::NotConfigured(FormKind::Booking));
    }
    let sep = if endpoints.booking_url.contains('?') { '&' } else { '?' };
    Ok(OutboundRequest {
        method: Method::Get,
        url: format!("{}{sep}{}", endpoints.booking_url, submission.to_query()),
        body: None,
        content_type: None,
    })
}

#[derive(Debug, Default, Deserialize)]
struct ContactReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// The contact backend answers `{ ok, error? }`; anything but `ok: true`
/// on a 2xx is a failure. An unreadable body counts as `{}`.
pub fn contact_reply(reply: &HttpReply) -> SubmitOutcome {
    let parsed: ContactReply = serde_json::from_str(&reply.body).unwrap_or_default();
    if !reply.is_success() {
        return Err(SubmitError::Status(reply.status));
    }
    if !parsed.ok {
        return Err(SubmitError::Rejected(
            parsed.error.unwrap_or_else(|| "Submission failed".to_string()),
        ));
    }
    Ok(())
}

/// Bookings succeed on any 2xx.
pub fn booking_reply(reply: &HttpReply) -> SubmitOutcome {
    if reply.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Status(reply.status))
    }
}

pub async fn submit_contact<S: Submitter>(
    submitter: &S,
    endpoints: &FormEndpoints,
    submission: &ContactSubmission,
) -> SubmitOutcome {
    let request = contact_request(endpoints, submission)?;
    let reply = submitter.send(&request).await?;
    let outcome = contact_reply(&reply);
    log_outcome(FormKind::Contact, &outcome);
    outcome
}

pub async fn submit_booking<S: Submitter>(
    submitter: &S,
    endpoints: &FormEndpoints,
    submission: &BookingSubmission,
) -> SubmitOutcome {
    let request = booking_request(endpoints, submission)?;
    let reply = submitter.send(&request).await?;
    let outcome = booking_reply(&reply);
    log_outcome(FormKind::Booking, &outcome);
    outcome
}

fn log_outcome(kind: FormKind, outcome: &SubmitOutcome) {
    match outcome {
        Ok(()) => debug!(form = %kind, "submission accepted"),
        Err(e) => warn!(form = %kind, error = %e, "submission failed"),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Banner shown under a form after submitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub title: &'static str,
    pub text: &'static str,
    /// Hide automatically after this many milliseconds.
    pub hide_after_ms: Option<f64>,
}

impl StatusMessage {
    pub fn for_outcome(kind: FormKind, outcome: &SubmitOutcome) -> Self {
        match (kind, outcome) {
            (FormKind::Contact, Ok(())) => Self {
                kind: StatusKind::Success,
                title: "Success!",
                text: "Your message has been sent successfully. We'll be in touch soon.",
                hide_after_ms: Some(CONTACT_SUCCESS_HIDE_MS),
            },
            (FormKind::Contact, Err(_)) => Self {
                kind: StatusKind::Error,
                title: "Error",
                text: "An error occurred while submitting the form. Please try again.",
                hide_after_ms: None,
            },
            (FormKind::Booking, Ok(())) => Self {
                kind: StatusKind::Success,
                title: "Success!",
                text: "Thank you! Your request has been received. We will contact you soon.",
                hide_after_ms: None,
            },
            (FormKind::Booking, Err(SubmitError::NotConfigured(_))) => Self {
                kind: StatusKind::Error,
                title: "Error",
                text: "The booking endpoint is not configured.",
                hide_after_ms: None,
            },
            (FormKind::Booking, Err(_)) => Self {
                kind: StatusKind::Error,
                title: "Error",
                text: "Something went wrong. Please try again.",
                hide_after_ms: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::{
        FormKind, HttpReply, Method, OutboundRequest, StatusMessage, SubmitError, Submitter, booking_reply,
        contact_reply, submit_booking, submit_contact,
    };
    use crate::booking::DemoBooking;
    use crate::contact::ContactForm;
    use crate::endpoints::FormEndpoints;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Canned {
        reply: Result<HttpReply, SubmitError>,
        seen: RefCell<Vec<OutboundRequest>>,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Submitter for Canned {
        async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, SubmitError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn endpoints() -> FormEndpoints {
        FormEndpoints {
            contact_url: "https://example.com/contact".into(),
            booking_url: "https://example.com/book".into(),
        }
    }

    fn contact() -> crate::contact::ContactSubmission {
        ContactForm {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "1".into(),
            average_sales_volume: "$50,000+".into(),
            market_experience: "Asia".into(),
            message: "Hi".into(),
        }
        .validate()
        .expect("valid")
    }

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn contact_reply_rules() {
        assert_eq!(contact_reply(&reply(200, r#"{"ok":true}"#)), Ok(()));
        assert_eq!(
            contact_reply(&reply(200, r#"{"ok":false,"error":"quota"}"#)),
            Err(SubmitError::Rejected("quota".into()))
        );
        assert_eq!(
            contact_reply(&reply(200, "not json")),
            Err(SubmitError::Rejected("Submission failed".into()))
        );
        assert_eq!(contact_reply(&reply(500, r#"{"ok":true}"#)), Err(SubmitError::Status(500)));
    }

    #[test]
    fn booking_reply_only_checks_status() {
        assert_eq!(booking_reply(&reply(204, "")), Ok(()));
        assert_eq!(booking_reply(&reply(302, "")), Err(SubmitError::Status(302)));
    }

    #[test]
    fn contact_is_posted_as_json() {
        let s = Canned::new(200, r#"{"ok":true}"#);
        let outcome = pollster::block_on(submit_contact(&s, &endpoints(), &contact()));
        assert_eq!(outcome, Ok(()));
        let seen = s.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].content_type, Some("application/json"));
        assert!(seen[0].body.as_deref().is_some_and(|b| b.contains(r#""fullName":"Ana""#)));
    }

    #[test]
    fn booking_is_sent_as_query() {
        let s = Canned::new(200, "");
        let booking = DemoBooking {
            full_name: "Jan".into(),
            phone: "2".into(),
            budget: ">200K".into(),
            ..DemoBooking::default()
        }
        .validate()
        .expect("valid");
        let outcome = pollster::block_on(submit_booking(&s, &endpoints(), &booking));
        assert_eq!(outcome, Ok(()));
        let seen = s.seen.borrow();
        assert_eq!(seen[0].method, Method::Get);
        assert!(seen[0].url.starts_with("https://example.com/book?fullName=Jan&phone=2&"));
        assert!(seen[0].url.contains("budget=%3E200K"));
        assert_eq!(seen[0].body, None);
    }

    #[test]
    fn unconfigured_endpoint_sends_nothing() {
        let s = Canned::new(200, r#"{"ok":true}"#);
        let outcome = pollster::block_on(submit_contact(&s, &FormEndpoints::default(), &contact()));
        assert_eq!(outcome, Err(SubmitError::NotConfigured(FormKind::Contact)));
        assert!(s.seen.borrow().is_empty());
    }

    #[test]
    fn transport_errors_propagate() {
        let s = Canned {
            reply: Err(SubmitError::Transport("offline".into())),
            seen: RefCell::new(Vec::new()),
        };
        let outcome = pollster::block_on(submit_contact(&s, &endpoints(), &contact()));
        assert_eq!(outcome, Err(SubmitError::Transport("offline".into())));
    }

    #[test]
    fn status_messages() {
        let ok = StatusMessage::for_outcome(FormKind::Contact, &Ok(()));
        assert!(ok.is_success());
        assert_eq!(ok.hide_after_ms, Some(5000.0));
        let err = StatusMessage::for_outcome(FormKind::Contact, &Err(SubmitError::Status(500)));
        assert_eq!(err.text, "An error occurred while submitting the form. Please try again.");
        let booked = StatusMessage::for_outcome(FormKind::Booking, &Ok(()));
        assert_eq!(booked.hide_after_ms, None);

        let json = serde_json::to_value(&ok).expect("json");
        assert_eq!(json["kind"], "success");
        assert_eq!(json["hideAfterMs"], 5000.0);
    }
}
