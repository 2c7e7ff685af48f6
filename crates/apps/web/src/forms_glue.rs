//! Form submission over `fetch`.

use forms::{
    BookingSubmission, ContactSubmission, FieldErrors, FormEndpoints, FormKind, HttpReply, Method, OutboundRequest,
    StatusMessage, SubmitError, Submitter, submit_booking, submit_contact,
};
use gloo_net::http::Request;
use serde::Serialize;

pub struct FetchSubmitter;

impl Submitter for FetchSubmitter {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, SubmitError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(ct) = request.content_type {
            builder = builder.header("Content-Type", ct);
        }
        let transport = |e: gloo_net::Error| SubmitError::Transport(e.to_string());
        let response = match &request.body {
            Some(body) => builder.body(body.clone()).map_err(transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport)?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}

/// What the page renders after a submit attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusMessage>,
}

impl SubmitReport {
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            status: None,
        }
    }

    pub fn finished(status: StatusMessage) -> Self {
        Self {
            errors: None,
            status: Some(status),
        }
    }
}

pub async fn send_contact(endpoints: &FormEndpoints, submission: &ContactSubmission) -> SubmitReport {
    let outcome = submit_contact(&FetchSubmitter, endpoints, submission).await;
    SubmitReport::finished(StatusMessage::for_outcome(FormKind::Contact, &outcome))
}

pub async fn send_booking(endpoints: &FormEndpoints, submission: &BookingSubmission) -> SubmitReport {
    let outcome = submit_booking(&FetchSubmitter, endpoints, submission).await;
    SubmitReport::finished(StatusMessage::for_outcome(FormKind::Booking, &outcome))
}

#[cfg(test)]
mod tests {
    use super::SubmitReport;
    use forms::{Field, FieldErrors, FormKind, StatusMessage};

    #[test]
    fn report_serializes_only_present_parts() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Phone, "Phone number is required");
        let json = serde_json::to_string(&SubmitReport::invalid(errors)).expect("json");
        assert_eq!(json, r#"{"errors":{"phone":"Phone number is required"}}"#);

        let done = SubmitReport::finished(StatusMessage::for_outcome(FormKind::Booking, &Ok(())));
        let value = serde_json::to_value(&done).expect("json");
        assert!(value.get("errors").is_none());
        assert_eq!(value["status"]["kind"], "success");
    }
}
