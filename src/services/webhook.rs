use chrono::{SecondsFormat, Utc};
use futures::future::{select, Either};
use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config;
use crate::utils::sanitize::sanitize_phone_input;

const SOURCE_TAG: &str = "LeGuichetPro Website";
const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// One failed submission, already carrying the message the visitor should
/// read. Validation failures never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Delivery(String),
    #[error("{0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Validation(msg)
            | SubmitError::Delivery(msg)
            | SubmitError::Unexpected(msg) => msg,
        }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct CallbackRequestData {
    pub name: String,
    pub phone: String,
}

#[derive(Clone, PartialEq, Default)]
pub struct LeadRequestData {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub url: String,
}

/// Body shape the automation platform replies with. Only the HTTP status
/// drives behavior; `message` feeds the classifier fallback and the rest is
/// kept for forward compatibility.
#[derive(Deserialize, Debug)]
pub struct WebhookResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub data: Option<Value>,
    pub status: Option<u16>,
    pub code: Option<String>,
}

/// Checks a callback submission before any I/O. Returns the cleaned 10-digit
/// phone so the payload carries exactly the validated digits.
pub fn validate_callback(data: &CallbackRequestData) -> Result<String, SubmitError> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(SubmitError::Validation("Le nom est requis".to_string()));
    }
    if name.chars().count() < 2 || name.chars().count() > 50 {
        return Err(SubmitError::Validation(
            "Le nom doit contenir entre 2 et 50 caractères".to_string(),
        ));
    }
    validate_phone(&data.phone)
}

/// Checks a lead submission before any I/O. The remaining fields are bounded
/// by the form controls themselves.
pub fn validate_lead(data: &LeadRequestData) -> Result<String, SubmitError> {
    if data.url.trim().is_empty() {
        return Err(SubmitError::Validation("L'URL est requise".to_string()));
    }
    validate_phone(&data.phone)
}

fn validate_phone(raw: &str) -> Result<String, SubmitError> {
    let clean = sanitize_phone_input(raw);
    if clean.len() != 10 {
        return Err(SubmitError::Validation(
            "Le numéro de téléphone doit contenir 10 chiffres".to_string(),
        ));
    }
    Ok(clean)
}

fn callback_payload(data: &CallbackRequestData, clean_phone: &str, sent_at: &str) -> Value {
    json!({
        "NOM": data.name.trim(),
        "NUMERO DE TELEPHONE": clean_phone,
        "SOURCE": SOURCE_TAG,
        "TYPE": "callback",
        "DATE": sent_at,
    })
}

fn lead_payload(data: &LeadRequestData, clean_phone: &str, sent_at: &str) -> Value {
    json!({
        "NOM": data.last_name.trim(),
        "PRENOM": data.first_name.trim(),
        "NUMERO DE TELEPHONE": clean_phone,
        "EMAIL": data.email.trim(),
        "SOCIETE": data.company.trim(),
        "ROLE": data.role,
        "URL": data.url.trim(),
        "SOURCE": SOURCE_TAG,
        "TYPE": "lead",
        "DATE": sent_at,
    })
}

fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn send_callback_request(data: &CallbackRequestData) -> Result<(), SubmitError> {
    let phone = validate_callback(data)?;
    let payload = callback_payload(data, &phone, &iso_timestamp());
    post_payload(config::get_callback_webhook_url(), &payload).await
}

pub async fn send_lead_request(data: &LeadRequestData) -> Result<(), SubmitError> {
    let phone = validate_lead(data)?;
    let payload = lead_payload(data, &phone, &iso_timestamp());
    post_payload(config::get_lead_webhook_url(), &payload).await
}

/// Exactly one POST per call. Success is strictly HTTP 200; everything else
/// comes back as a classified `SubmitError`.
async fn post_payload(url: &str, payload: &Value) -> Result<(), SubmitError> {
    let request = Request::post(url)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|_| {
            SubmitError::Unexpected(
                "Une erreur inattendue est survenue. Veuillez réessayer.".to_string(),
            )
        })?;

    // Browser fetch has no timeout of its own; race it against the 15s bound.
    let response = match select(
        Box::pin(request.send()),
        Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS)),
    )
    .await
    {
        Either::Left((Ok(response), _)) => response,
        Either::Left((Err(err), _)) => {
            error!("Webhook request failed:", err.to_string());
            return Err(no_response_error());
        }
        Either::Right(_) => {
            error!("Webhook request timed out after", REQUEST_TIMEOUT_MS, "ms");
            return Err(no_response_error());
        }
    };

    let status = response.status();
    if status == 200 {
        return Ok(());
    }

    let body = response.json::<WebhookResponse>().await.ok();
    error!("Webhook error:", status, format!("{:?}", body));
    Err(classify_status(status, body.and_then(|b| b.message)))
}

fn no_response_error() -> SubmitError {
    SubmitError::Delivery("Impossible de contacter le serveur. Veuillez réessayer.".to_string())
}

/// Total status -> message map for responses that did arrive. Non-200 2xx and
/// 3xx count as failed sends too.
pub fn classify_status(status: u16, server_message: Option<String>) -> SubmitError {
    let message = match status {
        201..=399 => "Erreur lors de l'envoi du formulaire".to_string(),
        400 => "Format de données invalide. Veuillez réessayer.".to_string(),
        401 | 403 => "Erreur d'authentification avec le service.".to_string(),
        404 => "Service temporairement indisponible.".to_string(),
        429 => "Trop de requêtes. Veuillez patienter quelques minutes.".to_string(),
        500 | 502 | 503 | 504 => {
            "Service temporairement indisponible. Veuillez réessayer plus tard.".to_string()
        }
        _ => server_message.unwrap_or_else(|| "Une erreur est survenue".to_string()),
    };
    SubmitError::Delivery(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_fixture() -> LeadRequestData {
        LeadRequestData {
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            phone: "06 12 34 56 78".to_string(),
            email: "marie@exemple.fr".to_string(),
            company: "Boulangerie Dupont".to_string(),
            role: "CEO".to_string(),
            url: "exemple.fr".to_string(),
        }
    }

    #[test]
    fn callback_requires_a_name() {
        let data = CallbackRequestData {
            name: "   ".to_string(),
            phone: "0612345678".to_string(),
        };
        assert_eq!(
            validate_callback(&data),
            Err(SubmitError::Validation("Le nom est requis".to_string()))
        );
    }

    #[test]
    fn callback_rejects_single_character_name() {
        let data = CallbackRequestData {
            name: "A".to_string(),
            phone: "0612345678".to_string(),
        };
        assert!(matches!(
            validate_callback(&data),
            Err(SubmitError::Validation(msg)) if msg.contains("entre 2 et 50")
        ));
    }

    #[test]
    fn callback_rejects_short_phone() {
        let data = CallbackRequestData {
            name: "Marie".to_string(),
            phone: "06 12 34".to_string(),
        };
        assert_eq!(
            validate_callback(&data),
            Err(SubmitError::Validation(
                "Le numéro de téléphone doit contenir 10 chiffres".to_string()
            ))
        );
    }

    #[test]
    fn callback_accepts_formatted_phone() {
        let data = CallbackRequestData {
            name: "Marie".to_string(),
            phone: "06 12 34 56 78".to_string(),
        };
        assert_eq!(validate_callback(&data), Ok("0612345678".to_string()));
    }

    #[test]
    fn lead_requires_url() {
        let mut data = lead_fixture();
        data.url = "  ".to_string();
        assert_eq!(
            validate_lead(&data),
            Err(SubmitError::Validation("L'URL est requise".to_string()))
        );
    }

    #[test]
    fn lead_validates_phone_after_stripping() {
        let data = lead_fixture();
        assert_eq!(validate_lead(&data), Ok("0612345678".to_string()));
    }

    #[test]
    fn callback_payload_has_fixed_keys() {
        let data = CallbackRequestData {
            name: " Marie ".to_string(),
            phone: "06 12 34 56 78".to_string(),
        };
        let payload = callback_payload(&data, "0612345678", "2025-01-15T10:30:00.000Z");
        let obj = payload.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["NOM"], "Marie");
        assert_eq!(obj["NUMERO DE TELEPHONE"], "0612345678");
        assert_eq!(obj["SOURCE"], "LeGuichetPro Website");
        assert_eq!(obj["TYPE"], "callback");
        assert_eq!(obj["DATE"], "2025-01-15T10:30:00.000Z");
    }

    #[test]
    fn lead_payload_has_fixed_keys() {
        let data = lead_fixture();
        let payload = lead_payload(&data, "0612345678", "2025-01-15T10:30:00.000Z");
        let obj = payload.as_object().unwrap();
        assert_eq!(obj.len(), 10);
        assert_eq!(obj["NOM"], "Dupont");
        assert_eq!(obj["PRENOM"], "Marie");
        assert_eq!(obj["NUMERO DE TELEPHONE"], "0612345678");
        assert_eq!(obj["EMAIL"], "marie@exemple.fr");
        assert_eq!(obj["SOCIETE"], "Boulangerie Dupont");
        assert_eq!(obj["ROLE"], "CEO");
        assert_eq!(obj["URL"], "exemple.fr");
        assert_eq!(obj["SOURCE"], "LeGuichetPro Website");
        assert_eq!(obj["TYPE"], "lead");
    }

    #[test]
    fn classifier_maps_client_errors() {
        assert_eq!(
            classify_status(400, None).user_message(),
            "Format de données invalide. Veuillez réessayer."
        );
        assert_eq!(
            classify_status(401, None).user_message(),
            "Erreur d'authentification avec le service."
        );
        assert_eq!(
            classify_status(403, None).user_message(),
            "Erreur d'authentification avec le service."
        );
        assert_eq!(
            classify_status(404, None).user_message(),
            "Service temporairement indisponible."
        );
        assert_eq!(
            classify_status(429, None).user_message(),
            "Trop de requêtes. Veuillez patienter quelques minutes."
        );
    }

    #[test]
    fn classifier_maps_server_errors_to_retry_later() {
        for status in [500, 502, 503, 504] {
            assert_eq!(
                classify_status(status, None).user_message(),
                "Service temporairement indisponible. Veuillez réessayer plus tard."
            );
        }
    }

    #[test]
    fn classifier_treats_other_2xx_as_failed_send() {
        for status in [201, 204, 302] {
            assert_eq!(
                classify_status(status, None).user_message(),
                "Erreur lors de l'envoi du formulaire"
            );
        }
    }

    #[test]
    fn classifier_prefers_server_message_for_unknown_status() {
        assert_eq!(
            classify_status(418, Some("Quota dépassé".to_string())).user_message(),
            "Quota dépassé"
        );
        assert_eq!(
            classify_status(418, None).user_message(),
            "Une erreur est survenue"
        );
    }

    #[test]
    fn webhook_response_parses_partial_bodies() {
        let body: WebhookResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(body.success, Some(false));
        assert!(body.message.is_none());

        let body: WebhookResponse =
            serde_json::from_str(r#"{"message": "ok", "code": "E42", "status": 207}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("ok"));
        assert_eq!(body.code.as_deref(), Some("E42"));
        assert_eq!(body.status, Some(207));
    }
}
