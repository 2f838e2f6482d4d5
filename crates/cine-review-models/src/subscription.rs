use serde::{Deserialize, Serialize};

/// Full subscription form payload for POST /api/subscriptions/subscribe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub email_notifications: bool,
    pub whatsapp_notifications: bool,
    pub subscription_type: String,
}

impl SubscriptionRequest {
    pub const WEEKLY_DIGEST: &'static str = "weekly_digest";
}

/// Minimal newsletter signup for POST /api/subscriptions/quick-subscribe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickSubscribeRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Shared shape of both subscribe responses.
///
/// A repeat subscribe attempt is not an error: the backend flags it with
/// `already_subscribed` and the email stays the dedup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub already_subscribed: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnsubscribeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_subscribed_defaults_to_false() {
        let response: SubscribeResponse =
            serde_json::from_str(r#"{"status": "success", "subscription_id": "abc"}"#).unwrap();
        assert!(!response.already_subscribed);
        assert_eq!(response.subscription_id.as_deref(), Some("abc"));
    }

    #[test]
    fn phone_number_omitted_when_absent() {
        let request = SubscriptionRequest {
            name: "Priya".into(),
            email: "priya@example.com".into(),
            phone_number: None,
            email_notifications: true,
            whatsapp_notifications: false,
            subscription_type: SubscriptionRequest::WEEKLY_DIGEST.into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone_number").is_none());
    }
}
