//! Subscription form state.
//!
//! Explicit state + event dispatch instead of UI callbacks: forms own their
//! fields and status banner, and every mutation goes through a method that a
//! test can drive directly. Failures surface an inline banner and the user
//! resubmits manually; there is no automatic retry.

use cine_review_client::ReviewApi;
use cine_review_models::{QuickSubscribeRequest, SubscriptionRequest};
use std::time::{Duration, Instant};
use tracing::debug;

/// Status banners clear themselves after this window, regardless of user
/// interaction.
pub const BANNER_TTL: Duration = Duration::from_secs(5);

pub const MSG_QUICK_SUBSCRIBED: &str = "Successfully subscribed to weekly digest! 🎉";
pub const MSG_ALREADY_SUBSCRIBED: &str = "You're already subscribed! 🎬";
pub const MSG_SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again.";
pub const MSG_FULL_SUBSCRIBED: &str =
    "Successfully subscribed! Welcome to The Voice of Cinema family! 🎬";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    expires_at: Instant,
}

impl Banner {
    fn new(kind: BannerKind, message: impl Into<String>, now: Instant) -> Self {
        Self { kind, message: message.into(), expires_at: now + BANNER_TTL }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Footer newsletter signup: email required, name optional.
#[derive(Debug, Default)]
pub struct QuickSubscribeForm {
    pub email: String,
    pub name: String,
    banner: Option<Banner>,
}

impl QuickSubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Drop the banner once its display window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|banner| banner.is_expired(now)) {
            self.banner = None;
        }
    }

    /// Submit the form. A submit without an email is a no-op, mirroring the
    /// disabled button. Returns whether a request was issued.
    pub async fn submit(&mut self, api: &impl ReviewApi, now: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.banner = None;

        let request = QuickSubscribeRequest {
            email: self.email.clone(),
            name: (!self.name.is_empty()).then(|| self.name.clone()),
        };

        match api.quick_subscribe(&request).await {
            Ok(response) if response.already_subscribed => {
                debug!("quick subscribe: {} already on the digest", self.email);
                self.banner = Some(Banner::new(BannerKind::Success, MSG_ALREADY_SUBSCRIBED, now));
            }
            Ok(_) => {
                self.banner = Some(Banner::new(BannerKind::Success, MSG_QUICK_SUBSCRIBED, now));
                self.email.clear();
                self.name.clear();
            }
            Err(err) => {
                debug!("quick subscribe failed: {}", err);
                self.banner = Some(Banner::new(BannerKind::Error, MSG_SUBSCRIBE_FAILED, now));
            }
        }
        true
    }
}

/// Field-level events for the full subscription modal.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    EmailChanged(String),
    NameChanged(String),
    PhoneChanged(String),
    EmailNotificationsToggled(bool),
    WhatsappNotificationsToggled(bool),
}

/// Full subscription modal: email and name required; the WhatsApp toggle is
/// gated on a phone number being present.
#[derive(Debug)]
pub struct SubscriptionForm {
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub email_notifications: bool,
    pub whatsapp_notifications: bool,
    banner: Option<Banner>,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            phone_number: String::new(),
            email_notifications: true,
            whatsapp_notifications: false,
            banner: None,
        }
    }
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::EmailChanged(email) => self.email = email,
            FormEvent::NameChanged(name) => self.name = name,
            FormEvent::PhoneChanged(phone) => {
                self.phone_number = phone;
                // The checkbox cannot stay set without a number to send to.
                if self.phone_number.is_empty() {
                    self.whatsapp_notifications = false;
                }
            }
            FormEvent::EmailNotificationsToggled(value) => self.email_notifications = value,
            FormEvent::WhatsappNotificationsToggled(value) => {
                self.whatsapp_notifications = value && !self.phone_number.is_empty();
            }
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.is_empty() {
            return Err("Email is required");
        }
        if self.name.is_empty() {
            return Err("Name is required");
        }
        Ok(())
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|banner| banner.is_expired(now)) {
            self.banner = None;
        }
    }

    fn reset_fields(&mut self) {
        *self = Self { banner: self.banner.take(), ..Self::default() };
    }

    /// Submit the form; invalid forms surface the validation message as an
    /// error banner without issuing a request.
    pub async fn submit(&mut self, api: &impl ReviewApi, now: Instant) -> bool {
        if let Err(message) = self.validate() {
            self.banner = Some(Banner::new(BannerKind::Error, message, now));
            return false;
        }
        self.banner = None;

        let request = SubscriptionRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: (!self.phone_number.is_empty()).then(|| self.phone_number.clone()),
            email_notifications: self.email_notifications,
            whatsapp_notifications: self.whatsapp_notifications,
            subscription_type: SubscriptionRequest::WEEKLY_DIGEST.into(),
        };

        match api.subscribe(&request).await {
            Ok(response) if response.already_subscribed => {
                self.banner = Some(Banner::new(BannerKind::Success, MSG_ALREADY_SUBSCRIBED, now));
            }
            Ok(_) => {
                self.banner = Some(Banner::new(BannerKind::Success, MSG_FULL_SUBSCRIBED, now));
                self.reset_fields();
            }
            Err(err) => {
                // Backend detail messages surface verbatim when present.
                let message = err.detail().unwrap_or(MSG_SUBSCRIBE_FAILED).to_string();
                self.banner = Some(Banner::new(BannerKind::Error, message, now));
            }
        }
        true
    }
}
