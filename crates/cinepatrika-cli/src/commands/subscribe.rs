use crate::commands;
use crate::output::Output;
use cine_review_client::ReviewApi;
use cine_review_config::SiteConfig;
use cine_review_core::{FormEvent, QuickSubscribeForm, SubscriptionForm};
use color_eyre::Result;
use dialoguer::Input;
use std::time::Instant;

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

fn prompt_optional(label: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

pub async fn run_quick_subscribe(
    config: &SiteConfig,
    email: Option<String>,
    name: Option<String>,
    output: &Output,
) -> Result<()> {
    let api = commands::api_client(config)?;

    let mut form = QuickSubscribeForm::new();
    form.email = match email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    form.name = name.unwrap_or_default();

    if !form.submit(&api, Instant::now()).await {
        output.error("An email address is required.");
        return Ok(());
    }
    if let Some(banner) = form.banner() {
        commands::print_banner(banner, output);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_subscribe(
    config: &SiteConfig,
    email: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    whatsapp: bool,
    no_email_notifications: bool,
    output: &Output,
) -> Result<()> {
    let api = commands::api_client(config)?;

    let mut form = SubscriptionForm::new();
    let email = match email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let name = match name {
        Some(name) => name,
        None => prompt("Name")?,
    };
    let phone = match phone {
        Some(phone) => phone,
        None => prompt_optional("Phone number (optional)")?,
    };

    form.apply(FormEvent::EmailChanged(email));
    form.apply(FormEvent::NameChanged(name));
    form.apply(FormEvent::PhoneChanged(phone));
    form.apply(FormEvent::EmailNotificationsToggled(!no_email_notifications));
    form.apply(FormEvent::WhatsappNotificationsToggled(whatsapp));

    if whatsapp && !form.whatsapp_notifications {
        output.warn("WhatsApp notifications need a phone number; leaving them off.");
    }

    form.submit(&api, Instant::now()).await;
    if let Some(banner) = form.banner() {
        commands::print_banner(banner, output);
    }
    Ok(())
}

pub async fn run_unsubscribe(config: &SiteConfig, email: &str, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let response = api.unsubscribe(email).await?;

    let message = response
        .message
        .unwrap_or_else(|| format!("{email} has been unsubscribed."));
    output.success(message);
    Ok(())
}
