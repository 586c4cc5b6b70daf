// Webhook endpoints are baked in at build time so hook ids never live in the
// source tree. Release builds read CALLBACK_WEBHOOK_URL / LEAD_WEBHOOK_URL
// from the build environment.

#[cfg(debug_assertions)]
pub fn get_callback_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/callback"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_callback_webhook_url() -> &'static str {
    match option_env!("CALLBACK_WEBHOOK_URL") {
        Some(url) => url,
        None => "",
    }
}

#[cfg(debug_assertions)]
pub fn get_lead_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/lead"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_lead_webhook_url() -> &'static str {
    match option_env!("LEAD_WEBHOOK_URL") {
        Some(url) => url,
        None => "",
    }
}
