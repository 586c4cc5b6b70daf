use log::{info, Level};
use yew::prelude::*;

mod config;
mod pages {
    pub mod landing;
}
mod components {
    pub mod audit_results;
    pub mod callback_modal;
    pub mod lead_form;
    pub mod notification;
}
mod services {
    pub mod webhook;
}
mod utils {
    pub mod sanitize;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
