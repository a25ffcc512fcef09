use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod motion;
mod state;

mod components {
    pub mod brand;
    pub mod icons;
    pub mod nav;
}
mod sections {
    pub mod author;
    pub mod chords;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod pricing;
    pub mod problem;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
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
