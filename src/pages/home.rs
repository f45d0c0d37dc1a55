// frontend_medilink/src/pages/home.rs
use yew::prelude::*;

use crate::components::call_to_action::CallToActionSection;
use crate::components::footer::Footer;
use crate::components::info_section::InfoSection;
use crate::components::navbar::Navbar;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with((), move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {
        <div class="landing-page">
            <Navbar />
            <header class="hero">
                <h1 class="hero-title">{ "Healthcare That Comes to You" }</h1>
                <p class="hero-subtitle">
                    { "Find doctors, book appointments and manage your health records online." }
                </p>
            </header>
            <InfoSection />
            <CallToActionSection />
            <Footer />
        </div>
    }
}
