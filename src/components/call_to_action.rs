// frontend_medilink/src/components/call_to_action.rs
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(CallToActionSection)]
pub fn call_to_action_section() -> Html {
    let navigator = use_navigator().unwrap();

    let onclick = Callback::from(move |_| {
        navigator.push(&Route::Register);
    });

    html! {
        <section class="cta-section">
            <div class="cta-content">
                <h2 class="cta-title">{ "Ready to Take Control of Your Healthcare?" }</h2>
                <p class="cta-subtitle">
                    { "Create a free account and book your first consultation today." }
                </p>
                <button class="btn btn-primary cta-button" {onclick}>
                    { "Get Started Now" }
                </button>
            </div>
        </section>
    }
}
