// frontend_medilink/src/components/footer.rs
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p class="footer-tagline">{ "MediLink - healthcare without the waiting room." }</p>
            <div class="footer-links">
                <Link<Route> to={Route::Register}>{ "Join MediLink" }</Link<Route>>
            </div>
            <p class="footer-copyright">{ "© 2025 MediLink" }</p>
        </footer>
    }
}
