// frontend_medilink/src/components/navbar.rs
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="navbar-brand">{ "MediLink" }</Link<Route>>
            <div class="navbar-links">
                <Link<Route> to={Route::Home} classes="navbar-link">{ "Home" }</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn btn-outline">{ "Sign Up" }</Link<Route>>
            </div>
        </nav>
    }
}
