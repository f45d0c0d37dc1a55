use frontend_medilink::router::AppRouter;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppRouter />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
