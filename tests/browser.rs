// Browser interaction tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew::BaseComponent;
use yew_router::prelude::*;

use frontend_medilink::components::call_to_action::CallToActionSection;
use frontend_medilink::components::info_section::InfoSection;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(CtaApp)]
fn cta_app() -> Html {
    html! {
        <BrowserRouter>
            <CallToActionSection />
        </BrowserRouter>
    }
}

// Mount the component under a fresh div and give yew a tick to render into it
async fn mount<C>() -> web_sys::Element
where
    C: BaseComponent<Properties = ()>,
{
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<C>::with_root(root.clone()).render();
    yew::platform::time::sleep(Duration::from_millis(50)).await;

    root
}

#[wasm_bindgen_test]
async fn info_section_mounts_with_single_image_and_heading() {
    let root = mount::<InfoSection>().await;

    let images = root.query_selector_all("img").unwrap();
    assert_eq!(images.length(), 1);

    let image = root.query_selector("img").unwrap().unwrap();
    assert_eq!(
        image.get_attribute("alt").unwrap(),
        "Doctors and patients connecting through the MediLink platform"
    );

    let headings = root.query_selector_all("h2").unwrap();
    assert_eq!(headings.length(), 1);

    let text = root.text_content().unwrap();
    assert!(text.contains("Connecting Patients & Providers Across Sri Lanka"));
}

#[wasm_bindgen_test]
async fn cta_button_click_navigates_to_register() {
    let root = mount::<CtaApp>().await;

    let button: HtmlElement = root
        .query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(button.text_content().unwrap(), "Get Started Now");

    button.click();
    yew::platform::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(
        gloo::utils::window().location().pathname().unwrap(),
        "/register"
    );
}

#[wasm_bindgen_test]
async fn cta_button_pushes_history_once_per_activation() {
    let root = mount::<CtaApp>().await;

    let button: HtmlElement = root
        .query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let history = gloo::utils::window().history().unwrap();
    let before = history.length().unwrap();

    for _ in 0..3 {
        button.click();
        yew::platform::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(history.length().unwrap(), before + 3);
    assert_eq!(
        gloo::utils::window().location().pathname().unwrap(),
        "/register"
    );
}
