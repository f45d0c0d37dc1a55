use crate::{api::registration, config_file::load_config, router::Route};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    let input_name = use_state(|| String::new());
    let input_email = use_state(|| String::new());
    let input_password = use_state(|| String::new());
    let ready = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let navigator = use_navigator().unwrap();

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                load_config().await;
                ready.set(true);
            });
            || ()
        });
    }

    let on_name_input = {
        let name = input_name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email_input = {
        let email = input_email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password_input = {
        let password = input_password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onclick = {
        let name = (*input_name).clone();
        let email = (*input_email).clone();
        let password = (*input_password).clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |_| {
            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match registration::register(&name, &email, &password).await {
                    Ok(_id) => {
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        error_message.set(Some(err));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    if !*ready {
        return html! { "Loading..." };
    }

    html! {
        <div class="register-container flex justify-center">
            <section class="register-card">
                <h1 class="mb-2">{ "Create your MediLink account" }</h1>

                { if let Some(error) = (*error_message).as_ref() {
                    html! { <div class="error-message mb-2" style="color: red;">{ error }</div> }
                } else {
                    html! {}
                }}

                <input
                    class="input"
                    type="text"
                    placeholder="Full name"
                    value={(*input_name).clone()}
                    oninput={on_name_input}
                    disabled={*is_loading}
                />
                <input
                    class="input"
                    type="email"
                    placeholder="Email"
                    value={(*input_email).clone()}
                    oninput={on_email_input}
                    disabled={*is_loading}
                />
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    value={(*input_password).clone()}
                    oninput={on_password_input}
                    disabled={*is_loading}
                />

                <button
                    class="btn btn-primary create_account"
                    onclick={onclick}
                    disabled={*is_loading
                        || input_name.is_empty()
                        || input_email.is_empty()
                        || input_password.is_empty()}
                >
                    { if *is_loading { "Creating account..." } else { "Create Account" } }
                </button>
            </section>
        </div>
    }
}
