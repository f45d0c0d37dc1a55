// frontend_medilink/src/components/info_section.rs
use yew::prelude::*;

#[function_component(InfoSection)]
pub fn info_section() -> Html {
    html! {
        <section class="info-section">
            <div class="info-image">
                <img
                    src="static/img/connect-care.svg"
                    alt="Doctors and patients connecting through the MediLink platform"
                />
            </div>
            <div class="info-text">
                <h2 class="info-title">{ "Connecting Patients & Providers Across Sri Lanka" }</h2>
                <p>
                    { "MediLink brings hospitals, clinics and independent practitioners \
                       together on one platform, so booking a consultation takes minutes \
                       instead of phone calls." }
                </p>
                <p>
                    { "Patients can find the right specialist, compare availability and \
                       keep their medical records in one place, whether they live in \
                       Colombo or a rural village." }
                </p>
                <p>
                    { "Providers get a simple schedule for managing appointments and \
                       reaching the patients who need them most." }
                </p>
            </div>
        </section>
    }
}
