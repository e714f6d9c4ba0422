use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::motion::FadeInUp;
use crate::config::{self, COMPANY_INFO};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub primary_label: AttrValue,
    pub secondary_label: AttrValue,
}

/// Closing banner: WhatsApp enquiry plus a link to the destinations list.
#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let whatsapp = config::whatsapp_message_href(COMPANY_INFO.whatsapp, &config::default_enquiry_message());

    html! {
        <section class="section cta">
            <div class="cta-shade" aria-hidden="true"></div>
            <div class="container cta-content">
                <FadeInUp>
                    <h2>{props.title.clone()}</h2>
                    <p>{props.subtitle.clone()}</p>
                </FadeInUp>
                <FadeInUp index={2} class="cta-buttons">
                    <a href={whatsapp} target="_blank" rel="noopener noreferrer" class="button light">
                        {props.primary_label.clone()}
                    </a>
                    <Link<Route> to={Route::Destinations} classes="button outline-light">
                        {props.secondary_label.clone()}
                    </Link<Route>>
                </FadeInUp>
            </div>
        </section>
    }
}
