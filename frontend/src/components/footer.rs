use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, COMPANY_INFO, NAVIGATION_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{"🐦 "}{COMPANY_INFO.name}</h3>
                    <p>{COMPANY_INFO.tagline}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    { for NAVIGATION_LINKS.iter().filter_map(|link| {
                        Route::recognize(link.href).map(|route| html! {
                            <Link<Route> to={route} classes="footer-link">{link.label}</Link<Route>>
                        })
                    }) }
                </div>
                <div class="footer-contact">
                    <h4>{"Get in touch"}</h4>
                    <a href={config::phone_call_href(COMPANY_INFO.phone)}>{COMPANY_INFO.phone}</a>
                    <a href={format!("mailto:{}", COMPANY_INFO.email)}>{COMPANY_INFO.email}</a>
                    <a
                        href={config::whatsapp_message_href(COMPANY_INFO.whatsapp, &config::default_enquiry_message())}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"WhatsApp"}
                    </a>
                    <p>{COMPANY_INFO.address}</p>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, COMPANY_INFO.name)}
            </div>
        </footer>
    }
}
