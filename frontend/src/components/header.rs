use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, COMPANY_INFO, NAVIGATION_LINKS};
use crate::host;
use crate::Route;

const SCROLLED_THRESHOLD: f64 = 24.0;

fn contact_on_whatsapp() {
    let href = config::whatsapp_message_href(COMPANY_INFO.whatsapp, &config::default_enquiry_message());
    if let Err(err) = host::open_in_new_tab(&href) {
        warn!("{}", err);
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("could not watch scrolling: {}", host::js_detail(&err));
                }
            }

            move || {
                if let Some(window) = window {
                    if let Err(err) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("could not remove scroll listener: {}", host::js_detail(&err));
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let get_quote = Callback::from(|_: MouseEvent| contact_on_whatsapp());

    let whatsapp_mobile = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            contact_on_whatsapp();
            menu_open.set(false);
        })
    };

    let links = |class: &'static str, active_class: &'static str| -> Html {
        NAVIGATION_LINKS
            .iter()
            .filter_map(|link| Route::recognize(link.href).map(|route| (link, route)))
            .map(|(link, route)| {
                let active = current.as_ref() == Some(&route);
                html! {
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={route} classes={classes!(class, active.then(|| active_class))}>
                            {link.label}
                        </Link<Route>>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-icon">{"🐦"}</span>
                    <span>
                        <span class="brand-name">{COMPANY_INFO.name}</span>
                        <span class="brand-tagline">{COMPANY_INFO.tagline}</span>
                    </span>
                </Link<Route>>

                <nav class="nav-links">
                    { links("nav-link", "active") }
                </nav>

                <div class="nav-actions">
                    <a href={config::phone_call_href(COMPANY_INFO.phone)} class="nav-phone">
                        {"📞 "}{COMPANY_INFO.phone}
                    </a>
                    <button class="nav-quote-button" onclick={get_quote}>
                        {"Get Quote"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link", "active") }
                            <div class="mobile-contact">
                                <a href={config::phone_call_href(COMPANY_INFO.phone)} class="nav-phone">
                                    {"📞 "}{COMPANY_INFO.phone}
                                </a>
                                <button class="nav-quote-button" onclick={whatsapp_mobile}>
                                    {"Contact on WhatsApp"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
