use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::{category_info, filter_by_category, filter_summary, ALL_KEY, CATEGORIES};
use crate::components::call_to_action::CallToAction;
use crate::components::motion::FadeInUp;
use crate::components::section_divider::{Align, SectionDivider};
use crate::data::gallery::{GalleryImage, GALLERY_IMAGES};
use crate::data::services::TRAVEL_MOMENTS;

/// Matches the modal fade-out in the stylesheet.
const MODAL_EXIT_MS: u32 = 200;

fn badge(image: &GalleryImage) -> String {
    let icon = category_info(image.category.key()).map(|info| info.icon).unwrap_or("");
    format!("{} {}", icon, image.destination)
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    image: GalleryImage,
    closing: bool,
    on_close: Callback<()>,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let image = &props.image;

    html! {
        <div class={classes!("lightbox", props.closing.then(|| "closing"))} onclick={close.clone()}>
            <div class="lightbox-panel" onclick={keep_open}>
                <div class="lightbox-image">
                    <img src={image.src} alt={image.title} />
                    <button class="lightbox-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <div class="lightbox-body">
                    <span class="lightbox-badge">{badge(image)}</span>
                    <h2>{image.title}</h2>
                    <p>{image.description}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let selected = use_state(|| ALL_KEY.to_string());
    let selected_image = use_state(|| None::<GalleryImage>);
    let closing = use_state(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let filtered = use_memo(
        |selected: &String| filter_by_category(GALLERY_IMAGES, selected).into_owned(),
        (*selected).clone(),
    );

    let select_category = |key: &'static str| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("gallery filter: {}", key);
            selected.set(key.to_string());
        })
    };

    let open_image = |image: &GalleryImage| {
        let image = image.clone();
        let selected_image = selected_image.clone();
        let closing = closing.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            close_timer.borrow_mut().take();
            closing.set(false);
            selected_image.set(Some(image.clone()));
        })
    };

    let close_image = {
        let selected_image = selected_image.clone();
        let closing = closing.clone();
        let close_timer: Rc<RefCell<Option<Timeout>>> = close_timer.clone();
        Callback::from(move |_: ()| {
            closing.set(true);
            let selected_image = selected_image.clone();
            let closing = closing.clone();
            let timeout = Timeout::new(MODAL_EXIT_MS, move || {
                selected_image.set(None);
                closing.set(false);
            });
            *close_timer.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <div class="gallery-page">
            <section class="page-hero gallery-hero">
                <div class="page-hero-gradient" aria-hidden="true"></div>
                <div class="container page-hero-content">
                    <FadeInUp>
                        <h1>{"Travel Gallery"}</h1>
                    </FadeInUp>
                    <FadeInUp index={2}>
                        <p>{"Discover the beauty of destinations through the eyes of our travelers"}</p>
                    </FadeInUp>
                </div>
            </section>

            <SectionDivider align={Align::Right} />

            <section class="gallery-filters">
                <FadeInUp class="filter-bar">
                    { for CATEGORIES.iter().map(|category| html! {
                        <button
                            key={category.key}
                            class={classes!("filter-button", (*selected == category.key).then(|| "active"))}
                            onclick={select_category(category.key)}
                        >
                            <span>{category.icon}</span>
                            <span>{category.label}</span>
                        </button>
                    }) }
                </FadeInUp>
            </section>

            <SectionDivider align={Align::Left} />

            <section class="section">
                <div class="container">
                    <FadeInUp class="section-header">
                        <p class="gallery-count">{filter_summary(filtered.len(), &selected)}</p>
                    </FadeInUp>

                    // Keyed on the filter so the stagger replays on every change
                    <div key={(*selected).clone()} class="gallery-grid">
                        { for filtered.iter().enumerate().map(|(i, image)| html! {
                            <FadeInUp key={image.id} index={i}>
                                <div class="card gallery-card" onclick={open_image(image)}>
                                    <div class="gallery-image">
                                        <img src={image.src} alt={image.title} loading="lazy" />
                                        <span class="gallery-badge">{badge(image)}</span>
                                        <div class="gallery-overlay">
                                            <h3>{image.title}</h3>
                                            <p>{image.description}</p>
                                        </div>
                                        <div class="gallery-zoom">{"🔍"}</div>
                                    </div>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>

                    {
                        if filtered.is_empty() {
                            html! {
                                <FadeInUp class="gallery-empty">
                                    <p>{"No photos found for the selected category."}</p>
                                </FadeInUp>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            <SectionDivider align={Align::Right} />

            <section class="section">
                <div class="container">
                    <FadeInUp class="section-header">
                        <h2>{"Capture Your Travel Moments"}</h2>
                        <p>
                            {"Every journey creates memories worth treasuring. Share your travel photos with us and inspire others to explore the world."}
                        </p>
                    </FadeInUp>
                    <div class="card-grid three">
                        { for TRAVEL_MOMENTS.iter().enumerate().map(|(i, moment)| html! {
                            <FadeInUp index={i} step_ms={200}>
                                <div class="card benefit-card">
                                    <div class="benefit-icon">{moment.icon}</div>
                                    <h3>{moment.title}</h3>
                                    <p>{moment.description}</p>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>
                </div>
            </section>

            <SectionDivider align={Align::Left} />

            <CallToAction
                title="Ready to Create Your Own Travel Story?"
                subtitle="Join thousands of happy travelers who have created unforgettable memories with us"
                primary_label="Plan Your Trip"
                secondary_label="View Destinations"
            />

            {
                match &*selected_image {
                    Some(image) => html! {
                        <Lightbox image={image.clone()} closing={*closing} on_close={close_image} />
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
