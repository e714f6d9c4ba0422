use serde::Serialize;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::motion::FadeInUp;
use crate::components::search_form::SearchBar;
use crate::components::section_divider::{Align, SectionDivider};
use crate::config::{get_site_url, COMPANY_INFO};
use crate::data::destinations::{badge_for, DESTINATIONS};
use crate::data::services::{HERO_HIGHLIGHTS, SERVICES, TESTIMONIALS};
use crate::Route;

const HOME_DESTINATIONS: usize = 6;
const HOME_SERVICES: usize = 4;

#[derive(Serialize)]
struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    telephone: &'static str,
    email: &'static str,
    #[serde(rename = "contactType")]
    contact_type: &'static str,
}

#[derive(Serialize)]
struct OrganizationSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    slogan: &'static str,
    url: String,
    #[serde(rename = "contactPoint")]
    contact_point: ContactPoint,
}

#[derive(Serialize)]
struct WebsiteSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: String,
}

fn structured_data() -> Vec<String> {
    let organization = OrganizationSchema {
        context: "https://schema.org",
        kind: "TravelAgency",
        name: COMPANY_INFO.name,
        slogan: COMPANY_INFO.tagline,
        url: get_site_url().to_string(),
        contact_point: ContactPoint {
            kind: "ContactPoint",
            telephone: COMPANY_INFO.phone,
            email: COMPANY_INFO.email,
            contact_type: "customer service",
        },
    };
    let website = WebsiteSchema {
        context: "https://schema.org",
        kind: "WebSite",
        name: COMPANY_INFO.name,
        url: get_site_url().to_string(),
    };
    [serde_json::to_string(&organization), serde_json::to_string(&website)]
        .into_iter()
        .filter_map(Result::ok)
        .collect()
}

#[function_component(Hero)]
fn hero() -> Html {
    let navigator = use_navigator();
    let explore = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Destinations);
        }
    });

    html! {
        <section class="hero">
            <div class="hero-background" aria-hidden="true"></div>
            <div class="hero-gradient" aria-hidden="true"></div>
            <div class="hero-arrows" aria-hidden="true">
                <svg class="hero-arrow left" viewBox="0 0 100 100" fill="none">
                    <path d="M10 50 L90 50 M70 30 L90 50 L70 70" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
                <svg class="hero-arrow right" viewBox="0 0 100 100" fill="none">
                    <path d="M10 50 L90 50 M70 30 L90 50 L70 70" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
            </div>

            <div class="hero-content">
                <FadeInUp>
                    <h1 class="hero-title">{COMPANY_INFO.name}</h1>
                    <p class="hero-tagline">{COMPANY_INFO.tagline}</p>
                    <p class="hero-subtitle">
                        {"Experience the world with our personalized travel services. No online bookings, just authentic personal service and unforgettable travel experiences."}
                    </p>
                </FadeInUp>

                <FadeInUp index={3}>
                    <button class="hero-cta outline" onclick={explore}>{"Explore Destinations"}</button>
                </FadeInUp>

                <FadeInUp index={4}>
                    <SearchBar />
                </FadeInUp>

                <div class="hero-highlights">
                    { for HERO_HIGHLIGHTS.iter().enumerate().map(|(i, h)| html! {
                        <FadeInUp index={6 + i}>
                            <div class="hero-highlight">
                                <div class="hero-highlight-icon">{h.icon}</div>
                                <h3>{h.title}</h3>
                                <p>{h.description}</p>
                            </div>
                        </FadeInUp>
                    }) }
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">{"↓"}</div>
        </section>
    }
}

#[function_component(ServicesPreview)]
fn services_preview() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <FadeInUp class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Everything you need for a stress-free trip, handled by people who care."}</p>
                </FadeInUp>
                <div class="card-grid four">
                    { for SERVICES.iter().take(HOME_SERVICES).enumerate().map(|(i, service)| html! {
                        <FadeInUp key={service.id} index={i} step_ms={200}>
                            <div class="card service-card">
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </FadeInUp>
                    }) }
                </div>
                <div class="section-footer">
                    <Link<Route> to={Route::Services} classes="button outline">{"All Services"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(DestinationsPreview)]
fn destinations_preview() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <FadeInUp class="section-header">
                    <h2>{"Popular Destinations"}</h2>
                    <p>
                        {"Discover breathtaking destinations around the world. From serene beaches to majestic mountains, we'll help you create unforgettable memories wherever your heart desires to go."}
                    </p>
                </FadeInUp>
                <div class="card-grid three">
                    { for DESTINATIONS.iter().take(HOME_DESTINATIONS).enumerate().map(|(i, destination)| html! {
                        <FadeInUp key={destination.id} index={i} step_ms={200}>
                            <div class="card destination-card">
                                <div class="destination-image">
                                    <img src={destination.image} alt={destination.name} loading="lazy" />
                                    <div class="destination-shade"></div>
                                    <span class="destination-badge">{badge_for(i)}</span>
                                    <div class="destination-caption">
                                        <h3>{destination.name}</h3>
                                        <p>{destination.location}</p>
                                    </div>
                                </div>
                                <div class="destination-body">
                                    <p>{destination.description}</p>
                                    <div class="destination-footer">
                                        <span class="price">{destination.price_range}</span>
                                        <Link<Route> to={Route::Destinations} classes="button outline small">{"Learn More"}</Link<Route>>
                                    </div>
                                </div>
                            </div>
                        </FadeInUp>
                    }) }
                </div>
                <div class="section-footer">
                    <Link<Route> to={Route::Destinations} classes="button primary">{"View All Destinations"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

fn rating_stars(rating: u8) -> String {
    "★".repeat(rating as usize)
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <FadeInUp class="section-header">
                    <h2>{"What Our Travelers Say"}</h2>
                </FadeInUp>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                        let stars = rating_stars(t.rating);
                        html! {
                            <FadeInUp index={i} step_ms={200}>
                                <div class="card testimonial-card">
                                    <div class="rating" aria-label={format!("{} out of 5", t.rating)}>
                                        {stars}
                                    </div>
                                    <p class="quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <p class="author">{t.name}</p>
                                    <p class="trip">{t.trip}</p>
                                </div>
                            </FadeInUp>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let schemas = use_memo(|_| structured_data(), ());

    html! {
        <>
            { for schemas.iter().map(|schema| html! {
                <script type="application/ld+json">{schema.clone()}</script>
            }) }
            <Hero />
            <SectionDivider align={Align::Right} />
            <ServicesPreview />
            <SectionDivider align={Align::Left} />
            <DestinationsPreview />
            <SectionDivider align={Align::Right} />
            <Testimonials />
            <SectionDivider align={Align::Left} />
            <CallToAction
                title="Ready to Plan Your Next Adventure?"
                subtitle="Let our travel experts create a personalized experience just for you"
                primary_label="Get Free Consultation"
                secondary_label="View Our Packages"
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_data_is_schema_org_json() {
        let schemas = structured_data();
        assert_eq!(schemas.len(), 2);
        let organization: serde_json::Value = serde_json::from_str(&schemas[0]).unwrap();
        assert_eq!(organization["@type"], "TravelAgency");
        assert_eq!(organization["contactPoint"]["telephone"], COMPANY_INFO.phone);
        let website: serde_json::Value = serde_json::from_str(&schemas[1]).unwrap();
        assert_eq!(website["@context"], "https://schema.org");
        assert_eq!(website["name"], COMPANY_INFO.name);
    }

    #[test]
    fn testimonial_rating_renders_as_stars() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(0), "");
        for t in TESTIMONIALS {
            assert_eq!(rating_stars(t.rating).chars().count(), t.rating as usize);
        }
    }
}
