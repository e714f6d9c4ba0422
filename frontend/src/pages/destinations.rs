use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{filter_by_category, ALL_KEY, CATEGORIES};
use crate::components::call_to_action::CallToAction;
use crate::components::motion::FadeInUp;
use crate::components::section_divider::{Align, SectionDivider};
use crate::data::destinations::{Destination, DESTINATIONS};
use crate::search::{RawSearchQuery, SearchQuery};

fn search_summary(query: &SearchQuery) -> String {
    let mut parts = Vec::new();
    if let Some(place) = &query.where_to {
        parts.push(format!("\u{201c}{}\u{201d}", place));
    }
    match (query.start, query.end) {
        (Some(start), Some(end)) => parts.push(format!("{} to {}", start, end)),
        (Some(start), None) => parts.push(format!("from {}", start)),
        (None, Some(end)) => parts.push(format!("until {}", end)),
        (None, None) => {}
    }
    let people = if query.travelers == 1 { "traveler" } else { "travelers" };
    parts.push(format!("{} {}", query.travelers, people));
    parts.join(" · ")
}

fn matching(query: &SearchQuery, category: &str) -> Vec<Destination> {
    filter_by_category(DESTINATIONS, category)
        .iter()
        .filter(|d| query.matches_place(&[d.name, d.location]))
        .cloned()
        .collect()
}

#[function_component(Destinations)]
pub fn destinations() -> Html {
    let query = use_location()
        .map(|location| {
            location
                .query::<RawSearchQuery>()
                .map(SearchQuery::from)
                .unwrap_or_else(|err| {
                    warn!("ignoring malformed search query: {}", err);
                    SearchQuery::default()
                })
        })
        .unwrap_or_default();
    let selected = use_state(|| ALL_KEY.to_string());

    let results = matching(&query, &selected);

    let select_category = |key: &'static str| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(key.to_string()))
    };

    html! {
        <div class="destinations-page">
            <section class="page-hero destinations-hero">
                <div class="page-hero-gradient" aria-hidden="true"></div>
                <div class="container page-hero-content">
                    <FadeInUp>
                        <h1>{"Destinations"}</h1>
                    </FadeInUp>
                    <FadeInUp index={2}>
                        <p>{search_summary(&query)}</p>
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
                            <span>{if category.key == ALL_KEY { "All Destinations" } else { category.label }}</span>
                        </button>
                    }) }
                </FadeInUp>
            </section>

            <section class="section">
                <div class="container">
                    <div key={(*selected).clone()} class="card-grid three">
                        { for results.iter().enumerate().map(|(i, destination)| html! {
                            <FadeInUp key={destination.id} index={i} step_ms={150}>
                                <div class="card destination-card">
                                    <div class="destination-image">
                                        <img src={destination.image} alt={destination.name} loading="lazy" />
                                        <div class="destination-shade"></div>
                                        <div class="destination-caption">
                                            <h3>{destination.name}</h3>
                                            <p>{destination.location}</p>
                                        </div>
                                    </div>
                                    <div class="destination-body">
                                        <p>{destination.description}</p>
                                        <div class="destination-footer">
                                            <span class="price">{destination.price_range}</span>
                                        </div>
                                    </div>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>
                    {
                        if results.is_empty() {
                            html! {
                                <div class="gallery-empty">
                                    <p>{"No destinations match your search yet. Tell us where you want to go and we'll plan it."}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            <SectionDivider align={Align::Left} />

            <CallToAction
                title="Can't Find Your Dream Destination?"
                subtitle="We plan trips anywhere in the world. Just tell us where."
                primary_label="Ask on WhatsApp"
                secondary_label="Browse All Destinations"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn summary_lists_what_was_searched() {
        let query = SearchQuery {
            where_to: Some("Goa".to_string()),
            start: NaiveDate::from_ymd_opt(2025, 3, 1),
            end: NaiveDate::from_ymd_opt(2025, 3, 9),
            travelers: 1,
        };
        assert_eq!(search_summary(&query), "\u{201c}Goa\u{201d} · 2025-03-01 to 2025-03-09 · 1 traveler");
        assert_eq!(search_summary(&SearchQuery::default()), "2 travelers");
    }

    #[test]
    fn place_and_category_narrow_together() {
        let query = SearchQuery {
            where_to: Some("kerala".to_string()),
            ..SearchQuery::default()
        };
        let names: Vec<&str> = matching(&query, ALL_KEY).iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Kerala Backwaters"]);
        assert!(matching(&query, "international").is_empty());
        assert_eq!(matching(&SearchQuery::default(), ALL_KEY).len(), DESTINATIONS.len());
    }
}
