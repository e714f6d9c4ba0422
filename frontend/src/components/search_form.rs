use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent, Node};
use yew::prelude::*;

use crate::host;
use crate::search::{parse_travelers, SearchForm, MAX_TRAVELERS, MIN_TRAVELERS};

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Where / Dates / Travelers pill on the hero. Submitting loads the
/// destinations page with the search in its query string.
#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let form = use_state(SearchForm::default);
    let show_date_picker = use_state(|| false);
    let error = use_state(|| None::<String>);
    let date_picker_ref = use_node_ref();

    // Close the picker on any click outside it
    {
        let show_date_picker = show_date_picker.clone();
        let date_picker_ref = date_picker_ref.clone();
        use_effect_with_deps(move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let on_mouse_down = Closure::wrap(Box::new(move |e: MouseEvent| {
                let picker = match date_picker_ref.get() {
                    Some(picker) => picker,
                    None => return,
                };
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !picker.contains(target.as_ref()) {
                    show_date_picker.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = &document {
                if let Err(err) = document.add_event_listener_with_callback("mousedown", on_mouse_down.as_ref().unchecked_ref()) {
                    warn!("could not watch clicks: {}", host::js_detail(&err));
                }
            }

            move || {
                if let Some(document) = document {
                    if let Err(err) = document.remove_event_listener_with_callback("mousedown", on_mouse_down.as_ref().unchecked_ref()) {
                        warn!("could not remove click listener: {}", host::js_detail(&err));
                    }
                }
            }
        }, ());
    }

    let update = |apply: fn(&mut SearchForm, String)| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
            error.set(None);
        })
    };

    let on_where = update(|f, v| f.where_to = v);
    let on_start = update(|f, v| f.start = v);
    let on_end = update(|f, v| f.end = v);
    let on_travelers = update(|f, v| f.travelers = parse_travelers(&v));

    let toggle_picker = {
        let show_date_picker = show_date_picker.clone();
        Callback::from(move |_: MouseEvent| show_date_picker.set(!*show_date_picker))
    };

    let clear_dates = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(SearchForm {
                start: String::new(),
                end: String::new(),
                ..(*form).clone()
            });
        })
    };

    let apply_dates = {
        let show_date_picker = show_date_picker.clone();
        Callback::from(move |_: MouseEvent| show_date_picker.set(false))
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_query() {
                Ok(query) => {
                    let href = query.href();
                    info!("Searching destinations: {}", href);
                    if let Err(err) = host::navigate_to(&href) {
                        warn!("{}", err);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <form class="hero-search" {onsubmit}>
            <div class="search-pill">
                <div class="search-field">
                    <label for="hero-where" class="search-label">{"Where"}</label>
                    <input
                        id="hero-where"
                        type="text"
                        placeholder="Search destinations"
                        value={form.where_to.clone()}
                        oninput={on_where}
                    />
                </div>

                <div class="search-divider"></div>

                <div class="search-field search-dates" ref={date_picker_ref}>
                    <div class="search-label">{"Dates"}</div>
                    <button type="button" class="search-dates-button" onclick={toggle_picker}>
                        {form.dates_label()}
                    </button>
                    {
                        if *show_date_picker {
                            html! {
                                <div class="date-picker">
                                    <div class="date-picker-grid">
                                        <div>
                                            <div class="date-picker-label">{"Start date"}</div>
                                            <input type="date" value={form.start.clone()} oninput={on_start} />
                                        </div>
                                        <div>
                                            <div class="date-picker-label">{"End date"}</div>
                                            <input
                                                type="date"
                                                value={form.end.clone()}
                                                min={(!form.start.is_empty()).then(|| form.start.clone())}
                                                oninput={on_end}
                                            />
                                        </div>
                                    </div>
                                    <div class="date-picker-actions">
                                        <button type="button" class="date-picker-clear" onclick={clear_dates}>{"Clear"}</button>
                                        <button type="button" class="date-picker-apply" onclick={apply_dates}>{"Apply"}</button>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="search-divider"></div>

                <div class="search-field">
                    <label for="hero-travelers" class="search-label">{"Travelers"}</label>
                    <input
                        id="hero-travelers"
                        type="number"
                        min={MIN_TRAVELERS.to_string()}
                        max={MAX_TRAVELERS.to_string()}
                        value={form.travelers.to_string()}
                        oninput={on_travelers}
                    />
                </div>

                <button type="submit" class="search-submit" aria-label="Search">
                    {"🔍"}
                </button>
            </div>
            {
                if let Some(message) = &*error {
                    html! { <p class="search-error">{message}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
