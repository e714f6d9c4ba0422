use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Align {
    Left,
    #[default]
    Right,
}

#[derive(Properties, PartialEq)]
pub struct SectionDividerProps {
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionDivider)]
pub fn section_divider(props: &SectionDividerProps) -> Html {
    let side = match props.align {
        Align::Left => "left: -0.5rem;",
        Align::Right => "right: -0.5rem;",
    };

    html! {
        <div class="section-divider" aria-hidden="true" style="position: relative; padding: 1.5rem 0; user-select: none;">
            <div class="container" style="position: relative;">
                <div style="border-top: 2px dotted rgba(125, 211, 252, 0.6);"></div>
                <div style={format!("position: absolute; top: -0.75rem; {}", side)}>
                    <span style="color: rgba(56, 189, 248, 0.8); font-size: 1.25rem;" role="img" aria-label="airplane">{"✈️"}</span>
                </div>
            </div>
        </div>
    }
}
