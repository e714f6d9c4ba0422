use yew::prelude::*;

pub const FADE_IN_UP_MS: u32 = 600;

/// Inline style delaying an entrance animation by `index * step_ms`.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    let delay = (index as u32).saturating_mul(step_ms);
    format!("animation-delay: {}ms; animation-duration: {}ms;", delay, FADE_IN_UP_MS)
}

#[derive(Properties, PartialEq)]
pub struct FadeInUpProps {
    #[prop_or_default]
    pub index: usize,
    #[prop_or(100)]
    pub step_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Slides its children up into place, staggered by position.
#[function_component(FadeInUp)]
pub fn fade_in_up(props: &FadeInUpProps) -> Html {
    html! {
        <div
            class={classes!("fade-in-up", props.class.clone())}
            style={stagger_style(props.index, props.step_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_with_index() {
        assert_eq!(stagger_style(0, 100), "animation-delay: 0ms; animation-duration: 600ms;");
        assert_eq!(stagger_style(3, 200), "animation-delay: 600ms; animation-duration: 600ms;");
    }
}
