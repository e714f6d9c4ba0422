use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, header::Header, pointer_trail::PointerTrail, watermarks::Watermarks};
use crate::host;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();

    // Always start at the top on navigation
    use_effect_with_deps(
        move |_| {
            host::scroll_to_top();
            || ()
        },
        route,
    );

    html! {
        <div class="site-layout" style="min-height: 100vh; display: flex; flex-direction: column;">
            <Watermarks />
            <PointerTrail />
            <div style="position: relative; z-index: 30;">
                <Header />
                <main style="flex: 1;">
                    { for props.children.iter() }
                </main>
                <Footer />
            </div>
        </div>
    }
}
