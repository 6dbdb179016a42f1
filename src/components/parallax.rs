use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Fraction of the scroll delta the layer moves at. Positive drifts the
    /// layer down as the section scrolls up.
    #[prop_or(0.25)]
    pub speed: f64,
}

/// Section whose inner layer translates against the scroll direction. The
/// outer section clips the overflow so the drift reads as depth.
#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxProps) -> Html {
    let layer = use_node_ref();

    {
        let layer = layer.clone();
        let speed = props.speed;
        use_effect_with_deps(
            move |layer| {
                let window = web_sys::window().unwrap();
                let layer = layer.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(element) = layer.cast::<HtmlElement>() {
                        let rect = element.get_bounding_client_rect();
                        let offset = -rect.top() * speed;
                        let _ = element
                            .style()
                            .set_property("transform", &format!("translate3d(0, {offset:.1}px, 0)"));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            layer,
        );
    }

    html! {
        <section class={classes!("parallax-section", props.class.clone())}>
            <div ref={layer} class="parallax-layer">
                { props.children.clone() }
            </div>
        </section>
    }
}
