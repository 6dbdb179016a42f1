use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Staggers sibling reveals via transition-delay.
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Wrapper that fades/slides its content in the first time it enters the
/// viewport. An IntersectionObserver adds the `visible` class; the CSS
/// transition does the rest.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |node| {
                let mut active = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Vec<IntersectionObserverEntry>| {
                            for entry in entries {
                                if entry.is_intersecting() {
                                    let _ = entry.target().class_list().add_1("visible");
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(0.15));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        active = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} {style}>
            { props.children.clone() }
        </div>
    }
}
