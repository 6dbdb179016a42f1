use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub disabled: bool,
}

/// CTA button with a sweeping highlight on hover. The animation itself lives
/// in the stylesheet; this only supplies the layered markup.
#[function_component(AnimatedButton)]
pub fn animated_button(props: &AnimatedButtonProps) -> Html {
    html! {
        <button
            class={classes!("nb-button", props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            <span class="nb-button-label">{ props.children.clone() }</span>
            <span class="nb-button-sheen" aria-hidden="true"></span>
        </button>
    }
}
