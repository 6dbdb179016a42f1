use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoBackgroundProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Full-bleed muted looping video with a dark overlay so the slotted content
/// stays readable on top of it.
#[function_component(VideoBackground)]
pub fn video_background(props: &VideoBackgroundProps) -> Html {
    html! {
        <div class={classes!("video-background", props.class.clone())}>
            <video
                class="video-background-media"
                src={props.src.clone()}
                poster={props.poster.clone()}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                aria-hidden="true"
            />
            <div class="video-background-overlay"></div>
            <div class="video-background-content">
                { props.children.clone() }
            </div>
        </div>
    }
}
