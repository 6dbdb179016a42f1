use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(36)]
    pub size: u32,
    #[prop_or(true)]
    pub wordmark: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let size = props.size.to_string();

    html! {
        <span class="nb-logo" style="display: inline-flex; align-items: center; gap: 0.6rem;">
            <svg
                width={size.clone()}
                height={size}
                viewBox="0 0 48 48"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
                role="img"
                aria-label={config::SITE_NAME}
            >
                <defs>
                    <linearGradient id="nb-gradient" x1="0" y1="0" x2="48" y2="48" gradientUnits="userSpaceOnUse">
                        <stop offset="0" stop-color="#7c6cff" />
                        <stop offset="1" stop-color="#2ad4c8" />
                    </linearGradient>
                </defs>
                <circle cx="24" cy="24" r="21" stroke="url(#nb-gradient)" stroke-width="3" />
                <path
                    d="M24 9 L28 20 L39 24 L28 28 L24 39 L20 28 L9 24 L20 20 Z"
                    fill="url(#nb-gradient)"
                />
            </svg>
            {
                if props.wordmark {
                    html! { <span class="nb-logo-wordmark">{config::SITE_NAME}</span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}
