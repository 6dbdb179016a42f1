use yew::prelude::*;
use yew_router::components::Link;

use crate::calculator::catalog::{CustomizationKind, ServiceCatalog};
use crate::components::buttons::AnimatedButton;
use crate::components::reveal::Reveal;
use crate::Route;

/// The services page renders straight from the same catalog the calculator
/// prices against, so listed plans and quoted prices can never drift apart.
#[function_component(Services)]
pub fn services() -> Html {
    let catalog = use_memo(|_| ServiceCatalog::standard(), ());

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="page services-page">
            <header class="page-header">
                <h1>{"Servicios"}</h1>
                <p>{"Planes claros, precios desde el primer día. Ajusta cada plan a tu medida en el cotizador."}</p>
            </header>

            {
                catalog.categories.iter().map(|category| html! {
                    <section class="section service-category" key={category.name.clone()}>
                        <Reveal>
                            <h2>{&category.name}</h2>
                            <p class="section-lead">{&category.description}</p>
                        </Reveal>
                        <div class="pricing-grid">
                            {
                                category.options.iter().enumerate().map(|(i, option)| html! {
                                    <Reveal key={option.name.clone()} delay_ms={(i as u32) * 120} class="pricing-card">
                                        <div class="card-header">
                                            <h3>{&option.name}</h3>
                                            <div class="price">
                                                <span class="amount">{format!("desde {} €", option.base_price)}</span>
                                            </div>
                                            <p class="plan-description">{&option.description}</p>
                                        </div>
                                        <ul>
                                            {
                                                option.features.iter().map(|feature| html! {
                                                    <li key={feature.clone()}>{feature}</li>
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                        <Link<Route> to={Route::Quote}>
                                            <AnimatedButton class={classes!("primary", "full-width")}>
                                                {"Cotizar este plan"}
                                            </AnimatedButton>
                                        </Link<Route>>
                                    </Reveal>
                                }).collect::<Html>()
                            }
                        </div>
                        {
                            if category.customizations.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <Reveal class="addons-note">
                                        <h4>{"Complementos disponibles"}</h4>
                                        <ul class="addons-list">
                                            {
                                                category.customizations.iter().map(|customization| {
                                                    let price = match customization.kind {
                                                        CustomizationKind::Toggle =>
                                                            format!("+{} €", customization.unit_price),
                                                        CustomizationKind::Scalar { .. } =>
                                                            format!("+{} € por unidad adicional", customization.unit_price),
                                                    };
                                                    html! {
                                                        <li key={customization.name.clone()}>
                                                            <strong>{&customization.name}</strong>
                                                            {" — "}{&customization.description}{" "}
                                                            <span class="addon-price">{price}</span>
                                                        </li>
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </Reveal>
                                }
                            }
                        }
                    </section>
                }).collect::<Html>()
            }
        </div>
    }
}
