use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::calculator::catalog::{CustomizationKind, ServiceCatalog};
use crate::calculator::selection::{CustomizationValue, PriceCalculator};
use crate::components::reveal::Reveal;
use crate::Route;

/// Interactive estimate builder. All pricing decisions live in
/// `calculator::selection`; this component only renders the read model and
/// forwards the three mutations.
#[function_component(Quote)]
pub fn quote() -> Html {
    let calc = use_state(|| PriceCalculator::new(Rc::new(ServiceCatalog::standard())));

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

    let select_category = {
        let calc = calc.clone();
        Callback::from(move |name: String| {
            let mut next = (*calc).clone();
            next.select_category(&name);
            calc.set(next);
        })
    };
    let select_option = {
        let calc = calc.clone();
        Callback::from(move |name: String| {
            let mut next = (*calc).clone();
            next.select_option(&name);
            calc.set(next);
        })
    };
    let set_customization = {
        let calc = calc.clone();
        Callback::from(move |(name, value): (String, CustomizationValue)| {
            let mut next = (*calc).clone();
            next.set_customization(&name, value);
            calc.set(next);
        })
    };

    let active_category = calc.current_category().cloned();
    let active_option = calc.current_option().cloned();
    let total = calc.total();

    html! {
        <div class="page quote-page">
            <header class="page-header">
                <h1>{"Cotizador"}</h1>
                <p>{"Arma tu proyecto y mira el estimado al momento. Sin correos, sin esperas."}</p>
            </header>

            <div class="quote-tabs" role="tablist">
                {
                    calc.categories().iter().map(|category| {
                        let name = category.name.clone();
                        let is_active = active_category
                            .as_ref()
                            .map(|c| c.name == name)
                            .unwrap_or(false);
                        let onclick = {
                            let select_category = select_category.clone();
                            let name = name.clone();
                            Callback::from(move |_| select_category.emit(name.clone()))
                        };
                        html! {
                            <button
                                key={name.clone()}
                                class={if is_active { "quote-tab active" } else { "quote-tab" }}
                                role="tab"
                                {onclick}
                            >
                                {name}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            {
                if let Some(category) = active_category.as_ref() {
                    html! {
                        <div class="quote-layout">
                            <div class="quote-controls">
                                <h2>{"1. Elige un plan"}</h2>
                                <div class="option-grid">
                                    {
                                        category.options.iter().map(|option| {
                                            let name = option.name.clone();
                                            let is_active = active_option
                                                .as_ref()
                                                .map(|o| o.name == name)
                                                .unwrap_or(false);
                                            let onclick = {
                                                let select_option = select_option.clone();
                                                let name = name.clone();
                                                Callback::from(move |_| select_option.emit(name.clone()))
                                            };
                                            html! {
                                                <button
                                                    key={name.clone()}
                                                    class={if is_active { "option-card active" } else { "option-card" }}
                                                    {onclick}
                                                >
                                                    <span class="option-name">{&option.name}</span>
                                                    <span class="option-price">{format!("{} €", option.base_price)}</span>
                                                    <span class="option-description">{&option.description}</span>
                                                </button>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>

                                <h2>{"2. Personaliza"}</h2>
                                <div class="customization-list">
                                    {
                                        category.customizations.iter().map(|customization| {
                                            let name = customization.name.clone();
                                            let value = calc.customization_value(&name);
                                            match (&customization.kind, value) {
                                                (CustomizationKind::Toggle, Some(CustomizationValue::Toggle(on))) => {
                                                    let onchange = {
                                                        let set_customization = set_customization.clone();
                                                        let name = name.clone();
                                                        Callback::from(move |e: Event| {
                                                            let input: HtmlInputElement = e.target_unchecked_into();
                                                            set_customization.emit((
                                                                name.clone(),
                                                                CustomizationValue::Toggle(input.checked()),
                                                            ));
                                                        })
                                                    };
                                                    html! {
                                                        <div class="customization-row" key={name.clone()}>
                                                            <div class="customization-copy">
                                                                <span class="customization-name">{&customization.name}</span>
                                                                <span class="customization-description">{&customization.description}</span>
                                                            </div>
                                                            <span class="customization-price">{format!("+{} €", customization.unit_price)}</span>
                                                            <label class="switch">
                                                                <input type="checkbox" checked={on} {onchange} />
                                                                <span class="slider round"></span>
                                                            </label>
                                                        </div>
                                                    }
                                                }
                                                (CustomizationKind::Scalar { min, max, step }, Some(CustomizationValue::Scalar(current))) => {
                                                    let oninput = {
                                                        let set_customization = set_customization.clone();
                                                        let name = name.clone();
                                                        Callback::from(move |e: InputEvent| {
                                                            let input: HtmlInputElement = e.target_unchecked_into();
                                                            // Non-numeric input keeps the prior value.
                                                            if let Ok(parsed) = input.value().parse::<u32>() {
                                                                set_customization.emit((
                                                                    name.clone(),
                                                                    CustomizationValue::Scalar(parsed),
                                                                ));
                                                            }
                                                        })
                                                    };
                                                    html! {
                                                        <div class="customization-row" key={name.clone()}>
                                                            <div class="customization-copy">
                                                                <span class="customization-name">{&customization.name}</span>
                                                                <span class="customization-description">{&customization.description}</span>
                                                            </div>
                                                            <span class="customization-price">
                                                                {format!("+{} €/unidad extra", customization.unit_price)}
                                                            </span>
                                                            <input
                                                                class="scalar-input"
                                                                type="number"
                                                                min={min.to_string()}
                                                                max={max.to_string()}
                                                                step={step.to_string()}
                                                                value={current.to_string()}
                                                                {oninput}
                                                            />
                                                        </div>
                                                    }
                                                }
                                                // Read model always yields a value for the
                                                // category's own customizations.
                                                _ => html! {},
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>

                            <Reveal class="quote-summary">
                                <h2>{"Tu estimado"}</h2>
                                {
                                    if let Some(option) = active_option.as_ref() {
                                        html! {
                                            <ul class="summary-lines">
                                                <li>
                                                    <span>{&option.name}</span>
                                                    <span>{format!("{} €", option.base_price)}</span>
                                                </li>
                                                {
                                                    category.customizations.iter().filter_map(|customization| {
                                                        let value = calc.customization_value(&customization.name)?;
                                                        match (&customization.kind, value) {
                                                            (CustomizationKind::Toggle, CustomizationValue::Toggle(true)) => Some(html! {
                                                                <li key={customization.name.clone()}>
                                                                    <span>{&customization.name}</span>
                                                                    <span>{format!("{} €", customization.unit_price)}</span>
                                                                </li>
                                                            }),
                                                            // First unit is included in the base price.
                                                            (CustomizationKind::Scalar { .. }, CustomizationValue::Scalar(v)) if v > 1 => Some(html! {
                                                                <li key={customization.name.clone()}>
                                                                    <span>{format!("{} × {}", customization.name, v)}</span>
                                                                    <span>{format!("{} €", customization.unit_price * (v - 1))}</span>
                                                                </li>
                                                            }),
                                                            _ => None,
                                                        }
                                                    }).collect::<Html>()
                                                }
                                            </ul>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="summary-total">
                                    <span>{"Total estimado"}</span>
                                    <span class="summary-amount">{format!("{} €", total)}</span>
                                </div>
                                <p class="summary-note">
                                    {"El estimado es orientativo; la propuesta final se cierra \
                                      después de una llamada de 30 minutos."}
                                </p>
                                <Link<Route> to={Route::Contact} classes="forward-link">
                                    {"Quiero este presupuesto →"}
                                </Link<Route>>
                            </Reveal>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
