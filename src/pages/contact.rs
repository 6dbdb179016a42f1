use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::buttons::AnimatedButton;
use crate::components::notification::{Notification, NotificationKind};
use crate::components::reveal::Reveal;
use crate::config;

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<(NotificationKind, String)>);

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

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if name.trim().is_empty() || message.trim().is_empty() {
                toast.set(Some((
                    NotificationKind::Error,
                    "Completa tu nombre y cuéntanos algo del proyecto.".to_string(),
                )));
                return;
            }
            if !looks_like_email(&email) {
                toast.set(Some((
                    NotificationKind::Error,
                    "Revisa el correo, no parece válido.".to_string(),
                )));
                return;
            }

            sending.set(true);

            // There is no backend; the delay just makes the sending state
            // visible before confirming.
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            let timeout = Timeout::new(config::get_form_delay_ms(), move || {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                sending.set(false);
                toast.set(Some((
                    NotificationKind::Success,
                    "¡Mensaje enviado! Te respondemos en menos de 24 horas.".to_string(),
                )));
            });
            timeout.forget();
        })
    };

    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="page contact-page">
            <header class="page-header">
                <h1>{"Contacto"}</h1>
                <p>{"Cuéntanos qué quieres construir y te respondemos con una propuesta."}</p>
            </header>

            <div class="contact-layout">
                <Reveal class="contact-info">
                    <h3>{"Hablemos"}</h3>
                    <a class="contact-line" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {config::CONTACT_EMAIL}
                    </a>
                    <span class="contact-line">{config::CONTACT_PHONE}</span>
                    <span class="contact-line">{"Lunes a viernes, 9:00–18:00 (CET)"}</span>
                    <p class="contact-note">
                        {"¿Prefieres números antes que palabras? Usa el cotizador y llega \
                          a la llamada con un estimado bajo el brazo."}
                    </p>
                </Reveal>

                <Reveal class="contact-form-wrapper" delay_ms={120}>
                    <form class="contact-form" {onsubmit}>
                        <label for="contact-name">{"Nombre"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Tu nombre"
                            value={(*name).clone()}
                            oninput={on_name}
                            disabled={*sending}
                        />

                        <label for="contact-email">{"Correo"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="tu@correo.com"
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={*sending}
                        />

                        <label for="contact-message">{"Proyecto"}</label>
                        <textarea
                            id="contact-message"
                            rows="6"
                            placeholder="¿Qué quieres construir?"
                            value={(*message).clone()}
                            oninput={on_message}
                            disabled={*sending}
                        />

                        <AnimatedButton class={classes!("primary", "full-width")} disabled={*sending}>
                            { if *sending { "Enviando…" } else { "Enviar mensaje" } }
                        </AnimatedButton>
                    </form>
                </Reveal>
            </div>

            {
                if let Some((kind, message)) = (*toast).clone() {
                    html! { <Notification {kind} message={message} on_close={close_toast} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
