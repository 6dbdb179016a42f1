use yew::prelude::*;

use crate::components::parallax::ParallaxSection;
use crate::components::reveal::Reveal;

const TEAM: &[(&str, &str, &str)] = &[
    ("Elena Vidal", "Dirección creativa", "/assets/team/elena.jpg"),
    ("Tomás Aguirre", "Desarrollo", "/assets/team/tomas.jpg"),
    ("Sara Montes", "Estrategia y marketing", "/assets/team/sara.jpg"),
    ("Javi Ortega", "Diseño", "/assets/team/javi.jpg"),
];

const VALUES: &[(&str, &str)] = &[
    (
        "Claridad",
        "Presupuestos cerrados, plazos reales y cero letra pequeña.",
    ),
    (
        "Oficio",
        "Cada entrega pasa por diseño, desarrollo y estrategia antes de salir.",
    ),
    (
        "Medida",
        "Si no se puede medir el resultado, no lo vendemos.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
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
        <div class="page about-page">
            <header class="page-header">
                <h1>{"Nosotros"}</h1>
                <p>{"Un estudio pequeño a propósito, para que cada proyecto tenga al equipo completo encima."}</p>
            </header>

            <section class="section about-story">
                <Reveal>
                    <h2>{"La historia corta"}</h2>
                    <p>
                        {"Nébula nació en 2017 en un coworking de Madrid, con dos portátiles \
                          y un primer cliente que todavía sigue con nosotros. Hoy somos un \
                          equipo de cuatro personas que diseña, desarrolla y posiciona \
                          productos digitales para marcas de España y Latinoamérica."}
                    </p>
                    <p>
                        {"No subcontratamos: quien te presenta la propuesta es quien la \
                          construye. Por eso aceptamos pocos proyectos a la vez."}
                    </p>
                </Reveal>
            </section>

            <ParallaxSection class="about-band" speed={0.15}>
                <blockquote class="about-quote">
                    {"“Las buenas marcas no se diseñan, se construyen entrega a entrega.”"}
                </blockquote>
            </ParallaxSection>

            <section class="section about-values">
                <Reveal>
                    <h2>{"Cómo trabajamos"}</h2>
                </Reveal>
                <div class="card-grid">
                    {
                        VALUES.iter().enumerate().map(|(i, (title, body))| html! {
                            <Reveal key={*title} delay_ms={(i as u32) * 120} class="value-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section about-team">
                <Reveal>
                    <h2>{"El equipo"}</h2>
                </Reveal>
                <div class="team-grid">
                    {
                        TEAM.iter().enumerate().map(|(i, (name, role, photo))| html! {
                            <Reveal key={*name} delay_ms={(i as u32) * 100} class="team-card">
                                <img src={*photo} alt={*name} loading="lazy" />
                                <h3>{*name}</h3>
                                <span class="team-role">{*role}</span>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
