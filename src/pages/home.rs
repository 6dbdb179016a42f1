use yew::prelude::*;
use yew_router::components::Link;

use crate::components::buttons::AnimatedButton;
use crate::components::parallax::ParallaxSection;
use crate::components::reveal::Reveal;
use crate::components::video_background::VideoBackground;
use crate::Route;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    (
        "Desarrollo Web",
        "Sitios y tiendas que cargan rápido y convierten mejor.",
        "💻",
    ),
    (
        "Marketing Digital",
        "Campañas y contenido que llevan tráfico de verdad.",
        "🚀",
    ),
    (
        "Diseño Gráfico",
        "Identidad visual que hace memorable a tu marca.",
        "🎨",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("120+", "Proyectos entregados"),
    ("9 años", "Construyendo productos"),
    ("98%", "Clientes que repiten"),
    ("14", "Premios de diseño"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="page home-page">
            <VideoBackground src="/assets/hero-reel.mp4" poster={Some(AttrValue::from("/assets/hero-poster.jpg"))} class="home-hero">
                <Reveal class="hero-copy">
                    <span class="hero-kicker">{"Agencia creativa digital"}</span>
                    <h1>{"Ideas que se ven."}<br />{"Marcas que se recuerdan."}</h1>
                    <p>
                        {"Diseñamos, desarrollamos y posicionamos productos digitales \
                          para empresas que quieren destacar."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Quote}>
                            <AnimatedButton class={classes!("primary")}>
                                {"Cotiza tu proyecto"}
                            </AnimatedButton>
                        </Link<Route>>
                        <Link<Route> to={Route::Portfolio}>
                            <AnimatedButton class={classes!("ghost")}>
                                {"Ver trabajo"}
                            </AnimatedButton>
                        </Link<Route>>
                    </div>
                </Reveal>
            </VideoBackground>

            <section class="section services-overview">
                <Reveal>
                    <h2>{"Lo que hacemos"}</h2>
                    <p class="section-lead">
                        {"Tres disciplinas, un mismo objetivo: que tu marca funcione."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        HIGHLIGHTS.iter().enumerate().map(|(i, (title, blurb, icon))| html! {
                            <Reveal key={*title} delay_ms={(i as u32) * 120} class="service-card">
                                <span class="service-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                                <Link<Route> to={Route::Services} classes="forward-link">
                                    {"Conocer más →"}
                                </Link<Route>>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <ParallaxSection class="stats-band" speed={0.18}>
                <div class="stats-grid">
                    {
                        STATS.iter().map(|(value, label)| html! {
                            <div class="stat" key={*label}>
                                <span class="stat-value">{*value}</span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </ParallaxSection>

            <section class="section portfolio-teaser">
                <Reveal>
                    <h2>{"Trabajo reciente"}</h2>
                    <p class="section-lead">
                        {"Una muestra de lo que sale cuando buenas marcas confían en nosotros."}
                    </p>
                </Reveal>
                <div class="teaser-grid">
                    <Reveal class="teaser-card large">
                        <img src="/assets/work/atlas-cover.jpg" alt="Tienda online Atlas Outdoor" loading="lazy" />
                        <div class="teaser-caption">
                            <h3>{"Atlas Outdoor"}</h3>
                            <span>{"E-commerce · Desarrollo Web"}</span>
                        </div>
                    </Reveal>
                    <Reveal class="teaser-card" delay_ms={120}>
                        <img src="/assets/work/brisa-cover.jpg" alt="Identidad de marca Brisa Café" loading="lazy" />
                        <div class="teaser-caption">
                            <h3>{"Brisa Café"}</h3>
                            <span>{"Branding · Diseño Gráfico"}</span>
                        </div>
                    </Reveal>
                    <Reveal class="teaser-card" delay_ms={240}>
                        <img src="/assets/work/kanvia-cover.jpg" alt="Campaña digital Kanvia" loading="lazy" />
                        <div class="teaser-caption">
                            <h3>{"Kanvia"}</h3>
                            <span>{"Campañas · Marketing Digital"}</span>
                        </div>
                    </Reveal>
                </div>
                <Reveal class="teaser-more">
                    <Link<Route> to={Route::Portfolio} classes="forward-link">
                        {"Ver todo el portafolio →"}
                    </Link<Route>>
                </Reveal>
            </section>

            <section class="section cta-band">
                <Reveal>
                    <h2>{"¿Tienes un proyecto en mente?"}</h2>
                    <p>{"Calcula un estimado en dos minutos o escríbenos directamente."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Quote}>
                            <AnimatedButton class={classes!("primary")}>
                                {"Ir al cotizador"}
                            </AnimatedButton>
                        </Link<Route>>
                        <Link<Route> to={Route::Contact}>
                            <AnimatedButton class={classes!("ghost")}>
                                {"Contacto"}
                            </AnimatedButton>
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
