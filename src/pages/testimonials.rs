use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "El equipo entendió nuestra marca mejor que nosotros. La tienda nueva duplicó las ventas en el primer trimestre.",
        author: "Lucía Ferrer",
        role: "Directora, Atlas Outdoor",
    },
    Testimonial {
        quote: "Nos entregaron una identidad que por fin se siente nuestra. El manual de marca lo usamos a diario.",
        author: "Marcos Ibáñez",
        role: "Fundador, Brisa Café",
    },
    Testimonial {
        quote: "Las campañas triplicaron las consultas. Los informes son claros y las decisiones se toman con datos.",
        author: "Carla Núñez",
        role: "Socia, Kanvia Estudio Legal",
    },
    Testimonial {
        quote: "Cumplieron plazos y presupuesto, algo que con otras agencias nunca habíamos conseguido.",
        author: "Diego Salas",
        role: "Gerente, Rumbo Norte Viajes",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let current = use_state(|| 0usize);

    // Auto-advance the carousel; re-armed on every change so manual
    // navigation also resets the timer.
    {
        let deps = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |&index: &usize| {
                let interval = Interval::new(6000, move || {
                    current.set((index + 1) % TESTIMONIALS.len());
                });
                move || drop(interval)
            },
            deps,
        );
    }

    let previous = {
        let current = current.clone();
        Callback::from(move |_| {
            current.set((*current + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
        })
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_| {
            current.set((*current + 1) % TESTIMONIALS.len());
        })
    };

    let testimonial = &TESTIMONIALS[*current % TESTIMONIALS.len()];

    html! {
        <div class="page testimonials-page">
            <header class="page-header">
                <h1>{"Testimonios"}</h1>
                <p>{"Lo que dicen los clientes cuando el proyecto ya está en producción."}</p>
            </header>

            <Reveal class="carousel">
                <button class="carousel-arrow" onclick={previous} aria-label="Anterior">{"‹"}</button>
                <blockquote class="carousel-card" key={*current}>
                    <p class="carousel-quote">{format!("“{}”", testimonial.quote)}</p>
                    <footer>
                        <span class="carousel-author">{testimonial.author}</span>
                        <span class="carousel-role">{testimonial.role}</span>
                    </footer>
                </blockquote>
                <button class="carousel-arrow" onclick={next} aria-label="Siguiente">{"›"}</button>
            </Reveal>

            <div class="carousel-dots">
                {
                    (0..TESTIMONIALS.len()).map(|i| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_| current.set(i))
                        };
                        let class = if i == *current { "dot active" } else { "dot" };
                        html! { <button key={i} {class} {onclick} aria-label={format!("Testimonio {}", i + 1)} /> }
                    }).collect::<Html>()
                }
            </div>

            <section class="section logos-band">
                <Reveal>
                    <p class="section-lead">{"Marcas que ya trabajaron con nosotros"}</p>
                    <div class="logo-strip">
                        <span>{"Atlas Outdoor"}</span>
                        <span>{"Brisa Café"}</span>
                        <span>{"Kanvia"}</span>
                        <span>{"Rumbo Norte"}</span>
                        <span>{"Folia"}</span>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
