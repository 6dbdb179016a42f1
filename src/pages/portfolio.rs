use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Project {
    title: &'static str,
    client: &'static str,
    discipline: &'static str,
    summary: &'static str,
    image: &'static str,
}

const DISCIPLINES: &[&str] = &["Todos", "Web", "Marketing", "Diseño"];

const PROJECTS: &[Project] = &[
    Project {
        title: "Atlas Outdoor",
        client: "Atlas Outdoor S.L.",
        discipline: "Web",
        summary: "Tienda online de equipamiento de montaña con catálogo de 1.200 productos.",
        image: "/assets/work/atlas-cover.jpg",
    },
    Project {
        title: "Brisa Café",
        client: "Brisa Café",
        discipline: "Diseño",
        summary: "Identidad completa para una cadena de cafeterías de especialidad.",
        image: "/assets/work/brisa-cover.jpg",
    },
    Project {
        title: "Kanvia",
        client: "Kanvia Estudio Legal",
        discipline: "Marketing",
        summary: "Campañas de captación que triplicaron las consultas en seis meses.",
        image: "/assets/work/kanvia-cover.jpg",
    },
    Project {
        title: "Rumbo Norte",
        client: "Rumbo Norte Viajes",
        discipline: "Web",
        summary: "Sitio corporativo con buscador de rutas y blog de destinos.",
        image: "/assets/work/rumbo-cover.jpg",
    },
    Project {
        title: "Folia",
        client: "Folia Cosmética",
        discipline: "Diseño",
        summary: "Packaging y sistema visual para una línea de cosmética natural.",
        image: "/assets/work/folia-cover.jpg",
    },
    Project {
        title: "Mercado Local",
        client: "Ayuntamiento de Getafe",
        discipline: "Marketing",
        summary: "Estrategia de contenido para acercar el comercio de barrio a redes.",
        image: "/assets/work/mercado-cover.jpg",
    },
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active = use_state(|| "Todos");

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

    let visible: Vec<&Project> = PROJECTS
        .iter()
        .filter(|p| *active == "Todos" || p.discipline == *active)
        .collect();

    html! {
        <div class="page portfolio-page">
            <header class="page-header">
                <h1>{"Portafolio"}</h1>
                <p>{"Proyectos reales, resultados medibles."}</p>
            </header>

            <div class="filter-bar">
                {
                    DISCIPLINES.iter().map(|discipline| {
                        let onclick = {
                            let active = active.clone();
                            let discipline = *discipline;
                            Callback::from(move |_| active.set(discipline))
                        };
                        let class = if *active == *discipline {
                            "filter-button active"
                        } else {
                            "filter-button"
                        };
                        html! {
                            <button key={*discipline} {class} {onclick}>{*discipline}</button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="project-grid">
                {
                    visible.iter().enumerate().map(|(i, project)| html! {
                        <Reveal key={project.title} delay_ms={(i as u32 % 3) * 100} class="project-card">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="project-body">
                                <span class="project-discipline">{project.discipline}</span>
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <span class="project-client">{project.client}</span>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
