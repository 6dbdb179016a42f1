use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::reveal::Reveal;
use crate::Route;

struct Post {
    slug: &'static str,
    title: &'static str,
    date: &'static str, // ISO, formatted for display with chrono
    excerpt: &'static str,
    body: &'static [&'static str],
}

const POSTS: &[Post] = &[
    Post {
        slug: "cuanto-cuesta-una-web",
        title: "¿Cuánto cuesta una web en 2026?",
        date: "2026-02-10",
        excerpt: "La pregunta que nos hacen en todas las primeras llamadas, con números reales sobre la mesa.",
        body: &[
            "No hay una respuesta única, pero sí hay rangos honestos. Una landing \
             enfocada en conversión parte de los 1.000 €; un sitio corporativo \
             completo, de los 2.200 €. Lo que mueve el precio no es el diseño: \
             son las páginas, los idiomas y la tienda.",
            "Por eso publicamos el cotizador. Eliges plan, activas lo que \
             necesitas y ves el estimado al momento, el mismo número que usamos \
             nosotros para arrancar la propuesta.",
            "¿La trampa habitual del sector? Presupuestos baratos que no \
             incluyen textos, fotos ni subida de contenido. Pregunta siempre qué \
             entra y qué no.",
        ],
    },
    Post {
        slug: "marca-antes-que-campana",
        title: "Marca antes que campaña",
        date: "2025-11-24",
        excerpt: "Invertir en anuncios con una identidad floja es pagar por enseñar un problema.",
        body: &[
            "Cada mes llega alguien queriendo invertir en campañas con un logo \
             hecho deprisa y una web que no carga en móvil. La campaña funciona: \
             lleva tráfico. Y el tráfico se va.",
            "Nuestra regla: primero la base (identidad, web, mensaje), después \
             la gasolina. No es más caro, es el mismo dinero en otro orden.",
        ],
    },
    Post {
        slug: "animaciones-con-criterio",
        title: "Animaciones con criterio",
        date: "2025-09-02",
        excerpt: "El movimiento debe guiar la lectura, no competir con ella.",
        body: &[
            "Las animaciones de scroll están en todas partes y casi siempre \
             sobran. Nuestro criterio: una entrada sutil al aparecer en \
             pantalla, parallax solo en bandas de separación y nada que se \
             repita en bucle junto al texto.",
            "Si al quitar una animación la página comunica igual, la animación \
             sobraba.",
        ],
    },
];

const MONTHS: &[&str] = &[
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

fn format_date(iso: &str) -> String {
    use chrono::Datelike;
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year(),
        ),
        Err(_) => iso.to_string(),
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
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
        <div class="page blog-page">
            <header class="page-header">
                <h1>{"Blog"}</h1>
                <p>{"Notas desde el estudio: precios, procesos y opiniones con firma."}</p>
            </header>

            <div class="post-list">
                {
                    POSTS.iter().enumerate().map(|(i, post)| html! {
                        <Reveal key={post.slug} delay_ms={(i as u32) * 100} class="post-card">
                            <span class="post-date">{format_date(post.date)}</span>
                            <h2>
                                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                    {post.title}
                                </Link<Route>>
                            </h2>
                            <p>{post.excerpt}</p>
                            <Link<Route>
                                to={Route::BlogPost { slug: post.slug.to_string() }}
                                classes="forward-link"
                            >
                                {"Leer →"}
                            </Link<Route>>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(post) = POSTS.iter().find(|p| p.slug == props.slug) else {
        // Unknown slug: degrade to a pointer back to the list.
        return html! {
            <div class="page blog-page">
                <header class="page-header">
                    <h1>{"Artículo no encontrado"}</h1>
                    <p>{"Puede que el enlace sea antiguo o que el artículo ya no exista."}</p>
                    <Link<Route> to={Route::Blog} classes="forward-link">
                        {"← Volver al blog"}
                    </Link<Route>>
                </header>
            </div>
        };
    };

    html! {
        <div class="page blog-post-page">
            <article class="post-article">
                <header class="page-header">
                    <span class="post-date">{format_date(post.date)}</span>
                    <h1>{post.title}</h1>
                </header>
                {
                    post.body.iter().map(|paragraph| html! {
                        <p>{*paragraph}</p>
                    }).collect::<Html>()
                }
                <footer class="post-footer">
                    <Link<Route> to={Route::Blog} classes="forward-link">
                        {"← Volver al blog"}
                    </Link<Route>>
                </footer>
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dates_render_in_spanish() {
        assert_eq!(format_date("2026-02-10"), "10 de febrero de 2026");
        assert_eq!(format_date("2025-12-01"), "1 de diciembre de 2025");
    }

    #[test]
    fn malformed_dates_fall_back_to_the_raw_string() {
        assert_eq!(format_date("pronto"), "pronto");
    }

    #[test]
    fn post_slugs_are_unique() {
        let mut slugs: Vec<_> = POSTS.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), POSTS.len());
    }
}
