use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod calculator {
    pub mod catalog;
    pub mod selection;
}
mod components {
    pub mod buttons;
    pub mod footer;
    pub mod logo;
    pub mod notification;
    pub mod parallax;
    pub mod reveal;
    pub mod video_background;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod portfolio;
    pub mod quote;
    pub mod services;
    pub mod testimonials;
}

use components::footer::Footer;
use components::logo::Logo;
use pages::{
    about::About,
    blog::{Blog, BlogPost},
    contact::Contact,
    home::Home,
    portfolio::Portfolio,
    quote::Quote,
    services::Services,
    testimonials::Testimonials,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/servicios")]
    Services,
    #[at("/portafolio")]
    Portfolio,
    #[at("/testimonios")]
    Testimonials,
    #[at("/nosotros")]
    About,
    #[at("/contacto")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/cotizador")]
    Quote,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {slug}");
            html! { <BlogPost {slug} /> }
        }
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <Quote /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="page not-found-page">
                    <header class="page-header">
                        <h1>{"404"}</h1>
                        <p>{"Esta página se perdió en el espacio."}</p>
                        <Link<Route> to={Route::Home} classes="forward-link">
                            {"← Volver al inicio"}
                        </Link<Route>>
                    </header>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Servicios"),
        (Route::Portfolio, "Portafolio"),
        (Route::Testimonials, "Testimonios"),
        (Route::About, "Nosotros"),
        (Route::Blog, "Blog"),
        (Route::Contact, "Contacto"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Logo size={32} />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        links.into_iter().map(|(route, label)| html! {
                            <div key={label} onclick={close_menu.clone()}>
                                <Link<Route> to={route} classes="nav-link">
                                    {label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Quote} classes="nav-cta">
                            {"Cotizador"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
