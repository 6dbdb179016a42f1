use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::logo::Logo;
use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <Logo size={30} />
                    <p>{"Diseñamos y construimos experiencias digitales que hacen crecer marcas."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Estudio"}</h4>
                    <Link<Route> to={Route::Services} classes="footer-link">{"Servicios"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="footer-link">{"Portafolio"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="footer-link">{"Nosotros"}</Link<Route>>
                    <Link<Route> to={Route::Blog} classes="footer-link">{"Blog"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Proyectos"}</h4>
                    <Link<Route> to={Route::Quote} classes="footer-link">{"Cotiza tu proyecto"}</Link<Route>>
                    <Link<Route> to={Route::Testimonials} classes="footer-link">{"Testimonios"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contacto"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Hablemos"}</h4>
                    <a class="footer-link" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {config::CONTACT_EMAIL}
                    </a>
                    <span class="footer-link">{config::CONTACT_PHONE}</span>
                    <span class="footer-link">{"Madrid · remoto"}</span>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. Todos los derechos reservados.", year, config::SITE_NAME)}
            </div>
        </footer>
    }
}
