use serde::{Deserialize, Serialize};

/// How a customization is controlled: a plain on/off switch, or an integer
/// amount within an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomizationKind {
    Toggle,
    Scalar { min: u32, max: u32, step: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub name: String,
    pub description: String,
    pub unit_price: u32,
    pub kind: CustomizationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOption {
    pub name: String,
    pub description: String,
    pub base_price: u32,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    pub description: String,
    pub options: Vec<PlanOption>,
    pub customizations: Vec<Customization>,
}

impl ServiceCategory {
    pub fn option(&self, name: &str) -> Option<&PlanOption> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn customization(&self, name: &str) -> Option<&Customization> {
        self.customizations.iter().find(|c| c.name == name)
    }
}

/// The full service offering. Built once at startup and shared immutably;
/// changing prices or plans means editing `standard()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub categories: Vec<ServiceCategory>,
}

impl ServiceCatalog {
    pub fn category(&self, name: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The current published offering of the agency.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                ServiceCategory {
                    name: "Desarrollo Web".into(),
                    description: "Sitios y tiendas a medida, rápidos y listos para crecer.".into(),
                    options: vec![
                        PlanOption {
                            name: "Landing Page".into(),
                            description: "Una página enfocada en convertir visitas en clientes.".into(),
                            base_price: 1000,
                            features: vec![
                                "Diseño responsive".into(),
                                "Formulario de contacto".into(),
                                "Optimización SEO básica".into(),
                                "Entrega en 2 semanas".into(),
                            ],
                        },
                        PlanOption {
                            name: "Sitio Web Corporativo".into(),
                            description: "Presencia completa para tu empresa, con blog y secciones a medida.".into(),
                            base_price: 2200,
                            features: vec![
                                "Hasta 8 secciones".into(),
                                "Blog integrado".into(),
                                "Panel de administración".into(),
                                "Analítica incluida".into(),
                            ],
                        },
                        PlanOption {
                            name: "Aplicación Web".into(),
                            description: "Producto web a medida con lógica de negocio propia.".into(),
                            base_price: 4500,
                            features: vec![
                                "Diseño UX/UI completo".into(),
                                "Integraciones con APIs".into(),
                                "Pruebas automatizadas".into(),
                                "Soporte 3 meses".into(),
                            ],
                        },
                    ],
                    customizations: vec![
                        Customization {
                            name: "E-commerce".into(),
                            description: "Catálogo, carrito y pagos en línea.".into(),
                            unit_price: 500,
                            kind: CustomizationKind::Toggle,
                        },
                        Customization {
                            name: "Número de Páginas".into(),
                            description: "Páginas adicionales sobre la primera incluida.".into(),
                            unit_price: 100,
                            kind: CustomizationKind::Scalar { min: 1, max: 20, step: 1 },
                        },
                        Customization {
                            name: "SEO Avanzado".into(),
                            description: "Investigación de palabras clave y optimización técnica.".into(),
                            unit_price: 350,
                            kind: CustomizationKind::Toggle,
                        },
                        Customization {
                            name: "Idiomas Adicionales".into(),
                            description: "Versiones del sitio en otros idiomas.".into(),
                            unit_price: 250,
                            kind: CustomizationKind::Scalar { min: 1, max: 5, step: 1 },
                        },
                    ],
                },
                ServiceCategory {
                    name: "Marketing Digital".into(),
                    description: "Campañas que llevan tráfico de verdad a tu negocio.".into(),
                    options: vec![
                        PlanOption {
                            name: "Plan Impulso".into(),
                            description: "Para marcas que arrancan su presencia digital.".into(),
                            base_price: 800,
                            features: vec![
                                "Gestión de 2 redes sociales".into(),
                                "8 publicaciones al mes".into(),
                                "Informe mensual".into(),
                            ],
                        },
                        PlanOption {
                            name: "Plan Crecimiento".into(),
                            description: "Contenido constante y campañas pagadas gestionadas.".into(),
                            base_price: 1500,
                            features: vec![
                                "Gestión de 4 redes sociales".into(),
                                "16 publicaciones al mes".into(),
                                "Campañas en Meta y Google".into(),
                                "Informe quincenal".into(),
                            ],
                        },
                    ],
                    customizations: vec![
                        Customization {
                            name: "Email Marketing".into(),
                            description: "Campañas de correo y automatizaciones.".into(),
                            unit_price: 300,
                            kind: CustomizationKind::Toggle,
                        },
                        Customization {
                            name: "Campañas Activas".into(),
                            description: "Campañas pagadas gestionadas en paralelo.".into(),
                            unit_price: 200,
                            kind: CustomizationKind::Scalar { min: 1, max: 10, step: 1 },
                        },
                    ],
                },
                ServiceCategory {
                    name: "Diseño Gráfico".into(),
                    description: "Identidad visual que hace memorable a tu marca.".into(),
                    options: vec![
                        PlanOption {
                            name: "Identidad Esencial".into(),
                            description: "Logo y paleta para empezar con buen pie.".into(),
                            base_price: 600,
                            features: vec![
                                "Logotipo con 3 propuestas".into(),
                                "Paleta de colores".into(),
                                "Tipografías".into(),
                            ],
                        },
                        PlanOption {
                            name: "Branding Completo".into(),
                            description: "Sistema de marca completo con manual de uso.".into(),
                            base_price: 1800,
                            features: vec![
                                "Logotipo y variantes".into(),
                                "Manual de marca".into(),
                                "Papelería corporativa".into(),
                                "Plantillas para redes".into(),
                            ],
                        },
                    ],
                    customizations: vec![
                        Customization {
                            name: "Animación de Logo".into(),
                            description: "Versión animada para video y redes.".into(),
                            unit_price: 250,
                            kind: CustomizationKind::Toggle,
                        },
                        Customization {
                            name: "Piezas Adicionales".into(),
                            description: "Piezas gráficas extra sobre la primera incluida.".into(),
                            unit_price: 80,
                            kind: CustomizationKind::Scalar { min: 1, max: 30, step: 1 },
                        },
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn standard_catalog_has_the_published_offering() {
        let catalog = ServiceCatalog::standard();
        assert!(!catalog.categories.is_empty());

        let web = catalog.category("Desarrollo Web").unwrap();
        assert_eq!(web.options[0].name, "Landing Page");
        assert_eq!(web.options[0].base_price, 1000);
        assert_eq!(web.option("Sitio Web Corporativo").unwrap().base_price, 2200);

        let ecommerce = web.customization("E-commerce").unwrap();
        assert_eq!(ecommerce.unit_price, 500);
        assert_eq!(ecommerce.kind, CustomizationKind::Toggle);

        let pages = web.customization("Número de Páginas").unwrap();
        assert_eq!(pages.unit_price, 100);
        assert_eq!(pages.kind, CustomizationKind::Scalar { min: 1, max: 20, step: 1 });
    }

    #[test]
    fn option_and_customization_names_are_unique_within_each_category() {
        for category in ServiceCatalog::standard().categories {
            let mut option_names: Vec<_> = category.options.iter().map(|o| &o.name).collect();
            option_names.sort();
            option_names.dedup();
            assert_eq!(option_names.len(), category.options.len(), "{}", category.name);

            let mut cust_names: Vec<_> = category.customizations.iter().map(|c| &c.name).collect();
            cust_names.sort();
            cust_names.dedup();
            assert_eq!(cust_names.len(), category.customizations.len(), "{}", category.name);
        }
    }

    #[test]
    fn lookups_by_unknown_name_return_none() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(catalog.category("Consultoría Espacial"), None);
        let web = catalog.category("Desarrollo Web").unwrap();
        assert_eq!(web.option("Plan Inexistente"), None);
        assert_eq!(web.customization("Hologramas"), None);
    }
}
