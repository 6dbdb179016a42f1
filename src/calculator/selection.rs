use std::collections::BTreeMap;
use std::rc::Rc;

use crate::calculator::catalog::{
    Customization, CustomizationKind, PlanOption, ServiceCatalog, ServiceCategory,
};

/// Current value of one customization control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizationValue {
    Toggle(bool),
    Scalar(u32),
}

impl CustomizationKind {
    /// Value a freshly reset control shows: toggles off, scalars at their
    /// minimum.
    pub fn default_value(&self) -> CustomizationValue {
        match *self {
            CustomizationKind::Toggle => CustomizationValue::Toggle(false),
            CustomizationKind::Scalar { min, .. } => CustomizationValue::Scalar(min),
        }
    }
}

/// Sum a selection into an estimated price.
///
/// Entries whose name does not appear in the category, or whose value does
/// not match the declared kind, are skipped. Scalar values are lifted to at
/// least `min` before the per-unit delta, so an out-of-range value can never
/// pull the total below the base price.
pub fn compute_price(
    category: &ServiceCategory,
    option: &PlanOption,
    values: &BTreeMap<String, CustomizationValue>,
) -> u32 {
    let mut total = option.base_price;
    for (name, value) in values {
        let Some(customization) = category.customization(name) else {
            continue;
        };
        total += contribution(customization, *value);
    }
    total
}

fn contribution(customization: &Customization, value: CustomizationValue) -> u32 {
    match (&customization.kind, value) {
        (CustomizationKind::Toggle, CustomizationValue::Toggle(true)) => customization.unit_price,
        (CustomizationKind::Toggle, CustomizationValue::Toggle(false)) => 0,
        (CustomizationKind::Scalar { min, .. }, CustomizationValue::Scalar(value)) => {
            // The first unit is included in the base price.
            customization.unit_price * value.max(*min).saturating_sub(1)
        }
        // Kind mismatch, stale entry from some earlier state. Skip it.
        _ => 0,
    }
}

/// The user's working selection: one category, one of its options, and the
/// customization values touched so far. Owns nothing shared; each view
/// instance gets its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCalculator {
    catalog: Rc<ServiceCatalog>,
    category: String,
    option: String,
    values: BTreeMap<String, CustomizationValue>,
}

impl PriceCalculator {
    /// Starts at the first category and its first option, nothing customized.
    pub fn new(catalog: Rc<ServiceCatalog>) -> Self {
        let category = catalog
            .categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let option = catalog
            .categories
            .first()
            .and_then(|c| c.options.first())
            .map(|o| o.name.clone())
            .unwrap_or_default();
        Self {
            catalog,
            category,
            option,
            values: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.catalog.categories
    }

    pub fn current_category(&self) -> Option<&ServiceCategory> {
        self.catalog.category(&self.category)
    }

    pub fn current_option(&self) -> Option<&PlanOption> {
        self.current_category().and_then(|c| c.option(&self.option))
    }

    /// Stored value for a customization of the active category, or the
    /// control's default when untouched.
    pub fn customization_value(&self, name: &str) -> Option<CustomizationValue> {
        let customization = self.current_category()?.customization(name)?;
        Some(
            self.values
                .get(name)
                .copied()
                .unwrap_or_else(|| customization.kind.default_value()),
        )
    }

    /// Selecting a category lands on its first option with every
    /// customization back at its default. Unknown names leave the selection
    /// untouched.
    pub fn select_category(&mut self, name: &str) {
        let Some(category) = self.catalog.category(name) else {
            return;
        };
        let Some(first) = category.options.first() else {
            return;
        };
        self.category = category.name.clone();
        self.option = first.name.clone();
        self.values.clear();
    }

    /// Switching option within the category keeps customization values as
    /// they are. Names outside the active category are ignored.
    pub fn select_option(&mut self, name: &str) {
        let Some(option) = self
            .current_category()
            .and_then(|c| c.option(name))
            .map(|o| o.name.clone())
        else {
            return;
        };
        self.option = option;
    }

    /// Updates one customization value, leaving the rest alone. Unknown
    /// names and kind-mismatched values are ignored; scalars are clamped to
    /// the declared range.
    pub fn set_customization(&mut self, name: &str, value: CustomizationValue) {
        let Some((key, kind)) = self
            .current_category()
            .and_then(|c| c.customization(name))
            .map(|c| (c.name.clone(), c.kind.clone()))
        else {
            return;
        };
        let accepted = match (kind, value) {
            (CustomizationKind::Toggle, CustomizationValue::Toggle(on)) => {
                CustomizationValue::Toggle(on)
            }
            (CustomizationKind::Scalar { min, max, .. }, CustomizationValue::Scalar(v)) => {
                CustomizationValue::Scalar(v.clamp(min, max))
            }
            _ => return,
        };
        self.values.insert(key, accepted);
    }

    pub fn total(&self) -> u32 {
        match (self.current_category(), self.current_option()) {
            (Some(category), Some(option)) => compute_price(category, option, &self.values),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculator::catalog::Customization;

    fn calculator() -> PriceCalculator {
        PriceCalculator::new(Rc::new(ServiceCatalog::standard()))
    }

    #[test]
    fn starts_at_first_category_and_first_option() {
        let calc = calculator();
        assert_eq!(calc.current_category().unwrap().name, "Desarrollo Web");
        assert_eq!(calc.current_option().unwrap().name, "Landing Page");
        assert_eq!(calc.total(), 1000);
    }

    #[test]
    fn selecting_any_category_resets_option_and_values() {
        let names: Vec<String> = calculator()
            .categories()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        for name in names {
            let mut calc = calculator();
            calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
            calc.select_category(&name);

            let category = calc.current_category().unwrap();
            assert_eq!(category.name, name);
            assert_eq!(calc.current_option().unwrap().name, category.options[0].name);
            for customization in &category.customizations {
                assert_eq!(
                    calc.customization_value(&customization.name),
                    Some(customization.kind.default_value()),
                );
            }
            assert_eq!(calc.total(), category.options[0].base_price);
        }
    }

    #[test]
    fn reselecting_the_active_category_also_resets() {
        let mut calc = calculator();
        calc.select_option("Sitio Web Corporativo");
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        calc.select_category("Desarrollo Web");
        assert_eq!(calc.current_option().unwrap().name, "Landing Page");
        assert_eq!(calc.total(), 1000);
    }

    #[test]
    fn total_is_deterministic() {
        let mut calc = calculator();
        calc.set_customization("SEO Avanzado", CustomizationValue::Toggle(true));
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(7));
        assert_eq!(calc.total(), calc.total());
    }

    #[test]
    fn toggling_off_restores_the_previous_total() {
        let mut calc = calculator();
        let before = calc.total();
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        assert_eq!(calc.total(), before + 500);
        calc.set_customization("E-commerce", CustomizationValue::Toggle(false));
        assert_eq!(calc.total(), before);
    }

    #[test]
    fn scalar_first_unit_is_free() {
        let mut calc = calculator();
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(1));
        assert_eq!(calc.total(), 1000);
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(5));
        assert_eq!(calc.total(), 1400);
    }

    #[test]
    fn switching_option_keeps_customization_values() {
        let mut calc = calculator();
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(4));
        calc.select_option("Sitio Web Corporativo");
        assert_eq!(
            calc.customization_value("E-commerce"),
            Some(CustomizationValue::Toggle(true)),
        );
        assert_eq!(
            calc.customization_value("Número de Páginas"),
            Some(CustomizationValue::Scalar(4)),
        );
    }

    #[test]
    fn landing_page_with_ecommerce_and_four_pages_costs_1800() {
        let mut calc = calculator();
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(4));
        assert_eq!(calc.total(), 1000 + 500 + 100 * 3);
    }

    #[test]
    fn upgrading_to_corporate_site_keeps_addons_and_costs_3000() {
        let mut calc = calculator();
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(4));
        calc.select_option("Sitio Web Corporativo");
        assert_eq!(calc.total(), 2200 + 500 + 300);
    }

    #[test]
    fn unknown_category_or_option_selection_is_a_no_op() {
        let mut calc = calculator();
        calc.set_customization("E-commerce", CustomizationValue::Toggle(true));
        let before = calc.clone();

        calc.select_category("Consultoría Espacial");
        assert_eq!(calc, before);

        calc.select_option("Plan Inexistente");
        assert_eq!(calc, before);

        // Option of a different category is out of reach too.
        calc.select_option("Plan Impulso");
        assert_eq!(calc, before);
    }

    #[test]
    fn set_customization_ignores_unknown_names_and_kind_mismatches() {
        let mut calc = calculator();
        let before = calc.clone();

        calc.set_customization("Hologramas", CustomizationValue::Toggle(true));
        assert_eq!(calc, before);

        calc.set_customization("E-commerce", CustomizationValue::Scalar(3));
        assert_eq!(calc, before);

        calc.set_customization("Número de Páginas", CustomizationValue::Toggle(true));
        assert_eq!(calc, before);
    }

    #[test]
    fn set_customization_clamps_scalars_to_their_range() {
        let mut calc = calculator();
        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(99));
        assert_eq!(
            calc.customization_value("Número de Páginas"),
            Some(CustomizationValue::Scalar(20)),
        );
        assert_eq!(calc.total(), 1000 + 100 * 19);

        calc.set_customization("Número de Páginas", CustomizationValue::Scalar(0));
        assert_eq!(
            calc.customization_value("Número de Páginas"),
            Some(CustomizationValue::Scalar(1)),
        );
        assert_eq!(calc.total(), 1000);
    }

    #[test]
    fn compute_price_skips_stale_keys_and_clamps_low_scalars() {
        let catalog = ServiceCatalog::standard();
        let category = catalog.category("Desarrollo Web").unwrap();
        let option = category.option("Landing Page").unwrap();

        let mut values = BTreeMap::new();
        // Leftover from a category that is no longer selected.
        values.insert(
            "Campañas Activas".to_string(),
            CustomizationValue::Scalar(5),
        );
        // Below the declared minimum; must not subtract from the total.
        values.insert("Número de Páginas".to_string(), CustomizationValue::Scalar(0));
        assert_eq!(compute_price(category, option, &values), 1000);
    }

    #[test]
    fn calculator_over_an_empty_catalog_degrades_to_zero() {
        let calc = PriceCalculator::new(Rc::new(ServiceCatalog { categories: vec![] }));
        assert_eq!(calc.current_category(), None);
        assert_eq!(calc.current_option(), None);
        assert_eq!(calc.total(), 0);
    }

    #[test]
    fn contribution_is_zero_for_untouched_controls() {
        let toggle = Customization {
            name: "Extra".into(),
            description: String::new(),
            unit_price: 500,
            kind: CustomizationKind::Toggle,
        };
        assert_eq!(contribution(&toggle, toggle.kind.default_value()), 0);

        let scalar = Customization {
            name: "Unidades".into(),
            description: String::new(),
            unit_price: 100,
            kind: CustomizationKind::Scalar { min: 1, max: 20, step: 1 },
        };
        assert_eq!(contribution(&scalar, scalar.kind.default_value()), 0);
    }
}
