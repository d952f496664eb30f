//! Price calculator for catering quotes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOption {
    pub id: String,
    pub label: String,
    pub price_per_person: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub id: String,
    /// Display label; anything from the first `(` on is dropped in the summary
    pub label: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub meals: Vec<MealOption>,
    pub service_levels: Vec<ServiceLevel>,
    pub weekend_surcharge: f64,
    pub equipment_per_guest: f64,
    pub vat_rate: f64,
    pub min_guests: u32,
    pub max_guests: u32,
    pub default_guests: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let meal = |id: &str, label: &str, price_per_person: f64| MealOption {
            id: id.to_string(),
            label: label.to_string(),
            price_per_person,
        };
        let service = |id: &str, label: &str, multiplier: f64| ServiceLevel {
            id: id.to_string(),
            label: label.to_string(),
            multiplier,
        };

        Self {
            meals: vec![
                meal("buffet", "Turks Buffet", 25.0),
                meal("bbq", "BBQ & Grill", 30.0),
                meal("diner", "Luxe Diner", 42.5),
            ],
            service_levels: vec![
                service("delivery", "Alleen bezorging (x1.0)", 1.0),
                service("standard", "Met bediening (x1.3)", 1.3),
                service("premium", "Volledig verzorgd (x1.6)", 1.6),
            ],
            weekend_surcharge: 150.0,
            equipment_per_guest: 3.0,
            vat_rate: 0.21,
            min_guests: 10,
            max_guests: 500,
            default_guests: 50,
        }
    }
}

/// Current state of the calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub guests: u32,
    pub meal: usize,
    pub service: usize,
    pub weekend: bool,
    pub equipment: bool,
}

impl CalculatorInput {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            guests: config.default_guests,
            meal: 0,
            service: 0,
            weekend: false,
            equipment: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    pub price: f64,
}

impl Extra {
    pub fn price_label(&self) -> String {
        format!("€{:.0}", self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub guests: u32,
    pub price_per_person: f64,
    pub service_name: String,
    pub extras: Vec<Extra>,
    /// Excluding VAT
    pub subtotal: f64,
    /// Including VAT
    pub total: f64,
}

impl PriceSummary {
    /// e.g. "€32,50"
    pub fn price_per_person_label(&self) -> String {
        format!("€{:.2}", self.price_per_person).replace('.', ",")
    }

    pub fn subtotal_label(&self) -> String {
        format!("€{}", self.subtotal.round())
    }

    pub fn total_label(&self) -> String {
        format!("€{}", self.total.round())
    }
}

/// Parse the guest field leniently: leading digits count, anything else
/// falls back to the minimum. The result is clamped to the allowed range.
pub fn parse_guests(raw: &str, config: &CalculatorConfig) -> u32 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits
        .parse::<u32>()
        .unwrap_or(config.min_guests)
        .clamp(config.min_guests, config.max_guests)
}

/// Returns `None` when the input refers to a meal or service that does not exist.
pub fn calculate(config: &CalculatorConfig, input: &CalculatorInput) -> Option<PriceSummary> {
    let meal = config.meals.get(input.meal)?;
    let service = config.service_levels.get(input.service)?;
    let guests = f64::from(input.guests);

    let price_per_person = meal.price_per_person * service.multiplier;
    let mut subtotal = price_per_person * guests;
    let mut extras = Vec::new();

    if input.weekend {
        subtotal += config.weekend_surcharge;
        extras.push(Extra {
            name: "Weekend toeslag".to_string(),
            price: config.weekend_surcharge,
        });
    }

    if input.equipment {
        let equipment = guests * config.equipment_per_guest;
        subtotal += equipment;
        extras.push(Extra {
            name: "Servies huur".to_string(),
            price: equipment,
        });
    }

    let service_name = service
        .label
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(PriceSummary {
        guests: input.guests,
        price_per_person,
        service_name,
        extras,
        subtotal,
        total: subtotal * (1.0 + config.vat_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_input(guests: u32) -> CalculatorInput {
        CalculatorInput {
            guests,
            meal: 0,
            service: 1,
            weekend: false,
            equipment: false,
        }
    }

    #[test]
    fn test_base_price() {
        let config = CalculatorConfig::default();
        let summary = calculate(&config, &create_test_input(50)).unwrap();

        assert!((summary.price_per_person - 32.5).abs() < 1e-9);
        assert!((summary.subtotal - 1625.0).abs() < 1e-9);
        assert_eq!(summary.price_per_person_label(), "€32,50");
        assert_eq!(summary.subtotal_label(), "€1625");
        // 1625 * 1.21 = 1966.25
        assert_eq!(summary.total_label(), "€1966");
        assert_eq!(summary.service_name, "Met bediening");
        assert!(summary.extras.is_empty());
    }

    #[test]
    fn test_extras() {
        let config = CalculatorConfig::default();
        let mut input = create_test_input(40);
        input.service = 0;
        input.weekend = true;
        input.equipment = true;

        let summary = calculate(&config, &input).unwrap();

        // 25 * 40 + 150 + 120
        assert!((summary.subtotal - 1270.0).abs() < 1e-9);
        assert_eq!(summary.extras.len(), 2);
        assert_eq!(summary.extras[0].name, "Weekend toeslag");
        assert_eq!(summary.extras[0].price_label(), "€150");
        assert_eq!(summary.extras[1].name, "Servies huur");
        assert_eq!(summary.extras[1].price_label(), "€120");
        assert_eq!(summary.total_label(), "€1537");
    }

    #[test]
    fn test_unknown_option_yields_none() {
        let config = CalculatorConfig::default();
        let mut input = create_test_input(50);
        input.meal = 99;
        assert!(calculate(&config, &input).is_none());
    }

    #[test]
    fn test_parse_guests() {
        let config = CalculatorConfig::default();

        assert_eq!(parse_guests("75", &config), 75);
        assert_eq!(parse_guests(" 120 personen", &config), 120);
        assert_eq!(parse_guests("", &config), 10);
        assert_eq!(parse_guests("abc", &config), 10);
        assert_eq!(parse_guests("3", &config), 10);
        assert_eq!(parse_guests("9000", &config), 500);
    }
}
