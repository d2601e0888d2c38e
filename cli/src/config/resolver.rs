use crate::catalog::{CalculatorSpec, OutputSpec};
use crate::config::settings::Config;
use serde::Serialize;

/// Where a resolved precision came from, most specific first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionSource {
    Output,
    Calculator,
    Kind,
    Global,
    Catalog,
}

const PRECISION_CHAIN: [PrecisionSource; 5] = [
    PrecisionSource::Output,
    PrecisionSource::Calculator,
    PrecisionSource::Kind,
    PrecisionSource::Global,
    PrecisionSource::Catalog,
];

pub struct PrecisionResolver<'a> {
    config: &'a Config,
}

impl<'a> PrecisionResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn resolve(&self, spec: &CalculatorSpec, output: &OutputSpec) -> usize {
        self.resolve_with_source(spec, output).0
    }

    pub fn resolve_with_source(
        &self,
        spec: &CalculatorSpec,
        output: &OutputSpec,
    ) -> (usize, PrecisionSource) {
        let calculator = self.config.calculators.get(spec.slug);

        // Walk the chain until a level sets a value; the catalog always does
        for source in PRECISION_CHAIN {
            let digits = match source {
                PrecisionSource::Output => {
                    calculator.and_then(|c| c.outputs.get(output.name).copied())
                }
                PrecisionSource::Calculator => calculator.and_then(|c| c.digits),
                PrecisionSource::Kind => self.config.display.kinds.get(output.kind.name()).copied(),
                PrecisionSource::Global => self.config.display.digits,
                PrecisionSource::Catalog => Some(output.digits),
            };
            if let Some(digits) = digits {
                return (digits, source);
            }
        }
        (output.digits, PrecisionSource::Catalog)
    }

    pub fn placeholder(&self) -> &str {
        &self.config.display.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ohms_power() -> (&'static CalculatorSpec, &'static OutputSpec) {
        let spec = catalog::find("ohms_law").unwrap();
        (spec, spec.output("power").unwrap())
    }

    #[test]
    fn test_catalog_default() {
        let config = Config::empty();
        let resolver = PrecisionResolver::new(&config);
        let (spec, output) = ohms_power();
        assert_eq!(
            resolver.resolve_with_source(spec, output),
            (3, PrecisionSource::Catalog)
        );
    }

    #[test]
    fn test_precedence_chain() {
        let mut config = Config::empty();
        let (spec, output) = ohms_power();

        config.display.digits = Some(6);
        assert_eq!(
            PrecisionResolver::new(&config).resolve_with_source(spec, output),
            (6, PrecisionSource::Global)
        );

        config.display.kinds.insert("power".to_string(), 5);
        assert_eq!(
            PrecisionResolver::new(&config).resolve_with_source(spec, output),
            (5, PrecisionSource::Kind)
        );

        let calc = config.calculators.entry("ohms_law".to_string()).or_default();
        calc.digits = Some(4);
        assert_eq!(
            PrecisionResolver::new(&config).resolve_with_source(spec, output),
            (4, PrecisionSource::Calculator)
        );

        let calc = config.calculators.entry("ohms_law".to_string()).or_default();
        calc.outputs.insert("power".to_string(), 2);
        assert_eq!(
            PrecisionResolver::new(&config).resolve_with_source(spec, output),
            (2, PrecisionSource::Output)
        );

        // Overrides for one output leave the others alone
        let voltage = spec.output("voltage").unwrap();
        assert_eq!(PrecisionResolver::new(&config).resolve(spec, voltage), 4);
    }

    #[test]
    fn test_kind_override_only_hits_matching_kind() {
        let mut config = Config::empty();
        config.display.kinds.insert("resistance".to_string(), 6);
        let (spec, output) = ohms_power();
        assert_eq!(PrecisionResolver::new(&config).resolve(spec, output), 3);
        let r = spec.output("resistance").unwrap();
        assert_eq!(PrecisionResolver::new(&config).resolve(spec, r), 6);
    }
}
