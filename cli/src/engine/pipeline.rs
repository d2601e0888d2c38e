use crate::catalog::{self, CalculatorSpec, InputValidator, OutputDisplay, RawInput, SolveMode};
use crate::config::{Config, PrecisionResolver};
use crate::engine::evaluator::{evaluate, RawResult};
use crate::engine::result::{CalculationResult, FormattedOutput};
use crate::error::Result;
use crate::units::{format_duration, format_quantity};
use tracing::{debug, warn};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Runs calculators end to end: validate, normalize, evaluate, format.
///
/// Holds nothing but its configuration, so one engine can serve any number
/// of calculations.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calculate(&self, slug: &str, raw: &RawInput) -> Result<CalculationResult> {
        let spec = catalog::lookup(slug)?;
        let mode = spec.solve_mode(raw.solve_for.as_deref())?;
        debug!(calculator = slug, mode = ?mode.map(|m| m.id), "validating input");

        let parsed = InputValidator::new(spec).validate(raw, mode).map_err(|e| {
            warn!(calculator = slug, kind = ?e.kind, fields = ?e.fields, "rejected input: {}", e);
            e
        })?;
        debug!(calculator = slug, values = ?parsed.values, items = parsed.items.len(), "evaluating");

        let result = evaluate(spec, mode, &parsed).map_err(|e| {
            warn!(calculator = slug, kind = ?e.kind, "evaluation failed: {}", e);
            e
        })?;

        Ok(self.format(spec, mode, result))
    }

    fn format(
        &self,
        spec: &CalculatorSpec,
        mode: Option<&SolveMode>,
        result: RawResult,
    ) -> CalculationResult {
        let resolver = PrecisionResolver::new(&self.config);

        let outputs = result
            .outputs
            .iter()
            .filter_map(|raw| {
                let output = match spec.output(raw.name) {
                    Some(o) => o,
                    None => {
                        warn!(calculator = spec.slug, output = raw.name, "output missing from catalog");
                        return None;
                    }
                };

                let digits = resolver.resolve(spec, output);
                let display = match output.display {
                    OutputDisplay::Prefixed => {
                        format_quantity(raw.value, output.kind, digits, resolver.placeholder())
                    }
                    OutputDisplay::Duration => {
                        format_duration(raw.value / SECONDS_PER_HOUR, resolver.placeholder())
                    }
                };

                Some(FormattedOutput {
                    name: output.name.to_string(),
                    label: output.label.to_string(),
                    value: raw.value,
                    unit: output.kind.symbol().to_string(),
                    display,
                })
            })
            .collect();

        CalculationResult {
            calculator: spec.slug.to_string(),
            solve_for: mode.map(|m| m.id.to_string()),
            outputs,
            annotation: result.annotation,
        }
    }
}
