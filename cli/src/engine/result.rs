use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedOutput {
    pub name: String,
    pub label: String,
    /// Raw value in the base SI unit, for charts
    pub value: f64,
    /// Base SI unit of `value`
    pub unit: String,
    pub display: String,
}

/// A successful calculation, ready to show. Errors never produce one, so a
/// caller that replaces its last result on every call never shows stale output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub calculator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solve_for: Option<String>,
    pub outputs: Vec<FormattedOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl CalculationResult {
    pub fn output(&self, name: &str) -> Option<&FormattedOutput> {
        self.outputs.iter().find(|o| o.name == name)
    }

    pub fn display(&self, name: &str) -> Option<&str> {
        self.output(name).map(|o| o.display.as_str())
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.output(name).map(|o| o.value)
    }
}
