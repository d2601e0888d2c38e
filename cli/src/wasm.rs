// WebAssembly bindings for the calculator pages
use crate::catalog::{self, RawInput};
use crate::config::Config;
use crate::engine::Engine;
use crate::units;
use wasm_bindgen::prelude::*;

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

#[wasm_bindgen]
pub struct CalculatorWasm {
    engine: Engine,
}

impl Default for CalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: Engine::default(),
        }
    }

    /// Build an engine from the contents of a TOML display config
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<CalculatorWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| js_error("Failed to load config", e))?;
        Ok(Self {
            engine: Engine::new(config),
        })
    }

    /// Slugs of every calculator, in catalog order
    #[wasm_bindgen]
    pub fn list_calculators(&self) -> js_sys::Array {
        catalog::all()
            .iter()
            .map(|spec| JsValue::from_str(spec.slug))
            .collect()
    }

    /// Returns the calculator definition as a JSON string
    #[wasm_bindgen]
    pub fn describe(&self, slug: &str) -> Result<String, JsValue> {
        let spec = catalog::lookup(slug).map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(spec).map_err(|e| js_error("Failed to serialize calculator", e))
    }

    /// Run a calculator.
    /// input_json: `{"values": {...}, "units": {...}, "items": [...], "item_unit": ..., "solve_for": ...}`
    /// Returns the result as a JSON string; a rejected input surfaces as the
    /// plain message meant for the form.
    #[wasm_bindgen]
    pub fn calculate(&self, slug: &str, input_json: &str) -> Result<String, JsValue> {
        let raw: RawInput =
            serde_json::from_str(input_json).map_err(|e| js_error("Failed to parse input JSON", e))?;

        let result = self
            .engine
            .calculate(slug, &raw)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&result).map_err(|e| js_error("Failed to serialize result", e))
    }

    /// Live keystroke filter for numeric inputs
    #[wasm_bindgen]
    pub fn accepts_keystroke(&self, text: &str, signed: bool) -> bool {
        units::accepts_keystroke(text, signed)
    }
}
