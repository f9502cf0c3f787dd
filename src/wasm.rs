//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Problem;

/// Validate a workflow JSON: parse + structural validation.
/// Returns a JSON array of problem objects.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ProblemDto> {
    match crate::parse::parse(json) {
        Ok(document) => crate::validate::validate(&document)
            .into_iter()
            .map(ProblemDto::from)
            .collect(),
        Err(e) => vec![ProblemDto {
            code: e.code().into(),
            message: e.to_string(),
            node: None,
        }],
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ProblemDto {
    code: String,
    message: String,
    node: Option<String>,
}

impl From<Problem> for ProblemDto {
    fn from(p: Problem) -> Self {
        ProblemDto {
            code: p.code.into(),
            message: p.message,
            node: p.node,
        }
    }
}
