//! Payload analysis.
//!
//! The analysis contract is deliberately literal: uppercase the payload and
//! report how many characters came in. `length` counts the input as
//! received, not the transformed output (case mappings like `ß` → `SS`
//! change the character count of the output).

pub mod model;

/// Analyse a payload.
///
/// Total over all string inputs, including the empty string. Uppercasing
/// uses the locale-independent Unicode mapping; `length` is the number of
/// characters (Unicode scalar values) in the original text.
pub fn analyze(request: model::AnalysisRequest) -> model::AnalysisResponse {
    let length = request.text.chars().count() as u64;

    model::AnalysisResponse {
        output: request.text.to_uppercase(),
        length,
    }
}
