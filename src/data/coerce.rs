/// Outcome of coercing one raw cell: a usable number or a missing marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Number(f64),
    Missing,
}

/// Coerce a raw cell to a numeric value. Total: every input maps to exactly
/// one of Number or Missing, never an error.
///
/// Empty and whitespace-only cells are missing. Anything `f64` can parse
/// (signed, decimal point, scientific notation) is a number, except
/// non-finite results ("inf", "nan" spellings) which stay missing so no
/// NaN or infinity reaches the statistics engine.
pub fn coerce(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => CellValue::Number(v),
        _ => CellValue::Missing,
    }
}
