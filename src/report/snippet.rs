//! The emitted JavaScript snippet.
//!
//! The snippet text is frozen: downstream users paste it into their
//! extension's `background.js`, and automation diffs the tool's stdout
//! between runs. Any change here is a breaking change to that workflow,
//! trailing blank line included.

use crate::domain::FittedLine;

/// Format the fitted model as a paste-ready JS snippet.
///
/// Coefficients are rendered with four decimal places.
pub fn format_snippet(line: &FittedLine) -> String {
    let mut out = String::new();
    out.push_str("// Paste this into background.js\n");
    out.push_str(&format!(
        "const CO2_MODEL = {{ m: {:.4}, b: {:.4} }};\n",
        line.slope, line.intercept
    ));
    out.push('\n');
    out.push_str("function predictFutureCO2(daysAhead) {\n");
    out.push_str("    return CO2_MODEL.m * daysAhead + CO2_MODEL.b;\n");
    out.push_str("}\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_is_byte_exact() {
        let line = FittedLine { slope: 12.3456, intercept: 234.5678 };
        let expected = "\
// Paste this into background.js
const CO2_MODEL = { m: 12.3456, b: 234.5678 };

function predictFutureCO2(daysAhead) {
    return CO2_MODEL.m * daysAhead + CO2_MODEL.b;
}

";
        assert_eq!(format_snippet(&line), expected);
    }

    #[test]
    fn coefficients_are_rounded_to_four_places() {
        let line = FittedLine { slope: 1.0 / 3.0, intercept: 2.0 / 3.0 };
        let out = format_snippet(&line);
        assert!(out.contains("m: 0.3333"));
        assert!(out.contains("b: 0.6667"));
    }

    #[test]
    fn snippet_is_deterministic() {
        let line = FittedLine { slope: -0.5, intercept: 100.0 };
        assert_eq!(format_snippet(&line), format_snippet(&line));
    }
}
