use std::collections::HashMap;
use std::fmt::Write;

use v_htmlescape::escape;

use crate::models::FEATURES;

pub const PAGE_TITLE: &str = "California Housing Price Predictor";

/// Raw model output is in units of $100,000.
pub const DOLLARS_PER_UNIT: f64 = 100_000.0;

const FIELD_LABELS: [&str; 5] = [
    "Median Income (MedInc)",
    "Average Rooms (AveRooms)",
    "House Age (HouseAge)",
    "Latitude",
    "Longitude",
];

/// Render the page with the submitted values echoed into the form inputs
/// and an optional prediction or error line underneath.
pub fn page(values: &HashMap<String, String>, message: Option<&str>) -> String {
    let mut inputs = String::new();
    for (name, label) in FEATURES.iter().zip(FIELD_LABELS) {
        let value = values.get(*name).map(String::as_str).unwrap_or("");
        let _ = write!(
            inputs,
            concat!(
                "      <label for=\"{name}\">{label}</label>\n",
                "      <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n"
            ),
            name = name,
            label = label,
            value = escape(value),
        );
    }

    let result = match message {
        Some(text) => format!("    <p class=\"result\">{}</p>\n", escape(text)),
        None => String::new(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <title>{title}</title>\n",
            "  <style>\n",
            "    body {{ font-family: sans-serif; max-width: 32rem; margin: 2rem auto; }}\n",
            "    label {{ display: block; margin-top: 0.75rem; }}\n",
            "    input {{ width: 100%; padding: 0.3rem; }}\n",
            "    button {{ margin-top: 1rem; padding: 0.4rem 1.2rem; }}\n",
            "    .result {{ margin-top: 1.5rem; font-weight: bold; }}\n",
            "  </style>\n",
            "</head>\n",
            "<body>\n",
            "  <h1>{title}</h1>\n",
            "  <form action=\"/predict\" method=\"post\">\n",
            "{inputs}",
            "      <button type=\"submit\">Predict</button>\n",
            "  </form>\n",
            "{result}",
            "</body>\n",
            "</html>\n"
        ),
        title = PAGE_TITLE,
        inputs = inputs,
        result = result,
    )
}

/// Format the prediction line: the raw model output converted to a rounded,
/// thousands-separated dollar figure, with the unscaled value alongside.
pub fn success_message(raw: f64) -> String {
    let dollars = (raw * DOLLARS_PER_UNIT).round() as i64;
    format!(
        "Predicted Median House Value: ${} (${:.2} \u{d7} $100,000)",
        format_thousands(dollars),
        raw
    )
}

pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(192_200), "192,200");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn success_message_scales_and_rounds() {
        assert_eq!(
            success_message(1.922),
            "Predicted Median House Value: $192,200 ($1.92 \u{d7} $100,000)"
        );
        // 2.34567 * 100000 rounds to 234567; raw shown to two decimals
        assert_eq!(
            success_message(2.34567),
            "Predicted Median House Value: $234,567 ($2.35 \u{d7} $100,000)"
        );
    }

    #[test]
    fn empty_page_has_title_and_labels() {
        let html = page(&HashMap::new(), None);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Median Income (MedInc)"));
        assert!(html.contains("name=\"Longitude\""));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn submitted_values_are_escaped() {
        let mut values = HashMap::new();
        values.insert("MedInc".to_string(), "\"><script>".to_string());
        let html = page(&values, Some("Error: field 'MedInc' is not a number"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Error: field &#x27;MedInc&#x27; is not a number"));
    }
}
