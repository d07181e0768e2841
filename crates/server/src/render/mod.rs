//! HTML rendering for both apps.
//!
//! Pages are assembled from strings. Every value that originates from the
//! dataset or a form passes through `html_escape` before it is written.

pub mod predictor;
pub mod recommender;

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pipeline::TableRow;

/// Shown above the specific cause whenever a submission cannot be parsed
pub const INVALID_INPUT: &str = "Invalid input. Please check your values.";

/// Render rows as a table with one header per output column
pub fn table<T: TableRow>(rows: &[T]) -> String {
    let mut html = String::from(r#"<table class="dataframe data"><thead><tr>"#);
    for column in T::COLUMNS {
        let _ = write!(html, "<th>{}</th>", encode_text(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(html, "<td>{}</td>", encode_text(&cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// `<option>` elements for a select box
pub fn options<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.as_ref();
            format!(
                r#"<option value="{}">{}</option>"#,
                encode_double_quoted_attribute(value),
                encode_text(value)
            )
        })
        .collect()
}

/// The generic invalid-input message followed by its cause
pub fn error_box(message: &str, cause: &str) -> String {
    format!(
        r#"<div class="error">{}<br><small>{}</small></div>"#,
        encode_text(message),
        encode_text(cause)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::MealRecommendation;

    #[test]
    fn test_table_headers_and_escaping() {
        let rows = vec![MealRecommendation {
            food_item: "Mac & Cheese".to_string(),
            category: "Main".to_string(),
            calories: 0.3,
            protein: 0.2,
            carbohydrates: 0.25,
            fat: 0.1,
        }];

        let html = table(&rows);
        assert!(html.contains("<th>Food_Item</th>"));
        assert!(html.contains("<th>Calories (kcal)</th>"));
        assert!(html.contains("<td>Mac &amp; Cheese</td>"));
        assert!(html.contains("<td>0.25</td>"));
    }

    #[test]
    fn test_options() {
        assert_eq!(
            options(["Low-Carb", "A\"B"]),
            r#"<option value="Low-Carb">Low-Carb</option><option value="A&quot;B">A"B</option>"#
        );
    }
}
