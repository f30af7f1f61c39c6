//! Greedy word wrap over the static metric tables.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` into lines no wider than `max_width_em`.
///
/// Words are separated by any whitespace and rejoined with single spaces. A
/// word wider than the line on its own still gets a line of its own. Blank
/// input yields no lines.
pub fn wrap_lines(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + metrics.space_width + word_w > max_width_em {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += metrics.space_width + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
