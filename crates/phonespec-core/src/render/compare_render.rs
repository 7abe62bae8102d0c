use crate::compare::{Cell, ComparisonMatrix};
use crate::render::PLACEHOLDER_GLYPH;

/// Render a comparison matrix as a Markdown table
///
/// Multi-line cells join their lines with `<br>`. A matrix with no rows
/// renders the header only.
pub fn render_comparison_table(matrix: &ComparisonMatrix) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "| Specification | {} | {} |\n",
        escape(&matrix.left_title),
        escape(&matrix.right_title)
    ));
    output.push_str("|---|---|---|\n");

    for row in &matrix.rows {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            escape(&row.label),
            render_cell(&row.left),
            render_cell(&row.right)
        ));
    }

    output
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Placeholder => PLACEHOLDER_GLYPH.to_string(),
        Cell::Text(text) => escape(text),
        Cell::Lines(lines) => lines
            .iter()
            .map(|l| escape(l))
            .collect::<Vec<_>>()
            .join("<br>"),
    }
}

/// Keep cell text from breaking the table layout
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonRow;

    #[test]
    fn test_render_table_cells() {
        let matrix = ComparisonMatrix {
            left_title: "Acme One".to_string(),
            right_title: "Acme Two".to_string(),
            rows: vec![ComparisonRow {
                label: "Main Camera".to_string(),
                path: "Main Camera".to_string(),
                left: Cell::Lines(vec!["Single: 12 MP".to_string(), "Video: 1080p".to_string()]),
                right: Cell::Placeholder,
            }],
        };

        let table = render_comparison_table(&matrix);
        assert!(table.starts_with("| Specification | Acme One | Acme Two |\n"));
        assert!(table.contains("| Main Camera | Single: 12 MP<br>Video: 1080p | — |"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        assert_eq!(render_cell(&Cell::Text("a|b".to_string())), "a\\|b");
    }
}
