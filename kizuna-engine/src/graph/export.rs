//! Edge-table export.

use serde::Serialize;

use kizuna_core::types::SimilarityGraph;

/// One row of the ranked edge table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EdgeRow {
    pub a: String,
    pub b: String,
    pub score: f64,
    pub common_count: usize,
    /// Shared feature labels joined with an ideographic comma.
    pub common_features: String,
}

/// Edge table rows, ranked score descending, then common count descending.
pub fn edge_rows(graph: &SimilarityGraph) -> Vec<EdgeRow> {
    let mut rows: Vec<EdgeRow> = graph
        .export()
        .edges
        .into_iter()
        .map(|edge| EdgeRow {
            a: edge.a,
            b: edge.b,
            score: edge.score,
            common_count: edge.common_count,
            common_features: edge.common_features.join("、"),
        })
        .collect();
    // Scores are validated non-NaN upstream, so total ordering holds.
    rows.sort_by(|x, y| {
        y.score
            .partial_cmp(&x.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(y.common_count.cmp(&x.common_count))
    });
    rows
}

/// Render the ranked edge table as CSV with a header row.
pub fn edge_table_csv(graph: &SimilarityGraph) -> String {
    let mut out = String::from("a,b,score,common_count,common_features\n");
    for row in edge_rows(graph) {
        out.push_str(&csv_field(&row.a));
        out.push(',');
        out.push_str(&csv_field(&row.b));
        out.push(',');
        out.push_str(&format!("{}", row.score));
        out.push(',');
        out.push_str(&row.common_count.to_string());
        out.push(',');
        out.push_str(&csv_field(&row.common_features));
        out.push('\n');
    }
    out
}

/// Minimal CSV quoting: only fields containing a comma, quote, or newline
/// get wrapped.
fn csv_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
