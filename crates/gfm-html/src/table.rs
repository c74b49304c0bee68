//! Table serializer.
//!
//! Header and data cells at column `i` both take their `align` attribute from
//! `alignments[i]`. Cells past the end of the alignment list are unaligned.

use crate::ast::{Alignment, Cell};
use crate::renderer::HtmlRenderer;

/// Append ` align="..."` for the given column, if it has an alignment.
fn push_alignment(alignments: &[Alignment], column: usize, out: &mut String) {
    if let Some(value) = alignments.get(column).and_then(|a| a.as_attr()) {
        out.push_str(r#" align=""#);
        out.push_str(value);
        out.push('"');
    }
}

impl HtmlRenderer<'_> {
    /// A table without data rows has no `<tbody>`.
    pub(crate) fn table(
        &self,
        alignments: &[Alignment],
        header: &[Cell],
        rows: &[Vec<Cell>],
        out: &mut String,
    ) {
        out.push_str("<table>\n");
        self.table_header(alignments, header, out);

        if rows.is_empty() {
            out.push_str("</table>\n");
            return;
        }

        out.push_str("\n<tbody>");
        for row in rows {
            out.push('\n');
            self.table_row(alignments, row, out);
        }
        out.push_str("</tbody></table>");
    }

    fn table_header(&self, alignments: &[Alignment], header: &[Cell], out: &mut String) {
        out.push_str("<thead>\n<tr>\n");
        for (column, cell) in header.iter().enumerate() {
            out.push_str("<th");
            push_alignment(alignments, column, out);
            out.push('>');
            self.write_nodes(cell, out);
            out.push_str("</th>\n");
        }
        out.push_str("</thead>");
    }

    fn table_row(&self, alignments: &[Alignment], row: &[Cell], out: &mut String) {
        out.push_str("<tr>");
        for (column, cell) in row.iter().enumerate() {
            out.push_str("\n<td");
            push_alignment(alignments, column, out);
            out.push('>');
            self.write_nodes(cell, out);
            out.push_str("</td>");
        }
        out.push_str("\n</tr>");
    }
}
