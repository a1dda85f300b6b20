use tabled::{
    builder::Builder,
    settings::{style::HorizontalLine, Style},
};

use crate::entry::ChestTable;

/// Render the chest table as a boxed ASCII grid.
///
/// Only the header is separated from the data by a divider; data rows follow
/// each other directly. Column widths come from the widest cell, or from the
/// header alone when there are no rows.
pub fn render_table(table: &ChestTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().cloned());
    for row in table.cells() {
        builder.push_record(row);
    }

    let style = Style::ascii()
        .horizontals([(1, HorizontalLine::inherit(Style::ascii()))])
        .remove_horizontal();

    builder.build().with(style).to_string()
}
