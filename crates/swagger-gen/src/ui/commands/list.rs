use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    document::SchemaDocument,
    naming::paths::{PathStrategy, request_class_name},
  },
  ui::{Colors, term_width},
  utils::spec::SpecLoader,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperationRow {
  pub method: String,
  pub path: String,
  pub class: String,
  /// `operationId`, when the document gives one.
  pub operation_id: Option<String>,
}

/// One row per operation, in document order.
pub(crate) fn operation_rows(document: &SchemaDocument, strategy: PathStrategy) -> Vec<OperationRow> {
  document
    .operations()
    .map(|(path, method, operation)| OperationRow {
      method: method.as_upper(),
      path: path.to_string(),
      class: request_class_name(method.as_ref(), &strategy.normalize(path)),
      operation_id: operation.operation_id.clone(),
    })
    .collect()
}

pub async fn list_operations(input: &Path, more_specificity: bool, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let rows = operation_rows(&document, PathStrategy::from_flag(more_specificity));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["METHOD", "PATH", "CLASS", "OPERATION"] {
    header.add_cell(Cell::new(title).fg(Colors::cell(colors.label())));
  }
  table.set_header(header);

  for operation in rows {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(operation.method)
        .fg(Colors::cell(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(Colors::cell(colors.primary())));
    row.add_cell(
      Cell::new(operation.class)
        .fg(Colors::cell(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(operation.operation_id.as_deref().unwrap_or("-")).fg(Colors::cell(colors.label())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
