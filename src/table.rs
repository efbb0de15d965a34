use super::*;

/// Row/column text form of a sequence of items: one column per field seen
/// anywhere in the batch, in first-seen order.
#[derive(Debug, PartialEq)]
pub(crate) struct Table {
  columns: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl Table {
  fn encode(value: Option<&Value>) -> String {
    match value {
      None | Some(Value::Null) => String::new(),
      Some(Value::String(text)) => text.clone(),
      Some(Value::Bool(flag)) => flag.to_string(),
      Some(Value::Number(number)) => number.to_string(),
      Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
    }
  }

  pub(crate) fn from_items(items: &[Item]) -> Self {
    let mut columns = Vec::<String>::new();

    for item in items {
      for field in item.fields().keys() {
        if !columns.contains(field) {
          columns.push(field.clone());
        }
      }
    }

    let rows = items
      .iter()
      .map(|item| {
        columns
          .iter()
          .map(|column| Self::encode(item.get(column)))
          .collect()
      })
      .collect();

    Self { columns, rows }
  }

  pub(crate) fn into_items(self) -> Result<Vec<Item>> {
    let kinds = (0..self.columns.len())
      .map(|index| {
        ColumnKind::infer(self.rows.iter().map(|row| row[index].as_str()))
      })
      .collect::<Vec<_>>();

    let mut items = Vec::with_capacity(self.rows.len());

    for row in &self.rows {
      let mut fields = Map::new();

      for ((column, kind), cell) in self.columns.iter().zip(&kinds).zip(row) {
        if cell.is_empty() {
          continue;
        }

        let value = kind
          .parse(cell)
          .with_context(|| format!("invalid value `{cell}` in column `{column}`"))?;

        fields.insert(column.clone(), value);
      }

      items.push(Item::from(fields));
    }

    Ok(items)
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let mut reader = csv::Reader::from_path(path)
      .with_context(|| format!("could not open {}", path.display()))?;

    let columns = reader
      .headers()?
      .iter()
      .map(str::to_string)
      .collect::<Vec<_>>();

    let mut rows = Vec::new();

    for record in reader.records() {
      let record =
        record.with_context(|| format!("could not read {}", path.display()))?;

      rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Self { columns, rows })
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    if self.columns.is_empty() {
      fs::write(path, "")
        .with_context(|| format!("could not write {}", path.display()))?;

      return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
      .with_context(|| format!("could not create {}", path.display()))?;

    writer.write_record(&self.columns)?;

    for row in &self.rows {
      writer.write_record(row)?;
    }

    writer.flush()?;

    Ok(())
  }
}
