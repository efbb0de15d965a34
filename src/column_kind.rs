use super::*;

/// The value type inferred for one column of a table read back from disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ColumnKind {
  Boolean,
  Float,
  Integer,
  List,
  Text,
}

impl ColumnKind {
  /// Picks the narrowest kind that every non-empty cell parses as.
  pub(crate) fn infer<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> Self {
    let mut cells = cells.filter(|cell| !cell.is_empty());

    if cells.clone().next().is_none() {
      return Self::Text;
    }

    if cells.clone().all(|cell| cell.parse::<i64>().is_ok()) {
      Self::Integer
    } else if cells.clone().all(|cell| cell.parse::<f64>().is_ok()) {
      Self::Float
    } else if cells.clone().all(|cell| cell == "true" || cell == "false") {
      Self::Boolean
    } else if cells.all(|cell| {
      cell.starts_with('[')
        && matches!(serde_json::from_str::<Value>(cell), Ok(Value::Array(_)))
    }) {
      Self::List
    } else {
      Self::Text
    }
  }

  pub(crate) fn parse(self, cell: &str) -> Result<Value> {
    Ok(match self {
      Self::Boolean => Value::Bool(cell == "true"),
      Self::Float => {
        let number = cell.parse::<f64>()?;
        Number::from_f64(number).map_or(Value::Null, Value::Number)
      }
      Self::Integer => Value::from(cell.parse::<i64>()?),
      Self::List => serde_json::from_str(cell)?,
      Self::Text => Value::String(cell.to_string()),
    })
  }
}
