use super::*;

/// Ordered, identifier-unique collection of fetched items. Collectors take it
/// by value and hand it back, so nothing accumulates behind their backs.
#[derive(Debug, Default)]
pub(crate) struct Batch {
  ids: HashSet<u64>,
  items: Vec<Item>,
}

impl Batch {
  pub(crate) fn contains(&self, id: u64) -> bool {
    self.ids.contains(&id)
  }

  pub(crate) fn into_items(self) -> Vec<Item> {
    self.items
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[Item] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let mut batch = Self::default();

    for item in Table::load(path)?.into_items()? {
      batch.push_unique(item)?;
    }

    Ok(batch)
  }

  /// Appends `item` unless an item with the same identifier is already held.
  pub(crate) fn push_unique(&mut self, item: Item) -> Result<bool> {
    let id = item
      .id()
      .ok_or_else(|| anyhow!("item has no integer `id` field"))?;

    if !self.ids.insert(id) {
      return Ok(false);
    }

    self.items.push(item);

    Ok(true)
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    Table::from_items(&self.items).save(path)?;

    info!(records = self.len(), path = %path.display(), "saved records");

    Ok(())
  }
}
