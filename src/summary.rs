use {super::*, serde::Serializer};

/// Field order is the column order of `summary_statistics.csv`.
#[allow(clippy::arbitrary_source_item_ordering)]
#[derive(Debug, Serialize)]
pub(crate) struct Summary {
  #[serde(serialize_with = "serialize_mean")]
  pub(crate) average_score: f64,
  #[serde(serialize_with = "serialize_mean")]
  pub(crate) average_comments: f64,
  pub(crate) total_stories: usize,
  pub(crate) total_comments: usize,
}

impl Summary {
  pub(crate) fn new(stories: &[Item], comments: &[Item]) -> Self {
    Self {
      average_score: mean(stories, "score"),
      average_comments: mean(stories, "descendants"),
      total_stories: stories.len(),
      total_comments: comments.len(),
    }
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    let mut writer = csv::Writer::from_path(path)
      .with_context(|| format!("could not create {}", path.display()))?;

    writer.serialize(self)?;
    writer.flush()?;

    info!(path = %path.display(), "saved summary statistics");

    Ok(())
  }
}

/// Arithmetic mean of the numeric values of `field`, skipping rows where it
/// is missing. NaN when no row has a value.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(items: &[Item], field: &str) -> f64 {
  let (sum, count) = items
    .iter()
    .filter_map(|item| item.number(field))
    .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

  if count == 0 {
    f64::NAN
  } else {
    sum / count as f64
  }
}

fn serialize_mean<S>(mean: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  if mean.is_nan() {
    serializer.serialize_none()
  } else {
    serializer.serialize_f64(*mean)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json, tempfile::TempDir};

  fn items(values: Vec<Value>) -> Vec<Item> {
    values
      .into_iter()
      .map(|value| serde_json::from_value(value).unwrap())
      .collect()
  }

  #[test]
  fn averages_scores_and_descendants() {
    let stories = items(vec![
      json!({ "id": 1, "score": 10, "descendants": 1 }),
      json!({ "id": 2, "score": 20, "descendants": 2 }),
      json!({ "id": 3, "score": 30, "descendants": 3 }),
    ]);

    let comments = items(vec![json!({ "id": 4 }), json!({ "id": 5 })]);

    let summary = Summary::new(&stories, &comments);

    assert!((summary.average_score - 20.0).abs() < f64::EPSILON);
    assert!((summary.average_comments - 2.0).abs() < f64::EPSILON);
    assert_eq!(summary.total_stories, 3);
    assert_eq!(summary.total_comments, 2);
  }

  #[test]
  fn empty_stories_yield_nan_means() {
    let summary = Summary::new(&[], &[]);

    assert!(summary.average_score.is_nan());
    assert!(summary.average_comments.is_nan());
    assert_eq!(summary.total_stories, 0);
  }

  #[test]
  fn mean_skips_missing_values() {
    let stories = items(vec![
      json!({ "id": 1, "descendants": 4 }),
      json!({ "id": 2 }),
      json!({ "id": 3, "descendants": null }),
      json!({ "id": 4, "descendants": 8 }),
    ]);

    assert!((mean(&stories, "descendants") - 6.0).abs() < f64::EPSILON);
  }

  #[test]
  fn save_writes_single_row_with_fixed_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary_statistics.csv");

    Summary {
      average_score: 20.0,
      average_comments: 2.0,
      total_stories: 3,
      total_comments: 7,
    }
    .save(&path)
    .unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "average_score,average_comments,total_stories,total_comments\n20.0,2.0,3,7\n"
    );
  }

  #[test]
  fn save_leaves_undefined_means_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary_statistics.csv");

    Summary::new(&[], &[]).save(&path).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "average_score,average_comments,total_stories,total_comments\n,,0,0\n"
    );
  }
}
