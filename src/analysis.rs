use super::*;

pub(crate) struct Analysis {
  comments: Vec<Item>,
  stories: Vec<Item>,
}

impl Analysis {
  fn display(path: &Path) -> Result {
    let target = fs::canonicalize(path)
      .with_context(|| format!("could not resolve {}", path.display()))?;

    if let Err(error) = webbrowser::open(&target.to_string_lossy()) {
      warn!(%error, "could not display plots");
    }

    Ok(())
  }

  fn column(&self, field: &str) -> Vec<f64> {
    self
      .stories
      .iter()
      .filter_map(|story| story.number(field))
      .collect()
  }

  pub(crate) fn generate_summary_statistics(&self, path: &Path) -> Result<Summary> {
    let summary = Summary::new(&self.stories, &self.comments);

    summary.save(path)?;

    Ok(summary)
  }

  pub(crate) fn load(stories_file: &Path, comments_file: &Path) -> Result<Self> {
    let stories = Batch::load(stories_file)
      .map(Batch::into_items)
      .context("could not load stories")?;

    let comments = Batch::load(comments_file)
      .map(Batch::into_items)
      .context("could not load comments")?;

    Ok(Self { comments, stories })
  }

  /// Renders the histograms to `path` and, when `open` is set, hands the image
  /// to the system viewer.
  pub(crate) fn plot_data(&self, path: &Path, open: bool) -> Result {
    plot::render(path, &self.column("score"), &self.column("descendants"))?;

    if open {
      Self::display(path)?;
    }

    Ok(())
  }
}
