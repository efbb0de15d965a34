use super::*;

#[derive(Debug, clap::Args)]
pub(crate) struct Analyze {
  /// Comments table to read
  #[arg(long, default_value = "comments.csv")]
  pub(crate) comments: PathBuf,

  /// Save the plots without opening them
  #[arg(long)]
  pub(crate) no_open: bool,

  /// Where to write the histogram image
  #[arg(long, default_value = "analysis_plots.png")]
  pub(crate) plot: PathBuf,

  /// Stories table to read
  #[arg(long, default_value = "top_stories.csv")]
  pub(crate) stories: PathBuf,

  /// Where to write the summary row
  #[arg(long, default_value = "summary_statistics.csv")]
  pub(crate) summary: PathBuf,
}

impl Analyze {
  pub(crate) fn run(self) -> Result {
    let analysis = Analysis::load(&self.stories, &self.comments)?;

    analysis.generate_summary_statistics(&self.summary)?;

    analysis.plot_data(&self.plot, !self.no_open)
  }
}
