use super::*;

#[derive(Debug, clap::Args)]
pub(crate) struct All {
  /// Number of top stories to fetch
  #[arg(long, default_value_t = 5)]
  pub(crate) limit: usize,

  /// Maximum number of comments to fetch per story
  #[arg(long, default_value_t = 15)]
  pub(crate) limit_per_story: usize,

  /// Save the plots without opening them
  #[arg(long)]
  pub(crate) no_open: bool,
}

impl All {
  pub(crate) async fn run(self, client: Client, delay: Duration) -> Result {
    let stories = PathBuf::from("top_stories.csv");
    let comments = PathBuf::from("comments.csv");

    Stories {
      limit: self.limit,
      output: stories.clone(),
    }
    .run(client.clone(), delay)
    .await?;

    Comments {
      limit_per_story: self.limit_per_story,
      output: comments.clone(),
      stories: stories.clone(),
    }
    .run(client, delay)
    .await?;

    Analyze {
      comments,
      no_open: self.no_open,
      plot: PathBuf::from("analysis_plots.png"),
      stories,
      summary: PathBuf::from("summary_statistics.csv"),
    }
    .run()
  }
}
