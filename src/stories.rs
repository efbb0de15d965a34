use super::*;

#[derive(Debug, clap::Args)]
pub(crate) struct Stories {
  /// Number of top stories to fetch
  #[arg(long, default_value_t = 5)]
  pub(crate) limit: usize,

  /// Where to write the stories table
  #[arg(long, default_value = "top_stories.csv")]
  pub(crate) output: PathBuf,
}

impl Stories {
  pub(crate) async fn run(self, client: Client, delay: Duration) -> Result {
    let stories = StoryCollector::new(client, delay)
      .fetch_top_stories(Batch::default(), self.limit)
      .await?;

    stories.save(&self.output)
  }
}
