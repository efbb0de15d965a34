use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Run every stage in order, passing data through the default files
  All(All),
  /// Summarize the collected tables and plot their distributions
  Analyze(Analyze),
  /// Fetch comments for the stories in a stories table
  Comments(Comments),
  /// Fetch the current top stories
  Stories(Stories),
}

impl Subcommand {
  pub(crate) async fn run(self, client: Client, delay: Duration) -> Result {
    match self {
      Self::All(all) => all.run(client, delay).await,
      Self::Analyze(analyze) => analyze.run(),
      Self::Comments(comments) => comments.run(client, delay).await,
      Self::Stories(stories) => stories.run(client, delay).await,
    }
  }
}
