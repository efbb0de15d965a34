use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Collect Hacker News top stories and comments, then summarize them"
)]
pub(crate) struct Arguments {
  /// Base URL of the Hacker News API
  #[arg(long, global = true, default_value = Client::API_BASE_URL)]
  pub(crate) api_base_url: String,

  /// Pause after each item request, in milliseconds
  #[arg(long, global = true, default_value_t = 500)]
  pub(crate) delay_ms: u64,

  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    let client = Client::new(&self.api_base_url);

    let delay = Duration::from_millis(self.delay_ms);

    self.subcommand.run(client, delay).await
  }
}
