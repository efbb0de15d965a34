use super::*;

pub(crate) struct StoryCollector {
  client: Client,
  delay: Duration,
}

impl StoryCollector {
  /// Fetches up to `limit` stories in the API's ranking order, appending
  /// them to `stories`. Items that fail to fetch are skipped.
  pub(crate) async fn fetch_top_stories(
    &self,
    mut stories: Batch,
    limit: usize,
  ) -> Result<Batch> {
    let Some(ids) = self.client.fetch_top_story_ids().await? else {
      warn!("Failed to fetch top stories");
      return Ok(stories);
    };

    for id in ids.into_iter().take(limit) {
      if stories.contains(id) {
        continue;
      }

      match self.client.fetch_item(id).await? {
        Some(story) => {
          debug!(id, "fetched story");
          stories.push_unique(story)?;
        }
        None => debug!(id, "story unavailable"),
      }

      sleep(self.delay).await;
    }

    Ok(stories)
  }

  pub(crate) fn new(client: Client, delay: Duration) -> Self {
    Self { client, delay }
  }
}
