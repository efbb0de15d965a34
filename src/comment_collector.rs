use super::*;

pub(crate) struct CommentCollector {
  client: Client,
  delay: Duration,
}

impl CommentCollector {
  /// Fetches at most `limit_per_story` top-level comments for each story,
  /// tagging each with `story_id` and appending the ones not already held.
  pub(crate) async fn fetch_comments_for_stories(
    &self,
    mut comments: Batch,
    stories: &[Item],
    limit_per_story: usize,
  ) -> Result<Batch> {
    for story in stories {
      let Some(story_id) = story.id() else {
        continue;
      };

      for id in story.kids().into_iter().take(limit_per_story) {
        let Some(mut comment) = self.client.fetch_item(id).await? else {
          debug!(id, story_id, "comment unavailable");
          continue;
        };

        comment.insert("story_id", story_id);

        if comments.push_unique(comment)? {
          debug!(id, story_id, "fetched comment");
          sleep(self.delay).await;
        } else {
          debug!(id, story_id, "duplicate comment");
        }
      }
    }

    Ok(comments)
  }

  pub(crate) fn new(client: Client, delay: Duration) -> Self {
    Self { client, delay }
  }
}
