use super::*;

#[derive(Debug, clap::Args)]
pub(crate) struct Comments {
  /// Maximum number of comments to fetch per story
  #[arg(long, default_value_t = 15)]
  pub(crate) limit_per_story: usize,

  /// Where to write the comments table
  #[arg(long, default_value = "comments.csv")]
  pub(crate) output: PathBuf,

  /// Stories table to read
  #[arg(long, default_value = "top_stories.csv")]
  pub(crate) stories: PathBuf,
}

impl Comments {
  pub(crate) async fn run(self, client: Client, delay: Duration) -> Result {
    let stories = Batch::load(&self.stories).context("could not load stories")?;

    if stories.is_empty() {
      warn!(path = %self.stories.display(), "no stories to fetch comments for");
    }

    let comments = CommentCollector::new(client, delay)
      .fetch_comments_for_stories(
        Batch::default(),
        stories.items(),
        self.limit_per_story,
      )
      .await?;

    comments.save(&self.output)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::json,
    tempfile::TempDir,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path},
    },
  };

  async fn mount(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
      .and(path(route))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(server)
      .await;
  }

  #[tokio::test]
  async fn reads_stories_table_written_by_stories_stage() {
    let server = MockServer::start().await;

    mount(&server, "/topstories.json", json!([1, 2])).await;
    mount(
      &server,
      "/item/1.json",
      json!({ "descendants": 2, "id": 1, "kids": [11, 12], "score": 10 }),
    )
    .await;
    mount(&server, "/item/2.json", json!({ "descendants": 0, "id": 2, "score": 4 }))
      .await;
    mount(&server, "/item/11.json", json!({ "id": 11, "parent": 1, "text": "first" }))
      .await;
    mount(&server, "/item/12.json", json!({ "id": 12, "parent": 1, "text": "second" }))
      .await;

    let dir = TempDir::new().unwrap();
    let stories = dir.path().join("top_stories.csv");
    let output = dir.path().join("comments.csv");

    let client = Client::new(&server.uri());

    Stories {
      limit: 5,
      output: stories.clone(),
    }
    .run(client.clone(), Duration::ZERO)
    .await
    .unwrap();

    Comments {
      limit_per_story: 15,
      output: output.clone(),
      stories,
    }
    .run(client, Duration::ZERO)
    .await
    .unwrap();

    assert_eq!(
      fs::read_to_string(&output).unwrap(),
      "id,parent,text,story_id\n11,1,first,1\n12,1,second,1\n"
    );
  }

  #[tokio::test]
  async fn missing_stories_table_is_fatal() {
    let dir = TempDir::new().unwrap();

    let result = Comments {
      limit_per_story: 15,
      output: dir.path().join("comments.csv"),
      stories: dir.path().join("top_stories.csv"),
    }
    .run(Client::new("http://127.0.0.1:9"), Duration::ZERO)
    .await;

    assert!(result.is_err());
    assert!(!dir.path().join("comments.csv").exists());
  }
}
