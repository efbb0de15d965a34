use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  /// Fetches one item; `None` when the API answers with a failure status or
  /// with `null` for an unknown identifier.
  pub(crate) async fn fetch_item(&self, id: u64) -> Result<Option<Item>> {
    let url = format!("{}/item/{id}.json", self.base_url);

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;

    if !response.status().is_success() {
      debug!(id, status = %response.status(), "skipping item");
      return Ok(None);
    }

    response
      .json::<Option<Item>>()
      .await
      .with_context(|| format!("malformed item {id}"))
  }

  /// Fetches the ranked top story identifiers; `None` on a failure status.
  pub(crate) async fn fetch_top_story_ids(&self) -> Result<Option<Vec<u64>>> {
    let url = format!("{}/topstories.json", self.base_url);

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;

    if !response.status().is_success() {
      debug!(status = %response.status(), "top stories request failed");
      return Ok(None);
    }

    Ok(Some(
      response
        .json::<Vec<u64>>()
        .await
        .context("malformed top stories list")?,
    ))
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }
}
