use crate::common::*;

/// `GET /{index}/_doc/{id}` body, also the element type of `_mget` docs.
#[derive(Debug, Deserialize)]
pub struct GetResponse<T> {
    pub _index: String,
    pub _id: String,
    #[serde(default)]
    pub found: bool,
    pub _source: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct MgetResponse<T> {
    pub docs: Vec<GetResponse<T>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit<T> {
    pub _id: String,
    pub _score: Option<f64>,
    pub _source: T,
}

#[derive(Debug, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    pub relation: String,
}

#[derive(Debug, Deserialize)]
pub struct HitsWrapper<T> {
    pub total: Option<TotalHits>,
    pub hits: Vec<SearchHit<T>>,
}

/// Search and scroll responses. `_scroll_id` is only present when a scroll was requested.
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub _scroll_id: Option<String>,
    pub hits: HitsWrapper<T>,
}

impl<T> SearchResponse<T> {
    pub fn into_sources(self) -> Vec<T> {
        self.hits.hits.into_iter().map(|hit| hit._source).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MgetRequestBody<'a> {
    pub ids: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub struct UpdateDoc<'a, S: Serialize + ?Sized> {
    pub doc: &'a S,
}
