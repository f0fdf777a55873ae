use crate::common::*;

use crate::errors::es_oper_error::*;

use crate::model::configs::{config::get_es_config_info, es_config::*};
use crate::model::elastic_dto::{bulk_body::*, elastic_source_parser::*};
use crate::model::options::request_options::*;
use crate::model::template_dto::query_source::*;

use crate::traits::repository::es_oper_trait::*;

/// Keep-alive applied to every scroll continuation.
pub const SCROLL_KEEP_ALIVE: &str = "5m";

#[derive(Debug, Clone, new)]
pub struct EsOperImpl {
    es_client: Elasticsearch,
}

impl EsOperImpl {
    #[doc = "Builds the client from `config` and wraps it."]
    pub fn from_config(config: &EsConfig) -> anyhow::Result<Self> {
        Ok(Self::new(new_es_client(config)?))
    }

    #[doc = "Turns a non-2xx response into `EsOperError::ResponseStatus`, keeping its raw body."]
    async fn check_response(response: Response) -> Result<Response, EsOperError> {
        let status: StatusCode = response.status_code();

        if status.is_success() {
            Ok(response)
        } else {
            let body: String = response.text().await?;
            Err(EsOperError::ResponseStatus { status, body })
        }
    }

    async fn unmarshal_response<T: DeserializeOwned>(response: Response) -> Result<T, EsOperError> {
        let response: Response = Self::check_response(response).await?;
        let body: String = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    #[doc = "Query text to request body, checked but sent byte for byte. Blank queries become `{}`."]
    fn parse_query(query: Cow<'_, str>) -> Result<Box<RawValue>, EsOperError> {
        if query.trim().is_empty() {
            return Ok(RawValue::from_string("{}".to_string())?);
        }

        Ok(RawValue::from_string(query.into_owned())?)
    }
}

fn as_str_vec(values: &Option<Vec<String>>) -> Vec<&str> {
    values
        .iter()
        .flatten()
        .map(String::as_str)
        .collect()
}

#[async_trait]
impl EsOper for EsOperImpl {
    fn es_client(&self) -> &Elasticsearch {
        &self.es_client
    }

    async fn get<T>(&self, index: &str, id: &str, opts: &GetOptions) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let includes: Vec<&str> = as_str_vec(&opts.source_includes);
        let excludes: Vec<&str> = as_str_vec(&opts.source_excludes);

        let mut request = self.es_client.get(GetParts::IndexId(index, id));

        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(preference) = opts.preference.as_deref() {
            request = request.preference(preference);
        }
        if let Some(realtime) = opts.realtime {
            request = request.realtime(realtime);
        }
        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if !includes.is_empty() {
            request = request._source_includes(&includes);
        }
        if !excludes.is_empty() {
            request = request._source_excludes(&excludes);
        }

        let response: Response = request.send().await?;
        Self::unmarshal_response(response).await
    }

    async fn multi_get<T>(
        &self,
        index: &str,
        ids: &[&str],
        opts: &MgetOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let body: Value = serde_json::to_value(MgetRequestBody { ids })?;

        let parts: MgetParts<'_> = if index.is_empty() {
            MgetParts::None
        } else {
            MgetParts::Index(index)
        };

        let mut request = self.es_client.mget(parts).body(body);

        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(preference) = opts.preference.as_deref() {
            request = request.preference(preference);
        }
        if let Some(realtime) = opts.realtime {
            request = request.realtime(realtime);
        }
        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }

        let response: Response = request.send().await?;
        Self::unmarshal_response(response).await
    }

    async fn bulk<F>(
        &self,
        index: &str,
        write_req_body: F,
        opts: &BulkOptions,
    ) -> Result<(), EsOperError>
    where
        F: FnOnce(&mut BulkBody) -> Result<(), EsOperError> + Send,
    {
        let mut body: BulkBody = BulkBody::new();
        write_req_body(&mut body)?;
        debug!("[EsOperImpl->bulk] the bulk body is {}", body.to_ndjson());

        let parts: BulkParts<'_> = if index.is_empty() {
            BulkParts::None
        } else {
            BulkParts::Index(index)
        };

        let mut request = self.es_client.bulk(parts).body(body.into_lines());

        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(pipeline) = opts.pipeline.as_deref() {
            request = request.pipeline(pipeline);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }
        if let Some(wait_for_active_shards) = opts.wait_for_active_shards.as_deref() {
            request = request.wait_for_active_shards(wait_for_active_shards);
        }

        let response: Response = request.send().await?;
        let result: Value = Self::unmarshal_response(response).await?;

        /* Item level failures still come back as 200 */
        if result["errors"].as_bool().unwrap_or(false) {
            warn!(
                "[EsOperImpl->bulk] bulk request into '{}' completed with item errors",
                index
            );
        }

        Ok(())
    }

    async fn create<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &CreateOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized,
    {
        let body: Value = serde_json::to_value(doc)?;

        let mut request = self
            .es_client
            .create(CreateParts::IndexId(index, id))
            .body(body);

        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(pipeline) = opts.pipeline.as_deref() {
            request = request.pipeline(pipeline);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn index<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &IndexOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized,
    {
        let body: Value = serde_json::to_value(doc)?;

        let parts: IndexParts<'_> = if id.is_empty() {
            IndexParts::Index(index)
        } else {
            IndexParts::IndexId(index, id)
        };

        let mut request = self.es_client.index(parts).body(body);

        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(pipeline) = opts.pipeline.as_deref() {
            request = request.pipeline(pipeline);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }
        if let Some(if_seq_no) = opts.if_seq_no {
            request = request.if_seq_no(if_seq_no);
        }
        if let Some(if_primary_term) = opts.if_primary_term {
            request = request.if_primary_term(if_primary_term);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn update<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &UpdateOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized,
    {
        let body: Value = serde_json::to_value(UpdateDoc { doc })?;

        let mut request = self
            .es_client
            .update(UpdateParts::IndexId(index, id))
            .body(body);

        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }
        if let Some(retry_on_conflict) = opts.retry_on_conflict {
            request = request.retry_on_conflict(retry_on_conflict);
        }
        if let Some(if_seq_no) = opts.if_seq_no {
            request = request.if_seq_no(if_seq_no);
        }
        if let Some(if_primary_term) = opts.if_primary_term {
            request = request.if_primary_term(if_primary_term);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn delete(
        &self,
        index: &str,
        id: &str,
        opts: &DeleteOptions,
    ) -> Result<(), EsOperError> {
        let mut request = self.es_client.delete(DeleteParts::IndexId(index, id));

        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if let Some(routing) = opts.routing.as_deref() {
            request = request.routing(routing);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }
        if let Some(if_seq_no) = opts.if_seq_no {
            request = request.if_seq_no(if_seq_no);
        }
        if let Some(if_primary_term) = opts.if_primary_term {
            request = request.if_primary_term(if_primary_term);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn delete_by_query(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &DeleteByQueryOptions,
    ) -> Result<(), EsOperError> {
        let query: Cow<'_, str> = query.render()?;
        debug!("[EsOperImpl->delete_by_query] the delete query is {}", query);

        let body: Box<RawValue> = Self::parse_query(query)?;

        let routing: Vec<&str> = as_str_vec(&opts.routing);

        let mut request = self
            .es_client
            .delete_by_query(DeleteByQueryParts::Index(indexes))
            .body(body);

        if let Some(conflicts) = opts.conflicts {
            request = request.conflicts(conflicts);
        }
        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if !routing.is_empty() {
            request = request.routing(&routing);
        }
        if let Some(wait_for_completion) = opts.wait_for_completion {
            request = request.wait_for_completion(wait_for_completion);
        }
        if let Some(max_docs) = opts.max_docs {
            request = request.max_docs(max_docs);
        }
        if let Some(scroll_size) = opts.scroll_size {
            request = request.scroll_size(scroll_size);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn update_by_query(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &UpdateByQueryOptions,
    ) -> Result<(), EsOperError> {
        let query: Cow<'_, str> = query.render()?;
        debug!("[EsOperImpl->update_by_query] the update query is {}", query);

        let body: Box<RawValue> = Self::parse_query(query)?;

        let routing: Vec<&str> = as_str_vec(&opts.routing);

        let mut request = self
            .es_client
            .update_by_query(UpdateByQueryParts::Index(indexes))
            .body(body);

        if let Some(conflicts) = opts.conflicts {
            request = request.conflicts(conflicts);
        }
        if let Some(refresh) = opts.refresh {
            request = request.refresh(refresh);
        }
        if !routing.is_empty() {
            request = request.routing(&routing);
        }
        if let Some(pipeline) = opts.pipeline.as_deref() {
            request = request.pipeline(pipeline);
        }
        if let Some(wait_for_completion) = opts.wait_for_completion {
            request = request.wait_for_completion(wait_for_completion);
        }
        if let Some(max_docs) = opts.max_docs {
            request = request.max_docs(max_docs);
        }
        if let Some(scroll_size) = opts.scroll_size {
            request = request.scroll_size(scroll_size);
        }

        let response: Response = request.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn count(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &CountOptions,
    ) -> Result<i64, EsOperError> {
        let query: Cow<'_, str> = query.render()?;
        debug!("[EsOperImpl->count] the count query is {}", query);

        let body: Box<RawValue> = Self::parse_query(query)?;

        let parts: CountParts<'_> = if indexes.is_empty() {
            CountParts::None
        } else {
            CountParts::Index(indexes)
        };

        let routing: Vec<&str> = as_str_vec(&opts.routing);

        let mut request = self.es_client.count(parts).body(body);

        if !routing.is_empty() {
            request = request.routing(&routing);
        }
        if let Some(preference) = opts.preference.as_deref() {
            request = request.preference(preference);
        }
        if let Some(terminate_after) = opts.terminate_after {
            request = request.terminate_after(terminate_after);
        }

        let response: Response = request.send().await?;
        let result: Value = Self::unmarshal_response(response).await?;

        result
            .get("count")
            .and_then(|count| count.as_i64().or_else(|| count.as_f64().map(|c| c as i64)))
            .ok_or(EsOperError::MissingField("count"))
    }

    async fn search<T>(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &SearchOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let query: Cow<'_, str> = query.render()?;
        debug!("[EsOperImpl->search] the search query is {}", query);

        let body: Box<RawValue> = Self::parse_query(query)?;

        let parts: SearchParts<'_> = if indexes.is_empty() {
            SearchParts::None
        } else {
            SearchParts::Index(indexes)
        };

        let routing: Vec<&str> = as_str_vec(&opts.routing);

        let mut request = self.es_client.search(parts).body(body);

        if let Some(from) = opts.from {
            request = request.from(from);
        }
        if let Some(size) = opts.size {
            request = request.size(size);
        }
        if !routing.is_empty() {
            request = request.routing(&routing);
        }
        if let Some(preference) = opts.preference.as_deref() {
            request = request.preference(preference);
        }
        if let Some(scroll) = opts.scroll.as_deref() {
            request = request.scroll(scroll);
        }
        if let Some(timeout) = opts.timeout.as_deref() {
            request = request.timeout(timeout);
        }
        if let Some(rest_total_hits_as_int) = opts.rest_total_hits_as_int {
            request = request.rest_total_hits_as_int(rest_total_hits_as_int);
        }

        let response: Response = request.send().await?;
        Self::unmarshal_response(response).await
    }

    async fn search_by_scroll_id<T>(
        &self,
        scroll_id: &str,
        opts: &ScrollOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let body: Value = json!({
            "scroll": SCROLL_KEEP_ALIVE,
            "scroll_id": scroll_id,
        });

        let mut request = self.es_client.scroll(ScrollParts::None).body(body);

        if let Some(rest_total_hits_as_int) = opts.rest_total_hits_as_int {
            request = request.rest_total_hits_as_int(rest_total_hits_as_int);
        }

        let response: Response = request.send().await?;
        Self::unmarshal_response(response).await
    }
}

#[doc = "Parses one configured address, defaulting the scheme to http."]
fn parse_es_url(addr: &str) -> anyhow::Result<Url> {
    let url: String = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    };

    Url::parse(&url).map_err(|e| anyhow!("[parse_es_url] invalid url '{}': {}", addr, e))
}

#[doc = "Function that creates an Elasticsearch client from the connection config."]
/// One address gets a single node pool, several get a round robin pool.
///
/// # Arguments
/// * `config` - addresses, credentials and request timeout
///
/// # Returns
/// * Result<Elasticsearch, anyhow::Error>
pub fn new_es_client(config: &EsConfig) -> anyhow::Result<Elasticsearch> {
    let mut cluster_urls: Vec<Url> = config
        .addrs()
        .iter()
        .map(|addr| parse_es_url(addr))
        .collect::<anyhow::Result<_>>()
        .map_err(|e| anyhow!("[new_es_client][cluster_urls] {:?}", e))?;

    let mut builder: TransportBuilder = match cluster_urls.len() {
        0 => return Err(anyhow!("[new_es_client] no elasticsearch address configured")),
        1 => {
            let url: Url = cluster_urls.remove(0);
            TransportBuilder::new(SingleNodeConnectionPool::new(url))
        }
        _ => TransportBuilder::new(MultiNodeConnectionPool::round_robin(cluster_urls, None)),
    };

    builder = builder.timeout(Duration::from_secs(*config.timeout_secs()));

    if let Some((id, pw)) = config.credentials() {
        builder = builder.auth(EsCredentials::Basic(id.to_string(), pw.to_string()));
    }

    let transport: EsTransport = builder
        .build()
        .map_err(|e| anyhow!("[new_es_client] {:?}", e))?;

    Ok(Elasticsearch::new(transport))
}

#[doc = "Same as `new_es_client`, but logs and panics on failure."]
pub fn must_new_es_client(config: &EsConfig) -> Elasticsearch {
    match new_es_client(config) {
        Ok(client) => client,
        Err(e) => {
            error!("[must_new_es_client] fail to create elasticsearch client: {:?}", e);
            panic!("[must_new_es_client] fail to create elasticsearch client: {:?}", e);
        }
    }
}

#[doc = "Function that initializes the adapter from the global system config"]
pub fn initialize_es_oper() -> anyhow::Result<EsOperImpl> {
    let es_config: Arc<EsConfig> = get_es_config_info();
    EsOperImpl::from_config(&es_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_without_scheme_defaults_to_http() {
        let url: Url = parse_es_url("10.0.0.1:9200").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.1:9200/");

        let url: Url = parse_es_url("https://es.internal:9243").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn client_needs_at_least_one_address() {
        let config = EsConfig::new(vec![], String::new(), String::new());
        assert!(new_es_client(&config).is_err());
    }

    #[test]
    fn builds_single_and_multi_node_clients() {
        let single = EsConfig::new(
            vec!["localhost:9200".to_string()],
            "elastic".to_string(),
            "changeme".to_string(),
        );
        assert!(new_es_client(&single).is_ok());

        let multi = EsConfig::new(
            vec!["es1:9200".to_string(), "es2:9200".to_string()],
            String::new(),
            String::new(),
        );
        assert!(new_es_client(&multi).is_ok());
    }

    #[test]
    #[should_panic(expected = "fail to create elasticsearch client")]
    fn must_new_es_client_panics_on_bad_address() {
        let config = EsConfig::new(vec!["http://[::1".to_string()], String::new(), String::new());
        must_new_es_client(&config);
    }

    #[test]
    fn blank_query_becomes_empty_object() {
        assert_eq!(EsOperImpl::parse_query("  \n".into()).unwrap().get(), "{}");
        assert!(matches!(
            EsOperImpl::parse_query("{not json".into()),
            Err(EsOperError::Json(_))
        ));
    }

    #[test]
    fn query_text_is_kept_byte_for_byte() {
        let query: &str =
            r#"{"size":0,"query":{"match_all":{}},"terminate_after":12345678901234567890123,"a":1,"a":2}"#;

        let body: Box<RawValue> = EsOperImpl::parse_query(query.into()).unwrap();

        assert_eq!(body.get(), query);
        assert_eq!(serde_json::to_string(&body).unwrap(), query);
    }
}
