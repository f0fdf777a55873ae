use crate::common::*;

use crate::errors::es_oper_error::*;

use crate::model::elastic_dto::bulk_body::*;
use crate::model::options::request_options::*;
use crate::model::template_dto::{query_source::*, template_param::*};

/// Simplified document and search operations over an Elasticsearch client.
///
/// Every call either decodes the response into the caller's model or returns
/// an [`EsOperError`]. Non-2xx responses become
/// [`EsOperError::ResponseStatus`]; nothing is retried.
#[async_trait]
pub trait EsOper: Send + Sync {
    fn es_client(&self) -> &Elasticsearch;

    async fn get<T>(&self, index: &str, id: &str, opts: &GetOptions) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static;

    async fn multi_get<T>(
        &self,
        index: &str,
        ids: &[&str],
        opts: &MgetOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static;

    /// Sends everything `write_req_body` writes as one bulk request. An empty
    /// `index` leaves the target index to the action lines.
    ///
    /// See <https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-bulk.html>
    async fn bulk<F>(
        &self,
        index: &str,
        write_req_body: F,
        opts: &BulkOptions,
    ) -> Result<(), EsOperError>
    where
        F: FnOnce(&mut BulkBody) -> Result<(), EsOperError> + Send;

    async fn create<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &CreateOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized;

    /// Indexes `doc` under `id`, or under a generated id when `id` is empty.
    async fn index<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &IndexOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized;

    /// Partial update: `doc` is sent as `{"doc": doc}`.
    async fn update<S>(
        &self,
        index: &str,
        id: &str,
        doc: &S,
        opts: &UpdateOptions,
    ) -> Result<(), EsOperError>
    where
        S: Serialize + Sync + ?Sized;

    async fn delete(&self, index: &str, id: &str, opts: &DeleteOptions)
        -> Result<(), EsOperError>;

    async fn delete_by_query(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &DeleteByQueryOptions,
    ) -> Result<(), EsOperError>;

    async fn delete_by_query_template(
        &self,
        t: &TemplateParam<'_>,
        indexes: &[&str],
        opts: &DeleteByQueryOptions,
    ) -> Result<(), EsOperError> {
        self.delete_by_query(QuerySource::Template(t), indexes, opts)
            .await
    }

    async fn update_by_query(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &UpdateByQueryOptions,
    ) -> Result<(), EsOperError>;

    async fn update_by_query_template(
        &self,
        t: &TemplateParam<'_>,
        indexes: &[&str],
        opts: &UpdateByQueryOptions,
    ) -> Result<(), EsOperError> {
        self.update_by_query(QuerySource::Template(t), indexes, opts)
            .await
    }

    async fn count(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &CountOptions,
    ) -> Result<i64, EsOperError>;

    async fn count_template(
        &self,
        t: &TemplateParam<'_>,
        indexes: &[&str],
        opts: &CountOptions,
    ) -> Result<i64, EsOperError> {
        self.count(QuerySource::Template(t), indexes, opts).await
    }

    async fn search<T>(
        &self,
        query: QuerySource<'_>,
        indexes: &[&str],
        opts: &SearchOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static;

    async fn search_template<T>(
        &self,
        t: &TemplateParam<'_>,
        indexes: &[&str],
        opts: &SearchOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.search(QuerySource::Template(t), indexes, opts).await
    }

    /// Continues a scroll cursor, keeping it alive for another five minutes.
    ///
    /// See <https://www.elastic.co/guide/en/elasticsearch/reference/current/paginate-search-results.html#scroll-search-results>
    async fn search_by_scroll_id<T>(
        &self,
        scroll_id: &str,
        opts: &ScrollOptions,
    ) -> Result<T, EsOperError>
    where
        T: DeserializeOwned + Send + 'static;
}
