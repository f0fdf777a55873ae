//! Per-operation request parameters. Unset fields are not sent.

use crate::common::*;

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct GetOptions {
    pub routing: Option<String>,
    pub preference: Option<String>,
    pub realtime: Option<bool>,
    pub refresh: Option<bool>,
    pub source_includes: Option<Vec<String>>,
    pub source_excludes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct MgetOptions {
    pub routing: Option<String>,
    pub preference: Option<String>,
    pub realtime: Option<bool>,
    pub refresh: Option<bool>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct BulkOptions {
    pub refresh: Option<Refresh>,
    pub routing: Option<String>,
    pub pipeline: Option<String>,
    pub timeout: Option<String>,
    pub wait_for_active_shards: Option<String>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct CreateOptions {
    pub refresh: Option<Refresh>,
    pub routing: Option<String>,
    pub pipeline: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct IndexOptions {
    pub refresh: Option<Refresh>,
    pub routing: Option<String>,
    pub pipeline: Option<String>,
    pub timeout: Option<String>,
    pub if_seq_no: Option<i64>,
    pub if_primary_term: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct UpdateOptions {
    pub refresh: Option<Refresh>,
    pub routing: Option<String>,
    pub timeout: Option<String>,
    pub retry_on_conflict: Option<i64>,
    pub if_seq_no: Option<i64>,
    pub if_primary_term: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct DeleteOptions {
    pub refresh: Option<Refresh>,
    pub routing: Option<String>,
    pub timeout: Option<String>,
    pub if_seq_no: Option<i64>,
    pub if_primary_term: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct DeleteByQueryOptions {
    pub conflicts: Option<Conflicts>,
    pub refresh: Option<bool>,
    pub routing: Option<Vec<String>>,
    pub wait_for_completion: Option<bool>,
    pub max_docs: Option<i64>,
    pub scroll_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct UpdateByQueryOptions {
    pub conflicts: Option<Conflicts>,
    pub refresh: Option<bool>,
    pub routing: Option<Vec<String>>,
    pub pipeline: Option<String>,
    pub wait_for_completion: Option<bool>,
    pub max_docs: Option<i64>,
    pub scroll_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct CountOptions {
    pub routing: Option<Vec<String>>,
    pub preference: Option<String>,
    pub terminate_after: Option<i64>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct SearchOptions {
    pub from: Option<i64>,
    pub size: Option<i64>,
    pub routing: Option<Vec<String>>,
    pub preference: Option<String>,
    /// Keep-alive of the scroll context to open, e.g. `"5m"`.
    pub scroll: Option<String>,
    pub timeout: Option<String>,
    pub rest_total_hits_as_int: Option<bool>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ScrollOptions {
    pub rest_total_hits_as_int: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_leaves_unset_fields_empty() {
        let opts: SearchOptions = SearchOptionsBuilder::default()
            .size(20)
            .scroll("1m")
            .build()
            .unwrap();

        assert_eq!(opts.size, Some(20));
        assert_eq!(opts.scroll.as_deref(), Some("1m"));
        assert!(opts.from.is_none());
        assert!(opts.routing.is_none());
    }

    #[test]
    fn builder_accepts_client_params() {
        let opts: DeleteByQueryOptions = DeleteByQueryOptionsBuilder::default()
            .conflicts(Conflicts::Proceed)
            .refresh(true)
            .build()
            .unwrap();

        assert!(matches!(opts.conflicts, Some(Conflicts::Proceed)));
        assert_eq!(opts.refresh, Some(true));
    }
}
