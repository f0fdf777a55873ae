/*
Description : Connectivity check for the es_oper adapter.
              Counts the documents of every configured index and logs the result.
*/
use es_oper::common::*;

use es_oper::env_configuration::env_config::*;
use es_oper::model::configs::{check_config::*, config::*};
use es_oper::repository::es_oper_repository::*;
use es_oper::utils_modules::logger_utils::*;
use es_oper::{
    CountOptions, EsOper, EsOperError, TemplateError, TemplateParam, TextTemplate,
};

#[doc = "Counts one index, with the named template when one is configured."]
async fn count_index(
    es_oper: &EsOperImpl,
    templates: Option<&TextTemplate>,
    template_name: Option<&str>,
    index: &str,
) -> Result<i64, EsOperError> {
    let opts: CountOptions = CountOptions::default();

    match (template_name, templates) {
        (Some(name), Some(templates)) => {
            let param: TemplateParam<'_> =
                TemplateParam::named(templates, name, json!({ "index": index }));
            es_oper.count_template(&param, &[index], &opts).await
        }
        (Some(name), None) => Err(TemplateError::UnknownTemplate(name.to_string()).into()),
        (None, _) => es_oper.count("".into(), &[index], &opts).await,
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _logger: LoggerHandle = set_global_logger();

    info!("Start es_oper connectivity check");

    let es_oper: EsOperImpl = initialize_es_oper().unwrap_or_else(|e| {
        error!("[main()] Unable to create the 'Elasticsearch' client.: {:?}", e);
        panic!("[main()] Unable to create the 'Elasticsearch' client.: {:?}", e)
    });

    let templates: Option<TextTemplate> = QUERY_TEMPLATE_PATH.as_deref().map(|path| {
        TextTemplate::from_toml_file(path).unwrap_or_else(|e| {
            error!("[main()] Unable to load query templates.: {:?}", e);
            panic!("[main()] Unable to load query templates.: {:?}", e)
        })
    });

    let check_config: Arc<CheckConfig> = get_check_config_info();
    let template_name: Option<&str> = check_config.template_name().as_deref();

    let counts = check_config.indexes().iter().map(|index| {
        let es_oper: &EsOperImpl = &es_oper;
        let templates: Option<&TextTemplate> = templates.as_ref();
        async move {
            let result: Result<i64, EsOperError> =
                count_index(es_oper, templates, template_name, index).await;
            (index, result)
        }
    });

    for (index, result) in join_all(counts).await {
        match result {
            Ok(count) => info!("[main()] index '{}' holds {} documents", index, count),
            Err(e) => error!("[main()] failed to count index '{}': {}", index, e),
        }
    }

    info!("es_oper connectivity check finished");
}
