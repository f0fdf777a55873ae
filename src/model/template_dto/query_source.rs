use crate::common::*;

use crate::errors::template_error::*;

use crate::model::template_dto::template_param::*;

/// Query body given either literally or as a template to render.
#[derive(Debug, Clone)]
pub enum QuerySource<'a> {
    Literal(&'a str),
    Template(&'a TemplateParam<'a>),
}

impl<'a> QuerySource<'a> {
    pub fn render(&self) -> Result<Cow<'a, str>, TemplateError> {
        match self {
            QuerySource::Literal(query) => Ok(Cow::Borrowed(*query)),
            QuerySource::Template(param) => param.execute().map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a str> for QuerySource<'a> {
    fn from(query: &'a str) -> Self {
        QuerySource::Literal(query)
    }
}

impl<'a> From<&'a String> for QuerySource<'a> {
    fn from(query: &'a String) -> Self {
        QuerySource::Literal(query.as_str())
    }
}

impl<'a> From<&'a TemplateParam<'a>> for QuerySource<'a> {
    fn from(param: &'a TemplateParam<'a>) -> Self {
        QuerySource::Template(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils_modules::text_template::*;

    #[test]
    fn literal_is_borrowed_as_is() {
        let source: QuerySource<'_> = r#"{"query":{"match_all":{}}}"#.into();

        assert!(matches!(source.render().unwrap(), Cow::Borrowed(q) if q == r#"{"query":{"match_all":{}}}"#));
    }

    #[test]
    fn template_is_rendered() {
        let template = TextTemplate::new(r#"{"query":{"term":{"isbn":"{{isbn}}"}}}"#);
        let param = TemplateParam::new(&template, json!({ "isbn": "0-575-03412-1" }));
        let source: QuerySource<'_> = (&param).into();

        assert_eq!(
            source.render().unwrap(),
            r#"{"query":{"term":{"isbn":"0-575-03412-1"}}}"#
        );
    }
}
