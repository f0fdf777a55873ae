use crate::common::*;

use crate::errors::template_error::*;

use crate::traits::template_engine_trait::*;

use crate::utils_modules::io_utils::*;

const ROOT_TEMPLATE_NAME: &str = "root";

static PLACEHOLDER: once_lazy<Regex> = once_lazy::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Deserialize)]
struct TextTemplateFile {
    root: Option<String>,
    #[serde(default)]
    templates: HashMap<String, String>,
}

/// `{{path}}` placeholder templates: one optional root body plus named bodies.
#[derive(Debug, Clone, Default)]
pub struct TextTemplate {
    root: Option<String>,
    templates: HashMap<String, String>,
}

impl TextTemplate {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
            templates: HashMap::new(),
        }
    }

    #[doc = "Creates a template set without a root body."]
    pub fn named_only() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_template(name, body);
        self
    }

    pub fn add_template(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(name.into(), body.into());
    }

    #[doc = "Function that reads a template set from a toml file"]
    /// # Arguments
    /// * `file_path` - toml file with an optional `root` key and a `[templates]` table
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn from_toml_file(file_path: &str) -> anyhow::Result<Self> {
        let file: TextTemplateFile = read_toml_from_file::<TextTemplateFile>(file_path)
            .map_err(|e| anyhow!("[TextTemplate::from_toml_file] {}: {:?}", file_path, e))?;

        Ok(Self {
            root: file.root,
            templates: file.templates,
        })
    }

    fn render(name: &str, body: &str, data: &Value) -> Result<String, TemplateError> {
        let mut rendered: String = String::with_capacity(body.len());
        let mut last: usize = 0;

        for caps in PLACEHOLDER.captures_iter(body) {
            let (whole, key) = match (caps.get(0), caps.get(1)) {
                (Some(whole), Some(key)) => (whole, key.as_str()),
                _ => continue,
            };

            let value: &Value =
                lookup(data, key).ok_or_else(|| TemplateError::MissingValue {
                    template: name.to_string(),
                    key: key.to_string(),
                })?;

            rendered.push_str(&body[last..whole.start()]);
            match value {
                Value::String(s) => rendered.push_str(s),
                other => rendered.push_str(&other.to_string()),
            }
            last = whole.end();
        }

        rendered.push_str(&body[last..]);
        Ok(rendered)
    }
}

/// Walks `data` along a dotted path. `.` alone is the whole value.
fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(data, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

impl TemplateEngine for TextTemplate {
    fn execute(&self, data: &Value) -> Result<String, TemplateError> {
        let body: &String = self.root.as_ref().ok_or(TemplateError::NoRootTemplate)?;
        Self::render(ROOT_TEMPLATE_NAME, body, data)
    }

    fn execute_template(&self, name: &str, data: &Value) -> Result<String, TemplateError> {
        let body: &String = self
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;
        Self::render(name, body, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_strings_raw_and_other_values_as_json() {
        let template = TextTemplate::new(
            r#"{"query":{"bool":{"must":[{"term":{"author":"{{author}}"}},{"terms":{"year":{{years}}}}]}},"size":{{ size }}}"#,
        );

        let rendered = template
            .execute(&json!({ "author": "le guin", "years": [1969, 1974], "size": 10 }))
            .unwrap();

        assert_eq!(
            rendered,
            r#"{"query":{"bool":{"must":[{"term":{"author":"le guin"}},{"terms":{"year":[1969,1974]}}]}},"size":10}"#
        );
    }

    #[test]
    fn resolves_nested_paths_and_leading_dot() {
        let template = TextTemplate::named_only()
            .with_template("by_shelf", r#"{"term":{"shelf":"{{ .shelf.name }}","slot":{{.shelf.slots.1}}}}"#);

        let rendered = template
            .execute_template(
                "by_shelf",
                &json!({ "shelf": { "name": "sci-fi", "slots": [3, 7] } }),
            )
            .unwrap();

        assert_eq!(rendered, r#"{"term":{"shelf":"sci-fi","slot":7}}"#);
    }

    #[test]
    fn whole_data_placeholder() {
        let template = TextTemplate::new(r#"{"query":{{.}}}"#);

        let rendered = template
            .execute(&json!({ "match_all": {} }))
            .unwrap();

        assert_eq!(rendered, r#"{"query":{"match_all":{}}}"#);
    }

    #[test]
    fn json_braces_without_placeholders_are_left_alone() {
        let template = TextTemplate::new(r#"{"query":{"match_all":{}}}"#);

        assert_eq!(
            template.execute(&Value::Null).unwrap(),
            r#"{"query":{"match_all":{}}}"#
        );
    }

    #[test]
    fn missing_value_is_an_error() {
        let template = TextTemplate::new(r#"{"term":{"isbn":"{{isbn}}"}}"#);

        let err = template.execute(&json!({ "title": "x" })).unwrap_err();

        assert!(matches!(
            err,
            TemplateError::MissingValue { ref template, ref key } if template == "root" && key == "isbn"
        ));
    }

    #[test]
    fn missing_root_and_unknown_name() {
        let template = TextTemplate::named_only();

        assert!(matches!(
            template.execute(&Value::Null),
            Err(TemplateError::NoRootTemplate)
        ));
        assert!(matches!(
            template.execute_template("nope", &Value::Null),
            Err(TemplateError::UnknownTemplate(name)) if name == "nope"
        ));
    }

    #[test]
    fn loads_templates_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
root = '{{"query":{{"match_all":{{}}}}}}'

[templates]
by_author = '{{"query":{{"term":{{"author":"{{{{author}}}}"}}}}}}'
"#
        )
        .unwrap();

        let template = TextTemplate::from_toml_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(
            template.execute(&Value::Null).unwrap(),
            r#"{"query":{"match_all":{}}}"#
        );
        assert_eq!(
            template
                .execute_template("by_author", &json!({ "author": "banks" }))
                .unwrap(),
            r#"{"query":{"term":{"author":"banks"}}}"#
        );
    }
}
