use crate::common::*;

use crate::errors::template_error::*;

use crate::traits::template_engine_trait::*;

/// A template, the data to render it with, and optionally which named
/// sub-template to use instead of the root one.
#[derive(Clone, new)]
pub struct TemplateParam<'a> {
    pub template: &'a dyn TemplateEngine,
    pub data: Value,
    #[new(default)]
    pub name: Option<String>,
}

impl<'a> TemplateParam<'a> {
    pub fn named(template: &'a dyn TemplateEngine, name: impl Into<String>, data: Value) -> Self {
        Self {
            template,
            data,
            name: Some(name.into()),
        }
    }

    #[doc = "Renders the named template when a name is set, the root template otherwise."]
    pub fn execute(&self) -> Result<String, TemplateError> {
        match self.name.as_deref() {
            None | Some("") => self.template.execute(&self.data),
            Some(name) => self.template.execute_template(name, &self.data),
        }
    }
}

impl std::fmt::Debug for TemplateParam<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateParam")
            .field("data", &self.data)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<String>>,
    }

    impl TemplateEngine for RecordingEngine {
        fn execute(&self, data: &Value) -> Result<String, TemplateError> {
            self.calls.lock().unwrap().push("default".to_string());
            Ok(format!("default:{}", data))
        }

        fn execute_template(&self, name: &str, data: &Value) -> Result<String, TemplateError> {
            self.calls.lock().unwrap().push(format!("named:{}", name));
            Ok(format!("{}:{}", name, data))
        }
    }

    #[test]
    fn no_name_uses_default_template() {
        let engine = RecordingEngine::default();
        let param = TemplateParam::new(&engine, json!({ "id": 1 }));

        assert_eq!(param.execute().unwrap(), r#"default:{"id":1}"#);
        assert_eq!(*engine.calls.lock().unwrap(), vec!["default".to_string()]);
    }

    #[test]
    fn empty_name_uses_default_template() {
        let engine = RecordingEngine::default();
        let param = TemplateParam::named(&engine, "", json!(null));

        param.execute().unwrap();
        assert_eq!(*engine.calls.lock().unwrap(), vec!["default".to_string()]);
    }

    #[test]
    fn name_uses_named_template() {
        let engine = RecordingEngine::default();
        let param = TemplateParam::named(&engine, "by_isbn", json!("978"));

        assert_eq!(param.execute().unwrap(), r#"by_isbn:"978""#);
        assert_eq!(*engine.calls.lock().unwrap(), vec!["named:by_isbn".to_string()]);
    }
}
