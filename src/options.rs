use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::replacements::Replacements;

const MAPPING_KEYS: [&str; 2] = ["interpolate", "CRAHtmlInterpolate"];

/// Either a boolean toggle or the element the assets are injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inject {
    Enabled(bool),
    Position(InjectPosition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectPosition {
    Head,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptLoading {
    Blocking,
    Defer,
    Module,
    SystemjsModule,
}

/// Options for the wrapped HTML-generation plugin, plus an optional
/// embedded replacement mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HtmlGenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Template file, relative to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Inline template. Takes priority over `template`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject: Option<Inject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_loading: Option<ScriptLoading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_chunks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<bool>,
    /// Replacements embedded in the options. Overrides any mapping passed
    /// separately to the interpolator.
    #[serde(alias = "CRAHtmlInterpolate", skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Replacements>,
}

impl HtmlGenerationOptions {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(input)?)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Self::from_value(toml::from_str(input)?)
    }

    /// The embedded mapping is validated on its own so a bad value surfaces
    /// as `ExpectedString` rather than a generic parse error.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let mut interpolate = None;
        if let Value::Object(map) = &mut value {
            for key in MAPPING_KEYS {
                if let Some(raw) = map.remove(key).filter(|raw| !raw.is_null()) {
                    let replacements = Replacements::try_from(raw)?;
                    if interpolate.is_none() {
                        interpolate = Some(replacements);
                    }
                }
            }
        }
        let mut options: Self = serde_json::from_value(value)?;
        options.interpolate = interpolate;
        Ok(options)
    }

    pub fn with_template_content(&self, content: Option<String>) -> Self {
        Self {
            template_content: content,
            ..self.clone()
        }
    }

    pub(crate) fn template_path(&self) -> Option<&Path> {
        self.template
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub(crate) fn inline_template(&self) -> Option<&str> {
        self.template_content
            .as_deref()
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterpolateError;

    #[test]
    fn parses_json_with_embedded_mapping() {
        let options = HtmlGenerationOptions::from_json_str(
            r#"{
                "template": "public/index.html",
                "filename": "index.html",
                "inject": "body",
                "scriptLoading": "defer",
                "excludeChunks": ["worker"],
                "interpolate": { "PUBLIC_URL": "/app" }
            }"#,
        )
        .unwrap();

        assert_eq!(options.template, Some(PathBuf::from("public/index.html")));
        assert_eq!(options.inject, Some(Inject::Position(InjectPosition::Body)));
        assert_eq!(options.script_loading, Some(ScriptLoading::Defer));
        assert_eq!(options.exclude_chunks, Some(vec!["worker".to_string()]));
        let interpolate = options.interpolate.unwrap();
        assert_eq!(interpolate.get("PUBLIC_URL"), Some("/app"));
    }

    #[test]
    fn accepts_legacy_mapping_key() {
        let options =
            HtmlGenerationOptions::from_json_str(r#"{ "CRAHtmlInterpolate": { "A": "b" } }"#)
                .unwrap();
        assert_eq!(options.interpolate.unwrap().get("A"), Some("b"));
    }

    #[test]
    fn parses_toml() {
        let options = HtmlGenerationOptions::from_toml_str(
            r#"
            title = "Demo"
            templateContent = "<title>%APP_NAME%</title>"
            scriptLoading = "systemjs-module"
            inject = false

            [interpolate]
            APP_NAME = "Demo"
            "#,
        )
        .unwrap();

        assert_eq!(options.title.as_deref(), Some("Demo"));
        assert_eq!(options.script_loading, Some(ScriptLoading::SystemjsModule));
        assert_eq!(options.inject, Some(Inject::Enabled(false)));
        assert_eq!(options.interpolate.unwrap().get("APP_NAME"), Some("Demo"));
    }

    #[test]
    fn non_string_replacement_is_rejected() {
        let err = HtmlGenerationOptions::from_json_str(r#"{ "interpolate": { "PORT": 80 } }"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected a string");
        match err {
            InterpolateError::ExpectedString { token } => assert_eq!(token, "PORT"),
            other => panic!("expected string error, got {other:?}"),
        }

        let err = HtmlGenerationOptions::from_toml_str("[CRAHtmlInterpolate]\nDEBUG = true\n")
            .unwrap_err();
        assert!(matches!(err, InterpolateError::ExpectedString { .. }), "{err:?}");
    }

    #[test]
    fn non_mapping_interpolate_is_rejected() {
        let err = HtmlGenerationOptions::from_json_str(r#"{ "interpolate": "PUBLIC_URL" }"#)
            .unwrap_err();
        assert!(matches!(err, InterpolateError::ExpectedMapping), "{err:?}");
    }

    #[test]
    fn syntax_errors_keep_their_source() {
        use std::error::Error as _;

        let err = HtmlGenerationOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, InterpolateError::Json(_)), "{err:?}");
        assert!(err.source().is_some());

        let err = HtmlGenerationOptions::from_toml_str("title = ").unwrap_err();
        assert!(matches!(err, InterpolateError::Toml(_)), "{err:?}");

        let err = HtmlGenerationOptions::from_json_str(r#"{ "minify": "yes" }"#).unwrap_err();
        assert!(matches!(err, InterpolateError::Json(_)), "{err:?}");
    }

    #[test]
    fn null_mapping_counts_as_absent() {
        let options = HtmlGenerationOptions::from_json_str(r#"{ "interpolate": null }"#).unwrap();
        assert!(options.interpolate.is_none());
    }

    #[test]
    fn content_copy_keeps_other_fields() {
        let options = HtmlGenerationOptions {
            title: Some("Demo".into()),
            template: Some(PathBuf::from("index.html")),
            template_content: Some("old".into()),
            ..Default::default()
        };
        let copy = options.with_template_content(Some("new".into()));
        assert_eq!(copy.template_content.as_deref(), Some("new"));
        assert_eq!(copy.title, options.title);
        assert_eq!(copy.template, options.template);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let options = HtmlGenerationOptions {
            template: Some(PathBuf::new()),
            template_content: Some(String::new()),
            ..Default::default()
        };
        assert!(options.template_path().is_none());
        assert!(options.inline_template().is_none());
    }
}
