use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{InterpolateError, Result};
use crate::options::HtmlGenerationOptions;
use crate::plugin::{HtmlPluginFactory, Plugin};
use crate::replacements::Replacements;
use crate::substitute::substitute;

pub const PLUGIN_NAME: &str = "HtmlInterpolatePlugin";

/// Wraps an HTML-generation plugin, handing it a template whose `%TOKEN%`
/// placeholders have already been replaced.
///
/// All work happens in the constructor; `apply` only delegates.
pub struct HtmlInterpolatePlugin<F, C: ?Sized> {
    factory: F,
    options: HtmlGenerationOptions,
    _compiler: PhantomData<fn(&mut C)>,
}

impl<F, C> HtmlInterpolatePlugin<F, C>
where
    F: HtmlPluginFactory<C>,
    C: ?Sized,
{
    /// Resolves `options.template` against the process working directory.
    pub fn new(
        factory: F,
        options: HtmlGenerationOptions,
        replacements: Option<Replacements>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(InterpolateError::WorkingDirectory)?;
        Self::new_in(&cwd, factory, options, replacements)
    }

    pub fn new_in(
        base_dir: &Path,
        factory: F,
        options: HtmlGenerationOptions,
        replacements: Option<Replacements>,
    ) -> Result<Self> {
        let replacements = options
            .interpolate
            .clone()
            .or(replacements)
            .unwrap_or_default();
        let content = resolve_template(base_dir, &options)?
            .map(|template| substitute(&template, &replacements))
            .transpose()?;
        Ok(Self {
            factory,
            options: options.with_template_content(content),
            _compiler: PhantomData,
        })
    }

    pub fn options(&self) -> &HtmlGenerationOptions {
        &self.options
    }

    pub fn apply(&self, compiler: &mut C) -> anyhow::Result<()> {
        let wrapped = self.factory.create(self.options.clone());
        info!(plugin = wrapped.name(), "applying wrapped html plugin");
        wrapped.apply(compiler)
    }
}

impl<F, C> Plugin<C> for HtmlInterpolatePlugin<F, C>
where
    F: HtmlPluginFactory<C>,
    C: ?Sized,
{
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn apply(&self, compiler: &mut C) -> anyhow::Result<()> {
        HtmlInterpolatePlugin::apply(self, compiler)
    }
}

impl<F, C: ?Sized> std::fmt::Debug for HtmlInterpolatePlugin<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlInterpolatePlugin")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Inline content wins over the file, but the file is still read first so a
/// bad path fails regardless.
fn resolve_template(base_dir: &Path, options: &HtmlGenerationOptions) -> Result<Option<String>> {
    let mut content = None;
    if let Some(template) = options.template_path() {
        let path = base_dir.join(template);
        let text = fs::read_to_string(&path).map_err(|source| InterpolateError::ReadTemplate {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read html template");
        content = Some(text);
    }
    if let Some(inline) = options.inline_template() {
        content = Some(inline.to_owned());
    }
    Ok(content)
}
