use anyhow::Result;

use crate::options::HtmlGenerationOptions;

/// A plugin that registers itself with a host compiler of type `C`.
pub trait Plugin<C: ?Sized> {
    fn name(&self) -> &str;

    fn apply(&self, compiler: &mut C) -> Result<()>;
}

/// Builds the wrapped HTML-generation plugin from the computed options.
pub trait HtmlPluginFactory<C: ?Sized> {
    fn create(&self, options: HtmlGenerationOptions) -> Box<dyn Plugin<C>>;
}

impl<C, F, P> HtmlPluginFactory<C> for F
where
    C: ?Sized,
    F: Fn(HtmlGenerationOptions) -> P,
    P: Plugin<C> + 'static,
{
    fn create(&self, options: HtmlGenerationOptions) -> Box<dyn Plugin<C>> {
        Box::new(self(options))
    }
}
