pub mod error;
pub mod escape;
pub mod interpolate;
pub mod options;
pub mod plugin;
pub mod replacements;
pub mod substitute;

pub use error::{InterpolateError, Result};
pub use interpolate::HtmlInterpolatePlugin;
pub use options::HtmlGenerationOptions;
pub use plugin::{HtmlPluginFactory, Plugin};
pub use replacements::Replacements;
pub use substitute::substitute;
