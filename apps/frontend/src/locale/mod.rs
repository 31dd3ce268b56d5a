// Locale resolution and propagation.
// Resolver picks the render locale; path + switcher keep the URL in step with the user's choice.

pub mod path;
pub mod resolver;
pub mod supported;
pub mod switcher;

pub use path::{switched_path, LocalePath};
pub use resolver::resolve;
pub use supported::{LocaleConfig, ResolvedLocale, SupportedLocales};
