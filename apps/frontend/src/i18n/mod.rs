// Message bundles and the loaders that produce them for a resolved locale.

pub mod bundle;
pub mod loader;

pub use bundle::{BundleError, MessageBundle};
pub use loader::{BundleLoader, FsBundleLoader, StaticBundleLoader};
