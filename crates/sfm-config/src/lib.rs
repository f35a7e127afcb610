//! Common-value configuration
//!
//! Stores the user's lists of frequently used labels and resource ids in
//! a small JSON file. [`CommonValuesStore::load`] and
//! [`CommonValuesStore::save`] never fail and only log problems, while the
//! `try_` variants expose the underlying [`ConfigError`].
//!
//! # Example
//!
//! ```no_run
//! use sfm_config::{CommonValuesStore, ValueCategory};
//!
//! let store = CommonValuesStore::new("/home/me/.config/sfm");
//! let mut values = store.load();
//! values.add(ValueCategory::Label, "furnace");
//! store.save(&values);
//! ```

mod common;
mod error;
mod store;

pub use common::{CommonValues, ValueCategory};
pub use error::{ConfigError, ConfigResult};
pub use store::{CommonValuesStore, STORE_FILE_NAME};
