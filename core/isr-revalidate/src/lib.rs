//! Frontend revalidation for CMS content writes.
//!
//! When a tracked entity is created, updated or deleted, the frontend's
//! statically rendered pages for it go stale. This crate works out which
//! paths those are and tells the frontend, once, over HTTP.
//!
//! # Components
//!
//! - **Dispatcher**: one rule per tracked content type; turns a lifecycle
//!   event into a [`RevalidationPayload`]
//! - **Locales**: resolves the active locale list per event, falling back to
//!   the default locale on failure
//! - **Paths**: pure per-type path templates
//! - **Notifier**: a single best-effort `POST {frontend}/api/revalidate`
//!
//! Delivery is fire-and-forget. There is no retry, queue or deduplication,
//! and no failure ever reaches the CMS write that triggered it.
//!
//! # Example
//!
//! ```
//! use isr_revalidate::{Dispatcher, Notifier, RevalidationConfig, StaticLocales};
//! use std::sync::Arc;
//!
//! let config = RevalidationConfig {
//!     frontend_url: "https://shop.example.com".to_string(),
//!     credential: Some("s3cret".to_string()),
//!     ..Default::default()
//! };
//!
//! let notifier = Notifier::new(config).unwrap();
//! let dispatcher = Dispatcher::new(notifier, Arc::new(StaticLocales::new(["en", "fr"])));
//! assert_eq!(dispatcher.table().len(), 10);
//! ```

mod config;
mod dispatcher;
mod error;
mod hooks;
pub mod locales;
mod notifier;
pub mod paths;
mod payload;

pub use config::{DeliveryContract, RevalidationConfig};
pub use dispatcher::{DispatchTable, Dispatcher, Route, HOME_TARGET};
pub use error::{RevalidateError, RevalidateResult};
pub use hooks::LifecycleHooks;
pub use locales::{resolve_locales, HttpLocaleProvider, LocaleProvider, StaticLocales};
pub use notifier::{DeliveryOutcome, Notifier, SECRET_HEADER};
pub use paths::PathRule;
pub use payload::{PathsPayload, RevalidationPayload, TargetPayload};

pub use isr_model::{ContentType, LifecycleEvent, TrackedEntity};
