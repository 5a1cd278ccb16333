//! Content model for frontend revalidation.
//!
//! Defines the types every other crate in the workspace agrees on:
//! - [`ContentType`] — the closed set of CMS content types that trigger revalidation
//! - [`LifecycleEvent`] — create / update / delete, as emitted by the CMS
//! - [`TrackedEntity`] — the few fields of a CMS record that path generation reads
//!
//! Nothing here performs I/O. These types are deserialized straight out of CMS
//! webhook bodies and handed to the dispatcher in `isr-revalidate`.

mod content_type;
mod entity;
mod error;
mod event;

pub use content_type::ContentType;
pub use entity::TrackedEntity;
pub use error::ModelError;
pub use event::LifecycleEvent;
