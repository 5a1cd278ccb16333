//! Lifecycle hook interface.

use async_trait::async_trait;
use isr_model::{ContentType, LifecycleEvent, TrackedEntity};

use crate::notifier::DeliveryOutcome;

/// Callbacks invoked after the CMS completes a write.
///
/// Hooks cannot fail. Whatever goes wrong while reacting to a write is
/// reported through the returned [`DeliveryOutcome`] and the log, so the write
/// itself is never blocked or rolled back.
///
/// The unit type `()` implements `LifecycleHooks`, ignoring every event.
#[async_trait]
pub trait LifecycleHooks: Send + Sync {
    async fn after_create(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        let _ = (content_type, entity);
        DeliveryOutcome::NothingToRevalidate
    }

    async fn after_update(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        let _ = (content_type, entity);
        DeliveryOutcome::NothingToRevalidate
    }

    /// `entity` is the last known state of the deleted record.
    async fn after_delete(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        let _ = (content_type, entity);
        DeliveryOutcome::NothingToRevalidate
    }

    /// Routes an event to the matching `after_*` hook.
    async fn on_event(
        &self,
        event: LifecycleEvent,
        content_type: ContentType,
        entity: &TrackedEntity,
    ) -> DeliveryOutcome {
        match event {
            LifecycleEvent::Create => self.after_create(content_type, entity).await,
            LifecycleEvent::Update => self.after_update(content_type, entity).await,
            LifecycleEvent::Delete => self.after_delete(content_type, entity).await,
        }
    }
}

impl LifecycleHooks for () {}
