//! Lifecycle dispatcher.
//!
//! Maps a CMS write onto a revalidation payload through an explicit
//! content-type → [`PathRule`] table and hands it to the [`Notifier`].

use async_trait::async_trait;
use isr_model::{ContentType, LifecycleEvent, TrackedEntity};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::DeliveryContract;
use crate::hooks::LifecycleHooks;
use crate::locales::{resolve_locales, LocaleProvider};
use crate::notifier::{DeliveryOutcome, Notifier};
use crate::paths::PathRule;
use crate::payload::{PathsPayload, RevalidationPayload, TargetPayload};

/// `type` sent under the type/slug contract for anything that is not a detail page.
pub const HOME_TARGET: &str = "home";

/// How one content type is revalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub rule: PathRule,
    /// Whether the entity's locale travels with the notification. Off for
    /// types whose changes are not tied to one locale's content.
    pub forward_locale: bool,
}

impl Route {
    pub fn new(rule: PathRule) -> Self {
        Self {
            rule,
            forward_locale: true,
        }
    }

    /// The route the frontend's routing implies for a content type.
    pub fn for_content_type(content_type: ContentType) -> Self {
        let forward_locale = !matches!(
            content_type,
            ContentType::Gallery | ContentType::Color | ContentType::HardwareItem
        );
        Self {
            rule: PathRule::for_content_type(content_type),
            forward_locale,
        }
    }

    fn locale(&self, entity: &TrackedEntity) -> Option<String> {
        if self.forward_locale {
            entity.locale().map(str::to_string)
        } else {
            None
        }
    }
}

/// Which content types trigger revalidation, and how.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    routes: BTreeMap<ContentType, Route>,
}

impl DispatchTable {
    /// An empty table: every write is ignored.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every [`ContentType`] with its frontend routing rule.
    pub fn tracked() -> Self {
        let mut table = Self::empty();
        for content_type in ContentType::ALL {
            table.register_route(content_type, Route::for_content_type(content_type));
        }
        table
    }

    /// Adds or replaces the rule for a content type. The entity locale is
    /// forwarded.
    pub fn register(&mut self, content_type: ContentType, rule: PathRule) -> &mut Self {
        self.register_route(content_type, Route::new(rule))
    }

    pub fn register_route(&mut self, content_type: ContentType, route: Route) -> &mut Self {
        self.routes.insert(content_type, route);
        self
    }

    pub fn route(&self, content_type: ContentType) -> Option<Route> {
        self.routes.get(&content_type).copied()
    }

    pub fn rule(&self, content_type: ContentType) -> Option<PathRule> {
        self.route(content_type).map(|r| r.rule)
    }

    pub fn content_types(&self) -> impl Iterator<Item = ContentType> + '_ {
        self.routes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Reacts to CMS lifecycle events by notifying the frontend.
pub struct Dispatcher {
    notifier: Notifier,
    locales: Arc<dyn LocaleProvider>,
    table: DispatchTable,
}

impl Dispatcher {
    /// Dispatcher over every tracked content type.
    pub fn new(notifier: Notifier, locales: Arc<dyn LocaleProvider>) -> Self {
        Self::with_table(notifier, locales, DispatchTable::tracked())
    }

    pub fn with_table(notifier: Notifier, locales: Arc<dyn LocaleProvider>, table: DispatchTable) -> Self {
        let names: Vec<&str> = table.content_types().map(|ct| ct.as_str()).collect();
        info!(
            "Lifecycle hooks registered for {} content types: {}",
            names.len(),
            names.join(", ")
        );
        Self {
            notifier,
            locales,
            table,
        }
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Handles one write end to end. Never fails.
    pub async fn notify(
        &self,
        event: LifecycleEvent,
        content_type: ContentType,
        entity: &TrackedEntity,
    ) -> DeliveryOutcome {
        let Some(route) = self.table.route(content_type) else {
            debug!("No revalidation rule for {}, ignoring {}", content_type, event);
            return DeliveryOutcome::NothingToRevalidate;
        };

        debug!("{} {} id={}", content_type, event, entity.id);

        // Skip the locale lookup too: nothing leaves the process when disabled.
        if !self.notifier.is_enabled() {
            warn!("FRONTEND_URL not configured, skipping revalidation");
            return DeliveryOutcome::NotConfigured;
        }

        match self.build_payload(content_type, route, entity).await {
            Some(payload) => self.notifier.revalidate(&payload).await,
            None => {
                debug!(
                    "{} id={} has nothing to revalidate (no slug)",
                    content_type, entity.id
                );
                DeliveryOutcome::NothingToRevalidate
            }
        }
    }

    /// Builds the request body for the configured contract, or `None` when the
    /// write makes no page stale.
    pub async fn build_payload(
        &self,
        content_type: ContentType,
        route: Route,
        entity: &TrackedEntity,
    ) -> Option<RevalidationPayload> {
        match self.notifier.config().contract {
            DeliveryContract::Paths => {
                let locales =
                    resolve_locales(self.locales.as_ref(), &self.notifier.config().default_locale)
                        .await;
                let paths = route.rule.paths(entity, &locales);
                if paths.is_empty() {
                    return None;
                }
                Some(
                    PathsPayload {
                        paths,
                        entity_type: content_type.as_str().to_string(),
                        entity_id: entity.id,
                        locale: route.locale(entity),
                    }
                    .into(),
                )
            }
            DeliveryContract::Type => {
                let target = if route.rule.is_detail() {
                    TargetPayload {
                        kind: content_type.as_str().to_string(),
                        slug: Some(entity.slug()?.to_string()),
                        locale: route.locale(entity),
                    }
                } else {
                    TargetPayload {
                        kind: HOME_TARGET.to_string(),
                        slug: None,
                        locale: route.locale(entity),
                    }
                };
                Some(target.into())
            }
        }
    }
}

#[async_trait]
impl LifecycleHooks for Dispatcher {
    async fn after_create(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        self.notify(LifecycleEvent::Create, content_type, entity).await
    }

    async fn after_update(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        self.notify(LifecycleEvent::Update, content_type, entity).await
    }

    async fn after_delete(&self, content_type: ContentType, entity: &TrackedEntity) -> DeliveryOutcome {
        self.notify(LifecycleEvent::Delete, content_type, entity).await
    }
}
