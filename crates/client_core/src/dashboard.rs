//! Orchestrates catalog, edit session and modal state for a dashboard surface.
//!
//! State is only locked to read or apply changes, never across a remote call, so several
//! operations may be in flight at once. Each completion applies its own change to the latest
//! catalog; two updates of the same food resolve last-response-wins.

use std::sync::Arc;

use shared::{
    domain::{Food, FoodDraft, FoodId, FoodPatch},
    protocol::CreateFoodRequest,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::{
    catalog_store::CatalogStore,
    edit_session::EditSession,
    error::{CatalogError, CatalogOperation},
    remote::{CatalogResult, FoodsApi},
    visibility::ModalVisibility,
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Receives every failed remote call made by the dashboard.
pub trait ErrorSink: Send + Sync {
    fn report(&self, operation: CatalogOperation, error: &CatalogError);
}

pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, operation: CatalogOperation, error: &CatalogError) {
        error!(%operation, status = ?error.status(), "catalog: {error}");
    }
}

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    FoodsLoaded { count: usize },
    FoodCreated(Food),
    FoodUpdated(Food),
    FoodDeleted { id: FoodId, removed: usize },
    EditStarted(Food),
    EditEnded,
    ModalsChanged(ModalVisibility),
    Error {
        operation: CatalogOperation,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub foods: Arc<Vec<Food>>,
    pub editing: Option<Food>,
    pub visibility: ModalVisibility,
}

#[derive(Default)]
struct DashboardState {
    catalog: CatalogStore,
    edit: EditSession,
    visibility: ModalVisibility,
}

pub struct Dashboard {
    api: Arc<dyn FoodsApi>,
    errors: Arc<dyn ErrorSink>,
    inner: Mutex<DashboardState>,
    events: broadcast::Sender<DashboardEvent>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn FoodsApi>) -> Arc<Self> {
        Self::new_with_error_sink(api, Arc::new(TracingErrorSink))
    }

    pub fn new_with_error_sink(api: Arc<dyn FoodsApi>, errors: Arc<dyn ErrorSink>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            api,
            errors,
            inner: Mutex::new(DashboardState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// Fetches the full catalog and replaces the local copy with it.
    pub async fn load(&self) -> CatalogResult<usize> {
        let foods = match self.api.list_foods().await {
            Ok(foods) => foods,
            Err(err) => return self.fail(CatalogOperation::Load, err),
        };

        let count = foods.len();
        self.inner.lock().await.catalog.load(foods);
        info!(count, "catalog: loaded foods");
        self.emit(DashboardEvent::FoodsLoaded { count });
        Ok(count)
    }

    /// Submits `draft` as an available food and appends what the service created.
    pub async fn on_create(&self, draft: FoodDraft) -> CatalogResult<Food> {
        let request = CreateFoodRequest::from(draft);
        let created = match self.api.create_food(&request).await {
            Ok(food) => food,
            Err(err) => return self.fail(CatalogOperation::Create, err),
        };

        let (inserted, visibility) = {
            let mut guard = self.inner.lock().await;
            let inserted = guard.catalog.append(created.clone());
            guard.visibility.set_create_open(false);
            (inserted, guard.visibility)
        };
        if inserted {
            info!(id = %created.id, name = %created.name, "catalog: created food");
        } else {
            debug!(id = %created.id, "catalog: created food was already present; replaced in place");
        }
        self.emit(DashboardEvent::FoodCreated(created.clone()));
        self.emit(DashboardEvent::ModalsChanged(visibility));
        Ok(created)
    }

    /// Targets `food` for editing and opens the edit surface.
    pub async fn on_edit_request(&self, food: Food) {
        let visibility = {
            let mut guard = self.inner.lock().await;
            guard.edit.begin(food.clone());
            guard.visibility.set_edit_open(true);
            guard.visibility
        };
        self.emit(DashboardEvent::EditStarted(food));
        self.emit(DashboardEvent::ModalsChanged(visibility));
    }

    /// Same as [`Dashboard::on_edit_request`] for a food looked up in the local catalog.
    pub async fn on_edit_request_by_id(&self, id: FoodId) -> CatalogResult<Food> {
        let food = self.inner.lock().await.catalog.get(id).cloned();
        match food {
            Some(food) => {
                self.on_edit_request(food.clone()).await;
                Ok(food)
            }
            None => Err(CatalogError::UnknownFood(id)),
        }
    }

    /// Submits `patch` for the food being edited.
    ///
    /// The patch is merged over the live catalog entry, or over the edit-start snapshot when
    /// that entry is gone. Submitting closes the edit surface and ends the edit session
    /// whatever the outcome.
    pub async fn on_update(&self, patch: FoodPatch) -> CatalogResult<Food> {
        let (id, merged, visibility) = {
            let mut guard = self.inner.lock().await;
            let Some(target) = guard.edit.end() else {
                drop(guard);
                return self.fail(CatalogOperation::Update, CatalogError::NoActiveEdit);
            };
            let base = guard.catalog.get(target.id).unwrap_or(&target);
            let merged = patch.apply_to(base);
            guard.visibility.set_edit_open(false);
            (target.id, merged, guard.visibility)
        };
        self.emit(DashboardEvent::EditEnded);
        self.emit(DashboardEvent::ModalsChanged(visibility));

        let updated = match self.api.update_food(id, &merged).await {
            Ok(food) => food,
            Err(err) => return self.fail(CatalogOperation::Update, err),
        };

        let replaced = self.inner.lock().await.catalog.replace(updated.clone());
        if replaced {
            info!(id = %updated.id, "catalog: updated food");
            self.emit(DashboardEvent::FoodUpdated(updated.clone()));
        } else {
            warn!(
                id = %updated.id,
                "catalog: updated food is no longer in the local catalog; ignoring response"
            );
        }
        Ok(updated)
    }

    /// Deletes `id` remotely, then drops every local entry with that id.
    pub async fn on_delete(&self, id: FoodId) -> CatalogResult<usize> {
        if let Err(err) = self.api.delete_food(id).await {
            return self.fail(CatalogOperation::Delete, err);
        }

        let removed = self.inner.lock().await.catalog.remove(id);
        info!(%id, removed, "catalog: deleted food");
        self.emit(DashboardEvent::FoodDeleted { id, removed });
        Ok(removed)
    }

    pub async fn on_toggle_create_modal(&self) -> bool {
        let visibility = {
            let mut guard = self.inner.lock().await;
            guard.visibility.toggle_create();
            guard.visibility
        };
        self.emit(DashboardEvent::ModalsChanged(visibility));
        visibility.create_open()
    }

    /// Flips the edit surface; closing it ends the edit session.
    pub async fn on_toggle_edit_modal(&self) -> bool {
        let (visibility, ended) = {
            let mut guard = self.inner.lock().await;
            let open = guard.visibility.toggle_edit();
            let ended = if open { None } else { guard.edit.end() };
            (guard.visibility, ended)
        };
        if ended.is_some() {
            self.emit(DashboardEvent::EditEnded);
        }
        self.emit(DashboardEvent::ModalsChanged(visibility));
        visibility.edit_open()
    }

    pub async fn foods(&self) -> Arc<Vec<Food>> {
        self.inner.lock().await.catalog.snapshot()
    }

    pub async fn editing(&self) -> Option<Food> {
        self.inner.lock().await.edit.current().cloned()
    }

    pub async fn visibility(&self) -> ModalVisibility {
        self.inner.lock().await.visibility
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let guard = self.inner.lock().await;
        DashboardSnapshot {
            foods: guard.catalog.snapshot(),
            editing: guard.edit.current().cloned(),
            visibility: guard.visibility,
        }
    }

    fn fail<T>(&self, operation: CatalogOperation, err: CatalogError) -> CatalogResult<T> {
        self.errors.report(operation, &err);
        self.emit(DashboardEvent::Error {
            operation,
            message: err.to_string(),
        });
        Err(err)
    }

    fn emit(&self, event: DashboardEvent) {
        let _ = self.events.send(event);
    }
}
