// ABOUTME: Settings model holding the four values and their load/save lifecycle
// ABOUTME: One request of each kind at a time; cancellation is tied to the store's lifetime

use std::sync::Arc;

use briefcase_events::{EventBus, settings::Event};
use briefcase_types::{GenerationModel, IndexerModel, Settings};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::backend::SettingsBackend;
use crate::error::{RequestKind, Result, SettingsError};
use crate::validation::{RESIZED_HEIGHT, RESIZED_WIDTH, validate_dimension, validate_settings};

/// Lifecycle of the settings record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsState {
    #[default]
    Uninitialized,
    Loading,
    Loaded,
    LoadFailed(String),
    Saving,
    SaveFailed(String),
}

impl SettingsState {
    /// The request currently outstanding, if any
    pub fn in_flight(&self) -> Option<RequestKind> {
        match self {
            SettingsState::Loading => Some(RequestKind::Load),
            SettingsState::Saving => Some(RequestKind::Save),
            _ => None,
        }
    }

    pub fn can_save(&self) -> bool {
        matches!(self, SettingsState::Loaded | SettingsState::SaveFailed(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SettingsState::LoadFailed(reason) | SettingsState::SaveFailed(reason) => {
                Some(reason.as_str())
            }
            _ => None,
        }
    }
}

/// Values and lifecycle state read under one lock
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsSnapshot {
    pub values: Settings,
    pub state: SettingsState,
}

#[derive(Debug, Default)]
struct Inner {
    values: Settings,
    state: SettingsState,
}

pub struct SettingsStore {
    inner: Mutex<Inner>,
    backend: Arc<dyn SettingsBackend>,
    events: Arc<dyn EventBus>,
    cancel: CancellationToken,
}

impl SettingsStore {
    pub fn new(backend: Arc<dyn SettingsBackend>, events: Arc<dyn EventBus>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            backend,
            events,
            cancel: CancellationToken::new(),
        }
    }

    /// Snapshot of the current values
    pub fn settings(&self) -> Settings {
        self.inner.lock().values
    }

    pub fn state(&self) -> SettingsState {
        self.inner.lock().state.clone()
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        let inner = self.inner.lock();
        SettingsSnapshot {
            values: inner.values,
            state: inner.state.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.inner.lock().state.in_flight().is_some()
    }

    /// Fetch the remote record and replace all four values with it.
    ///
    /// On failure the current values are kept and the state records the reason.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Settings> {
        let previous = self.begin(RequestKind::Load, SettingsState::Loading)?;
        self.events.dispatch_settings(Event::LoadStarted);

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(SettingsError::Cancelled),
            fetched = self.backend.fetch() => fetched,
        };
        let result = result.and_then(|settings| validate_settings(&settings).map(|()| settings));

        match result {
            Ok(settings) => {
                {
                    let mut inner = self.inner.lock();
                    inner.values = settings;
                    inner.state = SettingsState::Loaded;
                }
                info!(?settings, "Settings loaded");
                self.events.dispatch_settings(Event::Loaded { settings });
                Ok(settings)
            }
            Err(SettingsError::Cancelled) => {
                self.inner.lock().state = previous;
                debug!("Settings load cancelled");
                Err(SettingsError::Cancelled)
            }
            Err(error) => {
                self.inner.lock().state = SettingsState::LoadFailed(error.to_string());
                warn!(%error, "Failed to load settings");
                self.events.dispatch_settings(Event::LoadFailed {
                    error: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Write the current values to the remote record.
    ///
    /// Values edited while the request is in flight are left alone; the
    /// request carries the snapshot taken when it started.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<Settings> {
        let (snapshot, previous) = {
            let mut inner = self.inner.lock();
            if let Some(in_flight) = inner.state.in_flight() {
                return Err(SettingsError::Busy { in_flight });
            }
            if !inner.state.can_save() {
                return Err(SettingsError::NotLoaded);
            }
            let previous = std::mem::replace(&mut inner.state, SettingsState::Saving);
            (inner.values, previous)
        };
        self.events
            .dispatch_settings(Event::SaveStarted { settings: snapshot });

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(SettingsError::Cancelled),
            stored = self.backend.store(&snapshot) => stored,
        };

        match result {
            Ok(()) => {
                self.inner.lock().state = SettingsState::Loaded;
                info!(settings = ?snapshot, "Settings saved");
                self.events
                    .dispatch_settings(Event::Saved { settings: snapshot });
                Ok(snapshot)
            }
            Err(SettingsError::Cancelled) => {
                self.inner.lock().state = previous;
                debug!("Settings save cancelled");
                Err(SettingsError::Cancelled)
            }
            Err(error) => {
                self.inner.lock().state = SettingsState::SaveFailed(error.to_string());
                warn!(%error, "Failed to save settings");
                self.events.dispatch_settings(Event::SaveFailed {
                    error: error.to_string(),
                });
                Err(error)
            }
        }
    }

    pub fn set_indexer_model(&self, model: IndexerModel) {
        self.inner.lock().values.indexer_model = model;
    }

    pub fn set_generation_model(&self, model: GenerationModel) {
        self.inner.lock().values.generation_model = model;
    }

    pub fn set_resized_height(&self, value: u32) -> Result<()> {
        let value = validate_dimension(RESIZED_HEIGHT, value)?;
        self.inner.lock().values.resized_height = value;
        Ok(())
    }

    pub fn set_resized_width(&self, value: u32) -> Result<()> {
        let value = validate_dimension(RESIZED_WIDTH, value)?;
        self.inner.lock().values.resized_width = value;
        Ok(())
    }

    /// Cancel any in-flight request and refuse to complete future ones
    pub fn shutdown(&self) {
        if !self.cancel.is_cancelled() {
            debug!("Cancelling outstanding settings requests");
            self.cancel.cancel();
        }
    }

    /// Move into `next` unless a request is already outstanding. Returns the prior state.
    fn begin(&self, kind: RequestKind, next: SettingsState) -> Result<SettingsState> {
        let mut inner = self.inner.lock();
        if let Some(in_flight) = inner.state.in_flight() {
            debug!(requested = %kind, %in_flight, "Settings request rejected");
            return Err(SettingsError::Busy { in_flight });
        }
        Ok(std::mem::replace(&mut inner.state, next))
    }
}

impl Drop for SettingsStore {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use briefcase_events::{AppEvent, ChannelEventBus, NoopEventBus};
    use tokio::sync::Notify;

    /// In-memory backend. `remote: None` makes fetch fail with HTTP 500.
    #[derive(Default)]
    struct FakeBackend {
        remote: Mutex<Option<Settings>>,
        store_error: Mutex<Option<SettingsError>>,
        stored: Mutex<Vec<Settings>>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeBackend {
        fn serving(settings: Settings) -> Self {
            Self {
                remote: Mutex::new(Some(settings)),
                ..Self::default()
            }
        }

        fn gated(settings: Settings, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::serving(settings)
            }
        }

        async fn wait_for_gate(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }
    }

    #[async_trait]
    impl SettingsBackend for FakeBackend {
        async fn fetch(&self) -> Result<Settings> {
            self.wait_for_gate().await;
            let remote = *self.remote.lock();
            remote.ok_or(SettingsError::Status { status: 500 })
        }

        async fn store(&self, settings: &Settings) -> Result<()> {
            self.wait_for_gate().await;
            if let Some(error) = self.store_error.lock().clone() {
                return Err(error);
            }
            self.stored.lock().push(*settings);
            *self.remote.lock() = Some(*settings);
            Ok(())
        }
    }

    fn remote_280() -> Settings {
        Settings {
            indexer_model: IndexerModel::ColPali,
            generation_model: GenerationModel::Qwen,
            resized_height: 280,
            resized_width: 280,
        }
    }

    fn store_with(backend: FakeBackend) -> (SettingsStore, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        let store = SettingsStore::new(backend.clone(), Arc::new(NoopEventBus));
        (store, backend)
    }

    #[tokio::test]
    async fn test_load_replaces_all_values() {
        let (store, _) = store_with(FakeBackend::serving(remote_280()));
        assert_eq!(store.state(), SettingsState::Uninitialized);

        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, remote_280());
        assert_eq!(store.settings(), remote_280());
        assert_eq!(store.state(), SettingsState::Loaded);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_values() {
        let (store, backend) = store_with(FakeBackend::serving(remote_280()));
        store.load().await.unwrap();
        *backend.remote.lock() = None;

        let error = store.load().await.unwrap_err();

        assert_eq!(error, SettingsError::Status { status: 500 });
        assert_eq!(store.settings(), remote_280());
        assert!(matches!(store.state(), SettingsState::LoadFailed(_)));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_a_load_failure() {
        let bad = Settings {
            resized_height: 30,
            ..remote_280()
        };
        let (store, _) = store_with(FakeBackend::serving(bad));

        let error = store.load().await.unwrap_err();

        assert!(matches!(error, SettingsError::Validation { value: 30, .. }));
        assert_eq!(store.settings(), Settings::default());
        assert_eq!(
            store.state().failure(),
            Some("Invalid resized_height 30: must be a multiple of 28")
        );
    }

    #[tokio::test]
    async fn test_snapshot_reads_values_and_state_together() {
        let (store, _) = store_with(FakeBackend::serving(remote_280()));
        store.load().await.unwrap();

        let snapshot = store.snapshot();

        assert_eq!(snapshot.values, remote_280());
        assert_eq!(snapshot.state, SettingsState::Loaded);
    }

    #[tokio::test]
    async fn test_save_requires_loaded_state() {
        let (store, backend) = store_with(FakeBackend::default());
        assert_eq!(store.save().await.unwrap_err(), SettingsError::NotLoaded);

        let _ = store.load().await;
        assert!(matches!(store.state(), SettingsState::LoadFailed(_)));
        assert_eq!(store.save().await.unwrap_err(), SettingsError::NotLoaded);
        assert!(backend.stored.lock().is_empty());
    }

    #[tokio::test]
    async fn test_save_sends_current_values() {
        let (store, backend) = store_with(FakeBackend::serving(remote_280()));
        store.load().await.unwrap();
        store.set_generation_model(GenerationModel::Pixtral);
        store.set_resized_width(560).unwrap();

        let saved = store.save().await.unwrap();

        assert_eq!(saved.generation_model, GenerationModel::Pixtral);
        assert_eq!(*backend.stored.lock(), vec![saved]);
        assert_eq!(store.settings(), saved);
        assert_eq!(store.state(), SettingsState::Loaded);
    }

    #[tokio::test]
    async fn test_save_failure_then_retry() {
        let (store, backend) = store_with(FakeBackend::serving(remote_280()));
        store.load().await.unwrap();
        *backend.store_error.lock() = Some(SettingsError::network("connection reset"));

        let error = store.save().await.unwrap_err();
        assert!(error.is_network_failure());
        assert!(matches!(store.state(), SettingsState::SaveFailed(_)));
        assert_eq!(store.settings(), remote_280());

        *backend.store_error.lock() = None;
        store.save().await.unwrap();
        assert_eq!(store.state(), SettingsState::Loaded);
    }

    #[tokio::test]
    async fn test_setters_validate_dimensions() {
        let (store, _) = store_with(FakeBackend::serving(remote_280()));

        assert!(store.set_resized_height(27).is_err());
        assert!(store.set_resized_width(300).is_err());
        assert_eq!(store.settings(), Settings::default());

        store.set_resized_height(336).unwrap();
        store.set_indexer_model(IndexerModel::ColQwen2);
        assert_eq!(store.settings().resized_height, 336);
        assert_eq!(store.settings().indexer_model, IndexerModel::ColQwen2);
    }

    #[tokio::test]
    async fn test_second_save_rejected_while_pending() {
        let gate = Arc::new(Notify::new());
        let (store, backend) = store_with(FakeBackend::gated(remote_280(), gate.clone()));
        gate.notify_one();
        store.load().await.unwrap();

        let (first, second) = tokio::join!(store.save(), async {
            // First save is parked at the gate
            assert!(store.is_busy());
            store.set_resized_height(560).unwrap();
            let second = store.save().await;
            let load = store.load().await;
            gate.notify_one();
            (second, load)
        });

        assert_eq!(first.unwrap(), remote_280());
        assert_eq!(
            second.0.unwrap_err(),
            SettingsError::Busy {
                in_flight: RequestKind::Save
            }
        );
        assert!(matches!(second.1, Err(SettingsError::Busy { .. })));

        // The edit made during the save survives; the request carried the snapshot
        assert_eq!(store.settings().resized_height, 560);
        assert_eq!(*backend.stored.lock(), vec![remote_280()]);
        assert_eq!(store.state(), SettingsState::Loaded);
    }

    #[tokio::test]
    async fn test_shutdown_cancels_in_flight_load() {
        let gate = Arc::new(Notify::new());
        let (store, _) = store_with(FakeBackend::gated(remote_280(), gate));

        let (result, ()) = tokio::join!(store.load(), async {
            assert_eq!(store.state(), SettingsState::Loading);
            store.shutdown();
        });

        assert_eq!(result.unwrap_err(), SettingsError::Cancelled);
        assert_eq!(store.state(), SettingsState::Uninitialized);
        assert_eq!(store.settings(), Settings::default());
    }

    #[tokio::test]
    async fn test_shutdown_cancels_in_flight_save() {
        let gate = Arc::new(Notify::new());
        let (store, backend) = store_with(FakeBackend::gated(remote_280(), gate.clone()));
        gate.notify_one();
        store.load().await.unwrap();

        let (result, ()) = tokio::join!(store.save(), async {
            store.shutdown();
        });

        assert_eq!(result.unwrap_err(), SettingsError::Cancelled);
        assert_eq!(store.state(), SettingsState::Loaded);
        assert!(backend.stored.lock().is_empty());
    }

    #[tokio::test]
    async fn test_lifecycle_events() {
        let (bus, mut rx) = ChannelEventBus::new();
        let store = SettingsStore::new(
            Arc::new(FakeBackend::serving(remote_280())),
            Arc::new(bus),
        );

        store.load().await.unwrap();
        store.save().await.unwrap();

        let mut events = Vec::new();
        while let Ok(AppEvent::Settings(event)) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(
            events,
            vec![
                Event::LoadStarted,
                Event::Loaded {
                    settings: remote_280()
                },
                Event::SaveStarted {
                    settings: remote_280()
                },
                Event::Saved {
                    settings: remote_280()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_event_carries_reason() {
        let (bus, mut rx) = ChannelEventBus::new();
        let store = SettingsStore::new(Arc::new(FakeBackend::default()), Arc::new(bus));

        let _ = store.load().await;

        let last = std::iter::from_fn(|| rx.try_recv().ok()).last();
        assert_eq!(
            last,
            Some(AppEvent::Settings(Event::LoadFailed {
                error: "Settings endpoint returned HTTP 500".to_string()
            }))
        );
    }
}
