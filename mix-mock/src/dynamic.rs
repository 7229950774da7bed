use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use mix_core::{GenerationProvider, GenerationSnapshot, MixError, RegionQuery, RequestWindow};

use crate::NO_DATA_CODE;

/// Instruction for how a query should behave for a given region.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(MixError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    region_rules: HashMap<String, MockBehavior<GenerationSnapshot>>,
    no_data_after: Option<NaiveDate>,
    calls: Vec<(RegionQuery, RequestWindow)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for queries of a region scope.
    pub async fn set_region_behavior(
        &self,
        scope: &str,
        behavior: MockBehavior<GenerationSnapshot>,
    ) {
        let mut guard = self.state.lock().await;
        guard.region_rules.insert(scope.to_string(), behavior);
    }

    /// Report "no data" for every window ending after `date`.
    pub async fn set_no_data_after(&self, date: NaiveDate) {
        let mut guard = self.state.lock().await;
        guard.no_data_after = Some(date);
    }

    /// Return a copy of the request log, in call order.
    pub async fn calls(&self) -> Vec<(RegionQuery, RequestWindow)> {
        let guard = self.state.lock().await;
        guard.calls.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.region_rules.clear();
        guard.no_data_after = None;
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn GenerationProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn GenerationProvider>, controller)
    }
}

#[async_trait]
impl GenerationProvider for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn generation(
        &self,
        region: &RegionQuery,
        window: &RequestWindow,
    ) -> Result<GenerationSnapshot, MixError> {
        // Acquire behavior snapshot without holding the lock across await points
        let (behavior, no_data_after) = {
            let mut guard = self.state.lock().await;
            guard.calls.push((region.clone(), window.clone()));
            (
                guard.region_rules.get(&region.scope).cloned(),
                guard.no_data_after,
            )
        };

        if no_data_after.is_some_and(|d| window.end().date() > d) {
            return Err(MixError::no_data(window.label(), NO_DATA_CODE));
        }

        match behavior {
            Some(MockBehavior::Return(s)) => Ok(s),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(MixError::upstream(
                400,
                format!("no behavior for region '{}'", region.scope),
            )),
        }
    }
}
