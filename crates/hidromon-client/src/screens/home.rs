use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::live::gauges::{AlertFlags, GaugeReading, read_all};
use crate::live::{LiveParameters, PARAMETERS_PATH};
use crate::store::{SnapshotStore, Subscription};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeView {
    pub parameters: LiveParameters,
    pub alerts: AlertFlags,
}

impl HomeView {
    pub fn from_snapshot(snapshot: Option<&Value>) -> Self {
        let parameters = LiveParameters::from_snapshot(snapshot);
        Self {
            parameters,
            alerts: AlertFlags::evaluate(&parameters),
        }
    }

    pub fn gauges(&self) -> Vec<GaugeReading> {
        read_all(&self.parameters)
    }
}

/// Live gauge screen. Holds the `/parameters` subscription for as long as it
/// is mounted.
pub struct HomeScreen {
    view: Rc<RefCell<HomeView>>,
    subscription: Subscription,
}

impl HomeScreen {
    pub fn mount(store: &SnapshotStore) -> Self {
        let view = Rc::new(RefCell::new(HomeView::default()));
        let sink = Rc::clone(&view);
        let subscription = store.subscribe(PARAMETERS_PATH, move |snapshot| {
            *sink.borrow_mut() = HomeView::from_snapshot(snapshot);
        });
        Self { view, subscription }
    }

    pub fn view(&self) -> HomeView {
        self.view.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn unmount(mut self) -> HomeView {
        self.subscription.cancel();
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::HomeScreen;
    use crate::store::SnapshotStore;

    #[test]
    fn view_follows_parameter_snapshots() {
        let store = SnapshotStore::new(json!({
            "parameters": {"TDS": 640, "WaterLevel": 12, "pH": 6.1}
        }));
        let screen = HomeScreen::mount(&store);
        assert_eq!(screen.view().parameters.nutrient, 640.0);
        assert!(!screen.view().alerts.any());

        store.set("/parameters/WaterLevel", json!(21));
        let view = screen.view();
        assert_eq!(view.parameters.water_level, 21.0);
        assert!(view.alerts.water_level);
        assert!(!view.alerts.nutrient);
    }

    #[test]
    fn unmount_releases_subscription() {
        let store = SnapshotStore::default();
        let screen = HomeScreen::mount(&store);
        assert!(screen.is_mounted());
        assert_eq!(store.subscriber_count(), 1);

        let last_view = screen.unmount();
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(last_view.parameters.ph, 7.0);
    }
}
