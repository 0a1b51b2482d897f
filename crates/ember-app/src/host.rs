//! Headless feedback host that logs gameplay callbacks.

use log::info;

use ember_core::events::FeedbackHost;

/// Logs and counts callbacks. Navigation is debounced: a trigger for the
/// destination it navigated to last is ignored.
#[derive(Debug, Default, Clone)]
pub struct LoggingHost {
    pub hits: usize,
    pub captures: usize,
    /// Distinct navigations, in order.
    pub navigations: Vec<String>,
}

impl FeedbackHost for LoggingHost {
    fn on_player_hit(&mut self) {
        self.hits += 1;
        info!("player hit ({} so far)", self.hits);
    }

    fn on_creature_captured(&mut self) {
        self.captures += 1;
        info!("creature captured ({} hearts)", self.captures);
    }

    fn on_trigger(&mut self, destination: &str) {
        if self.navigations.last().map(String::as_str) == Some(destination) {
            return;
        }
        info!("navigating to {destination}");
        self.navigations.push(destination.to_owned());
    }
}
