//! Landmark proximity triggers.

use ember_core::collision::horizontal_distance;
use ember_core::config::Landmark;
use ember_core::events::GameplayEvent;

use super::FrameContext;

/// Emit a trigger for every landmark the player stands near.
///
/// Fires on every unlocked frame inside the radius; hosts debounce.
pub fn run(
    frame: &FrameContext,
    landmarks: &[Landmark],
    radius: f32,
    events: &mut Vec<GameplayEvent>,
) {
    if frame.locked {
        return;
    }
    let Some(player) = frame.player else {
        return;
    };

    for landmark in landmarks {
        if horizontal_distance(player.position, landmark.position) < radius {
            events.push(GameplayEvent::LandmarkTriggered {
                destination: landmark.destination.clone(),
            });
        }
    }
}
