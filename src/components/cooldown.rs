use bevy::prelude::*;

/// Countdown between AI decisions.
///
/// Created lazily on an agent's first decision tick with the timer at
/// zero, so the first decision fires immediately. `tick` decrements by
/// frame delta time and reloads the timer whenever it fires.
#[derive(Clone, Component, Copy, Debug)]
pub struct AiCooldown {
    pub timer: f32,
    pub total: f32,
}

impl AiCooldown {
    pub fn new(total: f32) -> Self {
        AiCooldown { timer: 0.0, total }
    }

    /// Advance the countdown by `dt` seconds. Returns true when the
    /// cooldown fires, in which case the timer is reset to `total`.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        if self.timer > 0.0 {
            return false;
        }
        self.timer = self.total;
        true
    }
}
