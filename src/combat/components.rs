//! Combat domain: components for the attack gate and the damage boundary.

use bevy::prelude::*;

use crate::combat::resources::AttackTuning;

/// Attack gating and its two scheduled effects: the movement lock window
/// and the delayed hit-test. All deadlines are absolute times in seconds,
/// compared against the frame-tick clock; there are no cancellable timers.
#[derive(Component, Debug, Default)]
pub struct AttackTimers {
    /// Cooldown deadline. The sole serialization gate for re-triggering.
    pub next_allowed: f64,
    /// While true the fixed-tick arbiter pins horizontal/depth velocity.
    pub locked: bool,
    pub lock_until: f64,
    /// Scheduled one-shot hit-test, consumed at the first tick at or past
    /// the deadline.
    pub hit_due: Option<f64>,
}

impl AttackTimers {
    /// Handles an attack press. Denied while dashing or before the cooldown
    /// deadline; an accepted press restarts the whole sequence even when a
    /// prior lock window is still open.
    pub fn try_trigger(&mut self, now: f64, dashing: bool, tuning: &AttackTuning) -> bool {
        if dashing || now < self.next_allowed {
            return false;
        }

        self.next_allowed = now + tuning.cooldown as f64;
        if tuning.lock_during_attack {
            self.locked = true;
            self.lock_until = now + tuning.lock_duration as f64;
        }
        self.hit_due = Some(now + tuning.hit_delay as f64);
        true
    }

    /// Clears an expired lock. Runs every frame tick; the lock ends at the
    /// first tick at or past the deadline.
    pub fn clear_expired_lock(&mut self, now: f64) {
        if self.locked && now >= self.lock_until {
            self.locked = false;
        }
    }

    /// Consumes the scheduled hit-test once its deadline has elapsed.
    /// Returns true exactly once per trigger.
    pub fn take_due_hit(&mut self, now: f64) -> bool {
        match self.hit_due {
            Some(due) if now >= due => {
                self.hit_due = None;
                true
            }
            _ => false,
        }
    }
}

/// Health in discrete pips. Damage and healing clamp; the dead take neither.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    /// Applies damage. Returns true when this hit was lethal.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if amount <= 0 || self.current <= 0 {
            return false;
        }
        self.current = (self.current - amount).max(0);
        self.current == 0
    }

    pub fn heal(&mut self, amount: i32) {
        if amount <= 0 || self.current <= 0 {
            return;
        }
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Touch damage toward the player, re-applied after a per-enemy cooldown
/// while contact persists.
#[derive(Component, Debug)]
pub struct ContactDamage {
    pub amount: i32,
    pub cooldown: f32,
    /// Absolute time before which this enemy cannot hit again.
    pub next_hit: f64,
}

impl ContactDamage {
    pub fn new(amount: i32, cooldown: f32) -> Self {
        Self {
            amount,
            cooldown,
            next_hit: 0.0,
        }
    }

    /// Gate for one contact hit; arming it starts the re-hit cooldown.
    pub fn try_hit(&mut self, now: f64) -> bool {
        if now < self.next_hit {
            return false;
        }
        self.next_hit = now + self.cooldown as f64;
        true
    }
}
