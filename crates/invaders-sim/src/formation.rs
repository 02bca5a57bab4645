//! The alien formation: a fixed grid of optional aliens marching in
//! unison.
//!
//! Slots are addressed row-major with row 0 at the top. An empty
//! slot is a destroyed alien; aliens are never relocated between
//! slots. The grid dimensions never change after construction.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::Alien;
use invaders_core::constants::*;
use invaders_core::enums::{AlienTier, MarchDirection};
use invaders_core::types::Position;

/// The marching grid. Owned by the wave engine; mutated only by the
/// engine's step logic and by collision resolution (slot clearing).
#[derive(Debug, Clone)]
pub struct Formation {
    /// Row-major ALIEN_ROWS x ALIENS_IN_ROW slots.
    slots: Vec<Option<Alien>>,
    direction: MarchDirection,
    /// Occupied-slot count, maintained incrementally.
    remaining: u32,
    /// Formation steps until the next alien shot.
    fire_countdown: u32,
}

impl Formation {
    /// Build a full grid. Row 0 sits at the ceiling line; columns
    /// start one separation in from the left wall.
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut slots = Vec::with_capacity(ALIEN_ROWS * ALIENS_IN_ROW);
        for row in 0..ALIEN_ROWS {
            let y = GAME_HEIGHT - ALIEN_CEILING - row as f64 * (ALIEN_HEIGHT + ALIEN_V_SEP);
            for col in 0..ALIENS_IN_ROW {
                let x = ALIEN_H_SEP + ALIEN_WIDTH / 2.0 + col as f64 * (ALIEN_WIDTH + ALIEN_H_SEP);
                slots.push(Some(Alien {
                    position: Position::new(x, y),
                    tier: AlienTier::for_row(row),
                }));
            }
        }
        Self {
            slots,
            direction: MarchDirection::Right,
            remaining: (ALIEN_ROWS * ALIENS_IN_ROW) as u32,
            fire_countdown: rng.gen_range(1..=BOLT_RATE),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn direction(&self) -> MarchDirection {
        self.direction
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&Alien> {
        self.slots[row * ALIENS_IN_ROW + col].as_ref()
    }

    /// Empty a slot (alien destroyed). Returns the alien that was
    /// there, if any.
    pub fn clear_slot(&mut self, row: usize, col: usize) -> Option<Alien> {
        let cleared = self.slots[row * ALIENS_IN_ROW + col].take();
        if cleared.is_some() {
            self.remaining -= 1;
        }
        cleared
    }

    /// Occupied slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Alien)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref()
                .map(|alien| (i / ALIENS_IN_ROW, i % ALIENS_IN_ROW, alien))
        })
    }

    /// Advance the grid by one discrete tick: march horizontally, or
    /// flip direction and descend when the extremal alien in the
    /// direction of travel would cross the wall margin. A fully
    /// cleared formation does not move.
    ///
    /// The bound check deliberately uses the single extremal
    /// surviving alien, not the full-grid bounding box: as edge
    /// columns die the formation marches further before turning.
    pub fn step(&mut self) {
        if self.remaining == 0 {
            return;
        }

        let turned = match self.direction {
            MarchDirection::Right => match self.rightmost_x() {
                Some(x) => x + ALIEN_H_WALK > GAME_WIDTH - ALIEN_WIDTH / 2.0 - ALIEN_H_SEP,
                None => false,
            },
            MarchDirection::Left => match self.leftmost_x() {
                Some(x) => x - ALIEN_H_WALK < ALIEN_WIDTH / 2.0 + ALIEN_H_SEP,
                None => false,
            },
        };

        if turned {
            self.direction = match self.direction {
                MarchDirection::Right => MarchDirection::Left,
                MarchDirection::Left => MarchDirection::Right,
            };
            // Exactly one descent step substitutes for the horizontal one.
            self.translate(0.0, -ALIEN_V_WALK);
        } else {
            let dx = match self.direction {
                MarchDirection::Right => ALIEN_H_WALK,
                MarchDirection::Left => -ALIEN_H_WALK,
            };
            self.translate(dx, 0.0);
        }
    }

    /// Decrement the firing countdown for one step. Returns true
    /// when it hits zero, in which case the countdown reseeds to a
    /// uniform value in 1..=BOLT_RATE.
    pub fn advance_fire_countdown(&mut self, rng: &mut ChaCha8Rng) -> bool {
        self.fire_countdown = self.fire_countdown.saturating_sub(1);
        if self.fire_countdown == 0 {
            self.fire_countdown = rng.gen_range(1..=BOLT_RATE);
            true
        } else {
            false
        }
    }

    /// Pick a shooter uniformly among the frontmost aliens: the
    /// lowest survivor of each column that has at least one
    /// survivor. Returns None only if the grid is empty (callers
    /// check `remaining() > 0` first).
    pub fn select_shooter(&self, rng: &mut ChaCha8Rng) -> Option<Position> {
        let mut frontmost: Vec<Position> = Vec::with_capacity(ALIENS_IN_ROW);
        for col in 0..ALIENS_IN_ROW {
            let lowest = (0..ALIEN_ROWS)
                .rev()
                .find_map(|row| self.slot(row, col).map(|alien| alien.position));
            if let Some(position) = lowest {
                frontmost.push(position);
            }
        }
        if frontmost.is_empty() {
            return None;
        }
        Some(frontmost[rng.gen_range(0..frontmost.len())])
    }

    /// True once any surviving alien's lower edge is at or below the
    /// defense line.
    pub fn defense_line_breached(&self) -> bool {
        self.iter()
            .any(|(_, _, alien)| alien.position.y - ALIEN_HEIGHT / 2.0 <= DEFENSE_LINE)
    }

    /// x of the rightmost surviving alien.
    fn rightmost_x(&self) -> Option<f64> {
        self.iter()
            .map(|(_, _, alien)| alien.position.x)
            .fold(None, |acc, x| Some(acc.map_or(x, |m: f64| m.max(x))))
    }

    /// x of the leftmost surviving alien.
    fn leftmost_x(&self) -> Option<f64> {
        self.iter()
            .map(|(_, _, alien)| alien.position.x)
            .fold(None, |acc, x| Some(acc.map_or(x, |m: f64| m.min(x))))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for slot in self.slots.iter_mut().flatten() {
            slot.position.x += dx;
            slot.position.y += dy;
        }
    }

    /// Shift every surviving alien by (dx, dy) — for positioning the
    /// grid at exact boundary offsets in tests.
    #[cfg(test)]
    pub fn offset_all(&mut self, dx: f64, dy: f64) {
        self.translate(dx, dy);
    }

    #[cfg(test)]
    pub fn set_fire_countdown(&mut self, steps: u32) {
        self.fire_countdown = steps;
    }

    #[cfg(test)]
    pub fn fire_countdown(&self) -> u32 {
        self.fire_countdown
    }
}
