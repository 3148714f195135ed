//! Collectible keys placed in far corners of the maze.

use mazewalk_maze::{Grid, Vec3, cell_center};

use crate::config::PickupConfig;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PickupEvent {
    /// Pickup at this index was collected.
    Collected(usize),
    /// Every pickup has been collected. Emitted once.
    ExitOpened,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pickup {
    pub position: Vec3,
    pub collected: bool,
}

#[derive(Debug, Clone)]
pub struct PickupSet {
    config: PickupConfig,
    items: Vec<Pickup>,
    exit_open: bool,
}

impl PickupSet {
    pub fn new(positions: impl IntoIterator<Item = Vec3>, config: PickupConfig) -> Self {
        let items = positions
            .into_iter()
            .map(|position| Pickup { position, collected: false })
            .collect();
        Self {
            config,
            items,
            exit_open: false,
        }
    }

    /// One key at the far end of each outer corridor: cells `(1, h-2)` and `(w-2, 1)`.
    pub fn default_for(grid: &Grid, config: PickupConfig, cell_size: f32) -> Self {
        let (w, h) = (grid.width(), grid.height());
        let cells = [(1, h.saturating_sub(2)), (w.saturating_sub(2), 1)];

        let positions = cells.into_iter().map(|(x, y)| {
            let c = cell_center(x, y, cell_size);
            Vec3::new(c.x, config.height, c.y)
        });
        Self::new(positions, config)
    }

    #[inline]
    pub fn items(&self) -> &[Pickup] {
        &self.items
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|p| !p.collected).count()
    }

    #[inline]
    pub fn exit_open(&self) -> bool {
        self.exit_open
    }

    /// Collects every pickup within reach of `eye` on the ground plane.
    pub fn update(&mut self, eye: Vec3) -> Vec<PickupEvent> {
        let radius_sq = self.config.radius * self.config.radius;
        let mut events = Vec::new();

        for (i, item) in self.items.iter_mut().enumerate() {
            if item.collected {
                continue;
            }
            if (item.position.xz() - eye.xz()).length_sq() < radius_sq {
                item.collected = true;
                log::info!("collected key {i} at {:?}", item.position);
                events.push(PickupEvent::Collected(i));
            }
        }

        if !self.exit_open && !self.items.is_empty() && self.remaining() == 0 {
            self.exit_open = true;
            log::info!("all keys collected; exit opened");
            events.push(PickupEvent::ExitOpened);
        }

        events
    }
}
