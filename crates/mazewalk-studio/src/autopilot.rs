//! Scripted walkthrough: routes the walker to every key using arrow-key input.

use std::collections::VecDeque;

use anyhow::{Context, Result, bail};
use mazewalk_engine::input::{InputEvent, Key};
use mazewalk_engine::walker::heading_direction;
use mazewalk_engine::{MazeSession, TickReport};
use mazewalk_maze::{Cell, Grid, Vec2, cell_center, cell_of};

pub type CellPos = (usize, usize);

/// Upper bound on ticks spent crossing a single cell.
const MAX_TICKS_PER_CELL: u32 = 600;

/// Shortest 4-connected route over path cells, both ends included.
pub fn shortest_path(grid: &Grid, from: CellPos, to: CellPos) -> Option<Vec<CellPos>> {
    let open = |(x, y): CellPos| grid.get(x, y) == Some(Cell::Path);
    if !open(from) || !open(to) {
        return None;
    }

    let w = grid.width();
    let idx = |(x, y): CellPos| y * w + x;
    let mut prev: Vec<Option<CellPos>> = vec![None; w * grid.height()];
    let mut seen = vec![false; w * grid.height()];
    let mut queue = VecDeque::from([from]);
    seen[idx(from)] = true;

    while let Some(cur) = queue.pop_front() {
        if cur == to {
            let mut path = vec![to];
            let mut at = to;
            while let Some(p) = prev[idx(at)] {
                path.push(p);
                at = p;
            }
            path.reverse();
            return Some(path);
        }

        for (dx, dy) in [(0i64, -1i64), (1, 0), (0, 1), (-1, 0)] {
            let (nx, ny) = (cur.0 as i64 + dx, cur.1 as i64 + dy);
            if grid.get_signed(nx, ny) != Some(Cell::Path) {
                continue;
            }
            let next = (nx as usize, ny as usize);
            if seen[idx(next)] {
                continue;
            }
            seen[idx(next)] = true;
            prev[idx(next)] = Some(cur);
            queue.push_back(next);
        }
    }
    None
}

/// Heading, in degrees, that faces from one cell to an adjacent one.
pub fn heading_towards(from: CellPos, to: CellPos) -> f32 {
    match (to.0 as i64 - from.0 as i64, to.1 as i64 - from.1 as i64) {
        (1, _) => -90.0,
        (-1, _) => 90.0,
        (_, 1) => 180.0,
        _ => 0.0,
    }
}

/// Signed number of turn presses from `current` to `target` the short way round.
/// Positive means ArrowLeft.
pub fn turn_presses(current: f32, target: f32, step: f32) -> i32 {
    let mut diff = (target - current).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }
    (diff / step).round() as i32
}

/// Grid cell of a ground-plane position, or `None` left of or above the grid.
pub fn grid_cell(position: Vec2, cell_size: f32) -> Option<CellPos> {
    let (x, y) = cell_of(position, cell_size);
    Some((usize::try_from(x).ok()?, usize::try_from(y).ok()?))
}

fn walker_cell(session: &MazeSession) -> Result<CellPos> {
    let cs = session.config().geometry.cell_size;
    grid_cell(session.walker().position().xz(), cs).context("walker left the grid")
}

fn tap(session: &mut MazeSession, key: Key) {
    session.handle_event(InputEvent::key_pressed(key));
    session.handle_event(InputEvent::key_released(key));
}

fn face(session: &mut MazeSession, heading: f32) {
    let step = session.config().tilt.turn_step;
    let n = turn_presses(session.tilt().side, heading, step);
    let key = if n > 0 { Key::ArrowLeft } else { Key::ArrowRight };
    for _ in 0..n.unsigned_abs() {
        tap(session, key);
    }
}

/// Holds ArrowUp until the walker passes the centre of `cell`.
fn walk_to(session: &mut MazeSession, cell: CellPos) -> Result<TickReport> {
    let cs = session.config().geometry.cell_size;
    let centre = cell_center(cell.0, cell.1, cs);
    let dir = heading_direction(session.tilt().side).xz();

    session.handle_event(InputEvent::key_pressed(Key::ArrowUp));

    let mut total = TickReport::default();
    let mut arrived = false;
    while total.ticks < MAX_TICKS_PER_CELL {
        let report = session.run_ticks(1);
        let blocked = report.blocked > 0;
        total.absorb(report);
        if blocked {
            break;
        }
        if (session.walker().position().xz() - centre).dot(dir) >= 0.0 {
            arrived = true;
            break;
        }
    }

    session.handle_event(InputEvent::key_released(Key::ArrowUp));

    if !arrived {
        bail!(
            "could not reach cell {cell:?}: walker stopped at {:?}",
            session.walker().position()
        );
    }
    Ok(total)
}

/// Walks the shortest route from the walker's cell to `target`.
pub fn drive_to(session: &mut MazeSession, target: CellPos) -> Result<TickReport> {
    let start = walker_cell(session)?;
    let path = shortest_path(session.grid(), start, target)
        .with_context(|| format!("no route from {start:?} to {target:?}"))?;

    log::debug!("route {start:?} -> {target:?}: {} cells", path.len());

    let mut total = TickReport::default();
    for pair in path.windows(2) {
        face(session, heading_towards(pair[0], pair[1]));
        total.absorb(walk_to(session, pair[1])?);
    }
    // An empty route runs no ticks; settle pickups at the current position.
    total.absorb(session.run_ticks(0));
    Ok(total)
}

/// Visits every uncollected key in placement order.
pub fn collect_all(session: &mut MazeSession) -> Result<TickReport> {
    let cs = session.config().geometry.cell_size;
    let targets: Vec<CellPos> = session
        .pickups()
        .items()
        .iter()
        .filter(|p| !p.collected)
        .map(|p| grid_cell(p.position.xz(), cs).context("key lies outside the grid"))
        .collect::<Result<_>>()?;

    let mut total = TickReport::default();
    for target in targets {
        let report = drive_to(session, target)?;
        let p = session.walker().position();
        log::info!(
            "reached {target:?} at ({:.2}, {:.2}) after {} ticks, {} blocked",
            p.x,
            p.z,
            report.ticks,
            report.blocked
        );
        for event in &report.events {
            log::info!("pickup event: {event:?}");
        }
        total.absorb(report);
    }
    Ok(total)
}
