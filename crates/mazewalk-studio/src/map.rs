use mazewalk_engine::MazeSession;
use mazewalk_maze::{Cell, cell_of};

/// ASCII view of the session: `#` walls, `@` walker, `*` uncollected keys.
pub fn render_map(session: &MazeSession) -> String {
    let cs = session.config().geometry.cell_size;
    let mut rows: Vec<Vec<char>> = session
        .grid()
        .rows()
        .map(|row| row.iter().map(|c| if *c == Cell::Wall { '#' } else { ' ' }).collect())
        .collect();

    let mut mark = |x: i64, y: i64, ch: char| {
        if let Some(slot) = usize::try_from(y)
            .ok()
            .zip(usize::try_from(x).ok())
            .and_then(|(y, x)| rows.get_mut(y).and_then(|r| r.get_mut(x)))
        {
            *slot = ch;
        }
    };

    for p in session.pickups().items().iter().filter(|p| !p.collected) {
        let (x, y) = cell_of(p.position.xz(), cs);
        mark(x, y, '*');
    }
    let (x, y) = cell_of(session.walker().position().xz(), cs);
    mark(x, y, '@');

    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
