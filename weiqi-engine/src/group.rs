use crate::Point;
use crate::goban::Goban;
use crate::stone::Stone;

/// A maximal 4-connected set of same-colored stones and its liberties,
/// computed against one board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Flood-fill the group containing `seed`. Returns `None` for an empty seed.
pub fn analyze(goban: &Goban, seed: Point) -> Option<Group> {
    let stone = goban.stone_at(seed)?;

    let cells = goban.board().len();
    let mut visited = vec![false; cells];
    let mut seen_liberty = vec![false; cells];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    let mut stack = vec![seed];
    visited[goban.idx(seed)] = true;

    while let Some(p) = stack.pop() {
        stones.push(p);
        for n in goban.neighbors(p) {
            let ni = goban.idx(n);
            match goban.stone_at(n) {
                None => {
                    if !seen_liberty[ni] {
                        seen_liberty[ni] = true;
                        liberties.push(n);
                    }
                }
                Some(s) if s == stone && !visited[ni] => {
                    visited[ni] = true;
                    stack.push(n);
                }
                Some(_) => {}
            }
        }
    }

    Some(Group {
        stone,
        stones,
        liberties,
    })
}
