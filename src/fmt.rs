use std::fmt;

use crate::solve::{Outcome, Strategy};
use crate::{Board, Tile, BLANK};

impl Board {
    /// Lay the board out as text, one row per line, labels right-aligned
    /// and the blank shown as `.`. `decorate` may restyle each padded label.
    pub fn render_with(&self, mut decorate: impl FnMut(Tile, String) -> String) -> String {
        let width = (self.tiles().len() - 1).to_string().len();
        let mut buf = String::new();
        for (pos, tile) in self.cells() {
            if pos.1 != 0 {
                buf.push(' ');
            }
            let label = if tile == BLANK {
                format!("{:>width$}", ".")
            } else {
                format!("{tile:>width$}")
            };
            buf.push_str(&decorate(tile, label));
            if pos.1 + 1 == self.size() {
                buf.push('\n');
            }
        }
        buf
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_, label| label))
    }
}

/// The answer file: a `#moves` marker line, then the moved tiles or `no solution`.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#moves\n")?;
        match self.moves() {
            Some(moves) => {
                for tile in moves {
                    write!(f, "{tile} ")?;
                }
                f.write_str("\n")
            }
            None => f.write_str("no solution\n"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => f.write_str("bfs"),
            Strategy::BestFirst => f.write_str("astar"),
        }
    }
}
