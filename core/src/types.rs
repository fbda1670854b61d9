/// Single 1-based coordinate, also used for the grid dimension.
pub type Coord = u32;

/// Count type used for open-site and total-site counts.
pub type CellCount = u64;

/// Element index inside the connectivity universe.
pub type SiteIndex = usize;

/// Two-dimensional coordinates `(row, col)`, both 1-based.
pub type Coord2 = (Coord, Coord);

/// Virtual element merged with every open site of the first row.
pub const TOP_SENTINEL: SiteIndex = 0;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize - 1, self.1 as usize - 1]
    }
}

pub const fn square(n: Coord) -> CellCount {
    let n = n as CellCount;
    n.saturating_mul(n)
}

// above, right, below, left
const DISPLACEMENTS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Applies `delta` to `coords`, returning a value only when it stays inside `1..=size`.
fn apply_delta(coords: Coord2, delta: (i64, i64), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;

    let next_row = Coord::try_from(i64::from(row) + dr).ok()?;
    if next_row == 0 || next_row > size {
        return None;
    }

    let next_col = Coord::try_from(i64::from(col) + dc).ok()?;
    if next_col == 0 || next_col > size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds orthogonal neighbors of a site.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
