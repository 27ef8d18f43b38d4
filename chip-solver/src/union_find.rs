/* =========================
 *   Union-Find over colors
 * ========================= */
use crate::chip::ColorChip;
use crate::color::Color;

/// Disjoint sets over `Color::slot()` values, union by size.
#[derive(Clone, Debug)]
struct UF {
    parent: [usize; Color::COUNT],
    size: [usize; Color::COUNT],
}
impl UF {
    fn new() -> Self {
        let mut parent = [0; Color::COUNT];
        for (i, p) in parent.iter_mut().enumerate() {
            *p = i;
        }
        Self {
            parent,
            size: [1; Color::COUNT],
        }
    }
    // path halving
    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }
    /// False when `a` and `b` were already in one set.
    fn unite(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

/// Colors grouped by whether some run of chips links them.
#[derive(Clone, Debug)]
pub struct ColorComponents {
    uf: UF,
    components: usize,
}

impl ColorComponents {
    pub fn from_chips(chips: &[ColorChip]) -> Self {
        let mut uf = UF::new();
        let mut components = Color::COUNT;
        for chip in chips {
            if uf.unite(chip.left.slot(), chip.right.slot()) {
                components -= 1;
            }
        }
        Self { uf, components }
    }

    /// Necessary (not sufficient) for a chain from `a` to `b` to exist.
    pub fn connected(&mut self, a: Color, b: Color) -> bool {
        self.uf.find(a.slot()) == self.uf.find(b.slot())
    }

    /// Number of color groups, counting untouched colors as singletons.
    pub fn count(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::*;

    #[test]
    fn joins_through_shared_colors() {
        let chips = [
            ColorChip::new(Blue, Red),
            ColorChip::new(Orange, Green),
            ColorChip::new(Red, Orange),
        ];
        let mut comps = ColorComponents::from_chips(&chips);
        assert!(comps.connected(Blue, Green));
        assert!(!comps.connected(Blue, Purple));
    }

    #[test]
    fn disjoint_pairs_stay_apart() {
        let chips = [ColorChip::new(Blue, Red), ColorChip::new(Orange, Green)];
        let mut comps = ColorComponents::from_chips(&chips);
        assert!(comps.connected(Blue, Red));
        assert!(!comps.connected(Red, Orange));
        assert!(comps.connected(Yellow, Yellow));
    }

    #[test]
    fn loops_and_repeats_do_not_merge() {
        let chips = [
            ColorChip::new(Blue, Blue),
            ColorChip::new(Blue, Red),
            ColorChip::new(Red, Blue),
            ColorChip::new(Yellow, Green),
        ];
        let mut comps = ColorComponents::from_chips(&chips);
        // {Blue, Red}, {Yellow, Green}, {Orange}, {Purple}
        assert_eq!(comps.count(), 4);
        assert!(comps.connected(Red, Blue));
        assert!(!comps.connected(Red, Green));
    }

    #[test]
    fn long_run_links_every_color() {
        let chips = [
            ColorChip::new(Green, Purple),
            ColorChip::new(Purple, Orange),
            ColorChip::new(Orange, Yellow),
            ColorChip::new(Yellow, Red),
            ColorChip::new(Red, Blue),
        ];
        let mut comps = ColorComponents::from_chips(&chips);
        assert_eq!(comps.count(), 1);
        assert!(Color::ALL.iter().all(|&c| comps.connected(Blue, c)));
    }
}
