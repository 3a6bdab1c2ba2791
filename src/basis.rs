//! Basis bookkeeping: the two integer sequences `N` (non-basic) and `B`
//! (basic) that name the dictionary's variables by identifier in `1..=n+m`,
//! plus the aux-column offset that `x₀` (identifier `0`) needs during
//! Phase I.
//!
//! `N` and `B` store variable *identifiers*, not column/row positions —
//! Bland's rule tie-breaks on identifiers, so callers must not confuse the
//! two.

#[derive(Debug, Clone)]
pub struct Basis {
    n: usize,
    /// `true` while column 0 of the tableau (the `x₀` column) is still a
    /// live non-basic slot. Cleared exactly once, by [`Basis::drop_aux`].
    aux_active: bool,
    nonbasic: Vec<usize>,
    basic: Vec<usize>,
}

impl Basis {
    /// Sets up the Phase I basis: `N = [0, 1, .., n]`, `B = [n+1, .., n+m]`.
    pub fn for_phase1(n: usize, m: usize) -> Basis {
        let nonbasic = (0..=n).collect();
        let basic = (n + 1..=n + m).collect();
        Basis {
            n,
            aux_active: true,
            nonbasic,
            basic,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn rows(&self) -> usize {
        self.basic.len()
    }

    pub fn aux_active(&self) -> bool {
        self.aux_active
    }

    /// Offset between a position in `N` and the physical tableau column it
    /// backs. `0` while `x₀` is still in `N`, `1` once it has been dropped.
    pub fn offset(&self) -> usize {
        if self.aux_active {
            0
        } else {
            1
        }
    }

    pub fn physical_col(&self, pos_in_n: usize) -> usize {
        pos_in_n + self.offset()
    }

    pub fn pos_in_n(&self, physical_col: usize) -> usize {
        physical_col - self.offset()
    }

    /// The physical columns currently backed by `N`: always `offset..=n`.
    pub fn active_columns(&self) -> std::ops::RangeInclusive<usize> {
        self.offset()..=self.n
    }

    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    pub fn nonbasic_at(&self, pos: usize) -> usize {
        self.nonbasic[pos]
    }

    pub fn basic_at(&self, row: usize) -> usize {
        self.basic[row]
    }

    pub fn position_of_basic(&self, id: usize) -> Option<usize> {
        self.basic.iter().position(|&v| v == id)
    }

    pub fn position_of_nonbasic(&self, id: usize) -> Option<usize> {
        self.nonbasic.iter().position(|&v| v == id)
    }

    /// Exchanges the identifiers at non-basic position `pos_in_n` and basic
    /// row `row`: `swap(N[pos_in_n], B[row])`.
    pub fn swap_basis(&mut self, pos_in_n: usize, row: usize) {
        std::mem::swap(&mut self.nonbasic[pos_in_n], &mut self.basic[row]);
    }

    /// Exchanges two positions within `N` itself (used to move `x0` to the
    /// leading slot while rebuilding the original objective in Phase I).
    pub fn swap_nonbasic_positions(&mut self, pos1: usize, pos2: usize) {
        self.nonbasic.swap(pos1, pos2);
    }

    /// Drops the leading `x₀` slot from `N` once it is either never needed
    /// (fast path) or has been pivoted back out (slow path). After this,
    /// `N` has length `n` and position `q` backs physical column `q + 1`.
    pub fn drop_aux(&mut self) {
        assert!(self.aux_active, "x0 already dropped from the basis");
        self.nonbasic.remove(0);
        self.aux_active = false;
    }

    #[cfg(test)]
    pub fn sorted_identifiers(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self
            .nonbasic
            .iter()
            .chain(self.basic.iter())
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase1_setup_partitions_identifiers() {
        let basis = Basis::for_phase1(3, 2);
        assert_eq!(basis.nonbasic(), &[0, 1, 2, 3]);
        assert_eq!(basis.basic(), &[4, 5]);
        assert!(basis.aux_active());
        assert_eq!(basis.offset(), 0);
    }

    #[test]
    fn drop_aux_shifts_offset() {
        let mut basis = Basis::for_phase1(3, 2);
        basis.drop_aux();
        assert_eq!(basis.nonbasic(), &[1, 2, 3]);
        assert_eq!(basis.offset(), 1);
        assert_eq!(basis.physical_col(0), 1);
        assert_eq!(basis.active_columns(), 1..=3);
    }

    #[test]
    fn swap_basis_exchanges_identifiers() {
        let mut basis = Basis::for_phase1(2, 2);
        // N = [0, 1, 2], B = [3, 4]
        basis.swap_basis(1, 0);
        assert_eq!(basis.nonbasic(), &[0, 3, 2]);
        assert_eq!(basis.basic(), &[1, 4]);
    }

    #[test]
    fn basis_partition_stays_complete() {
        let mut basis = Basis::for_phase1(3, 2);
        basis.swap_basis(1, 0);
        basis.drop_aux();
        assert_eq!(basis.sorted_identifiers(), vec![1, 2, 3, 4, 5]);
    }
}
