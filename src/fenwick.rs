//! Fenwick (binary indexed) prefix sum accumulator.
//!
//! Point update and prefix query are O(log(n)) over a fixed index domain.
//! Reset is O(1) : cells carry a generation tag and stale cells are cleared
//! lazily on first touch, so repeated sweeps (benchmark rounds) pay no O(n) clear.

/// accumulator over the fixed domain 0..len
pub struct Fenwick {
    /// 1 based tree cells
    tree: Vec<f64>,
    /// generation of last write of each cell
    tag: Vec<u32>,
    /// current generation
    epoch: u32,
    len: usize,
    /// sum of all values added since last reset
    total: f64,
} // end of struct Fenwick

impl Fenwick {
    pub fn new(len: usize) -> Self {
        Fenwick {
            tree: vec![0.; len + 1],
            tag: vec![0; len + 1],
            epoch: 0,
            len,
            total: 0.,
        }
    } // end of new

    /// adds `v` at position `i`, 0 <= i < len
    pub fn add(&mut self, i: usize, v: f64) {
        assert!(i < self.len);
        let mut pos = i + 1;
        while pos <= self.len {
            if self.tag[pos] != self.epoch {
                self.tree[pos] = 0.;
                self.tag[pos] = self.epoch;
            }
            self.tree[pos] += v;
            pos += pos & pos.wrapping_neg();
        }
        self.total += v;
    } // end of add

    /// sum of all values added at positions <= i since last reset
    pub fn prefix_sum(&self, i: usize) -> f64 {
        let mut pos = (i + 1).min(self.len);
        let mut sum = 0.;
        while pos > 0 {
            if self.tag[pos] == self.epoch {
                sum += self.tree[pos];
            }
            pos -= pos & pos.wrapping_neg();
        }
        sum
    } // end of prefix_sum

    /// sum of all values added since last reset
    pub fn total(&self) -> f64 {
        self.total
    }

    /// O(1) clear, invalidating all cells via the generation counter
    pub fn reset(&mut self) {
        if self.epoch == u32::MAX {
            // generation counter wrapped, do the one real clear
            self.tree.iter_mut().for_each(|c| *c = 0.);
            self.tag.iter_mut().for_each(|t| *t = 0);
            self.epoch = 0;
        } else {
            self.epoch += 1;
        }
        self.total = 0.;
    } // end of reset
} // end of impl Fenwick

//==========================================================================================================

/// The four accumulations the covariance sweep maintains over y ranks :
/// a count of processed points and the sums of their x, y and x*y values.
pub struct FenwickSet {
    cnt: Fenwick,
    sx: Fenwick,
    sy: Fenwick,
    sxy: Fenwick,
} // end of struct FenwickSet

/// prefix query result of a [FenwickSet]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixStat {
    pub cnt: f64,
    pub sx: f64,
    pub sy: f64,
    pub sxy: f64,
}

impl FenwickSet {
    pub fn new(len: usize) -> Self {
        FenwickSet {
            cnt: Fenwick::new(len),
            sx: Fenwick::new(len),
            sy: Fenwick::new(len),
            sxy: Fenwick::new(len),
        }
    } // end of new

    /// registers a processed point of coordinates (x,y) at position `rank`
    pub fn add(&mut self, rank: usize, x: f64, y: f64) {
        self.cnt.add(rank, 1.);
        self.sx.add(rank, x);
        self.sy.add(rank, y);
        self.sxy.add(rank, x * y);
    } // end of add

    /// statistics of the points registered at positions <= rank
    pub fn prefix(&self, rank: usize) -> PrefixStat {
        PrefixStat {
            cnt: self.cnt.prefix_sum(rank),
            sx: self.sx.prefix_sum(rank),
            sy: self.sy.prefix_sum(rank),
            sxy: self.sxy.prefix_sum(rank),
        }
    } // end of prefix

    /// statistics of all registered points
    pub fn totals(&self) -> PrefixStat {
        PrefixStat {
            cnt: self.cnt.total(),
            sx: self.sx.total(),
            sy: self.sy.total(),
            sxy: self.sxy.total(),
        }
    } // end of totals

    pub fn reset(&mut self) {
        self.cnt.reset();
        self.sx.reset();
        self.sy.reset();
        self.sxy.reset();
    } // end of reset
} // end of impl FenwickSet

//==========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn prefix_sums_match_scan() {
        //
        log_init_test();
        //
        let n = 257;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(87);
        let mut fen = Fenwick::new(n);
        let mut flat = vec![0.; n];
        for _ in 0..1000 {
            let i = rng.gen_range(0..n);
            let v: f64 = rng.gen_range(-1.0..1.0);
            fen.add(i, v);
            flat[i] += v;
        }
        let mut scan = 0.;
        for i in 0..n {
            scan += flat[i];
            assert!((fen.prefix_sum(i) - scan).abs() < 1e-10);
        }
        assert!((fen.total() - scan).abs() < 1e-10);
    }

    #[test]
    fn reset_clears_lazily() {
        //
        log_init_test();
        //
        let mut fen = Fenwick::new(16);
        for i in 0..16 {
            fen.add(i, (i + 1) as f64);
        }
        assert!(fen.prefix_sum(15) > 0.);
        fen.reset();
        // untouched cells must read as zero after the O(1) reset
        assert_eq!(fen.prefix_sum(15), 0.);
        assert_eq!(fen.total(), 0.);
        fen.add(3, 2.5);
        assert_eq!(fen.prefix_sum(2), 0.);
        assert_eq!(fen.prefix_sum(3), 2.5);
        assert_eq!(fen.prefix_sum(15), 2.5);
    }

    #[test]
    fn reset_survives_many_rounds() {
        //
        log_init_test();
        //
        let mut fen = Fenwick::new(8);
        for round in 0..50 {
            fen.add(round % 8, 1.);
            assert_eq!(fen.prefix_sum(7), 1.);
            fen.reset();
        }
    }

    #[test]
    fn set_prefix_splits_below_above() {
        //
        log_init_test();
        //
        let mut set = FenwickSet::new(10);
        set.add(2, 1.0, 10.0);
        set.add(7, 3.0, 20.0);
        set.add(4, 5.0, 30.0);
        let below = set.prefix(4);
        assert_eq!(below.cnt, 2.);
        assert_eq!(below.sx, 6.);
        assert_eq!(below.sy, 40.);
        assert_eq!(below.sxy, 160.);
        let tot = set.totals();
        assert_eq!(tot.cnt, 3.);
        assert_eq!(tot.sxy, 220.);
    }
} // end of mod tests
