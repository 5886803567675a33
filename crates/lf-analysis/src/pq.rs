//! Indexed minimum priority queue.
//!
//! Backs the shortest-path and spanning-tree engines: vertices are the
//! indices, tentative weights are the keys, and `decrease_key` implements
//! relaxation. A fresh instance is created per analysis call; no queue state
//! outlives the analysis that allocated it.

/// Min-priority queue over the indices `0..capacity` with decrease-key.
///
/// Binary heap with an inverse position table, so `contains` is O(1) and
/// `insert` / `decrease_key` / `del_min` are O(log n).
///
/// Misuse (inserting an index twice, decreasing an absent index, raising a
/// key) is a programmer error and panics; the engines never do this.
#[derive(Debug)]
pub(crate) struct IndexMinPq<K> {
    /// Entries currently on the heap.
    n: usize,
    /// Heap positions 1..=n -> index.
    pq: Vec<usize>,
    /// index -> heap position, None if absent.
    qp: Vec<Option<usize>>,
    /// index -> key, None if absent.
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd + Copy> IndexMinPq<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            n: 0,
            pq: vec![0; capacity + 1],
            qp: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.qp[index].is_some()
    }

    /// Associate `key` with `index`. Panics if `index` is already queued.
    pub fn insert(&mut self, index: usize, key: K) {
        assert!(!self.contains(index), "index {index} already queued");
        self.n += 1;
        self.qp[index] = Some(self.n);
        self.pq[self.n] = index;
        self.keys[index] = Some(key);
        self.swim(self.n);
    }

    /// Lower the key of `index`. Panics if absent or if `key` is not smaller.
    pub fn decrease_key(&mut self, index: usize, key: K) {
        let pos = self.qp[index].expect("decrease_key on absent index");
        let current = self.keys[index].expect("queued index has a key");
        assert!(key < current, "decrease_key must strictly decrease");
        self.keys[index] = Some(key);
        self.swim(pos);
    }

    /// Remove and return the index with the minimum key. Panics if empty.
    pub fn del_min(&mut self) -> usize {
        assert!(self.n > 0, "del_min on empty queue");
        let min = self.pq[1];
        self.exch(1, self.n);
        self.n -= 1;
        self.sink(1);
        self.qp[min] = None;
        self.keys[min] = None;
        min
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let a = self.keys[self.pq[i]].expect("queued index has a key");
        let b = self.keys[self.pq[j]].expect("queued index has a key");
        a < b
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = Some(i);
        self.qp[self.pq[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.less(k, k / 2) {
            self.exch(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.n {
            let mut j = 2 * k;
            if j < self.n && self.less(j + 1, j) {
                j += 1;
            }
            if !self.less(j, k) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }
}
