use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use disjoint_avl::{AvlTree, Disjoint, Interval};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("find");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of lookups
        for n_lookups in [100, 1_000] {
            bench_param(&mut g, n_values, n_lookups)
        }
    }
}

/// For a tree containing `n_values`, benchmark each lookup method performing
/// `n_lookups`, one run causing all hits, one run causing all misses.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    // The tree must be at least as big as the number of lookups.
    assert!(n_values >= n_lookups);

    // Populate the tree with disjoint intervals in LFSR order.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::new();

    for _i in 0..n_values {
        t.insert(rand.next_interval());
    }

    bench_get(g, &t, &rand, n_values, n_lookups);
    bench_check(g, &t, &rand, n_values, n_lookups);
    bench_find(g, &t, &rand, n_values, n_lookups);
}

macro_rules! lookup_bench {
    (
        $name:ident,
        $hit:expr
    ) => {
        paste::paste! {
            /// `rand` is the LFSR state after populating `t`; it continues to
            /// generate intervals in vacant slots.
            fn [<bench_ $name>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                t: &AvlTree<Interval>,
                rand: &Lfsr,
                n_values: usize,
                n_lookups: usize,
            )
            where
                M: Measurement,
            {
                let hit = $hit;

                let bench_name = BenchName {
                    bench: concat!(stringify!($name), "_misses"),
                    n_values,
                    n_lookups,
                };

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || rand.clone(),
                        |mut rand| {
                            let mut any_hit = false;
                            for _ in 0..n_lookups {
                                any_hit |= hit(t, &rand.next_interval());
                            }
                            assert!(!any_hit);
                        },
                        BatchSize::SmallInput,
                    )
                });

                let bench_name = BenchName {
                    bench: concat!(stringify!($name), "_hits"),
                    n_values,
                    n_lookups,
                };

                // Reset the LFSR to replay the sequence of intervals inserted
                // into the tree.
                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        Lfsr::default,
                        |mut rand| {
                            let mut all_hit = true;
                            for _ in 0..n_lookups {
                                all_hit &= hit(t, &rand.next_interval());
                            }
                            assert!(all_hit);
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

lookup_bench!(get, |t: &AvlTree<Interval>, q: &Interval| t.get(q).is_some());
lookup_bench!(check, |t: &AvlTree<Interval>, q: &Interval| !t.check(q));
lookup_bench!(find, |t: &AvlTree<Interval>, q: &Interval| t.find(q).is_valid());
