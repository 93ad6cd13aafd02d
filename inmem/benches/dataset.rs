//! Grid benchmark for the indexed dataset:
//! populate a dim³ grid of quads, then query it with every number of
//! bound positions.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quadset_api::prelude::*;
use quadset_inmem::dataset::IndexedDataset;

type MyQuad = Spog<SimpleTerm<'static>>;

fn term(prefix: &str, i: usize) -> SimpleTerm<'static> {
    SimpleTerm::Iri(IriRef::new_unchecked(
        format!("http://example.org/#{}{}", prefix, i).into(),
    ))
}

fn quad(i: usize, j: usize, k: usize) -> MyQuad {
    ([term("s", i), term("p", j), term("o", k)], None)
}

fn grid(dim: usize) -> IndexedDataset<MyQuad> {
    let mut dataset = IndexedDataset::new();
    for i in 0..dim {
        for j in 0..dim {
            for k in 0..dim {
                dataset.insert(quad(i, j, k));
            }
        }
    }
    dataset
}

fn populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");
    for dim in [8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            b.iter(|| grid(dim));
        });
    }
    group.finish();
}

fn query(c: &mut Criterion) {
    let dim = 16;
    let dataset = grid(dim);

    let mut group = c.benchmark_group("query");
    group.bench_function("0 variables", |b| {
        b.iter(|| {
            for i in 0..dim {
                let (s, p, o) = (term("s", i), term("p", i), term("o", i));
                assert_eq!(
                    dataset
                        .quads_matching(Some(&s), Some(&p), Some(&o), Any)
                        .count(),
                    1
                );
            }
        })
    });
    group.bench_function("1 variable", |b| {
        b.iter(|| {
            for i in 0..dim {
                let (s, p) = (term("s", i), term("p", i));
                assert_eq!(
                    dataset.quads_matching(Some(&s), Some(&p), Any, Any).count(),
                    dim
                );
            }
        })
    });
    group.bench_function("2 variables", |b| {
        b.iter(|| {
            for i in 0..dim {
                let s = term("s", i);
                assert_eq!(
                    dataset.quads_matching(Some(&s), Any, Any, Any).count(),
                    dim * dim
                );
            }
        })
    });
    group.finish();
}

criterion_group!(benches, populate, query);
criterion_main!(benches);
