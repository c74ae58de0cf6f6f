#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use njam::prelude::*;

const N_LIST: u64 = 2000;

fn big_list() -> Noun {
    (0..N_LIST).rev().fold(Noun::atom(0u64), |tail, i| {
        Noun::cell(Noun::atom(i), tail)
    })
}

fn shared_tree() -> Noun {
    // a balanced tree whose levels repeat, to exercise the caches
    let mut n = Noun::cell(123_456u64, 654_321u64);
    for _ in 0..12 {
        n = Noun::cell(n.clone(), n);
    }
    n
}

fn bench_jam(c: &mut Criterion) {
    let list = big_list();
    let enc_len = jam(&list).len();
    c.bench_function(
        &format!("Encoding a {}-element list, output size of {} bytes", N_LIST, enc_len),
        move |b| b.iter(|| jam(black_box(&list))),
    );

    let tree = shared_tree();
    let enc_len = jam(&tree).len();
    c.bench_function(
        &format!("Encoding a shared tree, output size of {} bytes", enc_len),
        move |b| b.iter(|| jam(black_box(&tree))),
    );
}

fn bench_cue(c: &mut Criterion) {
    let enc = jam(&big_list());
    c.bench_function(
        &format!("Decoding a {}-element list from {} bytes", N_LIST, enc.len()),
        move |b| b.iter(|| cue(black_box(&enc)).unwrap()),
    );

    let enc = jam(&shared_tree());
    c.bench_function(
        &format!("Decoding a shared tree from {} bytes", enc.len()),
        move |b| b.iter(|| cue(black_box(&enc)).unwrap()),
    );
}

criterion_group!(benches, bench_jam, bench_cue);
criterion_main!(benches);
