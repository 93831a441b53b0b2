use chunky_list::{ChunkyArrayList, GrowableList, ListAdt, SinglyLinkedList};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn fill<L: ListAdt<Item = u64>>(list: &mut L, size: usize) {
    for i in 0..size as u64 {
        list.push_back(i).unwrap();
    }
}

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("growable", size), size, |b, &size| {
            b.iter(|| {
                let mut list = GrowableList::new();
                fill(&mut list, size);
                black_box(list.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("chunky", size), size, |b, &size| {
            b.iter(|| {
                let mut list = ChunkyArrayList::with_default_chunk_size();
                fill(&mut list, size);
                black_box(list.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("singly_linked", size), size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                fill(&mut list, size);
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("growable", size), size, |b, &size| {
            let mut base = GrowableList::new();
            fill(&mut base, size);

            b.iter(|| {
                let mut list = base.clone();
                for i in 0..100 {
                    list.insert(list.len() / 2, i).unwrap();
                }
                black_box(list.len())
            });
        });

        for chunk_size in [16, 64, 256] {
            group.bench_with_input(
                BenchmarkId::new(format!("chunky_{chunk_size}"), size),
                size,
                |b, &size| {
                    let mut base = ChunkyArrayList::new(chunk_size).unwrap();
                    fill(&mut base, size);

                    b.iter(|| {
                        let mut list = base.clone();
                        for i in 0..100 {
                            list.insert(list.len() / 2, i).unwrap();
                        }
                        black_box(list.len())
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("growable", size), size, |b, &size| {
            let mut list = GrowableList::new();
            fill(&mut list, size);

            b.iter(|| {
                for i in 0..size {
                    black_box(list.get((i * 7919) % size).ok());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("chunky", size), size, |b, &size| {
            let mut list = ChunkyArrayList::with_default_chunk_size();
            fill(&mut list, size);

            b.iter(|| {
                for i in 0..size {
                    black_box(list.get((i * 7919) % size).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("chunky", size), size, |b, &size| {
            let mut list = ChunkyArrayList::with_default_chunk_size();
            fill(&mut list, size);

            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
        group.bench_with_input(BenchmarkId::new("singly_linked", size), size, |b, &size| {
            let mut list = SinglyLinkedList::new();
            fill(&mut list, size);

            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_insert_middle,
    bench_random_access,
    bench_iteration
);
criterion_main!(benches);
