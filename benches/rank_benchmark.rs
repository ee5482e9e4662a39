use criterion::{Criterion, black_box, criterion_group, criterion_main};
use top_articles::internal::models::Article;
use top_articles::internal::ranker::rank;

fn sample_articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| Article {
            title: (i % 3 != 0).then(|| format!("Article {i}")),
            story_title: (i % 5 == 0).then(|| format!("Story {i}")),
            num_comments: (i % 7 != 0).then_some((i * 37 % 1000) as u64),
            ..Default::default()
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let small = sample_articles(100);
    c.bench_function("rank top 10 of 100", |b| {
        b.iter(|| rank(black_box(&small), black_box(10)))
    });

    let large = sample_articles(10_000);
    c.bench_function("rank top 10 of 10000", |b| {
        b.iter(|| rank(black_box(&large), black_box(10)))
    });
}

criterion_group!(benches, benchmark_rank);
criterion_main!(benches);
