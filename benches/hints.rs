// benches/hints.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use who_said_it::csv::parse_rows;
use who_said_it::game::hint::redact_bio;
use who_said_it::game::NameParts;

fn sample_store(rows: usize) -> String {
    let mut text = String::from("Name,Quote,Link to Bio\n");
    for i in 0..rows {
        text.push_str(&format!(
            "Albert Einstein,\"“Quote {i}, with a comma and \"\"quotes\"\".”\",http://quotes.toscrape.com/author/Albert-Einstein\n"
        ));
    }
    text
}

fn bench_hints(c: &mut Criterion) {
    let bio = "In 1879, Albert Einstein was born in Ulm. Einstein later moved to Switzerland. ".repeat(40);
    let names = NameParts::split("Albert Einstein").unwrap();

    c.bench_function("redact_bio", |b| {
        b.iter(|| black_box(redact_bio(black_box(&bio), "Albert Einstein", &names)).len())
    });

    let store = sample_store(100);
    c.bench_function("parse_store_100", |b| {
        b.iter(|| black_box(parse_rows(black_box(&store), ',')).len())
    });
}

criterion_group!(benches, bench_hints);
criterion_main!(benches);
