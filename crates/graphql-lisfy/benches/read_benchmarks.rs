mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;

// ─── Group 1: Document Reading ────────────────────────────

fn read_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_document");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(graphql_lisfy::read(fixtures::SIMPLE_QUERY)))
    });

    group.bench_function("variables_query", |b| {
        b.iter(|| black_box(graphql_lisfy::read(fixtures::VARIABLES_QUERY)))
    });

    let nested = fixtures::deeply_nested_query(200);
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deeply_nested_selection_set", |b| {
        b.iter(|| black_box(graphql_lisfy::read(&nested)))
    });

    group.finish();
}

// ─── Group 2: Value Reading ───────────────────────────────

fn read_atom(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_atom");

    for count in [10, 1_000] {
        let source = fixtures::large_list_value(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("list_of_{count}_objects"), |b| {
            b.iter(|| black_box(graphql_lisfy::read_atom(&source)))
        });
    }

    group.finish();
}

// ─── Group 3: Rendering ───────────────────────────────────

fn render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let document = graphql_lisfy::read(fixtures::VARIABLES_QUERY)
        .expect("fixture should read");
    let atom = graphql_lisfy::read_atom(&fixtures::large_list_value(1_000))
        .expect("fixture should read");

    group.bench_function("document_pretty", |b| {
        b.iter(|| black_box(document.render(false)))
    });
    group.bench_function("document_minified", |b| {
        b.iter(|| black_box(document.render(true)))
    });
    group.bench_function("list_of_1000_objects_minified", |b| {
        b.iter(|| black_box(atom.render(true)))
    });

    group.finish();
}

criterion_group!(benches, read_document, read_atom, render);
criterion_main!(benches);
