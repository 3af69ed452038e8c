use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_document::{validate, Resolver};
use serde_json::{json, Map, Value};

fn wide_document(children: usize) -> Value {
    let mut nodes = Map::new();
    let ids: Vec<String> = (0..children).map(|i| format!("node-{}", i)).collect();

    nodes.insert(
        "ROOT".to_string(),
        json!({ "type": { "resolvedName": "Container" }, "nodes": ids }),
    );
    for id in &ids {
        nodes.insert(
            id.clone(),
            json!({ "type": "Text", "props": { "text": id }, "parent": "ROOT" }),
        );
    }

    Value::Object(nodes)
}

fn deep_document(depth: usize) -> Value {
    let mut nodes = Map::new();
    let mut parent = "ROOT".to_string();
    nodes.insert(parent.clone(), json!({ "type": "div", "nodes": [] }));

    for i in 0..depth {
        let id = format!("level-{}", i);
        nodes[&parent]["nodes"] = json!([id.clone()]);
        nodes.insert(id.clone(), json!({ "type": "section", "nodes": [] }));
        parent = id;
    }

    Value::Object(nodes)
}

fn validate_small_document(c: &mut Criterion) {
    let resolver = Resolver::with_components(["Container", "Text"]);
    let content = json!({
        "ROOT": { "type": "Container", "nodes": ["t"], "linkedNodes": { "header": "h" } },
        "t": { "type": "Text" },
        "h": { "type": "header" },
    });

    c.bench_function("validate_small_document", |b| {
        b.iter(|| validate(black_box(&content), &resolver))
    });
}

fn validate_wide_document(c: &mut Criterion) {
    let resolver = Resolver::with_components(["Container", "Text"]);
    let content = wide_document(1_000);

    c.bench_function("validate_wide_document", |b| {
        b.iter(|| validate(black_box(&content), &resolver))
    });
}

fn validate_deep_document(c: &mut Criterion) {
    let resolver = Resolver::new();
    let content = deep_document(1_000);

    c.bench_function("validate_deep_document", |b| {
        b.iter(|| validate(black_box(&content), &resolver))
    });
}

criterion_group!(
    benches,
    validate_small_document,
    validate_wide_document,
    validate_deep_document
);
criterion_main!(benches);
