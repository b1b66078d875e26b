/// Benchmarks for the RowTrace flattening engine.
///
/// Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowtrace::domain::ast::{NodeKind, SyntaxNode};
use rowtrace::flatten;

/// Build `count` functions, each holding a while loop with an if/else chain.
fn synthetic_program(count: usize) -> Vec<SyntaxNode> {
    (0..count)
        .map(|i| {
            let line = i * 10 + 1;
            let ident = |name: &str| SyntaxNode::identifier(line, name);
            let chain = SyntaxNode::new(
                line + 2,
                NodeKind::IfStatement {
                    test: Box::new(SyntaxNode::binary(line + 2, ident("n"), ">", SyntaxNode::literal(line, "10"))),
                    consequent: Box::new(SyntaxNode::statement(SyntaxNode::assignment(
                        line + 3,
                        ident("n"),
                        SyntaxNode::binary(line + 3, ident("n"), "-", SyntaxNode::literal(line, "10")),
                    ))),
                    alternate: Some(Box::new(SyntaxNode::statement(SyntaxNode::assignment(
                        line + 4,
                        ident("n"),
                        SyntaxNode::binary(
                            line + 4,
                            SyntaxNode::binary(line + 4, ident("n"), "*", SyntaxNode::literal(line, "2")),
                            "+",
                            SyntaxNode::literal(line, "1"),
                        ),
                    )))),
                },
            );
            let body = SyntaxNode::new(
                line + 1,
                NodeKind::WhileStatement {
                    test: Box::new(ident("n")),
                    body: Box::new(SyntaxNode::new(line + 1, NodeKind::BlockStatement { body: vec![chain] })),
                },
            );
            SyntaxNode::new(
                line,
                NodeKind::FunctionDeclaration {
                    id: Some(Box::new(ident(&format!("f{}", i)))),
                    params: vec![ident("n")],
                    body: Box::new(SyntaxNode::new(line, NodeKind::BlockStatement { body: vec![body] })),
                },
            )
        })
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for count in [10usize, 100, 1000] {
        let program = synthetic_program(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &program, |b, program| {
            b.iter(|| flatten(black_box(program)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
