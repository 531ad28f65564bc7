//! Automaton engine vs fallback scanner throughput.
//!
//! Both scanners run over the same generated Pascal-S source; the rule
//! table is loaded once outside the measured loop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pasc_lexer::{RuleTable, Scanner, ScannerKind, SourceBuffer, StateClassifier, TokenScanner};

/// Generate N small procedures for scaling benchmarks.
fn generate_n_procedures(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "procedure p{i}(var x: integer); {{ proc {i} }}\n\
                 begin if x <> {i} then x := x * {i} + 1 else x := 0 end;\n\
                 (* array bound *) const s{i} = 'name {i}'; a{i}: array[1..{i}] of char;\n"
            )
        })
        .collect()
}

fn bench_scanners(c: &mut Criterion) {
    let Ok(table) = RuleTable::builtin() else {
        return;
    };
    let classifier = StateClassifier::pascal(&table);
    let mut group = c.benchmark_group("pasc_lexer/throughput");

    for num_procedures in [10, 100, 1000] {
        let source = generate_n_procedures(num_procedures);
        let bytes = source.len() as u64;
        group.throughput(Throughput::Bytes(bytes));

        for kind in ScannerKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), num_procedures),
                &source,
                |b, src| {
                    b.iter(|| {
                        let buf = SourceBuffer::new(src);
                        let mut scanner = match kind {
                            ScannerKind::Automaton => {
                                Scanner::automaton(&table, &classifier, buf.cursor())
                            }
                            ScannerKind::Fallback => Scanner::fallback(buf.cursor()),
                        };
                        while let Ok(Some(token)) = scanner.scan_one() {
                            black_box(token);
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_rule_loading(c: &mut Criterion) {
    c.bench_function("pasc_lexer/rule_table/builtin", |b| {
        b.iter(|| black_box(RuleTable::builtin()));
    });
}

criterion_group!(benches, bench_scanners, bench_rule_loading);
criterion_main!(benches);
