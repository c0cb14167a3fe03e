use criterion::{black_box, criterion_group, criterion_main, Criterion};

use walink::PhoneResolver;

use phonenumber as rlp;

/// Text as it usually lands in the paste handler.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        "+91 98765 43210",
        "+919876543210",
        "+1 (650) 253-0000",
        "+44 20 8765 4321",
        "  +7 912 345-67-89 ",
        "+33 6 12 34 56 78",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let resolver = PhoneResolver::new();
    let numbers_to_parse = setup_parsing_data();

    for number in &numbers_to_parse {
        let pasted = resolver.parse_pasted_text(number).unwrap();
        let parsed = rlp::parse(None, number).unwrap();
        assert_eq!(
            pasted.detected_calling_code.as_deref(),
            Some(parsed.code().value().to_string().as_str())
        );
    }

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("walink: parse_pasted_text()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = resolver.parse_pasted_text(black_box(number));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = rlp::parse(black_box(None), black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
