use criterion::{Criterion, black_box, criterion_group, criterion_main};

use walink::{PhoneResolver, Region};

use phonenumber::{
    self as rlp,
    country::Id::{self, AT, DE, FR, GB, IN, RU, UA, US}, Mode,
};

// (typed number, calling code, region)
type TestEntity = (&'static str, &'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "+1", "US", US),
        ("020 8765 4321", "+44", "GB", GB),
        ("98765 43210", "+91", "IN", IN),
        ("098765-43210", "+91", "IN", IN),
        ("8 (912) 345-67-89", "+7", "RU", RU),
        ("06 12 34 56 78", "+33", "FR", FR),
        ("030 1234567", "+49", "DE", DE),
        ("0151 23456789", "+49", "DE", DE),
        ("0664 1234567", "+43", "AT", AT),
        ("050 123 4567", "+380", "UA", UA),
    ]
}

fn normalize_benchmark(c: &mut Criterion) {
    let resolver = PhoneResolver::new();
    let numbers = setup_numbers();

    for (number, calling_code, _, region_id) in &numbers {
        let parsed = rlp::parse(Some(*region_id), number).unwrap();
        assert_eq!(
            rlp::format(&parsed).mode(Mode::E164).to_string(),
            resolver.normalize(number, calling_code)
        );
    }

    let mut group = c.benchmark_group("E164 Comparison");
    group.bench_function("walink: normalize()", |b| {
        b.iter(|| {
            for (number, calling_code, _, _) in &numbers {
                resolver.normalize(black_box(number), black_box(calling_code));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse() + format(E164)", |b| {
        b.iter(|| {
            for (number, _, _, region_id) in &numbers {
                let parsed = rlp::parse(black_box(Some(*region_id)), black_box(number)).unwrap();
                rlp::format(&parsed).mode(Mode::E164).to_string();
            }
        })
    });
    group.finish();
}

fn as_you_type_benchmark(c: &mut Criterion) {
    let resolver = PhoneResolver::new();
    let numbers = setup_numbers();
    let regions = numbers
        .iter()
        .map(|(number, _, region_id, _)| (*number, resolver.region_for_id(region_id).unwrap()))
        .collect::<Vec<(&str, Region)>>();

    c.bench_function("walink: format_as_you_type() every keystroke", |b| {
        b.iter(|| {
            for (number, region) in &regions {
                for end in 1..=number.len() {
                    resolver.format_as_you_type(black_box(&number[..end]), black_box(region));
                }
            }
        })
    });
}

criterion_group!(benches, normalize_benchmark, as_you_type_benchmark);
criterion_main!(benches);
