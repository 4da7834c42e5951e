// Baseline benchmarks for rule evaluation
// Run with: cargo bench -p arbiter

use arbiter::prelude::*;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

struct Signup {
    username: String,
    email: String,
    age: i32,
    password: String,
}

fn signup() -> Signup {
    Signup {
        username: "grace_hopper".into(),
        email: "grace@example.com".into(),
        age: 37,
        password: "C0bol-Forever!".into(),
    }
}

fn validate_signup(signup: &Signup) -> Result<(), ValidationError> {
    validate_struct(Some(signup), "signup is required", &[
        &field!("username" => signup.username.as_str(), required(), length(3, 32)),
        &field!("email" => signup.email.as_str(), email()),
        &field!("age" => &signup.age, between(13, 120)),
        &field!("password" => signup.password.as_str(), password_strength()),
    ])
}

/// Single leaf rules on the happy path
fn bench_leaf_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf");

    let range = between(0, 100);
    group.bench_function("between", |b| b.iter(|| range.validate(black_box(&42))));

    let len = length(3, 32);
    group.bench_function("length", |b| {
        b.iter(|| len.validate(black_box("grace_hopper")));
    });

    let pattern = email();
    group.bench_function("email", |b| {
        b.iter(|| pattern.validate(black_box("grace@example.com")));
    });

    let sql = sql_injection();
    group.bench_function("sql_injection", |b| {
        b.iter(|| sql.validate(black_box("an ordinary comment about ships")));
    });

    group.finish();
}

/// AND/OR over a growing number of children
fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators");

    for size in [1usize, 4, 16] {
        let all = and((0..size).map(|_| min(0i32).boxed()).collect());
        group.bench_with_input(BenchmarkId::new("and_pass", size), &all, |b, rule| {
            b.iter(|| rule.validate(black_box(&7)));
        });

        let any = or((0..size).map(|_| max(0i32).boxed()).collect());
        group.bench_with_input(BenchmarkId::new("or_fail", size), &any, |b, rule| {
            b.iter(|| rule.validate(black_box(&7)));
        });
    }

    group.finish();
}

/// First-failure versus collect-all orchestration
fn bench_orchestration(c: &mut Criterion) {
    let mut group = c.benchmark_group("orchestration");

    group.bench_function("validate_pass", |b| {
        b.iter(|| validate(black_box(&42), &[&min(0), &max(100), &even()]));
    });

    group.bench_function("validate_with_errors_fail", |b| {
        b.iter(|| validate_with_errors(black_box(&-7), &[&min(0), &max(-10), &even()]));
    });

    let record = signup();
    group.bench_function("validate_struct_pass", |b| {
        b.iter(|| validate_signup(black_box(&record)));
    });

    let mut invalid = signup();
    invalid.email = "grace-at-example".into();
    group.bench_function("validate_struct_fail", |b| {
        b.iter(|| validate_signup(black_box(&invalid)));
    });

    group.finish();
}

criterion_group!(benches, bench_leaf_rules, bench_combinators, bench_orchestration);
criterion_main!(benches);
