use criterion::{Criterion, criterion_group, criterion_main};
use l4py::fmt::{TimestampFormat, interpolate};
use l4py::{
    AppName, Arg, ExceptionInfo, Formatter, JsonFormatter, Level, LogRecord, PatternFormatter,
    TextFormatter,
};
use std::hint::black_box;

fn record() -> LogRecord {
    LogRecord::new("app.payments", Level::INFO, "charged %s %.2f for %d items")
        .args(vec![Arg::from("alice"), Arg::from(19.99), Arg::from(3)])
        .location("src/payments/service.rs", 42, "charge")
        .module_path("app::payments::service")
}

fn bench_renderers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatter::format");
    let record = record();
    let app = AppName::new("billing");

    let text = TextFormatter::new(app.clone());
    group.bench_function("text", |b| {
        b.iter(|| text.format(black_box(&record)));
    });

    let text_plain = TextFormatter::new(app.clone()).colors(false);
    group.bench_function("text_no_color", |b| {
        b.iter(|| text_plain.format(black_box(&record)));
    });

    let json = JsonFormatter::new(app.clone());
    group.bench_function("json", |b| {
        b.iter(|| json.format(black_box(&record)));
    });

    let pattern = PatternFormatter::new("%(asctime)s %(levelname)-8s %(name)s: %(message)s", app);
    group.bench_function("pattern", |b| {
        b.iter(|| pattern.format(black_box(&record)));
    });

    group.finish();
}

fn bench_exception(c: &mut Criterion) {
    let json = JsonFormatter::new(AppName::new("billing"));
    let record = record().exception(
        ExceptionInfo::new("TimeoutError", "upstream did not answer")
            .frame("src/payments/service.rs", 42, "charge")
            .frame("src/http/client.rs", 118, "send"),
    );

    c.bench_function("Formatter::format/json_exception", |b| {
        b.iter(|| json.format(black_box(&record)));
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    let args = [Arg::from("alice"), Arg::from(19.99), Arg::from(3)];

    group.bench_function("positional", |b| {
        b.iter(|| interpolate::positional(black_box("charged %s %.2f for %d items"), black_box(&args)));
    });

    let none: &[Arg] = &[];
    group.bench_function("no_conversions", |b| {
        b.iter(|| interpolate::positional(black_box("plain message without args"), black_box(none)));
    });

    group.finish();
}

fn bench_timestamp(c: &mut Criterion) {
    let default = TimestampFormat::new();
    let custom = TimestampFormat::new().pattern(Some("%d/%m/%Y %H:%M:%S")).utc(true);
    let now = chrono::Utc::now();

    c.bench_function("TimestampFormat::format/default", |b| {
        b.iter(|| default.format(black_box(now)));
    });
    c.bench_function("TimestampFormat::format/custom_utc", |b| {
        b.iter(|| custom.format(black_box(now)));
    });
}

criterion_group!(
    benches,
    bench_renderers,
    bench_exception,
    bench_interpolate,
    bench_timestamp
);
criterion_main!(benches);
