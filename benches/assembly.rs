use criterion::{Criterion, criterion_group, criterion_main};
use l4py::{
    DeclarativeConfig, Initializer, Level, LogConfigBuilder, LoggingBuilder, MapEnv, MemorySink,
};
use std::hint::black_box;

fn env() -> MapEnv {
    (0..20)
        .map(|i| (format!("L4PY_LOG_LEVEL_app.module{i}"), "DEBUG"))
        .chain([("HOSTNAME".to_string(), "bench-1")])
        .collect()
}

fn builder() -> LogConfigBuilder {
    (0..20).fold(LogConfigBuilder::new(), |builder, i| {
        builder.add_logger(format!("app.module{i}"), "WARNING")
    })
}

fn bench_build(c: &mut Criterion) {
    let env = env();
    let builder = builder();

    c.bench_function("LogConfigBuilder::build_with/20_loggers", |b| {
        b.iter(|| builder.build_with(black_box(&env)));
    });
}

fn bench_json(c: &mut Criterion) {
    let config = builder().build_with(&env()).unwrap();
    let json = config.to_json().unwrap();

    c.bench_function("DeclarativeConfig::to_json", |b| {
        b.iter(|| black_box(&config).to_json());
    });
    c.bench_function("DeclarativeConfig::from_json", |b| {
        b.iter(|| DeclarativeConfig::from_json(black_box(&json)));
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let config = builder()
        .file_enabled(false)
        .build_with(&env())
        .unwrap();
    let sink = MemorySink::new();
    let registry = Initializer::new()
        .route("console", sink.clone())
        .apply(&config)
        .unwrap();

    let mut group = c.benchmark_group("Registry");
    group.bench_function("effective_level/deep", |b| {
        b.iter(|| registry.effective_level(black_box("app.module7.pool.conn")));
    });

    let suppressed = registry.logger("other");
    group.bench_function("log/suppressed", |b| {
        b.iter(|| suppressed.debug(black_box("not emitted")));
    });

    let emitted = registry.logger("app.module3");
    group.bench_function("log/emitted", |b| {
        b.iter(|| {
            emitted.log(Level::INFO, black_box("request %d"), vec![42.into()]);
            sink.clear();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_json, bench_dispatch);
criterion_main!(benches);
