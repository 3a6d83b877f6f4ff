use criterion::{black_box, criterion_group, criterion_main, Criterion};
use notify_chain::{assemble, Handler, Severity, SeverityFilter};

fn long_chain(len: usize) -> std::rc::Rc<Handler> {
    let handlers = (0..len).map(|index| {
        let filter = if index % 3 == 0 {
            SeverityFilter::new([Severity::Warning, Severity::Error])
        } else {
            SeverityFilter::none()
        };
        Handler::new(format!("h{index}"), filter, |message: &str| {
            black_box(message);
        })
    });
    assemble(handlers).expect("non-empty chain")
}

fn bench_traversal(c: &mut Criterion) {
    let chain = long_chain(64);

    c.bench_function("notify_64_links_matching", |b| {
        b.iter(|| chain.notify(black_box("disk almost full"), Severity::Warning))
    });

    c.bench_function("notify_64_links_filtered", |b| {
        b.iter(|| chain.notify(black_box("heartbeat"), Severity::Debug))
    });
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
