use criterion::{criterion_group, criterion_main, Criterion};
use mathrun::{segment, NodeBuilder};

fn symbol_heavy(c: &mut Criterion) {
    c.bench_function("symbol heavy", |b| {
        b.iter(|| {
            let builder = NodeBuilder::default();
            builder
                .build(
                    r"\alpha \beta \gamma \delta \epsilon \zeta \eta \theta
\iota \kappa \lambda \mu \nu \xi \omicron \pi
\rho \sigma \tau \upsilon \phi \chi \psi \omega
\Gamma \Delta \Theta \Lambda \Xi \Pi \Sigma \Upsilon \Phi \Psi \Omega
\le \ge \ne \approx \equiv \in \cup \cap \to \infty",
                )
                .unwrap()
        })
    });
}

fn script_torture(c: &mut Criterion) {
    c.bench_function("script torture", |b| {
        b.iter(|| {
            let builder = NodeBuilder::default();
            builder
                .build("a_{5_{5_{5_{5_{5_{5_{5_{5_{5_{5_{5_5}}}}}}}}}}}")
                .unwrap()
        })
    });
}

fn prose_line(c: &mut Criterion) {
    c.bench_function("prose line", |b| {
        b.iter(|| {
            segment(
                r"The **area** of a circle of radius $r$ is $A = \pi r^2$, and *half* of it is $$\frac{\pi r^2}{2}$$.",
            )
        })
    });
}

criterion_group!(benches, symbol_heavy, script_torture, prose_line);
criterion_main!(benches);
