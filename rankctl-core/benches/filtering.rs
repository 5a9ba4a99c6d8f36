use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rankctl_core::filter::{Facet, FilterState};
use rankctl_core::record::Project;
use rankctl_core::roster::Roster;
use rankctl_core::stats::ReportStats;
use rankctl_core::status::ProjectStatus;
use rankctl_core::{catalog, Record};

// Synthetic roster large enough to make filtering costs visible.
fn synthetic_projects(count: usize) -> Vec<Project> {
    let statuses = ProjectStatus::ALL;
    (0..count)
        .map(|i| {
            let mut project = Project::new(
                format!("Project {i}"),
                format!("https://site-{i}.example.com"),
                vec![format!("keyword-{}", i % 7)],
                "Synthetic benchmark project",
            );
            project.id = format!("proj-{i}");
            project.status = statuses[i % statuses.len()];
            project
        })
        .collect()
}

fn bench_filter_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_apply");

    for size in [100usize, 1_000, 10_000] {
        let projects = synthetic_projects(size);

        let mut search = FilterState::new();
        search.search = "site-1".into();
        group.bench_with_input(BenchmarkId::new("search", size), &projects, |b, rows| {
            b.iter(|| black_box(search.apply(rows).len()));
        });

        let mut composed = FilterState::new();
        composed.search = "site-1".into();
        composed.status = Facet::value("active");
        group.bench_with_input(BenchmarkId::new("search_and_facet", size), &projects, |b, rows| {
            b.iter(|| black_box(composed.apply(rows).len()));
        });
    }

    group.finish();
}

fn bench_select_all_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_all_visible");

    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |b, &size| {
                let mut roster = Roster::new(synthetic_projects(size));
                roster.set_status(Facet::value("active"));
                b.iter(|| {
                    roster.select_all_visible();
                    black_box(roster.selected_count())
                });
            },
        );
    }

    group.finish();
}

fn bench_facet_derivation(c: &mut Criterion) {
    let roster = Roster::new(synthetic_projects(10_000));

    c.bench_function("status_facets_10k", |b| {
        b.iter(|| black_box(roster.status_facets()));
    });
}

fn bench_report_stats(c: &mut Criterion) {
    // Tile the five fixture reports out to a realistic history size.
    let sample = catalog::sample_reports();
    let reports: Vec<_> = (0..10_000)
        .map(|i| {
            let mut report = sample[i % sample.len()].clone();
            report.id = format!("rep-{i}");
            report
        })
        .collect();

    c.bench_function("report_stats_collect_10k", |b| {
        b.iter(|| black_box(ReportStats::collect(&reports)));
    });

    c.bench_function("report_search_text", |b| {
        b.iter(|| {
            let hits = reports
                .iter()
                .filter(|r| r.search_text().iter().any(|f| f.contains("Blog")))
                .count();
            black_box(hits)
        });
    });
}

criterion_group!(
    benches,
    bench_filter_apply,
    bench_select_all_visible,
    bench_facet_derivation,
    bench_report_stats
);
criterion_main!(benches);
