use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use department_report::{SchemaMapping, Table, build_hierarchy, build_report};
use std::fmt::Write;

const ROWS: usize = 100_000;

fn synthetic_csv(rows: usize) -> String {
    let departments = ["Engineering", "Sales", "Marketing", "Finance"];
    let teams = ["Alpha", "Beta", "Gamma"];

    let mut csv = String::from("id;department;team;salary\n");
    for i in 0..rows {
        let department = departments[i % departments.len()];
        let team = teams[(i / 7) % teams.len()];
        let salary = 50_000 + (i * 37) % 100_000;
        writeln!(csv, "{i};{department};{team};{salary}").unwrap();
    }
    csv
}

fn load_and_aggregate(c: &mut Criterion) {
    let csv = synthetic_csv(ROWS);

    let mut group = c.benchmark_group("DepartmentReport");
    group.sample_size(10);
    group.throughput(Throughput::Elements(ROWS as u64));

    group.bench_function("load", |b| {
        b.iter(|| Table::from_reader(csv.as_bytes()).unwrap())
    });

    // Preload once outside the iterator
    let table = Table::from_reader(csv.as_bytes()).unwrap();
    let schema = SchemaMapping::default().resolve(&table).unwrap();

    group.bench_function("hierarchy_only", |b| {
        b.iter(|| build_hierarchy(&table, &schema))
    });

    group.bench_function("report_only", |b| {
        b.iter(|| build_report(&table, &schema).unwrap())
    });

    group.bench_function("load + report", |b| {
        b.iter(|| {
            let table = Table::from_reader(csv.as_bytes()).unwrap();
            let schema = SchemaMapping::default().resolve(&table).unwrap();
            build_report(&table, &schema).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, load_and_aggregate);
criterion_main!(benches);
