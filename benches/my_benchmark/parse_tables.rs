use criterion::{black_box, Criterion};
use percolation_plots::common::data_structures::{
    LoadedSeries, AVERAGES_SCHEMA, DISTRIBUTION_SCHEMA,
};
use percolation_plots::figures::build_average_figures;
use percolation_plots::parsing::parse_table_str;

/// Averages table with `rows` probabilities, formatted like the simulation output
fn averages_text(rows: usize) -> String {
    let mut text = String::from("p p_flow s_max\n");
    for row in 0..rows {
        let p = row as f64 / rows as f64;
        text.push_str(&format!("{} {} {}\n", p, p.powi(4), 1.0 + p * 5000.0));
    }
    text
}

/// Distribution table with `rows` cluster sizes in descending order
fn distribution_text(rows: usize) -> String {
    let mut text = String::from("s n\n");
    for size in (1..=rows).rev() {
        text.push_str(&format!("{} {}\n", size, 1_000_000 / size));
    }
    text
}

pub fn bench_parse_averages(c: &mut Criterion) {
    for &rows in &[100, 1000, 10000] {
        let text = averages_text(rows);

        c.bench_function(&format!("parse_averages_{}", rows), |b| {
            b.iter(|| parse_table_str(black_box(&text), &AVERAGES_SCHEMA).unwrap())
        });

        let table = parse_table_str(&text, &AVERAGES_SCHEMA).unwrap();
        let loaded = [LoadedSeries {
            label: "L = 100".to_string(),
            style: "go".parse().unwrap(),
            table,
        }];
        c.bench_function(&format!("build_average_figures_{}", rows), |b| {
            b.iter(|| build_average_figures(black_box(&loaded)).unwrap())
        });
    }
}

pub fn bench_parse_distribution(c: &mut Criterion) {
    for &rows in &[1000, 100000] {
        let text = distribution_text(rows);

        c.bench_function(&format!("parse_distribution_{}", rows), |b| {
            b.iter(|| parse_table_str(black_box(&text), &DISTRIBUTION_SCHEMA).unwrap())
        });
    }
}
