use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordgrid_solver::parser::{parse_grid, parse_word_list};

/// Generate grid JSON of the given dimensions with deterministic letters
fn generate_grid_json(rows: usize, cols: usize) -> String {
    let cells: Vec<Vec<String>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| letter_at(r, c).to_string())
                .collect()
        })
        .collect();
    serde_json::to_string(&cells).expect("grid serializes")
}

/// Deterministic letter for a cell, spread across the whole alphabet
fn letter_at(row: usize, col: usize) -> char {
    (b'A' + ((row * 31 + col * 17) % 26) as u8) as char
}

/// Generate word-list text with different separator patterns
fn generate_word_list_text(words: usize, pattern: &str) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            match pattern {
                "commas" => text.push(','),
                "newlines" => text.push('\n'),
                _ => text.push_str(if i % 2 == 0 { ", " } else { "\n" }),
            }
        }
        text.push_str(&format!("WORD{}", i));
    }
    text
}

/// Benchmark grid parsing across grid sizes
fn bench_grid_parsing(c: &mut Criterion) {
    let grid_sizes = vec![(10, 10), (50, 50), (100, 100)];

    let mut group = c.benchmark_group("grid_parsing");

    for &(rows, cols) in &grid_sizes {
        let json = generate_grid_json(rows, cols);

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_grid", format!("{}x{}", rows, cols)),
            &json,
            |b, json| b.iter(|| black_box(parse_grid(black_box(json)))),
        );
    }

    group.finish();
}

/// Benchmark word-list parsing with different separator patterns
fn bench_word_list_parsing(c: &mut Criterion) {
    let word_counts = vec![10, 100, 1_000];
    let patterns = vec!["commas", "newlines", "mixed"];

    let mut group = c.benchmark_group("word_list_parsing");

    for &count in &word_counts {
        for pattern in &patterns {
            let text = generate_word_list_text(count, pattern);

            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("parse_word_list_{}", pattern), count),
                &text,
                |b, text| b.iter(|| black_box(parse_word_list(black_box(text)))),
            );
        }
    }

    group.finish();
}

/// Benchmark the error path: a ragged final row forces a scan of the
/// whole document before rejection
fn bench_malformed_grid_detection(c: &mut Criterion) {
    let grid_sizes = vec![10, 100];

    let mut group = c.benchmark_group("malformed_grid_detection");

    for &size in &grid_sizes {
        let mut json = generate_grid_json(size, size);
        // Truncate the final row by one cell
        let cut = json.rfind(",\"").expect("generated grid has cells");
        json.replace_range(cut.., "]]");

        group.bench_with_input(
            BenchmarkId::new("ragged_last_row", format!("{}x{}", size, size)),
            &json,
            |b, json| b.iter(|| black_box(parse_grid(black_box(json)).is_err())),
        );
    }

    group.finish();
}

criterion_group!(
    parsing_benches,
    bench_grid_parsing,
    bench_word_list_parsing,
    bench_malformed_grid_detection
);

criterion_main!(parsing_benches);
