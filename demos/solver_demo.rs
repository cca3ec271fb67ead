use wordgrid_solver::palette::{Color, Palette};
use wordgrid_solver::parser::{parse_grid, parse_word_list};
use wordgrid_solver::report::{build_artifact, renderer_for, ArtifactRenderer, OutputFormat};
use wordgrid_solver::search::search_words;

fn main() {
    println!("=== Word Grid Solver Demo ===");

    let grid_json = r#"[
        ["C", "A", "T", "S"],
        ["O", "X", "U", "U"],
        ["D", "O", "G", "N"],
        ["E", "B", "X", "X"]
    ]"#;

    let grid = parse_grid(grid_json).expect("demo grid is well formed");
    let words = parse_word_list("cat, dog, sun, code, moon");

    let result = search_words(&grid, &words);
    for word_match in &result.matches {
        match word_match.path() {
            Some(path) => println!(
                "{}: found at ({}, {})",
                word_match.word,
                path[0].row,
                path[0].col
            ),
            None => println!("{}: not found", word_match.word),
        }
    }

    let palette = Palette::from_colors(
        "demo",
        vec![
            Color::new(0xFF, 0x6B, 0x6B),
            Color::new(0x4E, 0xCD, 0xC4),
            Color::new(0x45, 0xB7, 0xD1),
        ],
    )
    .expect("demo palette is non-empty");

    let artifact = build_artifact(&grid, &result, &palette);
    let renderer = renderer_for(OutputFormat::Text, true);
    println!("\n{}", renderer.render(&artifact));
}
