use maze_core::Position;
use maze_host::{load_config, load_report, save_report, solve_maze, MazeConfig};
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("maze-host-{}-{}", std::process::id(), name))
}

fn assert_connected(path: &[Position]) {
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "Path step {} -> {} is not a cardinal move",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_open_3x3_solution() {
    println!("🧪 Testing open 3x3 maze...");

    let config = MazeConfig::from_json(r#"{ "rows": 3, "cols": 3, "start": [0, 0], "exit": [2, 2] }"#)
        .expect("Config should parse");
    let report = solve_maze(&config).expect("Solve should succeed");

    assert!(report.found, "Open maze should be solvable");
    assert_eq!(report.path.len(), 5, "Route should have 5 cells");
    assert_eq!(report.path.first(), Some(&Position::new(0, 0)));
    assert_eq!(report.path.last(), Some(&Position::new(2, 2)));
    assert_connected(&report.path);
    assert_eq!(report.rendering.matches('x').count(), 5);

    println!("✅ Open 3x3 test passed!");
}

#[test]
fn test_walled_column_has_no_path() {
    println!("🧪 Testing walled column (should be unsolvable)...");

    let config = MazeConfig::from_json(
        r#"{ "rows": 3, "cols": 3, "walls": [[0, 1], [1, 1], [2, 1]], "start": [0, 0], "exit": [0, 2] }"#,
    )
    .expect("Config should parse");
    let report = solve_maze(&config).expect("Solve should succeed");

    assert!(!report.found, "Walled-off exit should be unreachable");
    assert!(report.path.is_empty());
    assert!(!report.rendering.contains('x'), "No cell should be marked as path");

    println!("✅ Walled column test passed!");
}

#[test]
fn test_layout_maze() {
    println!("🧪 Testing layout-described maze...");

    let config = MazeConfig::from_json(
        r#"{ "layout": [
            "S _ _ _",
            "_ * * _",
            "_ * E *",
            "_ _ _ _"
        ] }"#,
    )
    .expect("Config should parse");
    let report = solve_maze(&config).expect("Solve should succeed");

    assert!(report.found);
    assert_eq!(report.start, Position::new(0, 0));
    assert_eq!(report.exit, Position::new(2, 2));
    assert_connected(&report.path);
    assert_eq!(report.rendering, "x o o o\nx * * o\nx * x *\nx x x _");

    println!("✅ Layout maze test passed!");
}

#[test]
fn test_missing_exit_is_rejected() {
    println!("🧪 Testing maze without exit...");

    let config = MazeConfig::from_json(r#"{ "rows": 2, "cols": 2, "start": [0, 0] }"#)
        .expect("Config should parse");
    let err = solve_maze(&config).expect_err("Solving without exit should fail");
    assert!(err.to_string().contains("exit"), "Unexpected error: {}", err);

    println!("✅ Missing exit test passed!");
}

#[test]
fn test_start_on_wall() {
    let config = MazeConfig::from_json(
        r#"{ "rows": 2, "cols": 2, "walls": [[0, 0]], "start": [0, 0], "exit": [1, 1] }"#,
    )
    .expect("Config should parse");
    let report = solve_maze(&config).expect("Solve should succeed");

    assert!(!report.found);
    assert!(report.visited.is_empty());
}

#[test]
fn test_config_and_report_files() {
    println!("🧪 Testing file round trip...");

    let maze_path = temp_file("maze.json");
    let report_path = temp_file("report.json");
    fs::write(
        &maze_path,
        r#"{ "rows": 1, "cols": 3, "start": [0, 0], "exit": [0, 2] }"#,
    )
    .expect("Should write maze file");

    let config = load_config(maze_path.to_str().unwrap()).expect("Should load maze file");
    let report = solve_maze(&config).expect("Solve should succeed");
    assert_eq!(report.rendering, "x x x");

    save_report(&report, report_path.to_str().unwrap()).expect("Should save report");
    let loaded = load_report(report_path.to_str().unwrap()).expect("Should load report");
    assert_eq!(loaded, report);

    let _ = fs::remove_file(maze_path);
    let _ = fs::remove_file(report_path);

    println!("✅ File round trip test passed!");
}

#[test]
fn test_missing_file() {
    assert!(load_config("/nonexistent/maze.json").is_err());
}
