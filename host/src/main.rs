use maze_host::{load_config, load_report, save_report, solve_maze, SolveReport};
use std::env;
use std::time::Instant;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("🧭 Maze Solver (depth-first search with backtracking)");
    println!("{}", "=".repeat(70));
    println!();

    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "solve" => {
            if args.len() < 3 {
                eprintln!("Usage: {} solve <maze_file> [output_file]", args[0]);
                std::process::exit(1);
            }

            let output_file = args.get(3).map(|s| s.as_str());
            solve_command(&args[2], output_file);
        }

        "render" => {
            if args.len() < 3 {
                eprintln!("Usage: {} render <maze_file>", args[0]);
                std::process::exit(1);
            }

            render_command(&args[2]);
        }

        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: {} show <report_file>", args[0]);
                std::process::exit(1);
            }

            show_command(&args[2]);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  solve <maze_file> [output_file]");
    eprintln!("      Search for a path from start to exit");
    eprintln!("      - maze_file: JSON maze description");
    eprintln!("      - output_file: Optional file to save the solve report (JSON)");
    eprintln!();
    eprintln!("  render <maze_file>");
    eprintln!("      Print the maze without solving it");
    eprintln!();
    eprintln!("  show <report_file>");
    eprintln!("      Print a previously saved solve report");
    eprintln!();
    eprintln!("Maze file format:");
    eprintln!("  {{ \"rows\": 3, \"cols\": 3, \"walls\": [[1, 1]], \"start\": [0, 0], \"exit\": [2, 2] }}");
    eprintln!("  or");
    eprintln!("  {{ \"layout\": [\"S _ _\", \"_ * _\", \"_ _ E\"] }}");
    eprintln!();
    eprintln!("Set RUST_LOG=debug (or trace) for search details.");
}

fn solve_command(maze_file: &str, output_file: Option<&str>) {
    println!("📋 Solving maze");
    println!("  Maze file: {}", maze_file);
    println!();

    let config = match load_config(maze_file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error loading maze: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();

    match solve_maze(&config) {
        Ok(report) => {
            let duration = start.elapsed();
            println!("  Search time: {:.3}ms", duration.as_secs_f64() * 1000.0);
            println!();
            print_report(&report);

            if let Some(path) = output_file {
                match save_report(&report, path) {
                    Ok(_) => println!("💾 Report saved to: {}", path),
                    Err(e) => {
                        eprintln!("❌ Error saving report: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            println!("{}", "=".repeat(70));
        }
        Err(e) => {
            eprintln!();
            eprintln!("❌ Error solving maze: {}", e);
            eprintln!("{}", "=".repeat(70));
            std::process::exit(1);
        }
    }
}

fn render_command(maze_file: &str) {
    let maze = match load_config(maze_file).and_then(|config| config.build()) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("❌ Error loading maze: {}", e);
            std::process::exit(1);
        }
    };

    println!("📦 Loaded {}x{} maze", maze.num_rows(), maze.num_cols());
    if let (Some(start), Some(exit)) = (maze.start(), maze.exit()) {
        println!("  Start: {}  Exit: {}", start, exit);
    }
    println!();
    println!("{}", maze);
    println!("{}", "=".repeat(70));
}

fn show_command(report_file: &str) {
    let report = match load_report(report_file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Error loading report: {}", e);
            std::process::exit(1);
        }
    };

    println!("📦 Loaded report: {}", report_file);
    println!();
    print_report(&report);
    println!("{}", "=".repeat(70));
}

fn print_report(report: &SolveReport) {
    if report.found {
        println!("✅ Path found!");
        println!("  Length: {} cells", report.path.len());
    } else {
        println!("✗ No path from start to exit");
    }
    println!("  Maze: {}x{}", report.rows, report.cols);
    println!("  Start: {}  Exit: {}", report.start, report.exit);
    println!("  Cells visited: {}", report.visited.len());
    println!();
    println!("{}", report.rendering);
    println!();
}
