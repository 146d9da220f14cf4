use maze_core::{Maze, MazeError, Position};
use serde::{Deserialize, Serialize};
use std::fs;

/// Largest maze description file accepted (10MB)
pub const MAX_CONFIG_BYTES: usize = 10_000_000;

/// Largest grid accepted, in cells
pub const MAX_CELLS: usize = 1_000_000;

/// Description of a maze as read from a JSON file.
///
/// Either give the dimensions and positions explicitly:
///
/// ```json
/// { "rows": 3, "cols": 3, "walls": [[1, 1]], "start": [0, 0], "exit": [2, 2] }
/// ```
///
/// or draw it with a `layout`, one string per row, using `*` for walls,
/// `_` for open cells, `S` for the start and `E` for the exit. Rendered
/// `x`/`o` markers are read back as open cells. When `layout` is present the
/// other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub cols: usize,
    #[serde(default)]
    pub walls: Vec<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<String>>,
}

impl MazeConfig {
    /// Parse a maze description from JSON text
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: MazeConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Build a ready-to-solve maze.
    ///
    /// Both start and exit are required; a maze without them is rejected
    /// here instead of at search time.
    pub fn build(&self) -> Result<Maze, Box<dyn std::error::Error>> {
        let resolved = match &self.layout {
            Some(lines) => parse_layout(lines)?,
            None => self.clone(),
        };

        let cells = resolved.rows.checked_mul(resolved.cols).unwrap_or(usize::MAX);
        if cells > MAX_CELLS {
            return Err(format!(
                "Maze too large: {}x{} (max {} cells)",
                resolved.rows, resolved.cols, MAX_CELLS
            )
            .into());
        }

        let [start_row, start_col] = resolved
            .start
            .ok_or(MazeError::PreconditionFailed("maze description has no start cell"))?;
        let [exit_row, exit_col] = resolved
            .exit
            .ok_or(MazeError::PreconditionFailed("maze description has no exit cell"))?;

        let mut maze = Maze::new(resolved.rows, resolved.cols);
        for &[row, col] in &resolved.walls {
            maze.set_wall(row, col)?;
        }
        maze.set_start(start_row, start_col)?;
        maze.set_exit(exit_row, exit_col)?;

        tracing::debug!(
            "Built {}x{} maze with {} walls",
            resolved.rows,
            resolved.cols,
            resolved.walls.len()
        );
        Ok(maze)
    }
}

/// Turn `layout` rows into explicit dimensions and positions
fn parse_layout(lines: &[String]) -> Result<MazeConfig, Box<dyn std::error::Error>> {
    let mut config = MazeConfig {
        rows: lines.len(),
        ..MazeConfig::default()
    };

    for (row, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if row == 0 {
            config.cols = tokens.len();
        } else if tokens.len() != config.cols {
            return Err(format!(
                "Layout row {} has {} cells, expected {}",
                row,
                tokens.len(),
                config.cols
            )
            .into());
        }

        for (col, token) in tokens.into_iter().enumerate() {
            match token {
                "*" => config.walls.push([row, col]),
                "_" | "x" | "o" => {}
                "S" => {
                    if config.start.replace([row, col]).is_some() {
                        return Err(format!("Layout has more than one start (second at row {}, col {})", row, col).into());
                    }
                }
                "E" => {
                    if config.exit.replace([row, col]).is_some() {
                        return Err(format!("Layout has more than one exit (second at row {}, col {})", row, col).into());
                    }
                }
                other => {
                    return Err(format!("Unknown layout token '{}' at row {}, col {}", other, row, col).into());
                }
            }
        }
    }

    Ok(config)
}

/// Result of solving one maze description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub exit: Position,

    /// Whether a path from start to exit was found
    pub found: bool,

    /// Route from start to exit, empty when not found
    pub path: Vec<Position>,

    /// Cells visited by the search, in order
    pub visited: Vec<Position>,

    /// Text rendering of the maze after the search
    /// (`*` wall, `x` path, `o` tried, `_` untouched)
    pub rendering: String,
}

/// Build the maze described by `config` and search it.
///
/// An unsolvable maze is a successful call with `found == false`.
///
/// # Example
/// ```
/// use maze_host::{solve_maze, MazeConfig};
///
/// let config = MazeConfig::from_json(
///     r#"{ "rows": 2, "cols": 2, "walls": [[0, 1]], "start": [0, 0], "exit": [1, 1] }"#,
/// ).unwrap();
/// let report = solve_maze(&config).unwrap();
/// assert!(report.found);
/// assert_eq!(report.rendering, "x *\nx x");
/// ```
pub fn solve_maze(config: &MazeConfig) -> Result<SolveReport, Box<dyn std::error::Error>> {
    let mut maze = config.build()?;
    let start = maze.start().ok_or(MazeError::PreconditionFailed("start cell has not been set"))?;
    let exit = maze.exit().ok_or(MazeError::PreconditionFailed("exit cell has not been set"))?;

    tracing::info!(
        "Solving {}x{} maze from {} to {}",
        maze.num_rows(),
        maze.num_cols(),
        start,
        exit
    );

    let solution = maze.solve()?;

    if solution.found {
        tracing::info!(
            "Path found: {} cells long, {} cells visited",
            solution.path.len(),
            solution.visited.len()
        );
    } else {
        tracing::info!("No path exists ({} cells visited)", solution.visited.len());
    }

    Ok(SolveReport {
        rows: maze.num_rows(),
        cols: maze.num_cols(),
        start,
        exit,
        found: solution.found,
        path: solution.path,
        visited: solution.visited,
        rendering: maze.render(),
    })
}

/// Read and validate a maze description file
pub fn load_config(path: &str) -> Result<MazeConfig, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;

    // Validate file size (prevent loading gigabytes into memory)
    if json.len() > MAX_CONFIG_BYTES {
        return Err("Maze file is too large (max 10MB)".into());
    }

    MazeConfig::from_json(&json)
}

pub fn save_report(report: &SolveReport, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_report(path: &str) -> Result<SolveReport, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let report: SolveReport = serde_json::from_str(&json)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: &[&str]) -> MazeConfig {
        MazeConfig {
            layout: Some(rows.iter().map(|r| r.to_string()).collect()),
            ..MazeConfig::default()
        }
    }

    #[test]
    fn test_parse_layout() {
        let config = layout(&["S * _", "_ _ E"]);
        let parsed = parse_layout(config.layout.as_ref().unwrap()).unwrap();
        assert_eq!(parsed.rows, 2);
        assert_eq!(parsed.cols, 3);
        assert_eq!(parsed.walls, vec![[0, 1]]);
        assert_eq!(parsed.start, Some([0, 0]));
        assert_eq!(parsed.exit, Some([1, 2]));
    }

    #[test]
    fn test_layout_reads_rendered_markers_as_open() {
        let maze = layout(&["S x o", "* _ E"]).build().unwrap();
        assert_eq!(maze.render(), "_ _ _\n* _ _");
    }

    #[test]
    fn test_layout_errors() {
        assert!(layout(&["S _", "_ _ E"]).build().is_err(), "ragged rows");
        assert!(layout(&["S S", "_ E"]).build().is_err(), "two starts");
        assert!(layout(&["S ?", "_ E"]).build().is_err(), "unknown token");
        assert!(layout(&["S _", "_ _"]).build().is_err(), "missing exit");
    }

    #[test]
    fn test_explicit_config_out_of_range_wall() {
        let config = MazeConfig {
            rows: 2,
            cols: 2,
            walls: vec![[2, 0]],
            start: Some([0, 0]),
            exit: Some([1, 1]),
            layout: None,
        };
        let err = config.build().unwrap_err();
        assert!(err.to_string().contains("out of range"), "unexpected error: {}", err);
    }

    #[test]
    fn test_too_many_cells() {
        let config = MazeConfig {
            rows: MAX_CELLS,
            cols: 2,
            start: Some([0, 0]),
            exit: Some([0, 1]),
            ..MazeConfig::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_from_json_defaults() {
        let config = MazeConfig::from_json(r#"{ "rows": 1, "cols": 2, "start": [0, 0], "exit": [0, 1] }"#).unwrap();
        assert!(config.walls.is_empty());
        assert!(config.layout.is_none());
    }
}
