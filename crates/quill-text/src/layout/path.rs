use quill_geometry::Matrix;

/// One command of a glyph outline path in user space (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    CurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

/// Applies `matrix` to every point of `path`, returning a new path. The
/// input is untouched, so a caller can keep both the original and the
/// transformed version.
pub fn transform_path(path: &[PathCommand], matrix: &Matrix) -> Vec<PathCommand> {
    path.iter()
        .map(|command| match *command {
            PathCommand::MoveTo { x, y } => {
                let (x, y) = matrix.transform_point(x, y);
                PathCommand::MoveTo { x, y }
            }
            PathCommand::LineTo { x, y } => {
                let (x, y) = matrix.transform_point(x, y);
                PathCommand::LineTo { x, y }
            }
            PathCommand::QuadTo { x1, y1, x, y } => {
                let (x1, y1) = matrix.transform_point(x1, y1);
                let (x, y) = matrix.transform_point(x, y);
                PathCommand::QuadTo { x1, y1, x, y }
            }
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let (x1, y1) = matrix.transform_point(x1, y1);
                let (x2, y2) = matrix.transform_point(x2, y2);
                let (x, y) = matrix.transform_point(x, y);
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                }
            }
            PathCommand::Close => PathCommand::Close,
        })
        .collect()
}
