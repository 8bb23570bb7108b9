use crate::config::OutputMode;
use crate::error::Result;
use crate::evaluate::{RocCurve, RocPoint};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 20;

/// Draws finished curves, either to stdout or to numbered files.
pub struct Renderer {
    mode: OutputMode,
    output_dir: PathBuf,
    counter: usize,
}

impl Renderer {
    pub fn new<P: Into<PathBuf>>(mode: OutputMode, output_dir: P) -> Self {
        Renderer {
            mode,
            output_dir: output_dir.into(),
            counter: 1,
        }
    }

    /// Renders one curve. In save mode returns the path of the points file.
    ///
    /// Saved curves are numbered from 1 in render order: `<n>.csv` holds the
    /// points and `<n>.txt` the plot.
    pub fn render(&mut self, curve: &RocCurve) -> Result<Option<PathBuf>> {
        let plot = ascii_plot(curve, PLOT_WIDTH, PLOT_HEIGHT);
        let saved = match self.mode {
            OutputMode::Display => {
                println!("{plot}");
                None
            }
            OutputMode::Save => {
                fs::create_dir_all(&self.output_dir)?;
                let points = self.output_dir.join(format!("{}.csv", self.counter));
                write_points(&points, &curve.points)?;
                fs::write(self.output_dir.join(format!("{}.txt", self.counter)), plot)?;
                info!(title = %curve.title, path = %points.display(), "saved ROC curve");
                Some(points)
            }
        };
        self.counter += 1;
        Ok(saved)
    }
}

/// Writes `false_positive_rate,true_positive_rate` rows with a header.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[RocPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Plots the curve against the random-classifier diagonal.
///
/// Both axes are clamped to [0, 1]. A `-` in the line style joins the
/// points, `:` joins them with a dotted line, and `o` marks each point.
pub fn ascii_plot(curve: &RocCurve, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);
    let mut grid = vec![vec![' '; width]; height];

    let cell = |x: f64, y: f64| {
        let col = (x.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
        let row = height - 1 - (y.clamp(0.0, 1.0) * (height - 1) as f64).round() as usize;
        (row, col)
    };

    for col in 0..width {
        let x = col as f64 / (width - 1) as f64;
        let (row, col) = cell(x, x);
        grid[row][col] = '·';
    }

    let solid = curve.line_style.contains('-');
    let dotted = curve.line_style.contains(':');
    if (solid || dotted) && !curve.points.is_empty() {
        for col in 0..width {
            if dotted && !solid && col % 2 == 1 {
                continue;
            }
            let x = col as f64 / (width - 1) as f64;
            if let Some(y) = interpolate(&curve.points, x) {
                let (row, col) = cell(x, y);
                grid[row][col] = '•';
            }
        }
    }

    let marker = if curve.line_style.contains('o') { 'o' } else { '●' };
    for point in &curve.points {
        let (row, col) = cell(point.false_positive_rate, point.true_positive_rate);
        grid[row][col] = marker;
    }

    let mut output = String::new();
    output.push_str(&curve.title);
    output.push('\n');
    output.push_str(&"─".repeat(width + 4));
    output.push('\n');
    for (i, row) in grid.iter().enumerate() {
        let y = 1.0 - i as f64 / (height - 1) as f64;
        output.push_str(&format!("{y:.1}│"));
        output.extend(row.iter());
        output.push('\n');
    }
    output.push_str("   └");
    output.push_str(&"─".repeat(width));
    output.push('\n');
    output.push_str("    0");
    output.push_str(&" ".repeat((width / 2).saturating_sub(2)));
    output.push_str("0.5");
    output.push_str(&" ".repeat((width / 2).saturating_sub(2)));
    output.push_str("1.0\n");
    output.push_str("          False-positives rate (y: true-positives rate)\n");
    output.push_str(&format!(
        "  {marker} naive binary Bayes classifier (AUC={:.4})   · random classifier\n",
        curve.auc()
    ));
    output
}

/// Linear interpolation over points sorted by false-positive rate.
fn interpolate(points: &[RocPoint], x: f64) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if x < first.false_positive_rate || x > last.false_positive_rate {
        return None;
    }
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if x >= a.false_positive_rate && x <= b.false_positive_rate {
            let span = b.false_positive_rate - a.false_positive_rate;
            if span == 0.0 {
                return Some(b.true_positive_rate);
            }
            let t = (x - a.false_positive_rate) / span;
            return Some(a.true_positive_rate + t * (b.true_positive_rate - a.true_positive_rate));
        }
    }
    Some(first.true_positive_rate)
}
