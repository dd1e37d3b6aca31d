#![forbid(unsafe_code)]

//! Labeled-series figure model and file-based chart sinks.
//!
//! The numeric crates know nothing about rendering; they hand a [`Figure`]
//! of labeled `(x, y)` series to a [`ChartSink`]. The sinks here persist
//! figures as files (one CSV per series, or a single JSON artifact) so an
//! external plotting tool can pick them up. A sink validates figure shape
//! before touching the filesystem and holds no state on behalf of callers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One labeled `(x, y)` sequence with a display color.
///
/// Colors are free-form strings passed through to whatever renders the
/// artifact; the sink attaches no meaning to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        color: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            x,
            y,
        }
    }
}

/// A complete figure: title, axis labels, grid flag, and its series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub series: Vec<Series>,
}

impl Figure {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid: true,
            series: Vec::new(),
        }
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Check the shape contract every sink relies on.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.series.is_empty() {
            return Err(ChartError::EmptyFigure {
                title: self.title.clone(),
            });
        }
        for series in &self.series {
            if series.x.len() != series.y.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    label: series.label.clone(),
                    x_len: series.x.len(),
                    y_len: series.y.len(),
                });
            }
        }
        Ok(())
    }
}

/// Failures a sink can surface to callers.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("figure `{title}` has no series")]
    EmptyFigure { title: String },
    #[error("series `{label}` has mismatched lengths: x={x_len}, y={y_len}")]
    SeriesLengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },
    #[error("artifact write failed for {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A display collaborator that receives whole figures.
pub trait ChartSink {
    fn render(&mut self, figure: &Figure) -> Result<(), ChartError>;
}

/// Turn a label into a filesystem-safe file stem.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

fn write_file(path: &Path, contents: &str) -> Result<(), ChartError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ChartError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes one `<series-label>.csv` per series under a target directory.
///
/// Counterpart of the per-scheme text files the comparison scripts
/// historically produced.
#[derive(Debug, Clone)]
pub struct CsvSink {
    root: PathBuf,
}

impl CsvSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn series_path(&self, series: &Series) -> PathBuf {
        self.root.join(format!("{}.csv", slug(&series.label)))
    }
}

impl ChartSink for CsvSink {
    fn render(&mut self, figure: &Figure) -> Result<(), ChartError> {
        figure.validate()?;
        for series in &figure.series {
            let mut contents = format!("{},{}\n", figure.x_label, figure.y_label);
            for (x, y) in series.x.iter().zip(series.y.iter()) {
                contents.push_str(&format!("{x},{y}\n"));
            }
            write_file(&self.series_path(series), &contents)?;
        }
        Ok(())
    }
}

/// Writes the whole figure as one JSON artifact.
#[derive(Debug, Clone)]
pub struct JsonSink {
    root: PathBuf,
}

impl JsonSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn figure_path(&self, figure: &Figure) -> PathBuf {
        self.root.join(format!("{}.json", slug(&figure.title)))
    }
}

impl ChartSink for JsonSink {
    fn render(&mut self, figure: &Figure) -> Result<(), ChartError> {
        figure.validate()?;
        let contents = serde_json::to_string_pretty(figure)?;
        write_file(&self.figure_path(figure), &contents)
    }
}
