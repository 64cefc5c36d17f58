//! Test utilities and recording doubles for gridforge development.
//!
//! Provides a [`RecordingSurface`] that logs draw calls instead of
//! rasterizing, a [`FailingSink`] that refuses deliveries after a set
//! count, a [`FixedClock`], and matrix builders in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use chrono::{DateTime, TimeZone, Utc};
use gridforge_core::{Point, Rgb};
use gridforge_export::{Clock, DownloadSink, ExportFile};
use gridforge_render::Surface;
use std::io;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgb,
    },
}

impl DrawCall {
    pub fn color(&self) -> Rgb {
        match self {
            DrawCall::Rect { color, .. } | DrawCall::Polygon { color, .. } => *color,
        }
    }
}

/// A [`Surface`] that records every call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Polygon { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

/// A [`DownloadSink`] that accepts `succeed` files, then fails every
/// delivery with `ErrorKind::Other`.
#[derive(Clone, Debug, Default)]
pub struct FailingSink {
    succeed: usize,
    pub delivered: Vec<ExportFile>,
    pub attempts: usize,
}

impl FailingSink {
    pub fn after(succeed: usize) -> Self {
        Self {
            succeed,
            delivered: Vec::new(),
            attempts: 0,
        }
    }
}

impl DownloadSink for FailingSink {
    fn deliver(&mut self, file: &ExportFile) -> io::Result<()> {
        self.attempts += 1;
        if self.delivered.len() >= self.succeed {
            return Err(io::Error::other(format!(
                "refusing {} after {} deliveries",
                file.filename, self.succeed
            )));
        }
        self.delivered.push(file.clone());
        Ok(())
    }
}

/// A [`Clock`] frozen at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Frozen at `y-m-d h:m:s` UTC. Panics on an invalid date.
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
        match Utc.with_ymd_and_hms(y, m, d, h, min, s).single() {
            Some(t) => Self(t),
            None => panic!("invalid fixed clock instant"),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(2024, 1, 15, 9, 30, 0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
