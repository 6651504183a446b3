//! Map viewport: which slice of the world the map canvas shows.
//!
//! The canvas works in plain degrees. Zoom follows slippy-map levels (256px
//! tiles, `2^zoom` tiles around the equator) with one terminal cell taken as
//! 4px wide and 8px tall; latitude span is scaled by `cos(lat)` so shapes keep
//! roughly the right aspect near the centre.

use ratatui::layout::Rect;
use waymark_types::Coord;

pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 19;

const CELL_WIDTH_PX: f64 = 4.0;
const CELL_HEIGHT_PX: f64 = 8.0;
const TILE_PX: f64 = 256.0;
const MAX_LAT: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lng_min: f64,
    pub lng_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Coord,
    zoom: u8,
}

impl Viewport {
    pub fn new(center: Coord, zoom: u8) -> Self {
        Self {
            center: clamp_center(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn center_on(&mut self, coord: Coord) {
        self.center = clamp_center(coord);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Degrees of longitude covered by one terminal cell
    fn lng_per_cell(&self) -> f64 {
        CELL_WIDTH_PX * 360.0 / (TILE_PX * f64::from(1u32 << self.zoom))
    }

    /// Degrees of latitude covered by one terminal cell
    fn lat_per_cell(&self) -> f64 {
        let per_px = 360.0 / (TILE_PX * f64::from(1u32 << self.zoom));
        CELL_HEIGHT_PX * per_px * self.center.lat.to_radians().cos()
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        let half_lng = f64::from(area.width) * self.lng_per_cell() / 2.0;
        let half_lat = f64::from(area.height) * self.lat_per_cell() / 2.0;
        Bounds {
            lng_min: self.center.lng - half_lng,
            lng_max: self.center.lng + half_lng,
            lat_min: self.center.lat - half_lat,
            lat_max: self.center.lat + half_lat,
        }
    }

    /// Coordinate under a terminal cell, or `None` outside `area`
    pub fn cell_to_coord(&self, area: Rect, column: u16, row: u16) -> Option<Coord> {
        if !contains(area, column, row) {
            return None;
        }
        let bounds = self.bounds(area);
        let rel_x = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let rel_y = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        Coord::new(
            bounds.lat_max - rel_y * (bounds.lat_max - bounds.lat_min),
            bounds.lng_min + rel_x * (bounds.lng_max - bounds.lng_min),
        )
        .ok()
    }

    /// Terminal cell a coordinate falls in, or `None` when off screen
    pub fn coord_to_cell(&self, area: Rect, coord: Coord) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let bounds = self.bounds(area);
        let rel_x = (coord.lng - bounds.lng_min) / (bounds.lng_max - bounds.lng_min);
        let rel_y = (bounds.lat_max - coord.lat) / (bounds.lat_max - bounds.lat_min);
        if !(0.0..1.0).contains(&rel_x) || !(0.0..1.0).contains(&rel_y) {
            return None;
        }
        let column = area.x + (rel_x * f64::from(area.width)) as u16;
        let row = area.y + (rel_y * f64::from(area.height)) as u16;
        Some((column, row))
    }

    /// Shift the view by whole cells; positive `dx` moves east, positive `dy` south
    pub fn pan_cells(&mut self, dx: i32, dy: i32) {
        let next = self.center.offset(
            -f64::from(dy) * self.lat_per_cell(),
            f64::from(dx) * self.lng_per_cell(),
        );
        self.center = clamp_center(next);
    }

    /// Offset that moves a point by `dx`/`dy` cells at the current zoom.
    /// Only the view centre is clamped; the edited point is left as is.
    pub fn nudge(&self, coord: Coord, dx: i32, dy: i32) -> Coord {
        coord.offset(
            -f64::from(dy) * self.lat_per_cell(),
            f64::from(dx) * self.lng_per_cell(),
        )
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn clamp_center(coord: Coord) -> Coord {
    let mut lng = coord.lng;
    if !(-180.0..=180.0).contains(&lng) {
        lng = (lng + 180.0).rem_euclid(360.0) - 180.0;
    }
    Coord {
        lat: coord.lat.clamp(-MAX_LAT, MAX_LAT),
        lng,
    }
}
