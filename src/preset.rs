use crate::center::MapCenter;
use crate::coord::{Coordinate, validate_lon_lat};
use crate::core::constants::{MIDDLE_OF_USA, SOUTHERN_ONTARIO};
use crate::error::MapCenterError;
use geo::{Distance, Haversine};
use geo_types::Point;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// The built-in map centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Generic central-continent view
    MiddleOfUsa,
    /// Toronto area, for regional radar coverage
    SouthernOntario,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::MiddleOfUsa, Preset::SouthernOntario];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::MiddleOfUsa => "middle-of-usa",
            Preset::SouthernOntario => "southern-ontario",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::MiddleOfUsa => "Center of the contiguous United States",
            Preset::SouthernOntario => "Toronto area, centered for radar coverage",
        }
    }

    pub fn point(&self) -> Point<f64> {
        match self {
            Preset::MiddleOfUsa => MIDDLE_OF_USA,
            Preset::SouthernOntario => SOUTHERN_ONTARIO,
        }
    }

    pub fn center(&self) -> MapCenter {
        MapCenter::from(*self)
    }

    /// Returns the preset closest to `coord` by great-circle distance.
    ///
    /// Ties go to the preset listed first in [`Preset::ALL`].
    ///
    /// # Example
    /// ```
    /// use map_centers::Preset;
    ///
    /// # fn main() -> Result<(), map_centers::MapCenterError> {
    /// // Ottawa
    /// assert_eq!(Preset::nearest(&(-75.6972, 45.4215))?, Preset::SouthernOntario);
    /// # Ok(())
    /// # }
    /// ```
    pub fn nearest<C: Coordinate>(coord: &C) -> Result<Preset, MapCenterError> {
        validate_lon_lat(coord)?;
        let target = Point::new(coord.x(), coord.y());

        let candidates = Preset::ALL.map(|p| (p, p.point()));
        let (best, best_distance) = closest(target, &candidates);

        debug!(
            "nearest preset to ({}, {}) is {} at {:.0} m",
            target.x(),
            target.y(),
            best.name(),
            best_distance
        );
        Ok(best)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = MapCenterError;

    /// Accepts kebab-case, snake_case or camelCase names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "middleofusa" => Ok(Preset::MiddleOfUsa),
            "southernontario" => Ok(Preset::SouthernOntario),
            _ => Err(MapCenterError::UnknownPreset(s.to_string())),
        }
    }
}

// First candidate wins on equal distance. `candidates` must not be empty.
fn closest<T: Copy>(target: Point<f64>, candidates: &[(T, Point<f64>)]) -> (T, f64) {
    let (first, first_point) = candidates[0];
    let mut best = (first, Haversine.distance(target, first_point));
    for &(item, point) in &candidates[1..] {
        let d = Haversine.distance(target, point);
        if d < best.1 {
            best = (item, d);
        }
    }
    best
}

/// Every built-in preset as a [`MapCenter`], in [`Preset::ALL`] order.
pub fn all_centers() -> Vec<MapCenter> {
    Preset::ALL.iter().map(Preset::center).collect()
}
