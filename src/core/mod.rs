pub mod constants;

pub use constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_MERCATOR_LATITUDE, MIDDLE_OF_USA, MIN_LATITUDE,
    MIN_LONGITUDE, SOUTHERN_ONTARIO,
};
