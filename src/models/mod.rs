//! Domain and wire types

pub mod flight;

pub use flight::{
    Coordinates, FlightStatus, FlightStatusLabel, WatchEntry, DEFAULT_ARR_COORDS,
    DEFAULT_DEP_COORDS,
};
