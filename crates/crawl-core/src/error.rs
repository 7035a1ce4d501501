//! Generation errors

use thiserror::Error;

/// Invalid generation parameters, reported before any sampling happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_rooms must be at least 1")]
    ZeroRooms,

    #[error("room_min_size must be at least {required}, got {min}")]
    RoomTooSmall { min: i32, required: i32 },

    #[error("room_min_size ({min}) is larger than room_max_size ({max})")]
    InvertedRoomSize { min: i32, max: i32 },

    #[error("map dimensions must be positive, got {width}x{height}")]
    NonPositiveMapSize { width: i32, height: i32 },

    #[error("rooms up to size {size} plus a one-tile margin do not fit in a {width}x{height} map")]
    RoomTooLarge { size: i32, width: i32, height: i32 },
}

/// A map whose tile grid disagrees with its declared size
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map declares {width}x{height} but column {column} has {rows} rows")]
    RaggedColumn {
        width: i32,
        height: i32,
        column: usize,
        rows: usize,
    },

    #[error("map declares width {width} but has {columns} columns")]
    ColumnCount { width: i32, columns: usize },
}
