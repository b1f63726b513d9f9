use thiserror::Error;

use crate::grid::GridPos;

/// Errors raised by the tile-map engine
#[derive(Debug, Error)]
pub enum TileMapError {
    /// Edge classification was asked about two cells that do not share an edge
    #[error("cells {from} and {to} are not 4-adjacent")]
    NotAdjacent { from: GridPos, to: GridPos },

    #[error("unknown tile type '{0}'")]
    UnknownTileType(String),

    #[error("unknown paint mode '{0}'")]
    UnknownPaintMode(String),

    #[error("failed to parse editor config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read editor config: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TileMapError>;
