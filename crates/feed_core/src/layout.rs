use crate::{Image, Row};

/// Contract violation on the grid geometry: a row must hold at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("cells_per_row must be at least 1 (got {0})")]
    InvalidCellCount(usize),
}

/// Groups a flat image sequence into grid rows of `cells_per_row` cells.
///
/// Single in-order scan; every row except possibly the last is full, no row
/// is empty, and input order is preserved within and across rows.
pub fn partition(images: Vec<Image>, cells_per_row: usize) -> Result<Vec<Row>, LayoutError> {
    if cells_per_row == 0 {
        return Err(LayoutError::InvalidCellCount(cells_per_row));
    }

    let mut rows: Vec<Row> = Vec::with_capacity(images.len().div_ceil(cells_per_row));
    for image in images {
        match rows.last_mut() {
            Some(row) if row.images.len() < cells_per_row => row.images.push(image),
            _ => rows.push(Row {
                images: vec![image],
            }),
        }
    }
    Ok(rows)
}

/// Derives the square cell size from the viewport width, reserving a
/// one-unit gutter on each side of every cell.
pub fn cell_size(viewport_width: f32, cells_per_row: usize) -> Result<f32, LayoutError> {
    if cells_per_row == 0 {
        return Err(LayoutError::InvalidCellCount(cells_per_row));
    }
    let cells = cells_per_row as f32;
    Ok((viewport_width - (cells + 1.0)) / cells)
}
