use feed_core::{cell_size, partition, Image, LayoutError};
use pretty_assertions::assert_eq;

fn make_images(count: usize) -> Vec<Image> {
    (0..count)
        .map(|index| Image {
            id: format!("{index}"),
            uri: format!("https://img.example/{index}.jpg"),
        })
        .collect()
}

#[test]
fn partition_fills_rows_and_leaves_remainder_last() {
    let rows = partition(make_images(5), 2).expect("valid cell count");

    let sizes: Vec<_> = rows.iter().map(|row| row.images.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let ids: Vec<_> = rows
        .iter()
        .flat_map(|row| row.images.iter())
        .map(|image| image.id.as_str())
        .collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn partition_exact_multiple_has_no_short_row() {
    let rows = partition(make_images(6), 3).expect("valid cell count");
    assert!(rows.iter().all(|row| row.images.len() == 3));
    assert_eq!(rows.len(), 2);
}

#[test]
fn partition_empty_input_yields_empty_output() {
    let rows = partition(Vec::new(), 4).expect("valid cell count");
    assert!(rows.is_empty());
}

#[test]
fn partition_rejects_zero_cells_per_row() {
    let result = partition(make_images(3), 0);
    assert_eq!(result, Err(LayoutError::InvalidCellCount(0)));
}

#[test]
fn partition_row_count_and_sizes_hold_across_shapes() {
    for count in 0..=13 {
        for cells_per_row in 1..=4 {
            let images = make_images(count);
            let rows = partition(images.clone(), cells_per_row).expect("valid cell count");

            assert_eq!(rows.len(), count.div_ceil(cells_per_row));
            assert!(rows.iter().all(|row| !row.images.is_empty()));
            for row in rows.iter().take(rows.len().saturating_sub(1)) {
                assert_eq!(row.images.len(), cells_per_row);
            }
            if let Some(last) = rows.last() {
                assert!(last.images.len() <= cells_per_row);
            }

            let flattened: Vec<_> = rows
                .into_iter()
                .flat_map(|row| row.images.into_iter())
                .collect();
            assert_eq!(flattened, images);
        }
    }
}

#[test]
fn cell_size_reserves_gutters() {
    let size = cell_size(300.0, 2).expect("valid cell count");
    assert_eq!(size, 148.5);
}

#[test]
fn cell_size_rejects_zero_cells_per_row() {
    assert_eq!(cell_size(300.0, 0), Err(LayoutError::InvalidCellCount(0)));
}
