use feed_core::FeedViewModel;

/// Formats one view-model snapshot as terminal lines: the searching
/// placeholder or the grid, then the update status bar when present.
pub(crate) fn render(view: &FeedViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.searching {
        lines.push("Searching for images...".to_string());
    } else {
        lines.push(format!(
            "{} rows, cell size {:.1}",
            view.rows.len(),
            view.cell_size
        ));
        for row in &view.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| format!("[{} {:>3.0}%]", cell.id, cell.opacity * 100.0))
                .collect();
            lines.push(cells.join(" "));
        }
    }

    if let Some(status) = &view.update_status {
        lines.push(status.clone());
    }

    lines
}

#[cfg(test)]
mod tests {
    use feed_core::{ImageCellView, RowView};

    use super::*;

    #[test]
    fn searching_view_renders_the_placeholder() {
        let view = FeedViewModel {
            searching: true,
            ..FeedViewModel::default()
        };
        assert_eq!(render(&view), vec!["Searching for images...".to_string()]);
    }

    #[test]
    fn grid_view_renders_rows_and_the_status_bar() {
        let view = FeedViewModel {
            searching: false,
            cell_size: 148.5,
            rows: vec![RowView {
                cells: vec![
                    ImageCellView {
                        id: "1".to_string(),
                        uri: "u1".to_string(),
                        opacity: 1.0,
                        is_loaded: true,
                    },
                    ImageCellView {
                        id: "2".to_string(),
                        uri: "u2".to_string(),
                        opacity: 0.0,
                        is_loaded: false,
                    },
                ],
            }],
            update_status: Some("Up-to-date.".to_string()),
            dirty: false,
        };

        let lines = render(&view);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 rows, cell size 148.5");
        assert_eq!(lines[1], "[1 100%] [2   0%]");
        assert_eq!(lines[2], "Up-to-date.");
    }
}
