//! Run-length batching of changed cells into fill commands.

use super::SurfaceProjector;
use crate::models::{BlockAssignment, FillCommand};

/// Fill commands covering every changed cell.
///
/// Rows are visited top to bottom and columns left to right in image space.
/// Each maximal run of adjacent changed cells sharing one block becomes a
/// single fill; unchanged cells break runs and are never filled. No
/// vertical merging is attempted.
pub fn batch(changed: &BlockAssignment, projector: &SurfaceProjector) -> Vec<FillCommand> {
    let mut commands = Vec::new();
    if changed.is_empty() {
        return commands;
    }

    for row in 0..projector.height() {
        let mut col = 0;
        while col < projector.width() {
            let start = projector.project(col, row);
            let Some(block) = changed.get(&start) else {
                col += 1;
                continue;
            };

            let mut end_col = col;
            while end_col + 1 < projector.width()
                && changed.get(&projector.project(end_col + 1, row)) == Some(block)
            {
                end_col += 1;
            }

            commands.push(FillCommand::new(
                start,
                projector.project(end_col, row),
                block,
            ));
            col = end_col + 1;
        }
    }

    commands
}
