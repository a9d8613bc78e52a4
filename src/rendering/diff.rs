//! Change detection between two renders of the same surface.

use crate::models::BlockAssignment;

/// Cells of `new` that must be (re)placed given the previous render.
///
/// Without a previous render every cell changes. Cells present only in
/// `old` are ignored: surfaces are overwrite-only, shrinking needs an
/// explicit clear.
pub fn diff(new: &BlockAssignment, old: Option<&BlockAssignment>) -> BlockAssignment {
    let Some(old) = old else {
        return new.clone();
    };

    new.iter()
        .filter(|(pos, block)| old.get(pos) != Some(block.as_str()))
        .map(|(pos, block)| (*pos, block.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockPos;

    fn row(blocks: &[&str]) -> BlockAssignment {
        blocks
            .iter()
            .enumerate()
            .map(|(x, b)| (BlockPos::new(x as i32, 64, 0), b.to_string()))
            .collect()
    }

    #[test]
    fn test_no_prior_state_changes_everything() {
        let new = row(&["red_concrete", "blue_concrete"]);
        assert_eq!(diff(&new, None), new);
    }

    #[test]
    fn test_identical_renders_are_empty() {
        let new = row(&["red_concrete", "blue_concrete", "blue_concrete"]);
        assert!(diff(&new, Some(&new.clone())).is_empty());
    }

    #[test]
    fn test_single_changed_cell() {
        let old = row(&["red_concrete", "blue_concrete", "blue_concrete"]);
        let new = row(&["red_concrete", "lime_concrete", "blue_concrete"]);
        let changed = diff(&new, Some(&old));

        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get(&BlockPos::new(1, 64, 0)), Some("lime_concrete"));
    }

    #[test]
    fn test_cells_missing_from_old_are_included() {
        let old = row(&["red_concrete"]);
        let new = row(&["red_concrete", "red_concrete"]);
        let changed = diff(&new, Some(&old));

        assert_eq!(changed.len(), 1);
        assert!(changed.contains(&BlockPos::new(1, 64, 0)));
    }

    #[test]
    fn test_cells_missing_from_new_are_not_cleared() {
        let old = row(&["red_concrete", "red_concrete", "red_concrete"]);
        let new = row(&["red_concrete"]);
        assert!(diff(&new, Some(&old)).is_empty());
    }
}
