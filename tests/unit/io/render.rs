//! Tests for console glyphs and entropy tables

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tilecollapse::io::presets::Preset;
    use tilecollapse::io::render::{glyph, render_entropy, render_grid, render_pixels};
    use tilecollapse::spatial::grid::Grid;

    // Tests the glyph of every category value and of unresolved pixels
    // Verified by drawing the secondary value like the primary one
    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(Some(0)), ' ');
        assert_eq!(glyph(Some(1)), '█');
        assert_eq!(glyph(Some(2)), '.');
        assert_eq!(glyph(Some(7)), '.');
        assert_eq!(glyph(None), '?');
    }

    // Tests that each pixel row becomes one terminated line
    // Verified by joining rows without a trailing newline
    #[test]
    fn test_render_pixels_one_line_per_row() {
        let pixels = array![[Some(0), Some(1)], [Some(2), None]];
        assert_eq!(render_pixels(&pixels), " █\n.?\n");
    }

    // Tests the seed tile drawn as a plus sign
    // Verified by composing tiles transposed
    #[test]
    fn test_render_seeded_cell() {
        let tileset = Preset::Paths.tileset().expect("preset is valid");
        let grid = Grid::seeded(1, [0, 0], tileset.seed_index());
        assert_eq!(render_grid(&grid, &tileset), " █ \n███\n █ \n");
    }

    // Tests that counts are right-aligned to the widest value
    // Verified by dropping the padding
    #[test]
    fn test_entropy_columns_align() {
        let entropy = array![[0, 4, 10], [19, 1, 0]];
        assert_eq!(render_entropy(&entropy), " 0  4 10\n19  1  0\n");
    }

    // Tests that small maps use single-digit columns
    // Verified by padding every column to two characters
    #[test]
    fn test_entropy_single_digit() {
        let entropy = array![[0, 4], [4, 10]];
        let rendered = render_entropy(&entropy);
        assert_eq!(rendered.lines().count(), 2);
        assert_eq!(rendered.lines().next(), Some(" 0  4"));
    }

    // Tests that every row, including the last, is newline terminated
    // Verified by separating rows instead of terminating them
    #[test]
    fn test_entropy_rows_are_terminated() {
        assert_eq!(render_entropy(&array![[3]]), "3\n");
        assert_eq!(render_entropy(&array![[7], [12]]), " 7\n12\n");
    }
}
