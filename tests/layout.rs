mod tests {
    use myrtio_fire_composer::layout::{Frame, render, serpentine_index};
    use myrtio_fire_composer::mask::{GLOW_ROWS, GlowMask, NARROW_GLOW, NARROW_VIGNETTE};
    use myrtio_fire_composer::simulation::GlowOverlay;
    use myrtio_fire_composer::{Grid, Rgb};

    static NO_GLOW: GlowMask<5> = [[0.0; 5]; GLOW_ROWS];

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const GLOW: Rgb = Rgb { r: 30, g: 12, b: 1 };

    fn blank_frame() -> Frame<5, 16> {
        [[Rgb::default(); 16]; 5]
    }

    #[test]
    fn test_serpentine_index() {
        // Even columns run bottom to top
        assert_eq!(serpentine_index(0, 0, 16), 15);
        assert_eq!(serpentine_index(0, 15, 16), 0);
        // Odd columns run top to bottom
        assert_eq!(serpentine_index(1, 0, 16), 16);
        assert_eq!(serpentine_index(1, 15, 16), 31);
        assert_eq!(serpentine_index(4, 15, 16), 64);
    }

    #[test]
    fn test_render_places_cells_on_strip() {
        let mut grid = Grid::<5, 16>::new();
        grid.set(1, 2, WHITE);
        grid.set(2, 2, WHITE);
        let mut frame = blank_frame();

        render(&grid, &GlowOverlay::new(), &NO_GLOW, None, &mut frame);

        let strip = frame.as_flattened();
        assert_eq!(strip.len(), 80);
        for (i, pixel) in strip.iter().enumerate() {
            let lit = i == serpentine_index(1, 2, 16) || i == serpentine_index(2, 2, 16);
            assert_eq!(*pixel == WHITE, lit, "led {i}");
        }
    }

    #[test]
    fn test_vignette_scales_channels() {
        let mut grid = Grid::<5, 16>::new();
        for x in 0..5 {
            for y in 0..16 {
                grid.set(x, y, WHITE);
            }
        }
        let mut frame = blank_frame();

        render(&grid, &GlowOverlay::new(), &NO_GLOW, Some(&NARROW_VIGNETTE), &mut frame);

        let strip = frame.as_flattened();
        // Top-left corner weight 0.1
        assert_eq!(strip[serpentine_index(0, 0, 16)], Rgb::new(25, 25, 25));
        // Centre column is never dimmed
        assert_eq!(strip[serpentine_index(2, 0, 16)], WHITE);
        for x in 0..5 {
            for y in 0..16 {
                let pixel = strip[serpentine_index(x, y, 16)];
                assert!(pixel.r <= WHITE.r);
            }
        }
    }

    #[test]
    fn test_glow_overrides_bottom_rows() {
        let mut grid = Grid::<5, 16>::new();
        for x in 0..5 {
            grid.set(x, 15, WHITE);
            grid.set(x, 11, WHITE);
        }
        let mut overlay = GlowOverlay::<5>::new();
        for x in 0..5 {
            for row in 0..GLOW_ROWS {
                overlay.set(x, row, GLOW);
            }
        }
        let mut frame = blank_frame();

        render(&grid, &overlay, &NARROW_GLOW, None, &mut frame);

        let strip = frame.as_flattened();
        for x in 0..5 {
            // Bottom row shows the glow, not the diffused white
            assert_eq!(strip[serpentine_index(x, 15, 16)], GLOW);
            assert_eq!(strip[serpentine_index(x, 12, 16)], GLOW);
            // Row above the glow band keeps the grid color
            assert_eq!(strip[serpentine_index(x, 11, 16)], WHITE);
        }
    }

    #[test]
    fn test_masked_out_glow_shows_grid() {
        let mut grid = Grid::<5, 16>::new();
        grid.set(0, 15, WHITE);
        let mut overlay = GlowOverlay::<5>::new();
        overlay.set(0, 3, GLOW);
        let mut frame = blank_frame();

        render(&grid, &overlay, &NO_GLOW, None, &mut frame);

        assert_eq!(frame.as_flattened()[serpentine_index(0, 15, 16)], WHITE);
    }
}
