mod tests {
    use myrtio_fire_composer::palette::{FUNKY, REALISTIC_FIRE};
    use myrtio_fire_composer::simulation::{EMBER_DIVISOR_MAX, ParticleInjector, ember_band_start};
    use myrtio_fire_composer::{Grid, Rgb};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_one_ember_per_cadence_window() {
        for cadence in 1..=6u16 {
            let mut rng = SmallRng::seed_from_u64(u64::from(cadence));
            let mut injector = ParticleInjector::new();
            let mut grid = Grid::<5, 16>::new();

            for _window in 0..10 {
                let embers: Vec<_> = (0..cadence)
                    .filter_map(|_| injector.inject(&mut grid, &REALISTIC_FIRE, cadence, &mut rng))
                    .collect();
                assert_eq!(embers.len(), 1, "cadence {cadence}");

                let (x, y) = embers[0];
                assert!(x < 5);
                assert!((ember_band_start(16)..16).contains(&y));
            }
        }
    }

    #[test]
    fn test_single_cell_mutated() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut injector = ParticleInjector::new();
        let mut grid = Grid::<5, 16>::new();

        let (x, y) = injector
            .inject(&mut grid, &REALISTIC_FIRE, 3, &mut rng)
            .expect("primed injector fires on the first call");

        for (cx, cy, color) in grid.cells() {
            if (cx, cy) != (x, y) {
                assert_eq!(color, Rgb::default());
            }
        }
        assert_ne!(grid.get(x, y), Rgb::default());
    }

    #[test]
    fn test_ember_overwrites_cell() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut injector = ParticleInjector::new();
        let mut grid = Grid::<5, 16>::new();
        for x in 0..5 {
            for y in 13..16 {
                grid.set(x, y, Rgb::new(255, 255, 255));
            }
        }

        let (x, y) = injector.inject(&mut grid, &FUNKY, 1, &mut rng).unwrap();
        let ember = grid.get(x, y);
        // Funky colors use one channel each, so an overwrite leaves two at zero
        let zero_channels = [ember.r, ember.g, ember.b].iter().filter(|c| **c == 0).count();
        assert_eq!(zero_channels, 2);
    }

    #[test]
    fn test_ember_is_dimmed_palette_color() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut injector = ParticleInjector::new();

        for _ in 0..200 {
            let mut grid = Grid::<5, 16>::new();
            let (x, y) = injector.inject(&mut grid, &REALISTIC_FIRE, 1, &mut rng).unwrap();
            let ember = grid.get(x, y);

            let matches = REALISTIC_FIRE.colors().iter().any(|color| {
                (1..=EMBER_DIVISOR_MAX).any(|divisor| {
                    let d = f32::from(divisor);
                    Rgb::new(
                        (f32::from(color.r) / d) as u8,
                        (f32::from(color.g) / d) as u8,
                        (f32::from(color.b) / d) as u8,
                    ) == ember
                })
            });
            assert!(matches, "unexpected ember {ember:?}");
        }
    }
}
