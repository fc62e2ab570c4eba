mod tests {
    use myrtio_fire_composer::{Band, FireConfig, IntensityController, RuntimeParameters};

    fn narrow() -> IntensityController {
        IntensityController::new(FireConfig::NARROW.intensity)
    }

    fn wide() -> IntensityController {
        IntensityController::new(FireConfig::WIDE.intensity)
    }

    #[test]
    fn test_max_reading_pins_hot_extreme() {
        let config = FireConfig::NARROW.intensity;
        let params = narrow().parameters(config.max_reading);
        assert_eq!(
            params,
            RuntimeParameters {
                ejection_cadence: config.ejection_cadence.hot,
                divider: config.divider.hot,
                brightness_ceiling: config.brightness_ceiling.hot,
                glow_cadence: config.glow_cadence.hot,
            }
        );
    }

    #[test]
    fn test_min_reading_pins_cold_extreme() {
        let config = FireConfig::WIDE.intensity;
        let params = wide().parameters(0);
        assert_eq!(params.ejection_cadence, config.ejection_cadence.cold);
        assert_eq!(params.divider, config.divider.cold);
        assert_eq!(params.brightness_ceiling, config.brightness_ceiling.cold);
        assert_eq!(params.glow_cadence, config.glow_cadence.cold);
    }

    #[test]
    fn test_readings_above_range_stay_hot() {
        let controller = narrow();
        assert_eq!(controller.parameters(4095), controller.parameters(1000));
    }

    #[test]
    fn test_hotter_means_faster_and_brighter() {
        let controller = narrow();
        let calm = controller.parameters(100);
        let raging = controller.parameters(900);
        assert!(raging.ejection_cadence <= calm.ejection_cadence);
        assert!(raging.divider < calm.divider);
        assert!(raging.brightness_ceiling > calm.brightness_ceiling);
        assert!(raging.glow_cadence <= calm.glow_cadence);
    }

    #[test]
    fn test_midpoint_interpolation() {
        let params = narrow().parameters(500);
        // 5 + (2 - 5) * 0.5 = 3.5, rounded
        assert_eq!(params.ejection_cadence, 4);
        // 40 + (250 - 40) * 0.5
        assert_eq!(params.brightness_ceiling, 145);
        assert!((params.divider - 2.15).abs() < 1e-4);
    }

    #[test]
    fn test_band_clamp() {
        let band = Band::new(5u16, 2u16);
        assert_eq!(band.low(), 2);
        assert_eq!(band.high(), 5);
        assert_eq!(band.clamp(9), 5);
        assert_eq!(band.clamp(0), 2);
        assert_eq!(band.at(-1.0), 5);
        assert_eq!(band.at(3.0), 2);
    }

    #[test]
    fn test_absent_sensor_uses_default() {
        let mut controller = wide();
        let config = FireConfig::WIDE.intensity;
        let adjustment = controller.adjust(None);
        assert_eq!(
            adjustment.params,
            controller.parameters(config.default_reading)
        );
        assert!(!adjustment.flare);
    }

    #[test]
    fn test_large_jump_flares() {
        let mut controller = wide();
        assert!(!controller.adjust(Some(100)).flare);
        assert!(controller.adjust(Some(300)).flare);
        assert!(!controller.adjust(Some(350)).flare);
        assert!(controller.adjust(Some(100)).flare);
        // A missing reading does not reset the previous one
        assert!(!controller.adjust(None).flare);
        assert!(!controller.adjust(Some(120)).flare);
    }

    #[test]
    fn test_no_flare_without_threshold() {
        let mut controller = narrow();
        assert!(!controller.adjust(Some(0)).flare);
        assert!(!controller.adjust(Some(1000)).flare);
    }
}
