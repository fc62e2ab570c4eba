mod tests {
    use myrtio_fire_composer::{
        Duration, FireConfig, FireRenderer, FixedIntensity, FrameScheduler, Instant,
        IntentChannel, NoSensor, OutputDriver, Rgb,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Default)]
    struct RecordingDriver {
        brightness: Vec<u8>,
        frames: usize,
        last_len: usize,
    }

    impl OutputDriver for RecordingDriver {
        fn set_brightness(&mut self, brightness: u8) {
            self.brightness.push(brightness);
        }

        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last_len = colors.len();
        }
    }

    fn renderer(channel: &IntentChannel<2>) -> FireRenderer<'_, SmallRng, 5, 16, 2> {
        FireRenderer::new(
            channel.receiver(),
            &FireConfig::NARROW,
            SmallRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_tick_pacing() {
        let channel = IntentChannel::<2>::new();
        let mut scheduler =
            FrameScheduler::new(renderer(&channel), NoSensor, RecordingDriver::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(20));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        // Late but within the drift budget: no sleep, keep the schedule
        let result = scheduler.tick(Instant::from_millis(70));
        assert_eq!(result.next_deadline, Instant::from_millis(60));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_drift_reset() {
        let channel = IntentChannel::<2>::new();
        let mut scheduler =
            FrameScheduler::new(renderer(&channel), NoSensor, RecordingDriver::default());

        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(200));
        assert_eq!(result.next_deadline, Instant::from_millis(220));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_custom_frame_duration() {
        let channel = IntentChannel::<2>::new();
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer(&channel),
            NoSensor,
            RecordingDriver::default(),
            Duration::from_millis(33),
        );
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_frames_reach_driver() {
        let channel = IntentChannel::<2>::new();
        let mut scheduler = FrameScheduler::new(
            renderer(&channel),
            FixedIntensity(1000),
            RecordingDriver::default(),
        );

        for frame in 0..10 {
            scheduler.tick(Instant::from_millis(frame * 20));
        }

        let driver = scheduler.output();
        assert_eq!(driver.frames, 10);
        assert_eq!(driver.last_len, 80);
        assert_eq!(driver.brightness.len(), 10);
        assert!(driver.brightness.iter().all(|b| (40..=250).contains(b)));
        assert_eq!(
            driver.brightness.last().copied(),
            Some(scheduler.renderer().brightness())
        );
        assert_eq!(scheduler.renderer().params().ejection_cadence, 2);
    }

    #[test]
    fn test_intents_through_scheduler() {
        let channel = IntentChannel::<2>::new();
        let sender = channel.sender();
        let mut scheduler =
            FrameScheduler::new(renderer(&channel), NoSensor, RecordingDriver::default());

        sender
            .try_send(myrtio_fire_composer::FireIntent::NextPalette)
            .unwrap();
        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.renderer().palette_index(), 1);

        scheduler.renderer_mut().select_palette(4);
        assert_eq!(scheduler.renderer().palette_index(), 4);
    }
}
