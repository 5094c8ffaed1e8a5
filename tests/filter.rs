mod tests {
    use sparkle_composer::color::white;
    use sparkle_composer::filter::{ColorCorrection, FilterProcessor, FilterProcessorConfig};
    use sparkle_composer::{ColorOrder, EngineConfig, ModeEngine, ModeId, RandomSource, Rgb};

    struct Quiet;

    impl RandomSource for Quiet {
        fn next_u8(&mut self) -> u8 {
            u8::MAX
        }

        fn next_u16(&mut self) -> u16 {
            0
        }
    }

    const COLOR: Rgb = Rgb { r: 1, g: 2, b: 3 };

    #[test]
    fn test_color_order() {
        assert_eq!(ColorOrder::Rgb.reorder(COLOR), Rgb::new(1, 2, 3));
        assert_eq!(ColorOrder::Rbg.reorder(COLOR), Rgb::new(1, 3, 2));
        assert_eq!(ColorOrder::Grb.reorder(COLOR), Rgb::new(2, 1, 3));
        assert_eq!(ColorOrder::Gbr.reorder(COLOR), Rgb::new(2, 3, 1));
        assert_eq!(ColorOrder::Brg.reorder(COLOR), Rgb::new(3, 1, 2));
        assert_eq!(ColorOrder::Bgr.reorder(COLOR), Rgb::new(3, 2, 1));
    }

    #[test]
    fn test_color_correction() {
        assert!(!ColorCorrection::new(white(255)).is_active());

        let processor = FilterProcessor::new(&FilterProcessorConfig {
            color_order: ColorOrder::Rgb,
            color_correction: Rgb::new(255, 127, 0),
        });
        let mut frame = [white(200), white(0)];
        processor.apply(&mut frame);
        assert_eq!(frame, [Rgb::new(200, 100, 0), white(0)]);
    }

    #[test]
    fn test_engine_applies_wire_order() {
        let mut config = EngineConfig::default().with_led_count(3);
        config.filters.color_order = ColorOrder::Gbr;
        let mut engine: ModeEngine<_, 8> = ModeEngine::new(&config, Quiet).unwrap();

        // Red and green pixels land in the strip's own channel slots
        let frame = engine.enter(ModeId::FestiveSparkle).to_vec();
        assert_eq!(frame, vec![white(40), Rgb::new(0, 0, 25), Rgb::new(25, 0, 0)]);

        let frame = engine.render().to_vec();
        assert_eq!(frame, vec![white(40), Rgb::new(0, 0, 25), Rgb::new(25, 0, 0)]);
    }
}
