mod tests {
    use sparkle_composer::envelope::Envelope;
    use sparkle_composer::{ConfigError, Duration, EngineConfig, ModeConfigError, ModeId};

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.led_count, 200);
        assert_eq!(config.fps, 40);
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.frame_duration(), Duration::from_millis(25));
        assert_eq!(config.modes.colorful.envelope.steps, 22);
        assert_eq!(config.modes.colorful.probability, 40);
        assert_eq!(config.modes.festive.probability, 40);
        assert_eq!(config.modes.snow.envelope.steps, 60);
        assert_eq!(config.modes.snow.probability, 210);
        assert_eq!(config.validate(200), Ok(()));
    }

    #[test]
    fn test_rejects_strip_size() {
        let config = EngineConfig::default();
        assert_eq!(
            config.validate(199),
            Err(ConfigError::StripTooLong {
                led_count: 200,
                capacity: 199,
            })
        );
        assert_eq!(
            config.with_led_count(0).validate(200),
            Err(ConfigError::EmptyStrip)
        );
    }

    #[test]
    fn test_rejects_frame_rate() {
        let mut config = EngineConfig::default();
        config.fps = 0;
        assert_eq!(config.validate(200), Err(ConfigError::InvalidFrameRate(0)));
        config.fps = 1_001;
        assert_eq!(
            config.validate(200),
            Err(ConfigError::InvalidFrameRate(1_001))
        );
    }

    #[test]
    fn test_rejects_mode_settings() {
        let mut config = EngineConfig::default();
        config.modes.festive.envelope = Envelope::new(1, 1.5);
        assert_eq!(
            config.validate(200),
            Err(ConfigError::Mode {
                mode: ModeId::FestiveSparkle,
                reason: ModeConfigError::EnvelopeTooShort { steps: 1 },
            })
        );

        let mut config = EngineConfig::default();
        config.modes.snow.twinkle_value = 1.5;
        assert_eq!(
            config.validate(200),
            Err(ConfigError::Mode {
                mode: ModeId::SnowTwinkle,
                reason: ModeConfigError::LevelOutOfRange {
                    name: "twinkle_value",
                    value: 1.5,
                },
            })
        );

        let mut config = EngineConfig::default();
        config.modes.colorful.base_value = -0.1;
        assert!(matches!(
            config.validate(200),
            Err(ConfigError::Mode {
                mode: ModeId::ColorfulSparkle,
                reason: ModeConfigError::LevelOutOfRange { name: "base_value", .. },
            })
        ));

        let mut config = EngineConfig::default();
        config.modes.colorful.sparkle_saturation = 2.0;
        assert_eq!(
            config.validate(200),
            Err(ConfigError::Mode {
                mode: ModeId::ColorfulSparkle,
                reason: ModeConfigError::LevelOutOfRange {
                    name: "sparkle_saturation",
                    value: 2.0,
                },
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let error = ConfigError::StripTooLong {
            led_count: 300,
            capacity: 200,
        };
        assert_eq!(
            error.to_string(),
            "strip has 300 pixels but the engine holds at most 200"
        );

        let error = ConfigError::Mode {
            mode: ModeId::SnowTwinkle,
            reason: ModeConfigError::EnvelopeTooShort { steps: 0 },
        };
        assert_eq!(
            error.to_string(),
            "snow_twinkle mode: envelope needs at least 2 steps, got 0"
        );
    }
}
