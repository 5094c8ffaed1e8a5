mod tests {
    use sparkle_composer::envelope::{Envelope, IDLE, SPARKLE_EXPONENT, TWINKLE_EXPONENT};
    use sparkle_composer::error::ModeConfigError;
    use sparkle_composer::state::PixelPhases;

    const SPARKLE: Envelope = Envelope::new(22, SPARKLE_EXPONENT);

    #[test]
    fn test_envelope_is_symmetric() {
        for phase in 1..SPARKLE.steps {
            let rising = SPARKLE.progress(phase);
            let falling = SPARKLE.progress(SPARKLE.steps - phase);
            assert!((rising - falling).abs() < 1e-6, "phase {phase}");
        }
        assert!((SPARKLE.progress(1) - SPARKLE.progress(21)).abs() < 1e-6);
    }

    #[test]
    fn test_envelope_shape() {
        assert_eq!(SPARKLE.progress(11), 1.0);
        assert_eq!(SPARKLE.progress(22), 0.0);

        let linear = 1.0_f32 / 11.0;
        let shaped = SPARKLE.progress(1);
        assert!(shaped > 0.0 && shaped < linear);

        for phase in 1..11 {
            assert!(SPARKLE.progress(phase) < SPARKLE.progress(phase + 1));
        }
    }

    #[test]
    fn test_twinkle_is_gentler_than_sparkle() {
        let twinkle = Envelope::new(60, TWINKLE_EXPONENT);
        let sparkle = Envelope::new(60, SPARKLE_EXPONENT);
        assert!(twinkle.progress(15) > sparkle.progress(15));
    }

    #[test]
    fn test_advance_wraps_after_last_step() {
        assert_eq!(SPARKLE.advance(1), 2);
        assert_eq!(SPARKLE.advance(21), 22);
        assert_eq!(SPARKLE.advance(22), IDLE);
    }

    #[test]
    fn test_longest_envelope_still_wraps() {
        let longest = Envelope::new(u16::MAX, SPARKLE_EXPONENT);
        assert_eq!(longest.validate(), Ok(()));
        assert_eq!(longest.advance(u16::MAX - 1), u16::MAX);
        assert_eq!(longest.advance(u16::MAX), IDLE);

        let mut phases = PixelPhases::<1>::new(1);
        assert!(phases.trigger(0));
        for _ in 0..u16::MAX {
            phases.step(0, &longest);
        }
        assert_eq!(phases.get(0), IDLE);
        assert!(phases.trigger(0));
    }

    #[test]
    fn test_odd_length_envelope() {
        let envelope = Envelope::new(5, 1.0);
        assert_eq!(envelope.half(), 2);
        assert_eq!(envelope.progress(2), 1.0);
        assert_eq!(envelope.progress(3), 1.0);
        assert_eq!(envelope.progress(4), 0.5);
    }

    #[test]
    fn test_envelope_validation() {
        assert_eq!(SPARKLE.validate(), Ok(()));
        assert_eq!(
            Envelope::new(1, 1.5).validate(),
            Err(ModeConfigError::EnvelopeTooShort { steps: 1 })
        );
        assert_eq!(
            Envelope::new(0, 1.5).validate(),
            Err(ModeConfigError::EnvelopeTooShort { steps: 0 })
        );
        assert_eq!(
            Envelope::new(22, 0.0).validate(),
            Err(ModeConfigError::InvalidExponent)
        );
        assert_eq!(
            Envelope::new(22, f32::NAN).validate(),
            Err(ModeConfigError::InvalidExponent)
        );
    }
}
