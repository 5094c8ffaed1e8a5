mod tests {
    use sparkle_composer::envelope::{Envelope, IDLE};
    use sparkle_composer::state::{PixelPhases, SparkleState};
    use sparkle_composer::{RandomSource, RngSource};

    const ENVELOPE: Envelope = Envelope::new(4, 1.0);

    struct Always(u16);

    impl RandomSource for Always {
        fn next_u8(&mut self) -> u8 {
            0
        }

        fn next_u16(&mut self) -> u16 {
            self.0
        }
    }

    #[test]
    fn test_trigger_only_idle_pixels() {
        let mut phases = PixelPhases::<8>::new(4);
        assert_eq!(phases.len(), 4);
        assert!(phases.trigger(2));
        assert!(!phases.trigger(2));
        assert!(!phases.trigger(4));
        assert_eq!(phases.active_count(), 1);
        assert!(phases.is_active(2));
        assert_eq!(phases.get(7), IDLE);

        phases.reset();
        assert_eq!(phases.active_count(), 0);
    }

    #[test]
    fn test_step_walks_the_envelope() {
        let mut phases = PixelPhases::<4>::new(4);
        assert_eq!(phases.step(0, &ENVELOPE), None);

        phases.trigger(0);
        assert_eq!(phases.step(0, &ENVELOPE), Some(0.5));
        assert_eq!(phases.step(0, &ENVELOPE), Some(1.0));
        assert_eq!(phases.step(0, &ENVELOPE), Some(0.5));
        assert_eq!(phases.get(0), 4);
        // Last step hands the pixel back to its base appearance
        assert_eq!(phases.step(0, &ENVELOPE), None);
        assert_eq!(phases.get(0), IDLE);
    }

    #[test]
    fn test_count_is_capped_at_capacity() {
        let phases = PixelPhases::<4>::new(10);
        assert_eq!(phases.len(), 4);
    }

    #[test]
    fn test_maybe_trigger() {
        let mut state = SparkleState::<8>::new(8, ENVELOPE, 40);
        assert_eq!(state.maybe_trigger(&mut Always(13)), Some(5));
        assert_eq!(state.maybe_trigger(&mut Always(13)), None);
        assert_eq!(state.phases().active_count(), 1);

        let mut never = SparkleState::<8>::new(8, ENVELOPE, 0);
        let mut rng = RngSource::seeded(9);
        for _ in 0..1_000 {
            assert_eq!(never.maybe_trigger(&mut rng), None);
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = RngSource::seeded(11);
        let mut b = RngSource::seeded(11);
        for _ in 0..100 {
            assert_eq!(a.next_u16(), b.next_u16());
            let unit = a.next_unit();
            assert!((0.0..1.0).contains(&unit));
            assert_eq!(unit, b.next_unit());
        }
    }
}
