mod tests {
    use sparkle_composer::{Duration, InputController, Instant, ModeId};

    const DEBOUNCE: Duration = Duration::from_millis(250);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_starts_in_first_mode() {
        let input = InputController::new(DEBOUNCE);
        assert_eq!(input.mode(), ModeId::ColorfulSparkle);
    }

    #[test]
    fn test_press_advances_mode() {
        let mut input = InputController::new(DEBOUNCE);
        assert_eq!(input.poll(at(0), false), None);
        assert_eq!(input.poll(at(10), true), Some(ModeId::FestiveSparkle));
        assert_eq!(input.mode(), ModeId::FestiveSparkle);
    }

    #[test]
    fn test_short_hold_transitions_once() {
        let mut input = InputController::new(DEBOUNCE);
        let transitions = (0..25)
            .filter_map(|step| input.poll(at(step * 10), true))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_long_hold_transitions_once() {
        let mut input = InputController::new(DEBOUNCE);
        let transitions = (0..200)
            .filter_map(|step| input.poll(at(step * 25), true))
            .count();
        assert_eq!(transitions, 1);
        assert_eq!(input.mode(), ModeId::FestiveSparkle);
    }

    #[test]
    fn test_bounce_inside_window_is_ignored() {
        let mut input = InputController::new(DEBOUNCE);
        assert!(input.poll(at(1_000), true).is_some());
        assert_eq!(input.poll(at(1_020), false), None);
        assert_eq!(input.poll(at(1_040), true), None);
        assert_eq!(input.poll(at(1_060), false), None);
        assert_eq!(input.poll(at(1_250), true), None);
        assert_eq!(input.poll(at(1_255), false), None);
        assert_eq!(input.poll(at(1_260), true), Some(ModeId::SnowTwinkle));
    }

    #[test]
    fn test_window_is_exclusive() {
        let mut input = InputController::new(DEBOUNCE);
        assert!(input.poll(at(0), true).is_some());
        input.poll(at(100), false);
        assert_eq!(input.poll(at(250), true), None);
        input.poll(at(251), false);
        assert!(input.poll(at(252), true).is_some());
    }

    #[test]
    fn test_modes_cycle() {
        let mut input = InputController::new(DEBOUNCE);
        let mut seen = Vec::new();
        for press in 0..5 {
            let t = press * 1_000;
            seen.extend(input.poll(at(t), true));
            input.poll(at(t + 500), false);
        }
        assert_eq!(
            seen,
            vec![
                ModeId::FestiveSparkle,
                ModeId::SnowTwinkle,
                ModeId::Off,
                ModeId::ColorfulSparkle,
                ModeId::FestiveSparkle,
            ]
        );
    }

    #[test]
    fn test_mode_id_helpers() {
        assert_eq!(ModeId::Off.next(), ModeId::ColorfulSparkle);
        assert_eq!(ModeId::from_raw(3), Some(ModeId::SnowTwinkle));
        assert_eq!(ModeId::from_raw(0), None);
        assert_eq!(ModeId::from_raw(5), None);
        assert_eq!(ModeId::FestiveSparkle as u8, 2);
        assert_eq!(ModeId::SnowTwinkle.as_str(), "snow_twinkle");
    }
}
