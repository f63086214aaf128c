mod tests {
    use embassy_time::{Duration, Instant};
    use infinity_mirror::{
        Canvas, ConfigError, EffectId, EffectScheduler, Override, Presence, Preset, Style,
    };

    const PRESETS: [Preset; 3] = [
        Preset::new(EffectId::Rainbow, Style::FullStrip, 8_000),
        Preset::new(EffectId::TestPattern, Style::CopiedSides, 500),
        Preset::new(EffectId::Sinelon, Style::BidirectionalSideToSide, 13_000),
    ];

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn scheduler() -> EffectScheduler<4> {
        EffectScheduler::new(&PRESETS).unwrap()
    }

    #[test]
    fn test_starts_at_first_preset() {
        let mut scheduler = scheduler();
        assert_eq!(scheduler.preset_index(), 0);
        assert_eq!(scheduler.override_mode(), Override::None);
        assert_eq!(scheduler.style(), Style::FullStrip);
        assert_eq!(scheduler.effect_id(), EffectId::Rainbow);
        assert!(scheduler.fx_has_changed());
        assert!(!scheduler.fx_has_changed());
    }

    #[test]
    fn test_changed_flag_is_consumed_once() {
        let mut scheduler = scheduler();
        scheduler.fx_has_changed();

        scheduler.set_preset(1);
        assert!(scheduler.fx_has_changed());
        assert!(!scheduler.fx_has_changed());
        assert!(!scheduler.fx_has_changed());

        scheduler.set_override(Override::AllWhite);
        assert!(scheduler.fx_has_changed());
        assert!(!scheduler.fx_has_changed());
    }

    #[test]
    fn test_timed_preset_finishes_on_the_dot() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let mut scheduler = scheduler();
        scheduler.set_preset(1);

        scheduler.update(at(0), Presence::default(), &mut canvas);
        assert!(!scheduler.has_finished());
        scheduler.update(at(499), Presence::default(), &mut canvas);
        assert!(!scheduler.has_finished());
        scheduler.update(at(500), Presence::default(), &mut canvas);
        assert!(scheduler.has_finished());
    }

    #[test]
    fn test_elapsed_time_restarts_on_transition() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let mut scheduler = scheduler();
        scheduler.set_preset(1);
        scheduler.update(at(0), Presence::default(), &mut canvas);
        scheduler.update(at(600), Presence::default(), &mut canvas);
        assert!(scheduler.has_finished());

        scheduler.set_preset(1);
        assert!(!scheduler.has_finished());
        assert_eq!(scheduler.time_in_effect(at(700)), Duration::from_ticks(0));

        scheduler.update(at(700), Presence::default(), &mut canvas);
        assert!(!scheduler.has_finished());
        assert_eq!(scheduler.time_in_effect(at(900)), Duration::from_millis(200));
        scheduler.update(at(1_200), Presence::default(), &mut canvas);
        assert!(scheduler.has_finished());
    }

    #[test]
    fn test_untimed_effect_finishes_by_itself() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let presets = [Preset::until_finished(EffectId::FadeToBlack, Style::FullStrip)];
        let mut scheduler = EffectScheduler::<2>::new(&presets).unwrap();

        // Nothing is lit yet, so there is nothing to fade
        scheduler.update(at(0), Presence::default(), &mut canvas);
        assert!(scheduler.has_finished());
    }

    #[test]
    fn test_untimed_effect_keeps_running() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let presets = [Preset::until_finished(EffectId::TestPattern, Style::FullStrip)];
        let mut scheduler = EffectScheduler::<2>::new(&presets).unwrap();

        for ms in [0, 1_000, 100_000] {
            scheduler.update(at(ms), Presence::default(), &mut canvas);
            assert!(!scheduler.has_finished());
        }
    }

    #[test]
    fn test_preset_adopts_style() {
        let mut canvas = Canvas::<64>::new(13).unwrap();
        let mut scheduler = scheduler();
        scheduler.update(at(0), Presence::default(), &mut canvas);
        assert_eq!(canvas.base_len(), 52);

        scheduler.next_preset();
        assert_eq!(scheduler.style(), Style::CopiedSides);
        scheduler.update(at(10), Presence::default(), &mut canvas);
        assert_eq!(canvas.style(), Style::CopiedSides);
        assert_eq!(canvas.base_len(), 13);
    }

    #[test]
    fn test_preset_cycling_wraps() {
        let mut scheduler = scheduler();
        scheduler.prev_preset();
        assert_eq!(scheduler.preset_index(), 2);
        scheduler.next_preset();
        assert_eq!(scheduler.preset_index(), 0);
        scheduler.next_preset();
        scheduler.next_preset();
        scheduler.next_preset();
        assert_eq!(scheduler.preset_index(), 0);
    }

    #[test]
    fn test_preset_index_is_clamped() {
        let mut scheduler = scheduler();
        scheduler.set_preset(42);
        assert_eq!(scheduler.preset_index(), 2);
        assert_eq!(scheduler.effect_id(), EffectId::Sinelon);
    }

    #[test]
    fn test_toggle_override_resumes_preset() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let mut scheduler = scheduler();
        scheduler.set_preset(2);
        scheduler.update(at(0), Presence::default(), &mut canvas);

        assert!(scheduler.toggle_override(Override::AllBlack));
        assert_eq!(scheduler.override_mode(), Override::AllBlack);
        assert_eq!(scheduler.effect_id(), EffectId::FadeToBlack);
        assert_eq!(scheduler.style(), Style::FullStrip);
        assert_eq!(scheduler.duration(), Duration::from_ticks(0));
        scheduler.update(at(10), Presence::default(), &mut canvas);

        assert!(!scheduler.toggle_override(Override::AllBlack));
        assert_eq!(scheduler.override_mode(), Override::None);
        assert_eq!(scheduler.preset_index(), 2);
        assert_eq!(scheduler.effect_id(), EffectId::Sinelon);
        assert_eq!(scheduler.style(), Style::BidirectionalSideToSide);
        assert_eq!(scheduler.duration(), Duration::from_millis(13_000));
    }

    #[test]
    fn test_toggle_other_override_switches() {
        let mut scheduler = scheduler();
        assert!(scheduler.toggle_override(Override::AllBlack));
        assert!(scheduler.toggle_override(Override::AllWhite));
        assert_eq!(scheduler.override_mode(), Override::AllWhite);
        assert_eq!(scheduler.effect_id(), EffectId::FadeToWhite);
    }

    #[test]
    fn test_test_pattern_keeps_style() {
        let mut scheduler = scheduler();
        scheduler.set_preset(1);
        scheduler.set_override(Override::TestPattern);
        assert_eq!(scheduler.style(), Style::CopiedSides);

        scheduler.set_override(Override::DistanceTest);
        assert_eq!(scheduler.style(), Style::FullStrip);
    }

    #[test]
    fn test_test_pattern_after_other_override_uses_preset_style() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let mut scheduler = scheduler();
        scheduler.set_preset(1);
        scheduler.set_override(Override::AllBlack);
        scheduler.update(at(0), Presence::default(), &mut canvas);
        assert_eq!(canvas.style(), Style::FullStrip);

        scheduler.set_override(Override::TestPattern);
        scheduler.update(at(10), Presence::default(), &mut canvas);
        assert_eq!(scheduler.style(), Style::CopiedSides);
        assert_eq!(canvas.style(), Style::CopiedSides);
        assert_eq!(canvas.base_len(), 4);
    }

    #[test]
    fn test_test_pattern_keeps_cycled_style() {
        let mut scheduler = scheduler();
        scheduler.set_preset(1);
        scheduler.next_style();
        scheduler.set_override(Override::TestPattern);
        assert_eq!(scheduler.style(), Style::PeriodicOppositeCorners4);
    }

    #[test]
    fn test_preset_request_clears_override() {
        let mut scheduler = scheduler();
        scheduler.set_override(Override::SleepAwaitingPresence);
        scheduler.next_preset();
        assert_eq!(scheduler.override_mode(), Override::None);
        assert_eq!(scheduler.preset_index(), 1);
    }

    #[test]
    fn test_unknown_override_is_none() {
        assert_eq!(Override::from_raw(4), Override::TestPattern);
        assert_eq!(Override::from_raw(200), Override::None);

        let mut scheduler = scheduler();
        scheduler.set_preset(1);
        scheduler.set_override(Override::from_raw(200));
        assert_eq!(scheduler.override_mode(), Override::None);
        assert_eq!(scheduler.preset_index(), 1);
    }

    #[test]
    fn test_style_change_applies_on_next_update() {
        let mut canvas = Canvas::<64>::new(4).unwrap();
        let mut scheduler = scheduler();
        scheduler.update(at(0), Presence::default(), &mut canvas);

        assert_eq!(scheduler.next_style(), Style::CopiedSides);
        assert_eq!(canvas.base_len(), 16);
        scheduler.update(at(10), Presence::default(), &mut canvas);
        assert_eq!(canvas.base_len(), 4);

        assert_eq!(scheduler.prev_style(), Style::FullStrip);
        assert_eq!(scheduler.prev_style(), Style::HalfwayPeriodicSplit2);
    }

    #[test]
    fn test_replacing_presets() {
        let mut scheduler = scheduler();
        scheduler.set_preset(2);
        scheduler
            .set_presets(&[Preset::new(EffectId::Bpm, Style::CopiedSides, 1_000)])
            .unwrap();
        assert_eq!(scheduler.preset_index(), 0);
        assert_eq!(scheduler.effect_id(), EffectId::Bpm);
        assert_eq!(scheduler.presets().count(), 1);

        assert_eq!(scheduler.set_presets(&[]), Err(ConfigError::EmptyPresetList));
        assert_eq!(scheduler.presets().count(), 1);
    }

    #[test]
    fn test_rejects_bad_preset_lists() {
        assert_eq!(
            EffectScheduler::<4>::new(&[]).err(),
            Some(ConfigError::EmptyPresetList)
        );
        assert_eq!(
            EffectScheduler::<2>::new(&PRESETS).err(),
            Some(ConfigError::TooManyPresets {
                count: 3,
                capacity: 2
            })
        );
    }
}
