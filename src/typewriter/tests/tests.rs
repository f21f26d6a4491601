use super::*;

fn zero_jitter(titles: &[&str]) -> TypewriterSettings {
    TypewriterSettings {
        titles: titles.iter().map(|t| t.to_string()).collect(),
        type_jitter_ms: 0,
        delete_jitter_ms: 0,
        ..TypewriterSettings::default()
    }
}

fn texts(core: &mut TypewriterCore, n: usize) -> Vec<String> {
    (0..n).map(|_| core.tick().text).collect()
}

#[test]
fn ab_scenario_repeats_exactly() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB"]));
    assert_eq!(
        texts(&mut core, 10),
        vec!["A", "AB", "A", "", "A", "AB", "A", "", "A", "AB"]
    );
}

#[test]
fn displayed_text_is_always_a_prefix_of_the_current_phrase() {
    let mut core = TypewriterCore::new(zero_jitter(&["Rustacean", "SOC Analyst"]));
    for _ in 0..200 {
        let index = core.index();
        let tick = core.tick();
        let phrase = &core.settings().titles[index];
        assert!(
            phrase.starts_with(&tick.text),
            "{:?} is not a prefix of {:?}",
            tick.text,
            phrase
        );
    }
}

#[test]
fn full_cycle_walks_every_prefix_up_then_down() {
    let phrase = "Hello";
    let mut core = TypewriterCore::new(zero_jitter(&[phrase]));
    let cycle = texts(&mut core, phrase.len() * 2);
    let expected: Vec<String> = (1..=phrase.len())
        .map(|n| phrase[..n].to_string())
        .chain((0..phrase.len()).rev().map(|n| phrase[..n].to_string()))
        .collect();
    assert_eq!(cycle, expected);
}

#[test]
fn delays_follow_the_phase() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB"]));

    let tick = core.tick(); // "A"
    assert_eq!(tick.delay_ms, 100);
    let tick = core.tick(); // "AB" - full, hold
    assert_eq!(tick.delay_ms, 2000);
    assert_eq!(core.phase(), Phase::Pausing);
    let tick = core.tick(); // "A"
    assert_eq!(tick.delay_ms, 50);
    assert_eq!(core.phase(), Phase::Deleting);
    let tick = core.tick(); // "" - advance hold
    assert_eq!(tick.delay_ms, 500);
    assert_eq!(core.phase(), Phase::Advancing);
}

#[test]
fn index_advances_by_one_per_cycle_and_wraps() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB", "CD", "EF"]));
    assert_eq!(core.index(), 0);

    // One full cycle: type 2, delete 2.
    texts(&mut core, 4);
    assert_eq!(core.index(), 1);
    texts(&mut core, 4);
    assert_eq!(core.index(), 2);
    texts(&mut core, 4);
    assert_eq!(core.index(), 0);
}

#[test]
fn jitter_stays_within_the_configured_range() {
    let settings = TypewriterSettings {
        titles: vec!["A longer phrase to type".to_string()],
        ..TypewriterSettings::default()
    };
    let mut core = TypewriterCore::with_seed(settings, 7);
    for _ in 0..100 {
        let tick = core.tick();
        match core.phase() {
            Phase::Typing => assert!((100..150).contains(&tick.delay_ms)),
            Phase::Deleting => assert!((50..70).contains(&tick.delay_ms)),
            Phase::Pausing => assert_eq!(tick.delay_ms, 2000),
            Phase::Advancing => assert_eq!(tick.delay_ms, 500),
        }
    }
}

#[test]
fn cursor_shows_while_typing_and_hides_at_empty() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB"]));
    assert_eq!(core.tick().cursor, CursorHint::Show); // "A"
    assert_eq!(core.tick().cursor, CursorHint::Show); // "AB"
    assert_eq!(core.tick().cursor, CursorHint::Keep); // "A"
    assert_eq!(core.tick().cursor, CursorHint::Hide); // ""
}

#[test]
fn replacing_titles_resets_to_the_first_phrase() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB", "CD"]));
    texts(&mut core, 5); // mid-second-cycle
    assert_eq!(core.index(), 1);

    core.set_titles(vec!["XY".to_string()])
        .expect("non-empty list");
    assert_eq!(core.index(), 0);
    assert_eq!(core.phase(), Phase::Typing);
    assert_eq!(core.current_text(), "");
    assert_eq!(core.tick().text, "X");
}

#[test]
fn empty_title_list_is_rejected_and_state_is_untouched() {
    let mut core = TypewriterCore::new(zero_jitter(&["AB"]));
    texts(&mut core, 1);
    let before_text = core.current_text();
    let before_phase = core.phase();

    assert!(core.set_titles(Vec::new()).is_err());
    assert_eq!(core.current_text(), before_text);
    assert_eq!(core.phase(), before_phase);

    // Same contract through the overrides path.
    let overrides = TypewriterOverrides {
        titles: Some(Vec::new()),
        ..TypewriterOverrides::default()
    };
    assert!(core.apply_overrides(&overrides).is_err());
    assert_eq!(core.current_text(), before_text);
}

#[test]
fn overrides_retune_speeds_without_resetting() {
    let mut core = TypewriterCore::new(zero_jitter(&["ABC"]));
    texts(&mut core, 2);

    let overrides = TypewriterOverrides::from_json(r#"{"type_speed_ms": 10}"#).expect("valid");
    core.apply_overrides(&overrides).expect("no titles entry");

    // Position is preserved; the new speed applies to the next tick.
    let tick = core.tick();
    assert_eq!(tick.text, "ABC");
    assert_eq!(core.current_text(), "ABC");
}

#[test]
fn multibyte_phrases_never_split_mid_character() {
    let mut core = TypewriterCore::new(zero_jitter(&["héllo"]));
    let seen = texts(&mut core, 10);
    for text in seen {
        assert!(text.is_char_boundary(text.len()));
        assert!("héllo".starts_with(&text));
    }
}
