use feed_core::{ImageReveal, RevealPhase, FADE_DURATION_MS};

#[test]
fn reveal_starts_hidden_and_transparent() {
    let reveal = ImageReveal::new();
    assert_eq!(reveal.phase(), RevealPhase::Hidden);
    assert_eq!(reveal.opacity(), 0.0);
    assert!(!reveal.is_loaded());
}

#[test]
fn load_signal_reveals_once_and_stays_revealed() {
    let mut reveal = ImageReveal::new();
    assert!(reveal.on_loaded());
    assert_eq!(reveal.phase(), RevealPhase::Revealed);

    // The terminal state is idempotent under further signals.
    assert!(!reveal.on_loaded());
    assert!(!reveal.on_loaded());
    assert_eq!(reveal.phase(), RevealPhase::Revealed);
}

#[test]
fn fade_reaches_full_opacity_at_duration_and_holds() {
    let mut reveal = ImageReveal::new();
    reveal.on_loaded();

    reveal.tick(FADE_DURATION_MS / 2);
    let midway = reveal.opacity();
    assert!(midway > 0.0 && midway < 1.0);

    reveal.tick(FADE_DURATION_MS / 2);
    assert_eq!(reveal.opacity(), 1.0);

    reveal.tick(FADE_DURATION_MS);
    assert_eq!(reveal.opacity(), 1.0);
}

#[test]
fn fade_opacity_is_monotonic() {
    let mut reveal = ImageReveal::new();
    reveal.on_loaded();

    let mut previous = reveal.opacity();
    for _ in 0..20 {
        reveal.tick(40);
        let current = reveal.opacity();
        assert!(current >= previous);
        previous = current;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn ticks_do_not_move_a_hidden_reveal() {
    let mut reveal = ImageReveal::new();
    assert!(!reveal.tick(1_000));
    assert_eq!(reveal.opacity(), 0.0);
    assert_eq!(reveal.phase(), RevealPhase::Hidden);
}
