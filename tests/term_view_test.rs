use jospel::core::{Deck, GameSession};
use jospel::term::{GameView, PromptView, Viewport};
use jospel::types::{Card, LineSet, Location};

fn ordered_session(line_set: LineSet) -> GameSession {
    // Dealt back to front: 6 5 4 3 / 2 1 10 9 / 8 7 6 5 / 4 3 2 1.
    let draw = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2, 3, 4, 5, 6].map(|v| Card::new(v).unwrap());
    GameSession::new(Deck::from_draw(draw), line_set)
}

#[test]
fn term_view_renders_border_corners() {
    let session = ordered_session(LineSet::Standard);
    let view = GameView::default();
    let fb = view.render_play(&session.snapshot(), &PromptView::default(), Viewport::new(80, 24));

    // Frame is 18x6 at (5, 5).
    assert_eq!(fb.get(5, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(22, 5).unwrap().ch, '┐');
    assert_eq!(fb.get(5, 10).unwrap().ch, '└');
    assert_eq!(fb.get(22, 10).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_pending_card_and_prompt() {
    let mut session = ordered_session(LineSet::Standard);
    session.advance().unwrap();
    session.place_str("A1").unwrap();
    session.advance().unwrap();

    let view = GameView::default();
    let prompt = PromptView {
        typed: "B",
        cursor: Some(Location { column: 1, row: 0 }),
        message: Some("Position filled, try again"),
    };
    let fb = view.render_play(&session.snapshot(), &prompt, Viewport::new(80, 24));
    let text = fb.to_text();

    assert!(text.contains("Seed: "));
    assert!(text.contains("Place 5 at: B_"), "{text}");
    assert!(text.contains("Position filled, try again"));
    assert!(text.contains("CARD   5"));
    assert!(text.contains("LEFT   14"));
    // The placed 6 sits in A1, the cursor cell B1 is highlighted.
    assert_eq!(fb.get(8, 6).unwrap().ch, '6');
    assert!(fb.get(12, 6).unwrap().style.reverse);
}

#[test]
fn term_view_report_lists_results() {
    let mut session = ordered_session(LineSet::WithDiagonals);
    let report = session
        .play_with(|board, _| board.first_empty().unwrap())
        .unwrap();

    let view = GameView::default();
    let fb = view.render_report(&report, Viewport::new(80, 30));
    let text = fb.to_text();

    assert!(text.contains("GAME OVER"));
    // Row 1 is 6 5 4 3, the 10 in row 2 takes two columns.
    assert!(fb.row_text(6).ends_with("← long streak (40)"), "{}", fb.row_text(6));
    assert!(fb.row_text(7).contains(" 10 "));
    assert!(fb.row_text(7).ends_with("← -"));
    assert!(text.contains("A: "));
    assert!(text.contains("\\: "));
    assert!(text.contains("/: "));
    assert!(text.contains(&format!("Total: {}", report.total)));
    assert!(text.contains("Cards dealt: 6 5 4 3 2 1 10 9 8 7 6 5 4 3 2 1"));
    assert!(text.contains("r replay this seed"));
}

#[test]
fn term_view_warns_about_unreplayable_seed() {
    let draw = [10, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2, 3, 4, 5, 6].map(|v| Card::new(v).unwrap());
    let session = GameSession::new(Deck::from_draw(draw), LineSet::Standard);
    let fb = GameView::default().render_play(&session.snapshot(), &PromptView::default(), Viewport::new(100, 24));
    assert!(fb.row_text(2).contains("cannot be replayed"));
}
