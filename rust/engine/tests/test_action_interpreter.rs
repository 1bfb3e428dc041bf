use phhforge_engine::actions::{interpret_actions, ActionEvent, ActionInterpreter, Dialect, Seat};
use phhforge_engine::cards::{Card, Rank as R, Suit as S};
use phhforge_engine::errors::HandError;

fn c(r: R, s: S) -> Option<Card> {
    Some(Card::new(r, s))
}

#[test]
fn deals_and_player_actions_are_decoded() {
    let tokens = [
        "d dh p1 AhKs",
        "d dh p2 7c7d",
        "p1 cbr 300",
        "p2 cc",
        "d db Jc8d2s",
        "p2 cc",
        "p1 f",
    ];
    let events = interpret_actions(&tokens);
    assert_eq!(
        events,
        vec![
            ActionEvent::DealHole {
                player: Seat(0),
                cards: [c(R::Ace, S::Hearts), c(R::King, S::Spades)],
            },
            ActionEvent::DealHole {
                player: Seat(1),
                cards: [c(R::Seven, S::Clubs), c(R::Seven, S::Diamonds)],
            },
            ActionEvent::Raise {
                player: Seat(0),
                amount: 300,
            },
            ActionEvent::CheckCall { player: Seat(1) },
            ActionEvent::DealBoard {
                cards: vec![
                    c(R::Jack, S::Clubs),
                    c(R::Eight, S::Diamonds),
                    c(R::Two, S::Spades),
                ],
            },
            ActionEvent::CheckCall { player: Seat(1) },
            ActionEvent::Fold { player: Seat(0) },
        ]
    );
}

#[test]
fn separate_board_tokens_are_accepted() {
    let events = interpret_actions(&["d db Qh Td 9c"]);
    assert_eq!(
        events,
        vec![ActionEvent::DealBoard {
            cards: vec![c(R::Queen, S::Hearts), c(R::Ten, S::Diamonds), c(R::Nine, S::Clubs)],
        }]
    );
}

#[test]
fn show_with_and_without_cards() {
    let events = interpret_actions(&["p2 sm 7c7d", "p1 sm"]);
    assert_eq!(
        events,
        vec![
            ActionEvent::ShowCards {
                player: Seat(1),
                cards: vec![c(R::Seven, S::Clubs), c(R::Seven, S::Diamonds)],
            },
            ActionEvent::ShowCards {
                player: Seat(0),
                cards: vec![],
            },
        ]
    );
}

#[test]
fn unrecognised_tokens_are_skipped_silently() {
    let out = ActionInterpreter::default().interpret(&["", "p1 sn", "d dx p1", "showdown"]);
    assert!(out.events.is_empty());
    assert!(out.issues.is_empty());
}

#[test]
fn malformed_card_becomes_null_without_aborting() {
    let out = ActionInterpreter::default().interpret(&["d dh p1 AhK", "p1 f"]);
    assert_eq!(
        out.events[0],
        ActionEvent::DealHole {
            player: Seat(0),
            cards: [c(R::Ace, S::Hearts), None],
        }
    );
    assert_eq!(out.events[1], ActionEvent::Fold { player: Seat(0) });
    assert_eq!(
        out.issues,
        vec![HandError::MalformedCardToken {
            token: "AhK".to_string()
        }]
    );
}

#[test]
fn partly_masked_hole_cards_keep_the_known_card() {
    let out = ActionInterpreter::default().interpret(&["d dh p2 Ah??"]);
    assert_eq!(
        out.events,
        vec![ActionEvent::DealHole {
            player: Seat(1),
            cards: [c(R::Ace, S::Hearts), None],
        }]
    );
    assert!(out.issues.is_empty());
}

#[test]
fn odd_length_board_run_reports_trailing_character() {
    let out = ActionInterpreter::default().interpret(&["d db Jc8d2"]);
    assert_eq!(
        out.events,
        vec![ActionEvent::DealBoard {
            cards: vec![c(R::Jack, S::Clubs), c(R::Eight, S::Diamonds), None],
        }]
    );
    assert_eq!(
        out.issues,
        vec![HandError::MalformedCardToken {
            token: "2".to_string()
        }]
    );
}

#[test]
fn lenient_dialect_finds_operator_in_second_slot() {
    let events = interpret_actions(&["p4 # f"]);
    assert_eq!(events, vec![ActionEvent::Fold { player: Seat(3) }]);
}

#[test]
fn positional_dialect_requires_operator_right_after_seat() {
    let interpreter = ActionInterpreter::new(Dialect::Positional);
    let out = interpreter.interpret(&["p4 # f", "p4 f"]);
    assert_eq!(out.events, vec![ActionEvent::Fold { player: Seat(3) }]);
}

#[test]
fn fold_takes_priority_over_later_operators() {
    let events = interpret_actions(&["p1 cc f"]);
    assert_eq!(events, vec![ActionEvent::Fold { player: Seat(0) }]);
}

#[test]
fn non_seat_actor_is_reported() {
    let out = ActionInterpreter::default().interpret(&["Alice f"]);
    assert!(out.events.is_empty());
    assert_eq!(
        out.issues,
        vec![HandError::MalformedActionToken {
            token: "Alice f".to_string()
        }]
    );
}

#[test]
fn interpreting_twice_yields_identical_sequences() {
    let tokens = vec![
        "d dh p1 AhAs".to_string(),
        "d dh p2 2h3h".to_string(),
        "p1 cbr 6".to_string(),
        "p2 f".to_string(),
    ];
    assert_eq!(interpret_actions(&tokens), interpret_actions(&tokens));
}

#[test]
fn events_serialize_with_snake_case_tags() {
    let event = ActionEvent::Raise {
        player: Seat(2),
        amount: 600,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "raise");
    assert_eq!(json["player"], "p3");
    assert_eq!(json["amount"], 600);

    let back: ActionEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
