mod helpers;

use helpers::{PhhTree, clear_env, heads_up_hand, run_cli};
use serde_json::Value;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn rewards_walks_nested_directories() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("a/hand1.phh", &heads_up_hand(1));
    tree.write("a/deeper/hand2.phh", &heads_up_hand(2));
    tree.write("notes.md", "not a hand");
    let output = tree.out_path("rewards.json");

    let res = run_cli(&["rewards", "--data-dir", &tree.root_str(), "--output", &output]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 12);

    let hero_raise = records
        .iter()
        .find(|r| r["player_name"] == "Hero" && r["bet_amount"] == 300)
        .expect("hero opening raise");
    assert_eq!(hero_raise["your_position"], 0);
    assert_eq!(hero_raise["your_chips"], 10000);
    assert_eq!(hero_raise["opponent_chips"], 8000);
    assert_eq!(hero_raise["pot_size"], 150);
    assert_eq!(hero_raise["amount_to_call"], 100);
    assert_eq!(hero_raise["equity"], 0.75);

    let villain_turn = records
        .iter()
        .find(|r| r["player_name"] == "Villain" && r["bet_amount"] == 500)
        .expect("villain turn bet");
    assert_eq!(villain_turn["community_cards"].as_array().unwrap().len(), 4);
    assert_eq!(villain_turn["action_previous_players"].as_array().unwrap().len(), 4);
}

#[test]
#[serial]
fn rewards_respects_max_files() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("x/1.phh", &heads_up_hand(1));
    tree.write("x/2.phh", &heads_up_hand(2));
    let output = tree.out_path("rewards.json");

    let res = run_cli(&[
        "rewards",
        "--data-dir",
        &tree.root_str(),
        "--output",
        &output,
        "--max-files",
        "1",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
fn rewards_requires_existing_directory() {
    let res = run_cli(&[
        "rewards",
        "--data-dir",
        "does/not/exist",
        "--output",
        "unused.json",
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("not a directory"), "stderr={}", res.stderr);
}
