mod helpers;

use helpers::{PhhTree, clear_env, heads_up_hand, run_cli};
use serde_json::Value;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn generate_writes_prompt_records_for_every_player() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("30/hand_0001.phh", &heads_up_hand(1));
    tree.write("40/hand_0002.phh", &heads_up_hand(2));
    let output = tree.out_path("out/train.json");

    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--folders",
        "30,40",
        "--output",
        &output,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    // Hero: raise, check, fold; Villain: call, check, raise; per hand
    assert_eq!(records.len(), 12);
    let first = &records[0];
    assert!(first["prompt"].as_str().unwrap().contains("- Hand #: 1\n"));
    assert_eq!(
        first["target"],
        "After analyzing the situation, I decide to raise to 300."
    );
    assert_eq!(first["example"]["game_state"]["pot_size"], 150);
    assert_eq!(first["example"]["game_state"]["current_bet"], 100);
    assert!(res.stdout.contains("Examples:"));
}

#[test]
#[serial]
fn generate_single_player_jsonl() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("30/a.phh", &heads_up_hand(7));
    let output = tree.out_path("train.jsonl");

    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--folders",
        "30",
        "--output",
        &output,
        "--format",
        "jsonl",
        "--player",
        "Villain",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line["example"]["game_state"]["position"], "p2");
    }
    assert_eq!(
        lines[2]["target"],
        "After analyzing the situation, I decide to raise to 500."
    );
}

#[test]
#[serial]
fn missing_folders_warn_and_bad_files_are_skipped() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("30/good.phh", &heads_up_hand(3));
    tree.write("30/junk.phh", "this is not a record\n");
    tree.write("30/readme.txt", "ignored");
    let output = tree.out_path("train.json");

    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--folders",
        "30,90",
        "--output",
        &output,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.contains("Folder not found"), "stderr={}", res.stderr);
    assert!(res.stderr.contains("junk.phh"), "stderr={}", res.stderr);

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
#[serial]
fn max_files_caps_each_folder_in_sorted_order() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("30/b.phh", &heads_up_hand(2));
    tree.write("30/a.phh", &heads_up_hand(1));
    let output = tree.out_path("train.json");

    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--folders",
        "30",
        "--output",
        &output,
        "--max-files",
        "1",
        "--player",
        "Hero",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let hands: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["example"]["game_state"]["hand_id"].as_u64().unwrap())
        .collect();
    assert_eq!(hands, vec![1, 1, 1]);
}

#[test]
#[serial]
fn compressed_records_are_read() {
    clear_env();
    let tree = PhhTree::new();
    let packed = zstd::bulk::compress(heads_up_hand(5).as_bytes(), 3).unwrap();
    fs::create_dir_all(tree.root().join("50")).unwrap();
    fs::write(tree.root().join("50/hand.phh.zst"), packed).unwrap();
    let output = tree.out_path("train.json");

    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--folders",
        "50",
        "--output",
        &output,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
#[serial]
fn nothing_to_process_is_an_error() {
    clear_env();
    let tree = PhhTree::new();
    let res = run_cli(&[
        "generate",
        "--phh-path",
        &tree.root_str(),
        "--output",
        &tree.out_path("train.json"),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("no .phh files found"), "stderr={}", res.stderr);
}

#[test]
#[serial]
fn environment_supplies_base_path_and_format() {
    clear_env();
    let tree = PhhTree::new();
    tree.write("70/h.phh", &heads_up_hand(9));
    let output = tree.out_path("env.jsonl");
    unsafe {
        std::env::set_var("PHHFORGE_BASE_PATH", tree.root());
        std::env::set_var("PHHFORGE_FOLDERS", "70");
        std::env::set_var("PHHFORGE_FORMAT", "jsonl");
    }

    let res = run_cli(&["generate", "--output", &output]);
    clear_env();
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 6);
}
