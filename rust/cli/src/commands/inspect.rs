//! Human-readable dump of a single record.

use phhforge_engine::actions::ActionInterpreter;
use phhforge_engine::record::{HandRecord, parse_record};
use phhforge_engine::replay::{GameStateReplayer, unseated_actions};
use std::io::Write;

use crate::error::CliError;
use crate::formatters::{format_board, format_decision, format_event, format_field_value};
use crate::io_utils::read_text_auto;

pub fn handle_inspect_command(
    input: &str,
    player: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text_auto(input).map_err(|e| CliError::InvalidInput(format!("{}: {}", input, e)))?;
    let fields = parse_record(&text)?;
    let record = HandRecord::from_fields(&fields)?;

    writeln!(out, "Fields:")?;
    for (key, value) in &fields {
        writeln!(out, "  {} = {}", key, format_field_value(value))?;
    }

    let interpretation = ActionInterpreter::default().interpret(&record.actions);
    writeln!(out, "\nEvents:")?;
    for (i, event) in interpretation.events.iter().enumerate() {
        writeln!(out, "  {:>3}  {}", i, format_event(event))?;
    }

    let names: Vec<&str> = match player {
        Some(name) => vec![name],
        None => record.players.iter().map(String::as_str).collect(),
    };
    let replayer = GameStateReplayer::new();
    let mut issues = interpretation.issues;
    issues.extend(unseated_actions(&interpretation.events, record.players.len()));
    for name in names {
        let replay = replayer.replay_for_player(&record, &interpretation.events, name);
        issues.extend(replay.issues);
        writeln!(out, "\nDecisions for {}:", name)?;
        if replay.decisions.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for point in &replay.decisions {
            let s = &point.snapshot;
            let equity = s
                .equity
                .map(|e| format!("{:.3}", e))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "  {:>3}  {:?} pot={} bet={} hole={} board={} equity={} -> {}",
                point.event_index,
                s.street(),
                s.pot_size,
                s.current_bet,
                format_board(&s.hole_cards),
                format_board(&s.board_cards),
                equity,
                format_decision(&point.action_taken),
            )?;
        }
    }

    for issue in &issues {
        writeln!(err, "WARNING: {}", issue)?;
    }
    Ok(())
}
