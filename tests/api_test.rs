use holdem_betting::{
    api::{
        commands::{execute_command, execute_json_command, AwardPotCommand, Command},
        dto::{CommandResponse, TableViewDto},
        errors::ApiError,
        queries::{build_available_actions, build_table_view, execute_query, Query, QueryResponse},
    },
    domain::{Chips, Round, TableConfig},
    engine::{BettingEngine, EngineError, PlayerActionKind},
};

/// Утилита: стол из трёх игроков с блайндами 5/10.
fn make_engine() -> BettingEngine {
    BettingEngine::new(&["alice", "bob", "carol"], TableConfig::default()).expect("конфиг валиден")
}

fn table_of(response: CommandResponse) -> TableViewDto {
    match response {
        CommandResponse::TableState(table) => table,
        CommandResponse::HandFinished { table, .. } => table,
    }
}

#[test]
fn table_view_before_first_hand() {
    let engine = make_engine();
    let view = build_table_view(&engine);

    assert_eq!(view.hand_number, 0);
    assert_eq!(view.round, None);
    assert_eq!(view.dealer, None);
    assert_eq!(view.current_player, None);
    assert!(view.is_hand_over);
    assert!(view.pots.is_empty());
    assert_eq!(view.players.len(), 3);
    assert!(view.players.iter().all(|p| p.chips == Chips(100)));
}

#[test]
fn start_hand_command_returns_table_state() {
    let mut engine = make_engine();
    let table = match execute_command(&mut engine, Command::StartHand).unwrap() {
        CommandResponse::TableState(table) => table,
        other => panic!("ожидали TableState, получили {:?}", other),
    };

    assert_eq!(table.hand_number, 1);
    assert_eq!(table.round, Some(Round::PreFlop));
    assert_eq!(table.dealer.as_deref(), Some("alice"));
    assert_eq!(table.current_player.as_deref(), Some("alice"));
    assert_eq!(table.total_pot, Chips(15));
    assert_eq!(table.pots.len(), 1);
    assert_eq!(table.pots[0].players, vec!["bob".to_string(), "carol".to_string()]);

    let current: Vec<_> = table.players.iter().filter(|p| p.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].name, "alice");
    assert!(table.players[0].is_dealer);
}

#[test]
fn available_actions_follow_engine() {
    let mut engine = make_engine();

    let idle = build_available_actions(&engine);
    assert_eq!(idle.player, None);
    assert!(!idle.can_fold);

    engine.start_new_hand().unwrap();
    let actions = match execute_query(&engine, &Query::AvailableActions) {
        QueryResponse::Actions(actions) => actions,
        other => panic!("ожидали Actions, получили {:?}", other),
    };
    assert_eq!(actions.player.as_deref(), Some("alice"));
    assert!(!actions.can_check);
    assert!(actions.can_call);
    assert!(actions.can_raise);
    assert!(actions.can_fold);
    assert_eq!(actions.amount_to_call, Chips(10));
}

#[test]
fn hand_finished_response_lists_pots_to_award() {
    let mut engine = make_engine();
    execute_command(&mut engine, Command::StartHand).unwrap();
    execute_command(&mut engine, Command::PlayerAction(PlayerActionKind::Fold)).unwrap();

    let response = execute_command(&mut engine, Command::PlayerAction(PlayerActionKind::Fold)).unwrap();
    match response {
        CommandResponse::HandFinished { table, pots_to_award } => {
            assert!(table.is_hand_over);
            assert_eq!(table.current_player, None);
            assert_eq!(pots_to_award, vec![0]);
        }
        other => panic!("ожидали HandFinished, получили {:?}", other),
    }

    let award = Command::AwardPot(AwardPotCommand {
        pot_index: 0,
        winners: vec!["carol".to_string()],
    });
    let table = table_of(execute_command(&mut engine, award).unwrap());
    assert!(table.pots[0].is_awarded);
    assert_eq!(table.players[2].chips, Chips(105));
}

#[test]
fn json_commands_drive_a_hand() {
    let mut engine = BettingEngine::new(&["a", "b"], TableConfig::default()).unwrap();

    execute_json_command(&mut engine, r#""StartHand""#).unwrap();
    execute_json_command(&mut engine, r#"{"PlayerAction":{"Raise":15}}"#).unwrap();
    let table = table_of(execute_json_command(&mut engine, r#"{"PlayerAction":"Call"}"#).unwrap());

    assert!(table.is_round_over);
    assert_eq!(table.highest_bet_this_hand, Chips(20));

    let table = table_of(execute_json_command(&mut engine, r#""StartRound""#).unwrap());
    assert_eq!(table.round, Some(Round::Flop));
    assert_eq!(table.current_player.as_deref(), Some("b"));
}

#[test]
fn bad_json_is_bad_request() {
    let mut engine = make_engine();
    let err = execute_json_command(&mut engine, "{not json").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn engine_errors_are_mapped() {
    let mut engine = make_engine();

    let err = execute_command(&mut engine, Command::StartRound).unwrap_err();
    assert_eq!(err, ApiError::EngineError(EngineError::HandAlreadyOver.to_string()));

    engine.start_new_hand().unwrap();
    engine.fold().unwrap();
    engine.fold().unwrap();

    let award = Command::AwardPot(AwardPotCommand {
        pot_index: 0,
        winners: vec!["mallory".to_string()],
    });
    let err = execute_command(&mut engine, award).unwrap_err();
    assert_eq!(err, ApiError::UnknownPlayer("mallory".to_string()));
}

#[test]
fn table_view_serializes_to_json() {
    let mut engine = make_engine();
    engine.start_new_hand().unwrap();

    let view = build_table_view(&engine);
    let json = serde_json::to_string(&view).unwrap();
    let back: TableViewDto = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert!(json.contains("\"round\":\"PreFlop\""));
}
