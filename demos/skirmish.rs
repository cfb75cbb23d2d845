//! Skirmish
//!
//! This example runs a short fight between two heroes and a pair of goblins.
//!
//! Key concepts:
//! - Building validated characters and effects
//! - Dispatching commands through a session
//! - Previewing and ending rounds
//! - Undo and persisting to disk
//!
//! Run with: RUST_LOG=roundkeeper=debug cargo run --example skirmish

use roundkeeper::builder::{effect_on, enemy, hero};
use roundkeeper::checkpoint::{FileStore, STORAGE_KEY};
use roundkeeper::core::{EffectTarget, GameState};
use roundkeeper::enforcement::SnapshotRules;
use roundkeeper::engine::{preview_end_turn, BattleEngine, BattleSession, Command};

fn print_roster(state: &GameState) {
    for c in &state.characters {
        println!(
            "  [{}] {:<8} HP {:>2}/{:<2} MP {:>2}/{:<2} AC {:>2} SPD {:>2}{}",
            c.id,
            c.name,
            c.current_hp,
            c.max_hp,
            c.current_mp,
            c.max_mp,
            c.effective_armor(),
            c.effective_speed(),
            if c.is_downed { "  (downed)" } else { "" }
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = BattleSession::new(BattleEngine::new());

    session.dispatch(Command::AddCharacter(hero("Aria").max_hp(24).armor(14).build()?));
    session.dispatch(Command::AddCharacter(hero("Bram").max_mp(20).speed(25).build()?));
    session.dispatch(Command::AddCharacter(enemy("Goblin").max_hp(7).armor(15).build()?));
    session.dispatch(Command::AddCharacter(enemy("Goblin").max_hp(7).armor(15).build()?));
    session.dispatch(Command::StartBattle);

    println!("=== Round {} ===", session.state().current_round);
    session.dispatch(Command::modify_hp("3", -5));
    session.dispatch(Command::modify_mp("2", -4));
    session.dispatch(Command::add_effect(
        "4",
        effect_on(EffectTarget::Hp).value(-2).turns(2).build()?,
    ));
    session.dispatch(Command::add_effect(
        "1",
        effect_on(EffectTarget::Armor).value(2).build()?,
    ));
    print_roster(session.state());

    println!("\nAt round end:");
    for action in preview_end_turn(session.state()) {
        println!("  {}: {}", action.character_name, action.description);
    }
    session.dispatch(Command::EndTurn);

    println!("\n=== Round {} ===", session.state().current_round);
    session.dispatch(Command::modify_hp("1", -30));
    println!("Aria takes a massive hit...");
    print_roster(session.state());

    session.dispatch(Command::Undo);
    println!("\n...which the table agrees to take back.");
    print_roster(session.state());

    println!("\nLog:");
    for round in session.state().round_history.rounds() {
        println!("  Round {}", round.round);
        for action in &round.actions {
            println!("    {}: {}", action.character_name, action.description);
        }
    }

    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;
    session.persist(&store, STORAGE_KEY)?;

    let resumed = BattleSession::restore(
        BattleEngine::new(),
        &store,
        STORAGE_KEY,
        &SnapshotRules::new(),
    );
    println!(
        "\nRestored round {} with {} characters from {}",
        resumed.state().current_round,
        resumed.state().characters.len(),
        store.base_dir().display()
    );

    Ok(())
}
