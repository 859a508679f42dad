use std::collections::BTreeMap;

use sd_core::save::{RosterSave, SaveManager};
use sd_core::{AppState, DraftSession, Roster};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Testing Roster Save/Load Integration...");
    println!("📁 Using current directory for save tests (saves/ subdirectory)");

    // Test 1: Basic save/load cycle
    println!("\n🧪 Test 1: Basic save/load functionality");

    let mut name_lists = BTreeMap::new();
    name_lists.insert(
        "common+".to_string(),
        vec!["Alice+".to_string(), "Bob-+".to_string(), "Carol".to_string()],
    );
    name_lists.insert("additional".to_string(), vec!["Ron".to_string()]);

    let mut original = RosterSave::new();
    original.name_lists = name_lists;
    println!("✅ Created RosterSave with {} categories", original.name_lists.len());

    SaveManager::save(&original)?;
    println!("✅ Successfully saved roster blob");

    if SaveManager::save_exists() {
        println!("✅ Save file exists");
    } else {
        return Err("Save file should exist but doesn't".into());
    }

    SaveManager::clear_current_state();
    if SaveManager::get_current_state().is_none() {
        println!("✅ Current state cleared");
    } else {
        return Err("Current state should be cleared".into());
    }

    let loaded = SaveManager::load()?;
    println!("✅ Successfully loaded roster blob");

    if loaded.name_lists == original.name_lists && loaded.version == original.version {
        println!("✅ Data integrity verified - all values match");
    } else {
        return Err(format!(
            "Data integrity failed - expected {:?}, got {:?}",
            original.name_lists, loaded.name_lists
        )
        .into());
    }

    // Test 2: Loaded blob drives a real draft
    println!("\n🧪 Test 2: Loaded roster drives a draft");

    let roster = Roster::from_config(&loaded.name_lists);
    let mut state = AppState { roster, ..AppState::new() };
    state.draft = DraftSession::with_seed(42);

    let table = state.current_table()?;
    println!("✅ Drafted {} participants into {} teams", table.members().count(), table.width());
    for (i, row) in table.rows.iter().enumerate() {
        let names: Vec<String> = row
            .iter()
            .map(|c| {
                if c.is_spymaster {
                    format!("{} (spymaster)", c.name)
                } else if c.name.is_empty() {
                    "-".to_string()
                } else {
                    c.name.clone()
                }
            })
            .collect();
        println!("   Row {}: {}", i, names.join(" | "));
    }

    // Test 3: Cleanup
    println!("\n🧪 Test 3: Delete save");
    SaveManager::delete()?;
    if !SaveManager::save_exists() {
        println!("✅ Save file removed");
    } else {
        return Err("Save file should be gone".into());
    }

    println!("\n🎉 All save/load integration tests passed!");
    Ok(())
}
