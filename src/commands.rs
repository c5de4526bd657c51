use std::path::Path;

use snippets::config::{self, SnippetsConfig};
use snippets::output::{self, OutputMode, emit_success};
use snippets::storage::SqliteStore;
use snippets::ui;

pub fn run_put(store: &mut SqliteStore, output_mode: OutputMode, name: &str, snippet: &str) -> anyhow::Result<()> {
    let receipt = store.put(name, snippet)?;
    if output_mode.is_human() {
        ui::stored(&receipt.snippet.keyword, &receipt.snippet.message);
    } else {
        emit_success(output_mode, "put", output::put_data(&receipt))?;
    }
    Ok(())
}

pub fn run_get(store: &SqliteStore, output_mode: OutputMode, name: &str) -> anyhow::Result<()> {
    let message = store.get(name)?;
    if output_mode.is_human() {
        println!("{}", output::render_lookup(message.as_deref()));
    } else {
        emit_success(output_mode, "get", output::get_data(name, message.as_deref()))?;
    }
    Ok(())
}

pub fn run_catalog(store: &SqliteStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let keywords = store.catalog()?;
    if output_mode.is_human() {
        for keyword in &keywords {
            println!("{}", keyword);
        }
    } else {
        emit_success(output_mode, "catalog", output::catalog_data(&keywords))?;
    }
    Ok(())
}

pub fn run_search(store: &SqliteStore, output_mode: OutputMode, query: &str) -> anyhow::Result<()> {
    let results = store.search(query)?;
    if output_mode.is_human() {
        if results.is_empty() {
            ui::nothing_found("No snippets found.");
        } else {
            println!("{}", ui::snippet_table(&results));
        }
    } else {
        emit_success(output_mode, "search", output::search_data(query, &results))?;
    }
    Ok(())
}

/// Write a config pointing at `database` and create the (empty) store there
pub fn run_init(output_mode: OutputMode, config_path: &Path, database: &Path, force: bool) -> anyhow::Result<()> {
    let config = SnippetsConfig {
        database: Some(database.to_string_lossy().into_owned()),
        log_file: None,
    };
    config::write_config(config_path, &config, force)?;

    config::ensure_db_dir(database)?;
    SqliteStore::open(database)?.close()?;

    if output_mode.is_human() {
        ui::info("Config", &ui::dim(&config_path.display().to_string()));
        ui::info("Database", &ui::dim(&database.display().to_string()));
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": database.display().to_string(),
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}
