use crate::*;

pub fn handle_kb_commands(cli: &Cli, kb: &KnowledgeBase) -> anyhow::Result<bool> {
    let Commands::Kb { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        KbCommands::Show {
            jurisdiction,
            section,
            key,
        } => {
            let entry = kb.entry(*jurisdiction, *section, key)?;
            audit(
                "kb_show",
                serde_json::json!({
                    "jurisdiction": jurisdiction.code(),
                    "section": section.label(),
                    "key": key
                }),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: entry
                    })?
                );
            } else {
                println!("jurisdiction: {}", jurisdiction.label());
                println!("section: {}", section.label());
                println!("key: {}", entry.key);
                println!("title: {}", entry.title);
                println!("text: {}", entry.text);
                println!("source: {}", entry.source);
                println!("tags: {}", entry.tags.join(", "));
                if let Some(quote) = &entry.quote {
                    println!("quote: \"{}\" ({})", quote.text, quote.attribution);
                }
            }
        }
        KbCommands::Search { tag } => {
            let hits = kb.search_by_tag(tag);
            audit(
                "kb_search",
                serde_json::json!({"tag": tag, "hits": hits.len()}),
            );
            print_out(cli.json, &hits, |h| {
                format!(
                    "{}\t{}\t{}\t{}",
                    h.jurisdiction.code(),
                    h.section.label(),
                    h.entry.key,
                    h.entry.title
                )
            })?;
        }
        KbCommands::List => {
            let listing = kb.listing();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: listing
                    })?
                );
            } else {
                for section in &listing.sections {
                    println!(
                        "{} {} ({} entries)",
                        section.jurisdiction.code(),
                        section.section.label(),
                        section.keys.len()
                    );
                    for key in &section.keys {
                        println!("- {}", key);
                    }
                }
                println!("total: {} entries", listing.total_entries);
            }
        }
    }

    Ok(true)
}
