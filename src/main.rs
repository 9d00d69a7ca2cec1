use anyhow::Context;
use clap::Parser;
use relgraph::algo::{find_friend_cliques, find_person_cliques};
use relgraph::graph::{EntityId, GraphStore};
use serde::Serialize;
use std::path::PathBuf;

/// Load the two entity schemas and report the clique structure
#[derive(Parser)]
#[command(name = "relgraph", version, about)]
struct Args {
    /// Entity property source
    #[arg(default_value = "data/entity_properties.txt")]
    properties: PathBuf,

    /// Entity relationship source
    #[arg(default_value = "data/entity_relationships.txt")]
    relationships: PathBuf,

    /// Smallest clique size worth reporting
    #[arg(long, default_value_t = 3)]
    min_size: usize,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    entities: usize,
    relationships: usize,
    friend_cliques: Vec<Vec<EntityId>>,
    person_cliques: Vec<Vec<EntityId>>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let store = GraphStore::from_files(&args.properties, &args.relationships)
        .context("failed to load graph sources")?;

    let friend_cliques = filter_by_size(find_friend_cliques(&store), args.min_size);
    let person_cliques = filter_by_size(find_person_cliques(&store), args.min_size);

    if args.json {
        let report = Report {
            entities: store.entity_count(),
            relationships: store.relationship_count(),
            friend_cliques,
            person_cliques,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("relgraph v{}", relgraph::version());
    println!();
    println!("Entities:      {}", store.entity_count());
    println!("Relationships: {}", store.relationship_count());
    println!();

    println!("Connections per entity:");
    for entity in store.entities() {
        println!(
            "  {} ({} connections)",
            entity.id,
            store.neighbor_count(&entity.id)
        );
    }
    println!();

    print_cliques("Friend cliques", &friend_cliques, args.min_size);
    print_cliques("Person cliques", &person_cliques, args.min_size);

    Ok(())
}

fn filter_by_size(cliques: Vec<Vec<EntityId>>, min_size: usize) -> Vec<Vec<EntityId>> {
    cliques
        .into_iter()
        .filter(|clique| clique.len() >= min_size)
        .collect()
}

fn print_cliques(title: &str, cliques: &[Vec<EntityId>], min_size: usize) {
    println!("{} (size >= {}):", title, min_size);
    if cliques.is_empty() {
        println!("  No cliques were found");
    }
    for clique in cliques {
        let members: Vec<&str> = clique.iter().map(EntityId::as_str).collect();
        println!("  {}", members.join(", "));
    }
    println!();
}
