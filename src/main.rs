use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;
use vamsha::graph::{FamilyGraph, Gender, PersonId, RelationshipType};
use vamsha::stats::family_statistics_today;
use vamsha::tree::build_family_tree_today;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Vamsha Family Graph Engine v{}", vamsha::version());
    println!("==========================================");
    println!();

    let family = demo_family()?;
    demo_tree(&family)?;
    demo_statistics(&family)?;

    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn member(
    family: &mut FamilyGraph,
    first: &str,
    gender: Gender,
    birth: Option<NaiveDate>,
    death: Option<NaiveDate>,
) -> PersonId {
    let id = family.create_person(first, "Rao");
    if let Some(person) = family.get_person_mut(id) {
        person.gender = gender;
        person.birth_date = birth;
        person.death_date = death;
    }
    id
}

fn demo_family() -> Result<FamilyGraph> {
    println!("=== Demo 1: Relationship Graph ===");
    let mut family = FamilyGraph::new(Uuid::new_v4());
    let editor = Uuid::new_v4();

    let kiran = member(&mut family, "Kiran", Gender::Male, date(1995, 4, 12), None);
    let ravi = member(&mut family, "Ravi", Gender::Male, date(1965, 9, 3), None);
    let asha = member(&mut family, "Asha", Gender::Female, date(1967, 1, 21), None);
    let gopal = member(
        &mut family,
        "Gopal",
        Gender::Male,
        date(1938, 6, 30),
        date(2012, 11, 8),
    );
    let meera = member(&mut family, "Meera", Gender::Female, date(1941, 2, 14), None);
    println!("✓ Created {} members", family.member_count());

    let created = family.create_edge(
        kiran,
        ravi,
        RelationshipType::Parent,
        Some("eldest son".to_string()),
        editor,
    )?;
    println!(
        "✓ Kiran -> Ravi (Parent), reciprocal Child edge {} derived",
        created.reciprocal.map(|id| id.to_string()).unwrap_or_default()
    );

    family.create_edge(kiran, asha, RelationshipType::Parent, None, editor)?;
    family.create_edge(ravi, asha, RelationshipType::Spouse, None, editor)?;
    family.create_edge(ravi, gopal, RelationshipType::Parent, None, editor)?;
    family.create_edge(gopal, meera, RelationshipType::Spouse, None, editor)?;
    println!("✓ {} edges in the graph", family.edge_count());

    // a second edge between an already-linked pair is refused
    let duplicate = family.create_edge(asha, kiran, RelationshipType::Child, None, editor);
    println!("✓ Duplicate rejected: {}", duplicate.unwrap_err());
    println!();

    Ok(family)
}

fn demo_tree(family: &FamilyGraph) -> Result<()> {
    println!("=== Demo 2: Family Tree ===");
    let tree = build_family_tree_today(family);
    println!("Root: {} ({} nodes, depth {})", tree.name, tree.size(), tree.depth());
    println!("{}", serde_json::to_string_pretty(&tree)?);
    println!();
    Ok(())
}

fn demo_statistics(family: &FamilyGraph) -> Result<()> {
    println!("=== Demo 3: Statistics ===");
    let stats = family_statistics_today(family);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
