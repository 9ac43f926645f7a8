use revision_tracker::*;

use chrono::Utc;
use database::db::{add_problem, get_all_problems, get_due_problems, init_database};
use log::info;
use std::path::PathBuf;

fn run() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let scheduler = Scheduler::new(config.interval_curve()?);
    let classifier = StatusClassifier::new(config.calendar()?);
    let conn = init_database(&config.database_path)?;
    let now = Utc::now();

    if get_all_problems(&conn)?.is_empty() {
        let mut two_sum = NewProblem::new("Two Sum", Difficulty::Easy);
        two_sum.url = Some("https://leetcode.com/problems/two-sum/".to_string());
        two_sum.topics = vec!["arrays".to_string(), "hashing".to_string()];
        add_problem(&conn, &two_sum, now, &scheduler)?;

        let mut lru = NewProblem::new("LRU Cache", Difficulty::Medium);
        lru.topics = vec!["design".to_string(), "linked list".to_string()];
        add_problem(&conn, &lru, now, &scheduler)?;

        info!("Sample problems created");
    }

    let due = get_due_problems(&conn, now)?;
    info!("Loaded {} due problems", due.len());

    if due.is_empty() {
        println!("No problems due for revision right now!");
        return Ok(());
    }

    println!("Due for Revision");
    for problem in &due {
        let view = classifier.describe(problem, now);
        let marker = if view.status.is_urgent() { "!" } else { " " };
        println!(
            "{} {:<40} {:<7} {:<16} last: {:<12} revisions: {}",
            marker,
            view.title,
            view.difficulty,
            view.status.label,
            view.last_revised,
            view.revision_count
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
