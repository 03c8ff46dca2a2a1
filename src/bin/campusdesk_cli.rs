use std::io::{self, BufRead};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use campusdesk::{DeskConfig, KnowledgeBase, Resolver};

/// Line-oriented front-end: one query per stdin line, one answer per stdout
/// line. Answers may contain inline HTML, exactly as served over HTTP.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = DeskConfig::from_env();
    let kb = KnowledgeBase::load(&config.kb_path)?;
    let resolver = Resolver::new(kb);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }
        if query.is_empty() {
            println!("Please type a question.");
            continue;
        }
        println!("{}", resolver.resolve(query));
    }

    Ok(())
}
