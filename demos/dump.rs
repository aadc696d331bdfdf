//! Prints every namespace of the builtin appearance table.
//!
//! Pass a path to a JSON appearance table to check it against the schema and
//! print its namespaces instead.

use anyhow::Context;
use procyon_appearance::{Appearance, DEFAULT, Namespace, application};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let custom = match std::env::args().nth(1) {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("could not read appearance table at \"{path}\""))?;
            let appearance = Appearance::from_json(source)
                .with_context(|| format!("\"{path}\" is not a valid appearance table"))?;
            Some(appearance)
        }
        None => None,
    };

    let appearance: &Appearance = custom.as_ref().unwrap_or(&DEFAULT);

    println!("# {}", appearance.name);
    for namespace in Namespace::ALL {
        println!();
        println!("[{namespace}]");
        println!("{}", namespace.view(appearance).table());
    }

    if custom.is_none() {
        let base = application::base_color();
        println!();
        println!("baseColor resolves to #{:08X}", base.argb());
    }

    Ok(())
}
