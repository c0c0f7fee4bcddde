use std::path::Path;

use fontscale_core::{FontScaleLookup, TableConfig};

pub fn init(path: &str, force: bool) -> anyhow::Result<()> {
    let output = Path::new(path);
    if output.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", output.display());
    }

    std::fs::write(output, TableConfig::scaffold().to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}

pub fn check(path: &str) -> anyhow::Result<()> {
    let lookup = TableConfig::from_file(Path::new(path))?.into_lookup()?;
    print!("{}", summarize(&lookup));
    Ok(())
}

fn summarize(lookup: &FontScaleLookup) -> String {
    let scales: Vec<String> = lookup
        .table()
        .keys()
        .map(|k| k.scale().to_string())
        .collect();
    format!(
        "✓ {} curves at scales {}\n  Non-linear scaling starts at {}\n",
        lookup.table().len(),
        scales.join(", "),
        lookup.min_activation_scale()
    )
}
