use fontscale_core::{FontScaleLookup, KeySearch, ScaleKey};

use super::load_lookup;

pub fn convert(scale: f32, size: f32, reverse: bool, table: Option<&str>) -> anyhow::Result<()> {
    let lookup = load_lookup(table)?;
    println!("{}", render_conversion(&lookup, scale, size, reverse));
    Ok(())
}

pub fn curve(scale: f32, format: &str, table: Option<&str>) -> anyhow::Result<()> {
    let lookup = load_lookup(table)?;
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&curve_json(&lookup, scale))?);
        }
        _ => {
            print!("{}", render_curve(&lookup, scale));
        }
    }
    Ok(())
}

fn render_conversion(lookup: &FontScaleLookup, scale: f32, size: f32, reverse: bool) -> String {
    let (from, to) = if reverse { ("dp", "sp") } else { ("sp", "dp") };
    let result = if reverse {
        lookup.unscale_size(scale, size)
    } else {
        lookup.scale_size(scale, size)
    };

    let mut line = format!("{size}{from} → {result}{to} at scale {scale}");
    if !lookup.is_active(scale) {
        line.push_str(&format!(
            " (linear: non-linear scaling starts at {})",
            lookup.min_activation_scale()
        ));
    }
    line
}

/// How the lookup resolved a scale.
fn resolution(lookup: &FontScaleLookup, scale: f32) -> &'static str {
    if !lookup.is_active(scale) {
        return "inactive";
    }
    match lookup.table().search(ScaleKey::from_scale(scale)) {
        KeySearch::Found(_) => "stored",
        KeySearch::Between { lower: Some(_), higher: Some(_) } => "interpolated",
        KeySearch::Between { .. } => "linear",
    }
}

fn render_curve(lookup: &FontScaleLookup, scale: f32) -> String {
    let mut out = format!("Font scale {scale} ({})\n", resolution(lookup, scale));
    match lookup.lookup(scale) {
        Some(curve) => {
            for (sp, dp) in curve.points() {
                out.push_str(&format!("  {sp:>7.2}sp → {dp:>7.2}dp\n"));
            }
        }
        None => {
            out.push_str(&format!(
                "  sizes scale linearly below {}\n",
                lookup.min_activation_scale()
            ));
        }
    }
    out
}

fn curve_json(lookup: &FontScaleLookup, scale: f32) -> serde_json::Value {
    let curve = lookup.lookup(scale);
    serde_json::json!({
        "scale": scale,
        "key": ScaleKey::from_scale(scale).get(),
        "min_activation_scale": lookup.min_activation_scale(),
        "resolution": resolution(lookup, scale),
        "curve": curve.as_deref(),
    })
}
