use crate::models::{PaceResult, RaceDistance, SplitConversionResult};
use crate::time::{format_hms, format_seconds};

/// Format a distance in meters without trailing zeros
fn format_meters(meters: f64) -> String {
    if meters.fract() == 0.0 {
        format!("{:.0}m", meters)
    } else {
        format!("{}m", meters)
    }
}

/// Render goal-pace results as markdown
pub fn goal_pace_markdown(
    distance: RaceDistance,
    distance_meters: f64,
    total_seconds: f64,
    result: &PaceResult,
) -> String {
    let rep_meters = f64::from(result.breakdown.reps()) * 200.0;

    let title = match distance {
        RaceDistance::Custom => format_meters(distance_meters),
        preset => preset.label().to_string(),
    };
    let mut output = format!("# Goal Pace: {} in {}\n\n", title, format_hms(total_seconds));

    output.push_str(&format!(
        "- **Pace per mile:** {}\n",
        format_seconds(result.pace_per_mile)
    ));
    output.push_str(&format!(
        "- **Pace per km:** {}\n",
        format_seconds(result.pace_per_km)
    ));
    output.push_str(&format!(
        "- **200m split:** {}\n",
        format_seconds(result.split_200)
    ));
    output.push_str(&format!(
        "- **400m split:** {}\n",
        format_seconds(result.split_400)
    ));
    output.push_str(&format!(
        "- **{} time:** {}\n",
        format_meters(rep_meters),
        format_seconds(result.rep_seconds)
    ));

    output.push_str(&format!(
        "\n## {} breakdown (200m splits)\n\n",
        format_meters(rep_meters)
    ));
    output.push_str("| Distance | Cumulative split |\n");
    output.push_str("|----------|------------------|\n");
    for row in result.breakdown.iter() {
        output.push_str(&format!(
            "| {} | {} |\n",
            format_meters(row.distance_meters),
            format_seconds(row.cumulative_seconds)
        ));
    }

    output
}

/// Render split-conversion results as markdown
pub fn split_markdown(result: &SplitConversionResult) -> String {
    let mut output = String::from("# 200m Split Conversion\n\n");

    output.push_str(&format!(
        "- **200m split:** {}\n",
        format_seconds(result.split_200)
    ));
    output.push_str(&format!(
        "- **Pace per mile:** {}\n",
        format_seconds(result.pace_per_mile)
    ));
    output.push_str(&format!(
        "- **Pace per km:** {}\n",
        format_seconds(result.pace_per_km)
    ));

    output
}

/// Render the preset race distances as a markdown list
pub fn distances_markdown() -> String {
    let mut output = String::from("# Race Distances\n\n");

    for distance in RaceDistance::PRESETS {
        if let Some(meters) = distance.meters() {
            output.push_str(&format!(
                "- **{}** (`{}`): {}\n",
                distance.label(),
                distance.wire_name(),
                format_meters(meters)
            ));
        }
    }
    output.push_str("- **Custom** (`custom`): any positive distance in meters\n");

    output
}
