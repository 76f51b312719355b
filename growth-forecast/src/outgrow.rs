use growth_core::errors::GrowthResult;
use growth_core::models::{OutgrowPoint, TrajectoryPoint};
use growth_core::types::SizeTable;

/// Probability curve of outgrowing the child's current size.
///
/// For each trajectory point, the fraction of simulated heights strictly
/// above the current bucket's upper bound — a forward-looking "needs the
/// next size up" signal for alerts. Fails with `UnknownSize` if the code
/// is not in the catalog.
pub fn outgrow_curve(
    points: &[TrajectoryPoint],
    sizes: &SizeTable,
    current_code: &str,
) -> GrowthResult<Vec<OutgrowPoint>> {
    let bucket = sizes.bucket(current_code)?;
    let h_max = bucket.height_max;

    Ok(points
        .iter()
        .map(|p| {
            let over = p.heights.iter().filter(|h| **h > h_max).count();
            let prob_over = if p.heights.is_empty() {
                0.0
            } else {
                over as f64 / p.heights.len() as f64
            };
            OutgrowPoint {
                month_offset: p.month_offset,
                date: p.date,
                prob_over,
            }
        })
        .collect())
}
