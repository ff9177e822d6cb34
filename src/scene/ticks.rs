use smallvec::SmallVec;

/// Tick positions for one axis domain, at a step of 1, 2 or 5 times a power
/// of ten chosen so roughly `target_count` ticks fit.
#[must_use]
pub fn axis_ticks(domain_min: f64, domain_max: f64, target_count: usize) -> SmallVec<[f64; 16]> {
    let mut ticks = SmallVec::new();
    let span = domain_max - domain_min;
    if !span.is_finite() || span <= 0.0 || target_count == 0 {
        return ticks;
    }

    let step = nice_step(span / target_count as f64);
    let mut value = (domain_min / step).ceil() * step;
    // Tolerance keeps the max tick from dropping out to rounding.
    let limit = domain_max + step * 1e-9;
    while value <= limit {
        // Snap near-zero values produced by stepping over a signed domain.
        let snapped = if value.abs() < step * 1e-9 { 0.0 } else { value };
        ticks.push(snapped);
        value += step;
    }

    ticks
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Compact tick label: integral values render without a fractional part.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
