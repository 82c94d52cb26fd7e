use crate::core::Domain;

/// Resolves pan target domains from a pixel displacement.
///
/// X moves opposite to the drag (content follows the pointer) and Y moves
/// with it because screen Y grows downwards. Returns `None` when the plot
/// size or either captured span is unusable.
pub(super) fn resolve_pan_domains(
    start_x: Domain,
    start_y: Domain,
    delta_x_px: f64,
    delta_y_px: f64,
    plot_width_px: f64,
    plot_height_px: f64,
) -> Option<(Domain, Domain)> {
    if !plot_width_px.is_finite()
        || !plot_height_px.is_finite()
        || plot_width_px <= 0.0
        || plot_height_px <= 0.0
    {
        return None;
    }
    if !delta_x_px.is_finite() || !delta_y_px.is_finite() {
        return None;
    }

    let x_span = start_x.span();
    let y_span = start_y.span();
    if x_span == 0.0 || y_span == 0.0 {
        return None;
    }

    let x_shift = -(delta_x_px / plot_width_px) * x_span;
    let y_shift = (delta_y_px / plot_height_px) * y_span;

    let x = start_x.translate(x_shift).ok()?;
    let y = start_y.translate(y_shift).ok()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::resolve_pan_domains;
    use crate::core::Domain;

    fn domains() -> (Domain, Domain) {
        (
            Domain::new(0.0, 100.0).expect("x"),
            Domain::new(-10.0, 10.0).expect("y"),
        )
    }

    #[test]
    fn dragging_right_and_down_moves_window_left_and_up() {
        let (x, y) = domains();
        let (next_x, next_y) =
            resolve_pan_domains(x, y, 100.0, 50.0, 500.0, 200.0).expect("pan");
        assert!((next_x.min() + 20.0).abs() <= 1e-12);
        assert!((next_x.max() - 80.0).abs() <= 1e-12);
        assert!((next_y.min() + 5.0).abs() <= 1e-12);
        assert!((next_y.max() - 15.0).abs() <= 1e-12);
    }

    #[test]
    fn zero_span_or_plot_size_aborts() {
        let (x, y) = domains();
        assert!(resolve_pan_domains(x, y, 1.0, 1.0, 0.0, 200.0).is_none());
        let flat = Domain::point(3.0).expect("flat");
        assert!(resolve_pan_domains(flat, y, 1.0, 1.0, 500.0, 200.0).is_none());
    }

    #[test]
    fn non_finite_delta_aborts() {
        let (x, y) = domains();
        assert!(resolve_pan_domains(x, y, f64::NAN, 0.0, 500.0, 200.0).is_none());
    }
}
