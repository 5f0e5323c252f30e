//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a merged curve
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - interpolated curve: `-` line
//! - keyframes: `o`

use crate::domain::Curve;

/// Render a curve with its keyframes marked.
pub fn render_ascii_plot(curve: &Curve, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (t_min, t_max) = time_range(curve);
    let line = sample_curve(curve, t_min, t_max, width);

    let (v_min, v_max) = value_range(curve, &line);
    let (v_min, v_max) = pad_range(v_min, v_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first so keyframes overlay it.
    draw_curve(&mut grid, &line, t_min, t_max, v_min, v_max);

    for key in curve.keys() {
        let x = map_x(key.time, t_min, t_max, width);
        let y = map_y(key.value, v_min, v_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: time=[{t_min:.3}, {t_max:.3}] | value=[{v_min:.2}, {v_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn time_range(curve: &Curve) -> (f64, f64) {
    match curve.time_range() {
        Some((lo, hi)) if lo.is_finite() && hi.is_finite() && hi > lo => (lo, hi),
        Some((lo, _)) if lo.is_finite() => (lo - 0.5, lo + 0.5),
        _ => (0.0, 1.0),
    }
}

fn value_range(curve: &Curve, line: &[(f64, f64)]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;

    for &(_, v) in line {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    for key in curve.keys() {
        min_v = min_v.min(key.value);
        max_v = max_v.max(key.value);
    }

    if min_v.is_finite() && max_v.is_finite() && max_v > min_v {
        (min_v, max_v)
    } else if min_v.is_finite() {
        (min_v - 0.5, min_v + 0.5)
    } else {
        (0.0, 1.0)
    }
}

fn sample_curve(curve: &Curve, t_min: f64, t_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let t = t_min + u * (t_max - t_min);
        if let Some(v) = curve.value_at(t) {
            out.push((t, v));
        }
    }
    out
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, v_min: f64, v_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((v - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    // Row 0 is the top (largest value).
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], t_min: f64, t_max: f64, v_min: f64, v_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, v) in curve {
        let x = map_x(t, t_min, t_max, width);
        let y = map_y(v, v_min, v_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
