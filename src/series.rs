use std::ops::Range;

/// Evaluations of one game, one value per ply, from White's perspective
/// (positive favors White, negative favors Black).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalSeries {
    values: Vec<f64>,
}

impl EvalSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Horizontal position of a ply: the move number advances every two plies.
    pub fn x_position(ply: usize) -> f64 {
        1.0 + ply as f64 / 2.0
    }

    pub fn x_positions(&self) -> Vec<f64> {
        (0..self.len()).map(Self::x_position).collect()
    }

    /// Upper horizontal bound, `(n + 1) / 2`. Equals the x of the last ply.
    pub fn x_bound(&self) -> f64 {
        (self.len() as f64 + 1.0) / 2.0
    }

    /// Horizontal view range. Games with fewer than two plies get half a move
    /// of width so the coordinate mapping never collapses.
    pub fn view_x_range(&self) -> (f64, f64) {
        let upper = self.x_bound();
        if upper > 1.0 {
            (1.0, upper)
        } else {
            (1.0, 1.5)
        }
    }

    /// One tick per full move (every other ply).
    pub fn tick_positions(&self) -> Vec<f64> {
        self.x_positions().into_iter().step_by(2).collect()
    }

    pub fn negative_mask(&self) -> Vec<bool> {
        self.values.iter().map(|&v| v < 0.0).collect()
    }

    /// Plies covered by the Black fill: negative here or on the previous ply.
    pub fn black_mask(&self) -> Vec<bool> {
        widen(&self.negative_mask())
    }

    /// Plies covered by the White fill: non-negative here or on the previous ply.
    pub fn white_mask(&self) -> Vec<bool> {
        let non_negative: Vec<bool> = self.negative_mask().iter().map(|&n| !n).collect();
        widen(&non_negative)
    }

    pub fn black_values(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v.min(0.0)).collect()
    }

    pub fn white_values(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v.max(0.0)).collect()
    }

    /// Vertices of the post-step curve through every ply.
    pub fn step_line(&self) -> Vec<(f64, f64)> {
        step_points(&self.x_positions(), &self.values, 0..self.len())
    }
}

/// Moves every flag one position later. The first position has no
/// predecessor and is always `false`.
pub fn shifted(mask: &[bool]) -> Vec<bool> {
    std::iter::once(false)
        .chain(mask.iter().copied())
        .take(mask.len())
        .collect()
}

fn widen(mask: &[bool]) -> Vec<bool> {
    mask.iter()
        .zip(shifted(mask))
        .map(|(&here, before)| here || before)
        .collect()
}

/// Contiguous index ranges where the mask is set.
pub fn mask_runs(mask: &[bool]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, &set) in mask.iter().enumerate() {
        match (set, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..mask.len());
    }
    runs
}

fn step_points(xs: &[f64], ys: &[f64], run: Range<usize>) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(run.len() * 2);
    for i in run.clone() {
        points.push((xs[i], ys[i]));
        if i + 1 < run.end {
            points.push((xs[i + 1], ys[i]));
        }
    }
    points
}

/// Closed polygon for one masked run: the post-step curve over `run`,
/// dropped to the zero line at both ends. The run stops at the x of its
/// last ply.
pub fn step_outline(xs: &[f64], ys: &[f64], run: Range<usize>) -> Vec<(f64, f64)> {
    if run.is_empty() {
        return Vec::new();
    }
    let first_x = xs[run.start];
    let last_x = xs[run.end - 1];

    let mut outline = vec![(first_x, 0.0)];
    outline.extend(step_points(xs, ys, run));
    outline.push((last_x, 0.0));
    outline
}

/// Cuts a polyline down to the parts inside the horizontal band
/// `lo..=hi`. Segments crossing an edge are split where they cross it, so
/// each returned piece is a continuous path that never leaves the band.
pub fn clip_to_band(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let mut pieces = Vec::new();
    if let [only] = points {
        if (lo..=hi).contains(&only.1) {
            pieces.push(vec![*only]);
        }
        return pieces;
    }

    let mut current: Vec<(f64, f64)> = Vec::new();
    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], lo, hi) {
            Some((from, to)) => {
                if current.last() != Some(&from) {
                    flush_piece(&mut current, &mut pieces);
                    current.push(from);
                }
                current.push(to);
            }
            None => flush_piece(&mut current, &mut pieces),
        }
    }
    flush_piece(&mut current, &mut pieces);
    pieces
}

fn flush_piece(current: &mut Vec<(f64, f64)>, pieces: &mut Vec<Vec<(f64, f64)>>) {
    if !current.is_empty() {
        pieces.push(std::mem::take(current));
    }
}

// Endpoints that need no cut are returned as-is so consecutive segments
// still join exactly. Cut points sit exactly on the edge they cross.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    lo: f64,
    hi: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let dy = to.1 - from.1;
    if dy == 0.0 {
        return (lo..=hi).contains(&from.1).then_some((from, to));
    }

    let (t_lo, t_hi) = ((lo - from.1) / dy, (hi - from.1) / dy);
    let ((t_in, y_in), (t_out, y_out)) = if t_lo < t_hi {
        ((t_lo, lo), (t_hi, hi))
    } else {
        ((t_hi, hi), (t_lo, lo))
    };
    if t_in.max(0.0) > t_out.min(1.0) {
        return None;
    }

    let x_at = |t: f64| from.0 + (to.0 - from.0) * t;
    let start = if t_in > 0.0 { (x_at(t_in), y_in) } else { from };
    let end = if t_out < 1.0 { (x_at(t_out), y_out) } else { to };
    Some((start, end))
}
