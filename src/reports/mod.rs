use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use evalgraph::summary::{EvalSummary, PlyEval, Side};

fn side_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::DarkGrey,
        Side::Even => Color::Cyan,
    }
}

fn ply_cell(entry: Option<PlyEval>) -> Cell {
    match entry {
        Some(p) => Cell::new(format!("{:+.2} (move {}, ply {})", p.eval, p.move_number, p.ply)),
        None => Cell::new("-"),
    }
}

pub fn print_summary(summary: &EvalSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Plies").add_attribute(Attribute::Bold),
        Cell::new("Moves").add_attribute(Attribute::Bold),
        Cell::new("Final").fg(Color::Cyan),
        Cell::new("Peak").fg(Color::Green),
        Cell::new("Trough").fg(Color::Red),
        Cell::new("Swings"),
        Cell::new("Leader").add_attribute(Attribute::Bold),
    ]);

    let final_eval = summary
        .final_eval
        .map(|e| format!("{:+.2}", e))
        .unwrap_or_else(|| "-".to_string());

    table.add_row(vec![
        Cell::new(summary.plies),
        Cell::new(summary.moves),
        Cell::new(final_eval).fg(Color::Cyan),
        ply_cell(summary.peak).fg(Color::Green),
        ply_cell(summary.trough).fg(Color::Red),
        Cell::new(summary.lead_changes),
        Cell::new(summary.leader).fg(side_color(summary.leader)),
    ]);

    for i in [0, 1, 2, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n📈 === EVALUATION SUMMARY === 📈");
    println!("{}", table);
}
