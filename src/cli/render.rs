//! Text rendering of board snapshots.
//!
//! Everything here works on [`BoardView`]s and produces plain lines; the
//! caller decides where they go.

use crate::core::{BoardView, CellView, ShipStatus, ShotReport, ShotStatus};
use crate::player::cli::{column_letter, coord_label};

/// Symbol set for drawing boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub water: &'static str,
    pub unknown: &'static str,
    pub ship: &'static str,
    pub hit: &'static str,
    pub miss: &'static str,
    /// Terminal columns taken by one cell, separator included.
    pub cell_width: usize,
    emoji: bool,
}

impl Glyphs {
    pub const ASCII: Glyphs = Glyphs {
        water: ".",
        unknown: "?",
        ship: "S",
        hit: "X",
        miss: "o",
        cell_width: 2,
        emoji: false,
    };

    pub const EMOJI: Glyphs = Glyphs {
        water: "🌊",
        unknown: "❓",
        ship: "🚢",
        hit: "💥",
        miss: "💨",
        cell_width: 3,
        emoji: true,
    };

    fn cell(&self, cell: CellView) -> &'static str {
        match cell {
            CellView::Unknown => self.unknown,
            CellView::Empty => self.water,
            CellView::Ship => self.ship,
            CellView::Hit => self.hit,
            CellView::Miss => self.miss,
        }
    }

    /// Icon for a ship, keyed by its class name.
    pub fn ship_icon(&self, name: &str) -> &'static str {
        if !self.emoji {
            return self.ship;
        }
        match name.to_ascii_lowercase().as_str() {
            "battleship" => "🛥️",
            "cruiser" | "submarine" => "🚤",
            "destroyer" => "⛵",
            _ => "🚢",
        }
    }
}

/// Visual width of a rendered board line.
pub fn board_width(size: usize, glyphs: &Glyphs) -> usize {
    3 + size * glyphs.cell_width
}

/// Column header followed by one line per row.
pub fn board_lines(view: &BoardView, glyphs: &Glyphs) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.size + 1);
    let mut header = String::from("   ");
    for c in 0..view.size {
        header.push(column_letter(c));
        header.push_str(&" ".repeat(glyphs.cell_width - 1));
    }
    lines.push(header);
    for (r, row) in view.cells.iter().enumerate() {
        let mut line = format!("{:2} ", r);
        for &cell in row {
            line.push_str(glyphs.cell(cell));
            line.push(' ');
        }
        lines.push(line);
    }
    lines
}

/// Two boards next to each other under their titles.
pub fn side_by_side(
    left_title: &str,
    left: &BoardView,
    right_title: &str,
    right: &BoardView,
    glyphs: &Glyphs,
) -> Vec<String> {
    const GAP: &str = "    ";
    let width = board_width(left.size, glyphs);
    let mut lines = vec![format!("{:<width$}{}{}", left_title, GAP, right_title)];
    let left_lines = board_lines(left, glyphs);
    let right_lines = board_lines(right, glyphs);
    for (l, r) in left_lines.iter().zip(right_lines.iter()) {
        lines.push(format!("{}{}{}", l, GAP, r));
    }
    lines
}

fn ship_line(ship: &ShipStatus, glyphs: &Glyphs) -> String {
    let status = if ship.sunk {
        "SUNK".to_string()
    } else {
        format!("{}/{} hits", ship.hits, ship.size)
    };
    format!("  {} {}: {}", glyphs.ship_icon(ship.name), ship.name, status)
}

/// One line per ship with its damage.
pub fn fleet_status_lines(view: &BoardView, glyphs: &Glyphs) -> Vec<String> {
    view.ships.iter().map(|s| ship_line(s, glyphs)).collect()
}

pub fn legend(glyphs: &Glyphs) -> String {
    format!(
        "LEGEND: {} = ship  {} = hit  {} = miss  {} = water  {} = unknown",
        glyphs.ship, glyphs.hit, glyphs.miss, glyphs.water, glyphs.unknown
    )
}

/// One-line account of a shot, e.g. `Player 1 fires at C4: HIT Cruiser`.
pub fn describe_shot(shooter: &str, report: &ShotReport) -> String {
    let target = coord_label(report.target);
    match report.status {
        ShotStatus::Fresh => {}
        ShotStatus::AlreadyShot => {
            return format!("{} fires at {} again: shot wasted", shooter, target)
        }
        ShotStatus::OutOfBounds => {
            return format!("{} fires off the board: shot wasted", shooter)
        }
    }
    match report.ship {
        Some(ship) if ship.sunk => {
            format!("{} fires at {}: HIT and sunk the {}!", shooter, target, ship.name)
        }
        Some(ship) => format!("{} fires at {}: HIT {}", shooter, target, ship.name),
        None if report.hit => format!("{} fires at {}: HIT", shooter, target),
        None => format!("{} fires at {}: miss", shooter, target),
    }
}
