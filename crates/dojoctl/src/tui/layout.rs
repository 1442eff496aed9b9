//! Layout - drill screen grid computation
//!
//! Header and status bar hug the edges; the drill block (progress,
//! equation, answer box, feedback) is centered vertically between them.
//! Small terminals drop the spacer rows first, then the equation border.

use ratatui::layout::Rect;

/// Drill screen panel rectangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DojoLayout {
    pub header: Rect,
    pub progress: Rect,
    pub equation: Rect,
    pub input: Rect,
    pub feedback: Rect,
    pub status_bar: Rect,
}

const HEADER_HEIGHT: u16 = 1;
const STATUS_BAR_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const INPUT_WIDTH: u16 = 32;

/// progress + gap + equation(3) + gap + input(3) + feedback
const FULL_BLOCK_HEIGHT: u16 = 10;
/// progress + equation(1) + input(3) + feedback
const COMPACT_BLOCK_HEIGHT: u16 = 6;

/// Compute the drill screen layout for a terminal area
pub fn compute_layout(area: Rect) -> DojoLayout {
    let header_h = HEADER_HEIGHT.min(area.height);
    let status_h = STATUS_BAR_HEIGHT.min(area.height.saturating_sub(header_h));

    let header = Rect::new(area.x, area.y, area.width, header_h);
    let status_bar = Rect::new(
        area.x,
        area.y + area.height - status_h,
        area.width,
        status_h,
    );

    let middle_top = area.y + header_h;
    let middle_height = area.height - header_h - status_h;

    let (gap, equation_h, block_h) = if middle_height >= FULL_BLOCK_HEIGHT {
        (1, 3, FULL_BLOCK_HEIGHT)
    } else {
        (0, 1, COMPACT_BLOCK_HEIGHT)
    };

    let mut cursor = middle_top + middle_height.saturating_sub(block_h) / 2;
    let bottom = middle_top + middle_height;

    // Hand out rows top to bottom, clipping at the status bar
    let mut take = |h: u16| {
        let start = cursor.min(bottom);
        let end = (cursor + h).min(bottom);
        cursor += h;
        (start, end - start)
    };

    let (y, h) = take(1);
    let progress = Rect::new(area.x, y, area.width, h);
    take(gap);
    let (y, h) = take(equation_h);
    let equation = Rect::new(area.x, y, area.width, h);
    take(gap);
    let (y, h) = take(INPUT_HEIGHT);
    let input_w = INPUT_WIDTH.min(area.width);
    let input = Rect::new(area.x + (area.width - input_w) / 2, y, input_w, h);
    let (y, h) = take(1);
    let feedback = Rect::new(area.x, y, area.width, h);

    DojoLayout {
        header,
        progress,
        equation,
        input,
        feedback,
        status_bar,
    }
}

/// Centered popup rectangle, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
