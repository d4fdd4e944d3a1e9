use ratatui::{Frame, layout::Rect, style::Style, widgets::Clear};

use crate::config::ToastPosition;

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Places a `width` x `height` box in a corner of `area`
///
/// `offset` pushes the box away from the anchored edge (down for top corners,
/// up for bottom corners) so consecutive boxes can be stacked.
pub fn corner_popup(
    area: Rect,
    position: ToastPosition,
    width: u16,
    height: u16,
    offset: u16,
) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(offset));

    let x = if position.is_right() {
        area.right().saturating_sub(width)
    } else {
        area.x
    };
    let y = if position.is_bottom() {
        area.bottom().saturating_sub(height + offset)
    } else {
        area.y + offset
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Restyles every cell in `area` without touching its symbols
pub fn dim_area(frame: &mut Frame, area: Rect, style: Style) {
    frame.buffer_mut().set_style(area, style);
}
