use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, as wide as the anchor, clamped to the frame bottom
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(frame_bottom.saturating_sub(popup_y)),
    }
}

/// Area in the top-right corner of `frame_area`, `offset_y` rows below the margin
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16, offset_y: u16) -> Rect {
    let max_width = frame_area.width.saturating_sub(margin * 2);
    let width = width.min(max_width);
    let y = frame_area.y + margin + offset_y;
    let frame_bottom = frame_area.y + frame_area.height;

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y,
        width,
        height: height.min(frame_bottom.saturating_sub(y + margin)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
