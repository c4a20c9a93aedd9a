//! Auto layout for frames with a vertical or horizontal layout mode.
//!
//! Child frames are laid out first so their sizes are final, then the
//! children of the frame are stacked along the primary axis starting at the
//! padding edge. Auto-sized axes shrink or grow to hug the content.

use crate::shapes::{Frame, LayoutMode, Node, PrimaryAxisAlign, SizingMode};
use kurbo::{Point, Size};

/// Lay out `frame` and all nested frames in place.
pub fn apply(frame: &mut Frame) {
    for child in frame.children_mut() {
        if let Node::Frame(inner) = child {
            apply(inner);
        }
    }

    let horizontal = match frame.layout_mode {
        LayoutMode::None => return,
        LayoutMode::Vertical => false,
        LayoutMode::Horizontal => true,
    };

    // (primary, counter) extents for each child
    let extents: Vec<(f64, f64)> = frame
        .children()
        .iter()
        .map(|child| {
            let size = child.bounds().size();
            if horizontal {
                (size.width, size.height)
            } else {
                (size.height, size.width)
            }
        })
        .collect();

    let padding = frame.padding;
    let (pad_start, pad_primary, pad_counter_start, pad_counter) = if horizontal {
        (padding.left, padding.horizontal(), padding.top, padding.vertical())
    } else {
        (padding.top, padding.vertical(), padding.left, padding.horizontal())
    };

    let gaps = extents.len().saturating_sub(1) as f64;
    let content: f64 = extents.iter().map(|(primary, _)| primary).sum::<f64>()
        + gaps * frame.item_spacing;
    let widest = extents.iter().map(|(_, counter)| *counter).fold(0.0, f64::max);

    let (mut primary_size, mut counter_size) = if horizontal {
        (frame.size.width, frame.size.height)
    } else {
        (frame.size.height, frame.size.width)
    };
    if frame.primary_axis_sizing == SizingMode::Auto {
        primary_size = content + pad_primary;
    }
    if frame.counter_axis_sizing == SizingMode::Auto {
        counter_size = widest + pad_counter;
    }

    let free = (primary_size - pad_primary - content).max(0.0);
    let (mut cursor, spacing) = match frame.primary_axis_align {
        PrimaryAxisAlign::Min => (pad_start, frame.item_spacing),
        PrimaryAxisAlign::Center => (pad_start + free / 2.0, frame.item_spacing),
        PrimaryAxisAlign::Max => (pad_start + free, frame.item_spacing),
        PrimaryAxisAlign::SpaceBetween if gaps > 0.0 => {
            (pad_start, frame.item_spacing + free / gaps)
        }
        PrimaryAxisAlign::SpaceBetween => (pad_start, frame.item_spacing),
    };

    frame.size = if horizontal {
        Size::new(primary_size, counter_size)
    } else {
        Size::new(counter_size, primary_size)
    };

    let origin = frame.position;
    for (child, (extent, _)) in frame.children_mut().iter_mut().zip(extents) {
        let target = if horizontal {
            Point::new(origin.x + cursor, origin.y + pad_counter_start)
        } else {
            Point::new(origin.x + pad_counter_start, origin.y + cursor)
        };
        child.set_position(target);
        cursor += extent + spacing;
    }
}
