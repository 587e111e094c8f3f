//! Collision resolution between the player box and rectangular obstacles
//!
//! Resolution is iterative and ordering-sensitive: obstacles are visited in
//! level-declaration order and the player box is recomputed after every
//! correction, so a later obstacle can override an earlier one within the
//! same tick. Vertical motion is resolved first, then horizontal motion using
//! the already-corrected y.

use glam::Vec2;

use super::rect::Rect;
use super::state::Obstacle;
use crate::consts::FLOOR_CONTACT_MARGIN;

/// How a vertically-moving body meets one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Falling onto the top and the resting spot is free
    Land,
    /// Falling onto the top but the resting spot overlaps another obstacle
    Squish,
    /// Rising into the underside
    HeadBump,
}

/// Classify a vertical overlap between `body` and `obstacles[index]`.
///
/// The caller has already established that the two overlap.
pub fn vertical_contact(
    body: &Rect,
    vel_y: f32,
    half: f32,
    obstacles: &[Obstacle],
    index: usize,
) -> VerticalContact {
    if vel_y < 0.0 {
        return VerticalContact::HeadBump;
    }
    if landing_is_squished(body, half, obstacles, index) {
        VerticalContact::Squish
    } else {
        VerticalContact::Land
    }
}

/// Would resting on top of `obstacles[index]` put the body inside any other
/// obstacle? The probe keeps the body's box but lifts its top edge to
/// `2 * half` above the obstacle's top.
pub fn landing_is_squished(body: &Rect, half: f32, obstacles: &[Obstacle], index: usize) -> bool {
    let top = obstacles[index].rect.top();
    let probe = body.moved_to(body.x, top - half * 2.0);
    obstacles
        .iter()
        .enumerate()
        .any(|(j, other)| j != index && probe.overlaps(&other.rect))
}

/// Overlap that reaches more than the floor-contact margin into the
/// obstacle's vertical extent, i.e. a wall hit rather than a floor sliver
pub fn is_side_contact(body: &Rect, obstacle: &Rect) -> bool {
    body.bottom() > obstacle.top() + FLOOR_CONTACT_MARGIN
        && body.top() < obstacle.bottom() - FLOOR_CONTACT_MARGIN
}

/// Integrate y and resolve against all obstacles.
///
/// `pos` is the body centre, `half` its half-size. Returns the index of the
/// obstacle the body ended up standing on, if any.
pub fn resolve_vertical(
    pos: &mut Vec2,
    vel: &mut Vec2,
    half: f32,
    obstacles: &[Obstacle],
) -> Option<usize> {
    pos.y += vel.y;
    let mut support = None;

    let mut body = Rect::centered(*pos, half);
    for (i, obstacle) in obstacles.iter().enumerate() {
        if !body.overlaps(&obstacle.rect) {
            continue;
        }
        match vertical_contact(&body, vel.y, half, obstacles, i) {
            VerticalContact::Land => {
                pos.y = obstacle.rect.top() - half;
                vel.y = 0.0;
                support = Some(i);
            }
            VerticalContact::Squish => {
                // Lateral escape instead of snapping up into the gap
                pos.x -= half * 2.0;
                vel.y = 0.0;
            }
            VerticalContact::HeadBump => {
                pos.y = obstacle.rect.bottom() + half;
                vel.y = 0.0;
            }
        }
        body = Rect::centered(*pos, half);
    }

    support
}

/// Integrate x and push the body out of any wall it ran into
pub fn resolve_horizontal(pos: &mut Vec2, vel_x: f32, half: f32, obstacles: &[Obstacle]) {
    pos.x += vel_x;

    let mut body = Rect::centered(*pos, half);
    for obstacle in obstacles {
        if !body.overlaps(&obstacle.rect) || !is_side_contact(&body, &obstacle.rect) {
            continue;
        }
        if vel_x >= 0.0 {
            pos.x = obstacle.rect.left() - half;
        } else {
            pos.x = obstacle.rect.right() + half;
        }
        body = Rect::centered(*pos, half);
    }
}
