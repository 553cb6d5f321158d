//! 2D layout for rendering the tree.
//!
//! Each node splits its horizontal span into equal parts, one per child;
//! the span shrinks by a fixed factor per level and `y` advances a fixed
//! step per depth. Purely a rendering aid.

use algolens_config::TrieLayoutConfig;

use crate::node::{NodeId, TrieNode};

pub(crate) fn assign(arena: &mut [TrieNode], geometry: &TrieLayoutConfig) {
    place(arena, NodeId::ROOT, 0.0, 0.0, geometry.root_span, geometry);
}

fn place(
    arena: &mut [TrieNode],
    id: NodeId,
    x: f64,
    y: f64,
    span: f64,
    geometry: &TrieLayoutConfig,
) {
    arena[id.0].x = x;
    arena[id.0].y = y;

    let children: Vec<NodeId> = arena[id.0].children.values().copied().collect();
    if children.is_empty() {
        return;
    }

    let child_span = span / children.len() as f64;
    for (index, child) in children.into_iter().enumerate() {
        let child_x = x - span / 2.0 + child_span * index as f64 + child_span / 2.0;
        let child_y = y + geometry.level_step;
        place(
            arena,
            child,
            child_x,
            child_y,
            child_span * geometry.shrink,
            geometry,
        );
    }
}
