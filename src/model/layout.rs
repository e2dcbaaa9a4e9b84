//! Split layout - the tree of oriented containers whose leaves are tab groups
//!
//! The root is a [`SplitContainer`] that is never removed. Every mutating
//! operation either completes and leaves the tree normalized or changes
//! nothing:
//!
//! - no container below the root has fewer than two children
//! - the root never holds a single nested split (it is unwrapped instead)
//! - nested splits hold only groups, so the tree is at most two levels deep
//! - the number of leaves never exceeds `max_groups`
//! - `active` always names a leaf of the tree

use std::collections::HashSet;
use std::fmt;

use super::editor_area::GroupId;
use crate::error::EditorError;

/// Default ceiling on the number of tab groups
pub const MAX_GROUPS: usize = 5;

/// Width of splitter bars in pixels
pub const SPLITTER_WIDTH: f32 = 6.0;

// ============================================================================
// Layout Primitives
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Direction for splitting editor groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl SplitDirection {
    fn tag(self) -> char {
        match self {
            SplitDirection::Horizontal => 'H',
            SplitDirection::Vertical => 'V',
        }
    }
}

/// A container that splits space between children
#[derive(Debug, Clone, PartialEq)]
pub struct SplitContainer {
    pub direction: SplitDirection,
    pub children: Vec<LayoutNode>,
    /// Proportional sizes (0.0 to 1.0, sum to 1.0)
    pub ratios: Vec<f32>,
}

impl SplitContainer {
    pub fn new(direction: SplitDirection, children: Vec<LayoutNode>) -> Self {
        let mut container = Self {
            direction,
            children,
            ratios: Vec::new(),
        };
        container.equalize();
        container
    }

    /// Redistribute sizes evenly between children
    fn equalize(&mut self) {
        let n = self.children.len();
        self.ratios = if n == 0 {
            Vec::new()
        } else {
            vec![1.0 / n as f32; n]
        };
    }

    fn insert_after(&mut self, index: usize, node: LayoutNode) {
        let at = (index + 1).min(self.children.len());
        self.children.insert(at, node);
        self.equalize();
    }

    fn position_of_group(&self, group: GroupId) -> Option<usize> {
        self.children
            .iter()
            .position(|c| matches!(c, LayoutNode::Group(id) if *id == group))
    }
}

/// A node in the layout tree - either a tab group or a nested split
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Group(GroupId),
    Split(SplitContainer),
}

impl LayoutNode {
    /// Replace a single-child split with its child. Returns true if it did.
    fn collapse_single_child(&mut self) -> bool {
        if let LayoutNode::Split(container) = self {
            if container.children.len() == 1 {
                if let Some(only) = container.children.pop() {
                    *self = only;
                    return true;
                }
            }
        }
        false
    }

    fn is_empty_split(&self) -> bool {
        matches!(self, LayoutNode::Split(c) if c.children.is_empty())
    }
}

// ============================================================================
// Split Layout
// ============================================================================

#[derive(Debug, Clone)]
pub struct SplitLayout {
    root: SplitContainer,
    /// Every leaf currently in the tree, for O(1) membership checks
    members: HashSet<GroupId>,
    active: GroupId,
    max_groups: usize,
}

impl SplitLayout {
    /// Create a layout holding a single group, which becomes active
    pub fn new(initial: GroupId, max_groups: usize) -> Self {
        Self {
            root: SplitContainer::new(
                SplitDirection::Horizontal,
                vec![LayoutNode::Group(initial)],
            ),
            members: HashSet::from([initial]),
            active: initial,
            max_groups: max_groups.max(1),
        }
    }

    pub fn root(&self) -> &SplitContainer {
        &self.root
    }

    pub fn direction(&self) -> SplitDirection {
        self.root.direction
    }

    pub fn max_groups(&self) -> usize {
        self.max_groups
    }

    pub fn leaf_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_full(&self) -> bool {
        self.leaf_count() >= self.max_groups
    }

    pub fn contains(&self, group: GroupId) -> bool {
        self.members.contains(&group)
    }

    pub fn active(&self) -> GroupId {
        self.active
    }

    /// Point the active marker at a group. O(1); false if the group is not in the tree.
    pub fn set_active(&mut self, group: GroupId) -> bool {
        if self.members.contains(&group) {
            self.active = group;
            true
        } else {
            false
        }
    }

    /// All groups in tree order (depth-first, left to right)
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut out = Vec::with_capacity(self.members.len());
        collect_group_ids(&self.root, &mut out);
        out
    }

    /// Number of container levels, the root counting as one
    pub fn depth(&self) -> usize {
        container_depth(&self.root)
    }

    /// Child indices leading from the root to `group`
    pub fn path_to(&self, group: GroupId) -> Option<Vec<usize>> {
        if !self.contains(group) {
            return None;
        }
        let mut path = Vec::new();
        find_path(&self.root, group, &mut path).then_some(path)
    }

    /// Orientation of the container directly holding `group`
    pub fn parent_direction(&self, group: GroupId) -> Option<SplitDirection> {
        let path = self.path_to(group)?;
        let (_, parent_path) = path.split_last()?;
        self.container_at(parent_path).map(|c| c.direction)
    }

    fn container_at(&self, path: &[usize]) -> Option<&SplitContainer> {
        let mut node = &self.root;
        for &i in path {
            node = match node.children.get(i)? {
                LayoutNode::Split(c) => c,
                LayoutNode::Group(_) => return None,
            };
        }
        Some(node)
    }

    fn container_at_mut(&mut self, path: &[usize]) -> Option<&mut SplitContainer> {
        let mut node = &mut self.root;
        for &i in path {
            node = match node.children.get_mut(i)? {
                LayoutNode::Split(c) => c,
                LayoutNode::Group(_) => return None,
            };
        }
        Some(node)
    }

    /// Split `target` so that `new_group` appears next to it in `direction`.
    ///
    /// Nesting never goes deeper than one level below the root:
    /// - parent has the same orientation (or is a root holding one child): sibling after target
    /// - top-level target, vertical root of leaves, horizontal request: the
    ///   column becomes one nested split and `new_group` lands to its right
    /// - other top-level targets split across the root: wrap the target alone
    /// - nested target split across its parent: `new_group` goes to the top
    ///   level right after that nested split
    pub fn split(
        &mut self,
        target: GroupId,
        new_group: GroupId,
        direction: SplitDirection,
    ) -> Result<(), EditorError> {
        if self.is_full() {
            tracing::debug!(leaves = self.leaf_count(), "split refused: layout full");
            return Err(EditorError::LayoutLimitReached);
        }
        if self.contains(new_group) {
            return Err(EditorError::StaleReference);
        }
        let path = self.path_to(target).ok_or(EditorError::StaleReference)?;

        match path.as_slice() {
            [index] => {
                let index = *index;
                if self.root.children.len() == 1 {
                    self.root.direction = direction;
                }
                if self.root.direction == direction {
                    self.root.insert_after(index, LayoutNode::Group(new_group));
                } else if direction == SplitDirection::Horizontal && self.root_is_flat() {
                    self.wrap_top_level(direction, new_group);
                } else {
                    self.root.children[index] = LayoutNode::Split(SplitContainer::new(
                        direction,
                        vec![LayoutNode::Group(target), LayoutNode::Group(new_group)],
                    ));
                }
            }
            [outer, index] => {
                let (outer, index) = (*outer, *index);
                let nested = self
                    .container_at_mut(&[outer])
                    .ok_or(EditorError::StaleReference)?;
                if nested.direction == direction {
                    nested.insert_after(index, LayoutNode::Group(new_group));
                } else {
                    self.root.insert_after(outer, LayoutNode::Group(new_group));
                }
            }
            _ => return Err(EditorError::StaleReference),
        }

        self.members.insert(new_group);
        self.active = new_group;
        tracing::debug!(?target, ?new_group, ?direction, layout = %self, "split");
        Ok(())
    }

    /// True when every top-level child is a group
    fn root_is_flat(&self) -> bool {
        self.root
            .children
            .iter()
            .all(|child| matches!(child, LayoutNode::Group(_)))
    }

    /// Append `new_group` at the top level regardless of the active group.
    /// A cross-orientation request wraps the top level only while it holds
    /// plain groups; otherwise the group joins the root's current orientation.
    pub fn add_top_level(
        &mut self,
        new_group: GroupId,
        direction: SplitDirection,
    ) -> Result<(), EditorError> {
        if self.is_full() {
            tracing::debug!(leaves = self.leaf_count(), "add_pane refused: layout full");
            return Err(EditorError::LayoutLimitReached);
        }
        if self.contains(new_group) {
            return Err(EditorError::StaleReference);
        }

        if self.root.children.len() == 1 {
            self.root.direction = direction;
        }
        if self.root.direction != direction && self.root_is_flat() {
            self.wrap_top_level(direction, new_group);
        } else {
            self.root.children.push(LayoutNode::Group(new_group));
            self.root.equalize();
        }

        self.members.insert(new_group);
        self.active = new_group;
        tracing::debug!(?new_group, ?direction, layout = %self, "pane added at top level");
        Ok(())
    }

    /// Move all top-level children into one nested split of the current
    /// orientation, flip the root to `direction` and append `new_group`.
    fn wrap_top_level(&mut self, direction: SplitDirection, new_group: GroupId) {
        let old_direction = self.root.direction;
        let children = std::mem::take(&mut self.root.children);
        let wrapped = LayoutNode::Split(SplitContainer::new(old_direction, children));
        self.root = SplitContainer::new(direction, vec![wrapped, LayoutNode::Group(new_group)]);
    }

    /// Detach `group` from the tree, collapsing containers left with one child.
    /// The last remaining group is never removed.
    pub fn remove(&mut self, group: GroupId) -> bool {
        if !self.contains(group) || self.leaf_count() <= 1 {
            return false;
        }
        if !remove_group(&mut self.root, group) {
            return false;
        }
        self.members.remove(&group);
        self.unwrap_root();

        if self.active == group {
            if let Some(&first) = self.group_ids().first() {
                self.active = first;
            }
        }
        tracing::debug!(?group, active = ?self.active, layout = %self, "group removed");
        true
    }

    /// A root holding exactly one nested split takes over that split's
    /// children and orientation.
    fn unwrap_root(&mut self) {
        if self.root.children.len() == 1 && matches!(self.root.children[0], LayoutNode::Split(_))
        {
            if let Some(LayoutNode::Split(inner)) = self.root.children.pop() {
                self.root = inner;
            }
        }
    }

    /// Rectangles for every group inside `available`
    pub fn compute_rects(&self, available: Rect) -> Vec<(GroupId, Rect)> {
        let mut out = Vec::with_capacity(self.members.len());
        layout_container(&self.root, available, &mut out);
        out
    }

    /// Find the group at a given point (for mouse clicks)
    pub fn group_at_point(&self, available: Rect, x: f32, y: f32) -> Option<GroupId> {
        self.compute_rects(available)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id)
    }

    /// Describe every broken structural invariant. Empty means healthy.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.root.children.is_empty() {
            problems.push("root has no children".to_string());
        }
        if self.root.children.len() == 1 && matches!(self.root.children[0], LayoutNode::Split(_))
        {
            problems.push("root holds a single nested split".to_string());
        }
        check_container(&self.root, true, &mut problems);

        let ids = self.group_ids();
        let unique: HashSet<GroupId> = ids.iter().copied().collect();
        if unique.len() != ids.len() {
            problems.push(format!("duplicate groups in tree: {:?}", ids));
        }
        if unique != self.members {
            problems.push("membership set out of sync with tree".to_string());
        }
        if ids.len() > self.max_groups {
            problems.push(format!(
                "{} groups exceed the maximum of {}",
                ids.len(),
                self.max_groups
            ));
        }
        if !unique.contains(&self.active) {
            problems.push(format!("active {:?} is not in the tree", self.active));
        }
        let depth = self.depth();
        if depth > 2 {
            problems.push(format!("nesting deeper than one level: depth {}", depth));
        }

        problems
    }
}

impl fmt::Display for SplitLayout {
    /// Compact shape, e.g. `H[1, V[2, 3]]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_container(&self.root, f)
    }
}

// ============================================================================
// Layout Helper Functions (standalone to avoid borrow issues)
// ============================================================================

fn collect_group_ids(container: &SplitContainer, out: &mut Vec<GroupId>) {
    for child in &container.children {
        match child {
            LayoutNode::Group(id) => out.push(*id),
            LayoutNode::Split(inner) => collect_group_ids(inner, out),
        }
    }
}

fn container_depth(container: &SplitContainer) -> usize {
    1 + container
        .children
        .iter()
        .map(|c| match c {
            LayoutNode::Group(_) => 0,
            LayoutNode::Split(inner) => container_depth(inner),
        })
        .max()
        .unwrap_or(0)
}

fn find_path(container: &SplitContainer, group: GroupId, path: &mut Vec<usize>) -> bool {
    for (i, child) in container.children.iter().enumerate() {
        path.push(i);
        let found = match child {
            LayoutNode::Group(id) => *id == group,
            LayoutNode::Split(inner) => find_path(inner, group, path),
        };
        if found {
            return true;
        }
        path.pop();
    }
    false
}

/// Remove a group, collapsing nested splits on the way back up.
/// Returns true if the group was found and removed.
fn remove_group(container: &mut SplitContainer, group: GroupId) -> bool {
    if let Some(index) = container.position_of_group(group) {
        container.children.remove(index);
        container.equalize();
        return true;
    }

    for i in 0..container.children.len() {
        let LayoutNode::Split(inner) = &mut container.children[i] else {
            continue;
        };
        if !remove_group(inner, group) {
            continue;
        }

        if container.children[i].is_empty_split() {
            container.children.remove(i);
            container.equalize();
        } else {
            container.children[i].collapse_single_child();
        }
        return true;
    }

    false
}

fn layout_container(container: &SplitContainer, rect: Rect, out: &mut Vec<(GroupId, Rect)>) {
    let count = container.children.len();
    if count == 0 {
        return;
    }

    let total_size = match container.direction {
        SplitDirection::Horizontal => rect.width,
        SplitDirection::Vertical => rect.height,
    };

    let mut offset = 0.0;
    for (i, child) in container.children.iter().enumerate() {
        let ratio = container
            .ratios
            .get(i)
            .copied()
            .unwrap_or(1.0 / count as f32);
        let child_size = total_size * ratio;

        let child_rect = match container.direction {
            SplitDirection::Horizontal => {
                Rect::new(rect.x + offset, rect.y, child_size, rect.height)
            }
            SplitDirection::Vertical => Rect::new(rect.x, rect.y + offset, rect.width, child_size),
        };

        match child {
            LayoutNode::Group(id) => out.push((*id, child_rect)),
            LayoutNode::Split(inner) => layout_container(inner, child_rect, out),
        }

        offset += child_size;
    }
}

fn check_container(container: &SplitContainer, is_root: bool, problems: &mut Vec<String>) {
    if !is_root && container.children.len() < 2 {
        problems.push(format!(
            "nested split has {} children",
            container.children.len()
        ));
    }
    if container.ratios.len() != container.children.len() {
        problems.push("ratios do not match children".to_string());
    } else if !container.ratios.is_empty() {
        let sum: f32 = container.ratios.iter().sum();
        if (sum - 1.0).abs() > 1e-3 {
            problems.push(format!("ratios sum to {}", sum));
        }
    }
    for child in &container.children {
        if let LayoutNode::Split(inner) = child {
            check_container(inner, false, problems);
        }
    }
}

fn fmt_container(container: &SplitContainer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}[", container.direction.tag())?;
    for (i, child) in container.children.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match child {
            LayoutNode::Group(id) => write!(f, "{}", id.0)?,
            LayoutNode::Split(inner) => fmt_container(inner, f)?,
        }
    }
    write!(f, "]")
}
