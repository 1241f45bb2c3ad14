//! Octree acceleration structure for triangle meshes.
//!
//! The tree partitions a permutation of triangle indices rather than the
//! triangles themselves. Each node covers a contiguous range of that
//! permutation: triangles fully inside one of its octants are handed down to
//! that child, while triangles straddling an octant boundary stay with the
//! node. Triangles are never split.

use std::ops::Range;
use std::time::Instant;

use octrace_math::{Aabb, Interval, Ray, Real, Triangle, TriangleIntersection};

use crate::TriangleMesh;

/// Subdivision depth used by [`Octree::new`].
pub const DEFAULT_MAX_LEVELS: u32 = 6;

/// Fraction of the mesh extent added around the root box on every side.
const BOUNDS_PADDING: Real = 0.01;

/// A node in the flat octree node list.
#[derive(Debug, Clone, PartialEq)]
pub struct OctreeNode {
    pub bbox: Aabb,
    pub level: u32,
    mesh_start: usize,
    mesh_finish: usize,
    /// End of the triangles owned by this node itself; descendants own
    /// `own_finish..mesh_finish`.
    own_finish: usize,
    first_child: Option<usize>,
}

impl OctreeNode {
    fn new(bbox: Aabb, level: u32) -> Self {
        Self {
            bbox,
            level,
            mesh_start: 0,
            mesh_finish: 0,
            own_finish: 0,
            first_child: None,
        }
    }

    /// Range of the permutation covered by this node's whole subtree.
    pub fn range(&self) -> Range<usize> {
        self.mesh_start..self.mesh_finish
    }

    /// Range of triangles that no child fully contains.
    pub fn own_range(&self) -> Range<usize> {
        self.mesh_start..self.own_finish
    }

    pub fn len(&self) -> usize {
        self.mesh_finish - self.mesh_start
    }

    pub fn is_empty(&self) -> bool {
        self.mesh_start == self.mesh_finish
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Node indices of the eight children, in [`Aabb::octant`] order.
    pub fn children(&self) -> Option<Range<usize>> {
        self.first_child.map(|first| first..first + 8)
    }
}

/// Result of an octree query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctreeHit {
    /// Index of the triangle in the source mesh order.
    pub triangle: usize,
    pub intersection: TriangleIntersection,
}

/// Octree over an immutable copy of a mesh's triangles.
#[derive(Debug, Clone)]
pub struct Octree {
    triangles: Vec<Triangle>,
    order: Vec<usize>,
    nodes: Vec<OctreeNode>,
    max_levels: u32,
}

impl Octree {
    /// Build an octree [`DEFAULT_MAX_LEVELS`] deep.
    pub fn new(mesh: &TriangleMesh) -> Self {
        Self::with_max_levels(mesh, DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(mesh: &TriangleMesh, max_levels: u32) -> Self {
        let start = Instant::now();
        let triangles = mesh.triangles().to_vec();
        let n = triangles.len();

        if n == 0 {
            log::debug!("Octree over empty mesh, root only");
            return Self {
                triangles,
                order: Vec::new(),
                nodes: vec![OctreeNode::new(Aabb::EMPTY, 0)],
                max_levels,
            };
        }

        let root = OctreeNode::new(mesh.bounds().padded(BOUNDS_PADDING), 0);
        let mut octree = Self {
            triangles,
            order: (0..n).collect(),
            nodes: vec![root],
            max_levels,
        };

        let claimed = octree.include(0, 0, n);
        debug_assert!(claimed <= n);

        let strays = n - claimed;
        if strays > 0 {
            log::warn!("{} of {} triangles fall outside the octree root", strays, n);
        }

        log::debug!(
            "Built octree: {} triangles, {} nodes, {} leaves, {} at root, max level {} in {:.2?}",
            n,
            octree.nodes.len(),
            octree.leaves().count(),
            octree.nodes[0].own_range().len(),
            max_levels,
            start.elapsed()
        );

        octree
    }

    /// Claim every triangle in `order[start..finish]` that `node` fully
    /// contains, then hand them down to its children.
    ///
    /// Claimed triangles are swapped to the top of the range. Returns how
    /// many were claimed; the node's subtree is the top that many entries.
    fn include(&mut self, node: usize, start: usize, finish: usize) -> usize {
        let bbox = self.nodes[node].bbox;
        let level = self.nodes[node].level;

        let mut contained_start = finish;
        for i in (start..finish).rev() {
            if bbox.contains_triangle(&self.triangles[self.order[i]]) {
                contained_start -= 1;
                self.order.swap(i, contained_start);
            }
        }

        {
            let n = &mut self.nodes[node];
            n.mesh_start = contained_start;
            n.mesh_finish = finish;
            n.own_finish = finish;
        }

        let claimed = finish - contained_start;
        if level >= self.max_levels || claimed == 0 {
            return claimed;
        }

        let first_child = self.nodes.len();
        self.nodes
            .extend(bbox.octants().into_iter().map(|b| OctreeNode::new(b, level + 1)));
        self.nodes[node].first_child = Some(first_child);

        // Each child takes its triangles off the top of what is left
        let mut remaining = finish;
        for child in first_child..first_child + 8 {
            let taken = self.include(child, contained_start, remaining);
            debug_assert!(taken <= remaining - contained_start);
            debug_assert_eq!(self.nodes[child].mesh_finish, remaining);
            remaining -= taken;
        }
        self.nodes[node].own_finish = remaining;

        log::trace!(
            "Octree node {} (level {}): {} triangles, {} kept, children from {}",
            node,
            level,
            claimed,
            remaining - contained_start,
            first_child
        );

        claimed
    }

    /// Nearest triangle hit with `t` strictly inside `ray_t`.
    ///
    /// Triangles outside the root are tested first, then the tree is walked
    /// depth first, skipping any node whose box the ray misses before the
    /// closest hit found so far.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<OctreeHit> {
        let mut closest: Option<OctreeHit> = None;

        let root = &self.nodes[0];
        self.hit_range(0..root.mesh_start, ray, ray_t, &mut closest);
        self.hit_node(0, ray, ray_t, &mut closest);

        closest
    }

    fn hit_node(&self, index: usize, ray: &Ray, ray_t: Interval, closest: &mut Option<OctreeHit>) {
        let node = &self.nodes[index];
        if node.is_empty() {
            return;
        }

        let max = closest.map_or(ray_t.max, |c| c.intersection.t);
        if !node.bbox.hit(ray, Interval::new(ray_t.min, max)) {
            return;
        }

        self.hit_range(node.own_range(), ray, ray_t, closest);

        if let Some(children) = node.children() {
            for child in children {
                self.hit_node(child, ray, ray_t, closest);
            }
        }
    }

    fn hit_range(&self, range: Range<usize>, ray: &Ray, ray_t: Interval, closest: &mut Option<OctreeHit>) {
        for &triangle in &self.order[range] {
            let Some(intersection) = self.triangles[triangle].intersect(ray) else {
                continue;
            };
            let max = closest.map_or(ray_t.max, |c| c.intersection.t);
            if ray_t.surrounds(intersection.t) && intersection.t < max {
                *closest = Some(OctreeHit {
                    triangle,
                    intersection,
                });
            }
        }
    }

    /// Triangles in source mesh order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The permutation of triangle indices the nodes' ranges refer to.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Triangles referenced by a range of the permutation.
    pub fn triangles_in(&self, range: Range<usize>) -> impl Iterator<Item = &Triangle> + '_ {
        self.order[range].iter().map(move |&i| &self.triangles[i])
    }

    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &OctreeNode {
        &self.nodes[index]
    }

    /// The eight children of a node, empty for a leaf.
    pub fn children(&self, index: usize) -> &[OctreeNode] {
        match self.nodes[index].children() {
            Some(range) => &self.nodes[range],
            None => &[],
        }
    }

    pub fn leaves(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Number of triangles that no node contains.
    pub fn stray_count(&self) -> usize {
        self.nodes[0].mesh_start
    }

    pub fn max_levels(&self) -> u32 {
        self.max_levels
    }
}
