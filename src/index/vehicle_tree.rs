//! Binary search tree of vehicles, keyed by mileage.

use crate::records::Vehicle;

/// A node owns its vehicle and up to two children.
///
/// Left subtree holds strictly smaller mileages; right subtree holds
/// greater-or-equal mileages (ties on insert go right). No parent
/// back-references - the tree exclusively owns all nodes.
struct Node {
    vehicle: Vehicle,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced BST of vehicles ordered by mileage.
///
/// Insertion order determines the shape; there is no rebalancing, so a
/// sorted insert sequence degrades lookups to O(n). This is an accepted
/// limitation of the index, not a defect.
///
/// Registration numbers are unique across the tree. The tree itself does
/// not enforce this - the coordination layer checks
/// [`search_by_registration`](Self::search_by_registration) before every
/// insert.
///
/// # Example
/// ```
/// use fleetcore::index::VehicleTree;
/// use fleetcore::records::{Vehicle, VehicleCategory};
///
/// let mut tree = VehicleTree::new();
/// tree.insert(Vehicle::new("GT-50", VehicleCategory::Truck, 50, 10.0));
/// tree.insert(Vehicle::new("GT-30", VehicleCategory::Van, 30, 8.0));
///
/// let sorted = tree.all_vehicles();
/// assert_eq!(sorted[0].mileage, 30);
/// assert!(tree.remove("GT-50"));
/// ```
#[derive(Default)]
pub struct VehicleTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl VehicleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of vehicles in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no vehicles.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a vehicle at the leaf position its mileage descends to.
    ///
    /// Strictly smaller mileage goes left, everything else right. O(h)
    /// in the tree height.
    pub fn insert(&mut self, vehicle: Vehicle) {
        self.root = Some(Self::insert_node(self.root.take(), vehicle));
        self.len += 1;
    }

    fn insert_node(node: Option<Box<Node>>, vehicle: Vehicle) -> Box<Node> {
        match node {
            None => Box::new(Node::new(vehicle)),
            Some(mut current) => {
                if vehicle.mileage < current.vehicle.mileage {
                    current.left = Some(Self::insert_node(current.left.take(), vehicle));
                } else {
                    current.right = Some(Self::insert_node(current.right.take(), vehicle));
                }
                current
            }
        }
    }

    /// Standard BST descent by mileage.
    ///
    /// When several vehicles share the target mileage, whichever one the
    /// descent reaches first is returned - no uniqueness guarantee.
    pub fn search_by_mileage(&self, mileage: u32) -> Option<&Vehicle> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if mileage == node.vehicle.mileage {
                return Some(&node.vehicle);
            }
            current = if mileage < node.vehicle.mileage {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Exact-match lookup by registration number.
    ///
    /// The tree is keyed by mileage, so the structure cannot help here:
    /// this is an in-order walk of the whole tree with a short-circuit
    /// return on the first match. O(n).
    pub fn search_by_registration(&self, registration: &str) -> Option<&Vehicle> {
        Self::find_by_registration(self.root.as_deref(), registration)
    }

    fn find_by_registration<'a>(node: Option<&'a Node>, registration: &str) -> Option<&'a Vehicle> {
        let node = node?;
        if let Some(found) = Self::find_by_registration(node.left.as_deref(), registration) {
            return Some(found);
        }
        if node.vehicle.registration == registration {
            return Some(&node.vehicle);
        }
        Self::find_by_registration(node.right.as_deref(), registration)
    }

    /// Remove the vehicle with the given registration.
    ///
    /// Resolves the registration to its mileage first (the descent key),
    /// then unlinks the node. Returns `false` when no such vehicle exists.
    pub fn remove(&mut self, registration: &str) -> bool {
        let mileage = match self.search_by_registration(registration) {
            Some(vehicle) => vehicle.mileage,
            None => return false,
        };
        self.root = Self::remove_node(self.root.take(), mileage, registration);
        self.len -= 1;
        true
    }

    /// Recursive removal by (mileage, registration).
    ///
    /// Three unlink cases: no left child - splice in the right child; no
    /// right child - splice in the left child; two children - overwrite
    /// the node's vehicle with its in-order successor (leftmost of the
    /// right subtree) and remove that successor from the right subtree.
    ///
    /// When the descent lands on a matching mileage whose registration
    /// differs, the target is a duplicate-mileage sibling that may sit in
    /// either subtree, so the removal recurses into BOTH. Narrowing this
    /// to one subtree would silently break removal of duplicate-mileage
    /// vehicles.
    fn remove_node(
        node: Option<Box<Node>>,
        mileage: u32,
        registration: &str,
    ) -> Option<Box<Node>> {
        let mut current = node?;

        if mileage < current.vehicle.mileage {
            current.left = Self::remove_node(current.left.take(), mileage, registration);
        } else if mileage > current.vehicle.mileage {
            current.right = Self::remove_node(current.right.take(), mileage, registration);
        } else if current.vehicle.registration == registration {
            return match (current.left.take(), current.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (left, Some(right)) => {
                    current.left = left;
                    let successor = Self::min_vehicle(&right).clone();
                    current.right = Self::remove_node(
                        Some(right),
                        successor.mileage,
                        &successor.registration,
                    );
                    current.vehicle = successor;
                    Some(current)
                }
            };
        } else {
            // Same mileage, different vehicle: search both subtrees.
            current.left = Self::remove_node(current.left.take(), mileage, registration);
            current.right = Self::remove_node(current.right.take(), mileage, registration);
        }
        Some(current)
    }

    /// Leftmost vehicle of a subtree (the in-order minimum).
    fn min_vehicle(node: &Node) -> &Vehicle {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.vehicle
    }

    /// Snapshot of every vehicle in ascending mileage order.
    ///
    /// This in-order traversal is the canonical snapshot for reporting,
    /// sorting and persistence.
    pub fn all_vehicles(&self) -> Vec<Vehicle> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_in_order(self.root.as_deref(), &mut out);
        out
    }

    fn collect_in_order(node: Option<&Node>, out: &mut Vec<Vehicle>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), out);
            out.push(node.vehicle.clone());
            Self::collect_in_order(node.right.as_deref(), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::VehicleCategory;

    fn vehicle(registration: &str, mileage: u32) -> Vehicle {
        Vehicle::new(registration, VehicleCategory::Truck, mileage, 10.0)
    }

    fn mileages(tree: &VehicleTree) -> Vec<u32> {
        tree.all_vehicles().iter().map(|v| v.mileage).collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = VehicleTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.all_vehicles().is_empty());
        assert!(tree.search_by_mileage(10).is_none());
        assert!(tree.search_by_registration("V1").is_none());
    }

    #[test]
    fn test_in_order_is_sorted() {
        let mut tree = VehicleTree::new();
        for (i, m) in [50, 30, 70, 20, 40, 60, 80].iter().enumerate() {
            tree.insert(vehicle(&format!("V{}", i), *m));
        }
        assert_eq!(mileages(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_search_by_mileage() {
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("V1", 50));
        tree.insert(vehicle("V2", 30));
        tree.insert(vehicle("V3", 70));

        assert_eq!(tree.search_by_mileage(30).unwrap().registration, "V2");
        assert!(tree.search_by_mileage(31).is_none());
    }

    #[test]
    fn test_search_by_registration() {
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("V1", 50));
        tree.insert(vehicle("V2", 30));
        tree.insert(vehicle("V3", 70));

        assert_eq!(tree.search_by_registration("V3").unwrap().mileage, 70);
        assert!(tree.search_by_registration("V9").is_none());
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("V1", 50));
        tree.insert(vehicle("V2", 30));

        assert!(tree.remove("V2"));
        assert_eq!(mileages(&tree), vec![50]);
        assert!(tree.search_by_registration("V2").is_none());
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("V1", 50));
        tree.insert(vehicle("V2", 30));
        tree.insert(vehicle("V3", 20));

        // 30 has only a left child (20)
        assert!(tree.remove("V2"));
        assert_eq!(mileages(&tree), vec![20, 50]);
    }

    #[test]
    fn test_remove_node_with_two_children_uses_successor() {
        let mut tree = VehicleTree::new();
        for (reg, m) in [("V50", 50), ("V30", 30), ("V70", 70), ("V60", 60), ("V80", 80)] {
            tree.insert(vehicle(reg, m));
        }

        // Removing the root (50): its in-order successor 60 takes its place.
        assert!(tree.remove("V50"));
        assert_eq!(mileages(&tree), vec![30, 60, 70, 80]);
        assert_eq!(tree.len(), 4);
        assert!(tree.search_by_registration("V50").is_none());
        assert!(tree.search_by_registration("V60").is_some());
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("V1", 50));
        assert!(!tree.remove("V9"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_duplicate_mileage_picks_right_vehicle() {
        // Three vehicles share mileage 50; ties go right on insert, so
        // the descent by key alone cannot distinguish them.
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("A", 50));
        tree.insert(vehicle("B", 50));
        tree.insert(vehicle("C", 50));
        tree.insert(vehicle("D", 30));

        assert!(tree.remove("B"));
        assert_eq!(tree.len(), 3);
        assert!(tree.search_by_registration("B").is_none());
        assert!(tree.search_by_registration("A").is_some());
        assert!(tree.search_by_registration("C").is_some());
        assert_eq!(mileages(&tree), vec![30, 50, 50]);
    }

    #[test]
    fn test_remove_duplicate_after_tree_reshape() {
        // Removing a node reshapes the tree, so a later duplicate-key
        // removal has to check both subtrees of the first match: insert
        // 50(A), 50(B), 40(C); removing A promotes B to the root with C
        // on its left; a fresh 50(D) then lands right of B.
        let mut tree = VehicleTree::new();
        tree.insert(vehicle("A", 50));
        tree.insert(vehicle("B", 50));
        tree.insert(vehicle("C", 40));
        assert!(tree.remove("A"));
        tree.insert(vehicle("D", 50));

        // Both B and D carry mileage 50; removing each must succeed
        // regardless of which side of the other it landed on.
        assert!(tree.remove("D"));
        assert!(tree.remove("B"));
        assert_eq!(mileages(&tree), vec![40]);
    }

    #[test]
    fn test_sequential_inserts_still_correct() {
        // Adversarial sorted order degrades the tree to a list; operations
        // stay correct, just slower.
        let mut tree = VehicleTree::new();
        for m in 0..100 {
            tree.insert(vehicle(&format!("V{}", m), m));
        }
        assert_eq!(tree.len(), 100);
        assert_eq!(mileages(&tree), (0..100).collect::<Vec<_>>());
        assert!(tree.remove("V57"));
        assert_eq!(tree.len(), 99);
        assert!(tree.search_by_mileage(57).is_none());
    }
}
