use crate::internal::*;
use itertools::Itertools;
use std::collections::HashMap;

/// Opset of operators defined outside of the standard opsets. Their
/// attributes are provided already typed and must not be reinterpreted.
pub const EXTENSION_OPSET: &str = "extension";

/// Post-processing applied to a node of a given kind right after it has
/// been deserialized.
pub type Extend = fn(&mut Node) -> IrResult<()>;

#[derive(Clone, Default)]
pub struct ExtenderRegister(pub HashMap<String, Extend>);

impl ExtenderRegister {
    pub fn insert(&mut self, kind: impl Into<String>, extend: Extend) {
        let kind = kind.into();
        if self.0.insert(kind.clone(), extend).is_some() {
            debug!("Overriding extender for {}", kind);
        }
    }

    pub fn get(&self, kind: &str) -> Option<Extend> {
        self.0.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str()).sorted()
    }

    pub fn merge(&mut self, other: ExtenderRegister) {
        for (kind, extend) in other.0 {
            self.insert(kind, extend);
        }
    }
}

impl std::fmt::Debug for ExtenderRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ExtenderRegister({})", self.kinds().join(", "))
    }
}

/// Make sure `attr` holds a list, wrapping a scalar value if needed.
pub fn attr_to_list(node: &mut Node, attr: &str) {
    if !node.has_valid(attr) {
        warn!("{} has no attribute {}, leaving it as is", node, attr);
        return;
    }
    if let Some(value) = node.attrs.get_mut(attr) {
        if !value.is_list() {
            let scalar = std::mem::replace(value, Attr::List(vec![]));
            *value = Attr::List(vec![scalar]);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn noop(_node: &mut Node) -> IrResult<()> {
        Ok(())
    }

    fn rename(node: &mut Node) -> IrResult<()> {
        node.name.push_str("_renamed");
        Ok(())
    }

    #[test]
    fn register_lookup() {
        let mut reg = ExtenderRegister::default();
        reg.insert("Relu", noop);
        reg.insert("Bucketize", noop);
        assert!(reg.contains("Relu"));
        assert!(!reg.contains("relu"));
        assert!(reg.get("Sigmoid").is_none());
        assert_eq!(reg.kinds().collect::<Vec<_>>(), vec!["Bucketize", "Relu"]);
        assert_eq!(format!("{:?}", reg), "ExtenderRegister(Bucketize, Relu)");
    }

    #[test]
    fn register_override() {
        let mut reg = ExtenderRegister::default();
        reg.insert("Relu", noop);
        let mut other = ExtenderRegister::default();
        other.insert("Relu", rename);
        reg.merge(other);
        let mut node = Node::new("r", "Relu");
        (reg.get("Relu").unwrap())(&mut node).unwrap();
        assert_eq!(node.name, "r_renamed");
    }

    #[test]
    fn scalar_to_list() {
        let mut node = Node::new("p", "Pad").with_attr("pads", 2i64);
        attr_to_list(&mut node, "pads");
        assert_eq!(node.get_attr("pads").unwrap(), &Attr::List(vec![Attr::Int(2)]));
    }

    #[test]
    fn list_stays_list() {
        let mut node = Node::new("p", "Pad").with_attr("pads", vec![1i64, 2]);
        let before = node.clone();
        attr_to_list(&mut node, "pads");
        assert_eq!(node, before);
    }

    #[test]
    fn missing_attr_is_left_alone() {
        crate::setup_test_logger();
        let mut node = Node::new("p", "Pad");
        let before = node.clone();
        attr_to_list(&mut node, "pads");
        assert_eq!(node, before);
    }
}
