use crate::internal::*;

/// Entry point called by the IR deserializer on each node it builds.
#[derive(Clone, Debug)]
pub struct IrReader {
    pub extenders: ExtenderRegister,
}

impl Default for IrReader {
    fn default() -> IrReader {
        let mut extenders = ExtenderRegister::default();
        crate::ops::register_all_ops(&mut extenders);
        IrReader { extenders }
    }
}

impl IrReader {
    pub fn with_extender(mut self, kind: impl Into<String>, extend: Extend) -> IrReader {
        self.extenders.insert(kind, extend);
        self
    }

    pub fn with_register(mut self, register: ExtenderRegister) -> IrReader {
        self.extenders.merge(register);
        self
    }

    pub fn extender_for(&self, kind: &str) -> Option<Extend> {
        self.extenders.get(kind)
    }

    /// Run the extender registered for the node kind, if any.
    ///
    /// Nodes without an extender are left untouched.
    pub fn extend(&self, node: &mut Node) -> IrResult<()> {
        let Some(extend) = self.extender_for(&node.op) else {
            trace!("No extender for {}", node);
            return Ok(());
        };
        debug!("Extending {}", node);
        (extend)(node).with_context(|| format!("Extending {}", node))
    }
}
