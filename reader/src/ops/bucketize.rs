use crate::internal::*;

/// Turn the serialized `output_type` token of a Bucketize node into a
/// `DatumType`.
///
/// Nodes from the extension opset carry their own typing and are left
/// alone. An unknown token is an error, reported before anything is
/// written.
pub fn bucketize(node: &mut Node) -> IrResult<()> {
    if node.get_opset() == Some(EXTENSION_OPSET) {
        trace!("{} is an extension, keeping output_type as is", node);
        return Ok(());
    }
    let dt = match node.get_attr("output_type")? {
        Attr::String(token) => destination_type_to_datum_type(token)?,
        Attr::DatumType(_) => return Ok(()),
        other => bail!(
            "Expected a destination type token for output_type, got {} {}",
            other.kind(),
            other
        ),
    };
    node.set_attr("output_type", dt);
    Ok(())
}
