
/// Instruction word decoding.
pub mod decode;
