/// Binary codec: tags, decoding, encoding, gzip wrapping.
pub mod codec;
/// Named root tag with file load/save entry points.
pub mod document;
/// Common error types: decoding, encoding, tag inference.
pub mod error;
/// Classic `TAG_Kind('name'): value` text dump.
pub mod pretty;
/// In-memory tree of decoded values.
pub mod tree;
/// Alpha-format world folder layout and chunk IO.
pub mod world;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Wire-level reading, writing and the gzip wrapper.
pub use codec::{
    compress_block, decompress_block, read_payload, read_root, write_payload, write_root, TagKind,
};
/// A whole named tree.
pub use document::Document;
/// Operation errors and result type.
pub use error::{NbtError, NbtResult};
/// Tree building blocks: values, compounds, lists.
pub use tree::{Compound, List, Value};
/// World folder paths and coordinate encoding.
pub use world::{from_base36, to_base36, WorldFolder};
