// Corpus loaders: the file-backed inputs of the fusion stage.
//
// Everything here is produced by earlier pipeline stages: the embedding
// trainer, the PLM encoder, and the context-ensemble ranker. This module
// only parses; it never writes.

pub mod candidates;
pub mod embeddings;
pub mod evidence;
pub mod seeds;

pub use embeddings::TermVectorMap;
pub use evidence::{EvidenceRecord, EvidenceStore};
pub use seeds::SeedGroup;
