//! Taxonomy lookup for sequences that went through a gene caller.
//!
//! A [`TaxonomyIndex`] is built once per taxonomy file (tab-separated,
//! identifier then taxonomy string) and queried per sequence during result
//! annotation. Keys are normalized with
//! [`strip_orf_suffix`](crate::utils::orf::strip_orf_suffix) at build time,
//! bridging the identifier-space mismatch the gene caller introduces.
//!
//! [`TaxonomyIndex`]: index::TaxonomyIndex

pub mod index;
