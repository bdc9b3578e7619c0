// SPDX-License-Identifier: MIT

//! Fixed-dimension linear algebra and computational geometry kernel.
//!
//! Dense matrices and vectors with compile-time dimensions, affine
//! transform builders, cofactor-expansion determinants and inverses, and a
//! layer of geometric primitives (intervals, regions, lines/rays/segments,
//! circles, polygons) with the predicates and constructions built on them.
//!
//! Every operation is a pure function of its inputs; absent numeric
//! results (singular matrix, degenerate geometry) come back as `None`,
//! while structural misuse (out-of-range indices) panics.

pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;
