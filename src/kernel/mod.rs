// SPDX-License-Identifier: MIT

pub mod intersection;
pub mod orientation;
pub mod predicates;
pub mod triangle;

pub use intersection::{interpolate, line_intersection_parameters};
pub use orientation::{orientation, orientation_sign};
