//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # rowmatrix
//!
//! Elementwise algebra core for row-based parameter matrices.
//!
//! A [`RowMatrix`] is an ordered array of independently stored row vectors
//! (dense or sparse), tagged with the shard id and clock of the parameter
//! partition it represents. Arithmetic against scalars, single rows,
//! broadcast vectors and other matrices all routes through one
//! descriptor-driven dispatch layer, see [`kernels::routing::dispatch`].
//!
//! ### Features
//! - `sparse` *(default)*: the [`SparseVector`] row storage strategy.
//! - `parallel_proc`: per-row dispatch loops on *Rayon*.

pub mod enums {
    pub mod error;
    pub mod operators;
    pub mod row_slot;
    pub mod shape_dim;
}

pub mod structs {
    pub mod vectors {
        pub mod dense;
        #[cfg(feature = "sparse")]
        pub mod sparse;
    }
    pub mod row_matrix;
}

pub mod kernels {
    pub mod aggregate;
    pub mod routing;
}

pub mod traits {
    pub mod print;
    pub mod row_vector;
    pub mod shape;
    pub mod type_unions;
}

pub use enums::error::MatrixError;
pub use enums::operators::{Binary, BinaryKind, OpMode, Unary, UnaryKind};
pub use enums::row_slot::RowSlot;
pub use enums::shape_dim::ShapeDim;
pub use kernels::routing::{Calculated, Operand};
pub use structs::row_matrix::RowMatrix;
pub use structs::vectors::dense::DenseVector;
#[cfg(feature = "sparse")]
pub use structs::vectors::sparse::SparseVector;
pub use traits::print::Print;
pub use traits::row_vector::RowVector;
pub use traits::shape::Shape;
pub use traits::type_unions::Float;
