//! Various unsorted geometrical and logical operators.

pub use self::orthonormal::{
    hyperplane_normal, orthonormal_complement, orthonormalize, orthonormalize_extend,
    project_onto_basis, Basis,
};

mod orthonormal;
