#![allow(non_snake_case)]

mod core;
mod matrix_math;
