// SPDX-License-Identifier: MIT

//!
//! Points
//!

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type Size = Point;
pub type Position = Point;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
