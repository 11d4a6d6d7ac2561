//! Host types shared by the unit tests.

use crate::error::InvalidArgumentError;
use crate::immutable::{Construct, Draft};

#[derive(Debug, Clone)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

crate::impl_value_object!(Point { x, y });

impl Construct for Point {
    fn construct(draft: &mut Draft<Self>) -> Result<Self, InvalidArgumentError> {
        let x: i32 = draft.take("x")?;
        let y: i32 = draft.take("y")?;
        if x < 0 {
            return Err(InvalidArgumentError::out_of_range("x", x.into(), 0, i32::MAX.into()));
        }
        Ok(Self::new(x, y))
    }
}

/// Same shape as [`Point`], different concrete type.
#[derive(Debug, Clone)]
pub struct Offset {
    x: i32,
    y: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

crate::impl_value_object!(Offset { x, y });

#[derive(Debug, Clone)]
pub struct Segment {
    from: Point,
    to: Point,
    label: String,
}

impl Segment {
    pub fn new(from: Point, to: Point, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: label.into(),
        }
    }
}

crate::impl_value_object!(Segment { from, to, label });
