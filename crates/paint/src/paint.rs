use valueobject_core::{impl_value_object, Construct, Draft, InvalidArgumentError};

const MIN_CHANNEL: i64 = 0;
const MAX_CHANNEL: i64 = 255;

/// Screen paint: red, green and blue portions in `0..=255`. No CMYK.
#[derive(Debug, Clone)]
pub struct Paint {
    red: u8,
    green: u8,
    blue: u8,
}

impl_value_object!(Paint { red, green, blue });

impl Paint {
    /// Creates a paint, rejecting any channel outside `0..=255`.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, InvalidArgumentError> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Mixes two paints into a new one: the per-channel integer average,
    /// truncated toward zero.
    pub fn mix(&self, other: &Paint) -> Paint {
        Paint {
            red: average(self.red, other.red),
            green: average(self.green, other.green),
            blue: average(self.blue, other.blue),
        }
    }
}

impl Construct for Paint {
    fn construct(draft: &mut Draft<Self>) -> Result<Self, InvalidArgumentError> {
        Paint::new(draft.take("red")?, draft.take("green")?, draft.take("blue")?)
    }
}

impl core::fmt::Display for Paint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

fn channel(field: &'static str, value: i64) -> Result<u8, InvalidArgumentError> {
    u8::try_from(value).map_err(|_| {
        tracing::debug!(field, value, "paint channel out of range");
        InvalidArgumentError::out_of_range(field, value, MIN_CHANNEL, MAX_CHANNEL)
    })
}

fn average(a: u8, b: u8) -> u8 {
    // The sum of two u8 halved always fits back into a u8.
    ((u16::from(a) + u16::from(b)) / 2) as u8
}
