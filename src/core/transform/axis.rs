use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAxisError {
    pub label: String,
}

impl fmt::Display for InvalidAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "axis must be either \"x\" or \"y\", got \"{}\"",
            self.label
        )
    }
}

impl Error for InvalidAxisError {}

/// Screen axes. `Horizontal` maps to the real part, `Vertical` to the
/// imaginary part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }
}

impl FromStr for Axis {
    type Err = InvalidAxisError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "x" => Ok(Self::Horizontal),
            "y" => Ok(Self::Vertical),
            _ => Err(InvalidAxisError {
                label: label.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_labels() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::Horizontal));
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Vertical));
    }

    #[test]
    fn test_rejects_unknown_labels() {
        for label in ["z", "", "X", "horizontal"] {
            assert_eq!(
                label.parse::<Axis>(),
                Err(InvalidAxisError {
                    label: label.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_label_round_trip() {
        for &axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
        }
    }

    #[test]
    fn test_invalid_axis_display() {
        let err = "z".parse::<Axis>().unwrap_err();
        assert_eq!(err.to_string(), "axis must be either \"x\" or \"y\", got \"z\"");
    }
}
