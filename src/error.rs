use core::fmt;
use grid_util::point::Point;

/// Failure of a path query.
///
/// [OutOfBounds](PathError::OutOfBounds) is a caller error and is reported before any search
/// state is touched. [NoPathFound](PathError::NoPathFound) is the normal outcome for a goal that
/// is disconnected from the start under the current walkability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    NoPathFound {
        start: Point,
        goal: Point,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "{} lies outside the {}x{} grid", point, width, height),
            PathError::NoPathFound { start, goal } => {
                write!(f, "no path from {} to {}", start, goal)
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_coordinates() {
        let err = PathError::OutOfBounds {
            point: Point::new(5, -1),
            width: 5,
            height: 5,
        };
        assert!(err.to_string().contains("5x5"));
        let err = PathError::NoPathFound {
            start: Point::new(0, 0),
            goal: Point::new(2, 2),
        };
        assert_ne!(
            err,
            PathError::OutOfBounds {
                point: Point::new(0, 0),
                width: 1,
                height: 1
            }
        );
    }
}
