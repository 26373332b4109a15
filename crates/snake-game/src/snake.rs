//! Snake body and movement rules.
//!
//! The body is an ordered list of grid cells, head first. Movement shifts every
//! segment onto its predecessor's cell and steps the head one cell in the
//! current direction, wrapping around the square grid `[-bound, bound]`.

use std::fmt;

/// One grid cell occupied by the snake.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake's head.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    /// A snake needs at least a head.
    Empty,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::Empty => write!(f, "snake must have at least one segment"),
        }
    }
}

impl std::error::Error for SnakeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrowError {
    /// Growth anchors on the third segment, which does not exist yet.
    TooShort { len: usize },
}

impl fmt::Display for GrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowError::TooShort { len } => write!(
                f,
                "cannot grow a snake of {len} segment(s); at least {GROW_ANCHOR_MIN_LEN} are required"
            ),
        }
    }
}

impl std::error::Error for GrowError {}

/// Index of the segment new segments are placed behind.
const GROW_ANCHOR: usize = 2;
const GROW_ANCHOR_MIN_LEN: usize = GROW_ANCHOR + 1;

/// The segment store.
///
/// Invariant: never empty. Segments are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Segment>,
    bound: i32,
}

impl Snake {
    /// Creates a snake from head-first segments on a grid wrapping at `±bound`.
    pub fn new(segments: Vec<Segment>, bound: i32) -> Result<Self, SnakeError> {
        if segments.is_empty() {
            return Err(SnakeError::Empty);
        }
        debug_assert!(bound > 0);
        Ok(Self { segments, bound })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> Segment {
        debug_assert!(!self.segments.is_empty(), "snake lost its head");
        self.segments.first().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Moves the snake one cell.
    ///
    /// Every segment takes its predecessor's old cell, walking from the tail
    /// toward the head so no cell is overwritten before it is copied. The head
    /// then steps once in `direction`.
    pub fn advance(&mut self, direction: Direction) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let bound = self.bound;
        let head = &mut self.segments[0];
        match direction {
            Direction::Right => head.x = step_up(head.x, bound),
            Direction::Left => head.x = step_down(head.x, bound),
            Direction::Up => head.y = step_up(head.y, bound),
            Direction::Down => head.y = step_down(head.y, bound),
        }
    }

    /// Appends a segment one cell below the third segment and returns it.
    ///
    /// The anchor is fixed at index 2 regardless of where the tail is.
    pub fn grow(&mut self) -> Result<Segment, GrowError> {
        let anchor = self
            .segments
            .get(GROW_ANCHOR)
            .copied()
            .ok_or(GrowError::TooShort { len: self.segments.len() })?;

        let added = Segment::new(anchor.x, anchor.y - 1);
        self.segments.push(added);
        Ok(added)
    }
}

// Reaching the positive edge re-enters at the negative edge and vice versa.
fn step_up(v: i32, bound: i32) -> i32 {
    let v = v + 1;
    if v >= bound { -bound } else { v }
}

fn step_down(v: i32, bound: i32) -> i32 {
    let v = v - 1;
    if v <= -bound { bound } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: i32 = 25;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::new(cells.iter().map(|&(x, y)| Segment::new(x, y)).collect(), BOUND).unwrap()
    }

    fn cells(s: &Snake) -> Vec<(i32, i32)> {
        s.segments().iter().map(|s| (s.x, s.y)).collect()
    }

    const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn empty_snake_is_rejected() {
        assert_eq!(Snake::new(Vec::new(), BOUND), Err(SnakeError::Empty));
    }

    #[test]
    fn head_is_first_segment() {
        let s = snake(&[(4, -2), (3, -2)]);
        assert_eq!(s.head(), Segment::new(4, -2));
        assert_eq!(s.head(), s.segments()[0]);
    }

    #[test]
    fn default_direction_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn advance_right_from_start() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0)]);
        s.advance(Direction::Right);
        assert_eq!(cells(&s), vec![(1, 0), (0, 0), (-1, 0)]);
    }

    #[test]
    fn body_follows_predecessor_in_every_direction() {
        for d in ALL {
            let mut s = snake(&[(3, 4), (3, 3), (2, 3), (2, 2)]);
            let before = s.segments().to_vec();
            s.advance(d);
            for i in 1..s.len() {
                assert_eq!(s.segments()[i], before[i - 1], "direction {d:?}, segment {i}");
            }
        }
    }

    #[test]
    fn head_moves_one_cell_on_one_axis() {
        let cases = [
            (Direction::Right, (1, 0)),
            (Direction::Left, (-1, 0)),
            (Direction::Up, (0, 1)),
            (Direction::Down, (0, -1)),
        ];
        for (d, (dx, dy)) in cases {
            let mut s = snake(&[(5, -7)]);
            s.advance(d);
            assert_eq!(s.head(), Segment::new(5 + dx, -7 + dy), "direction {d:?}");
        }
    }

    #[test]
    fn single_segment_snake_advances() {
        let mut s = snake(&[(0, 0)]);
        s.advance(Direction::Up);
        assert_eq!(cells(&s), vec![(0, 1)]);
    }

    #[test]
    fn repeated_ticks_accumulate() {
        let mut s = snake(&[(0, 3), (-1, 3)]);
        for _ in 0..10 {
            s.advance(Direction::Right);
        }
        assert_eq!(s.head(), Segment::new(10, 3));
        assert_eq!(s.segments()[1], Segment::new(9, 3));
    }

    #[test]
    fn reversal_folds_onto_body() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0)]);
        s.advance(Direction::Left);
        assert_eq!(cells(&s), vec![(-1, 0), (0, 0), (-1, 0)]);
    }

    // ── wrap ──────────────────────────────────────────────────────────────

    #[test]
    fn positive_edge_wraps_to_negative() {
        let mut s = snake(&[(23, 0)]);
        s.advance(Direction::Right);
        assert_eq!(s.head(), Segment::new(24, 0));
        s.advance(Direction::Right);
        assert_eq!(s.head(), Segment::new(-25, 0));
    }

    #[test]
    fn negative_edge_wraps_to_positive() {
        let mut s = snake(&[(0, -24)]);
        s.advance(Direction::Down);
        assert_eq!(s.head(), Segment::new(0, 25));
    }

    #[test]
    fn wrapped_head_keeps_moving_inward() {
        let mut s = snake(&[(0, -24)]);
        s.advance(Direction::Down);
        s.advance(Direction::Down);
        assert_eq!(s.head(), Segment::new(0, 24));
    }

    #[test]
    fn head_on_far_edge_wraps_instead_of_escaping() {
        // 25 is only reachable through the negative wrap; stepping outward from it
        // must not leave the grid.
        let mut s = snake(&[(-24, 0)]);
        s.advance(Direction::Left);
        assert_eq!(s.head(), Segment::new(25, 0));
        s.advance(Direction::Right);
        assert_eq!(s.head(), Segment::new(-25, 0));
    }

    #[test]
    fn full_lap_stays_in_range() {
        let mut s = snake(&[(0, 0), (0, -1), (0, -2)]);
        for d in ALL {
            for _ in 0..120 {
                s.advance(d);
                for seg in s.segments() {
                    assert!((-BOUND..=BOUND).contains(&seg.x), "{seg:?}");
                    assert!((-BOUND..=BOUND).contains(&seg.y), "{seg:?}");
                }
            }
        }
    }

    #[test]
    fn lap_of_fifty_returns_to_start() {
        let mut s = snake(&[(0, 0)]);
        for _ in 0..50 {
            s.advance(Direction::Up);
        }
        assert_eq!(s.head(), Segment::new(0, 0));
    }

    // ── grow ──────────────────────────────────────────────────────────────

    #[test]
    fn grow_appends_below_third_segment() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0)]);
        assert_eq!(s.grow(), Ok(Segment::new(-2, -1)));
        assert_eq!(cells(&s), vec![(0, 0), (-1, 0), (-2, 0), (-2, -1)]);
    }

    #[test]
    fn grow_anchors_on_third_segment_not_tail() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0), (-3, 0), (-4, 0)]);
        s.grow().unwrap();
        assert_eq!(s.segments().last(), Some(&Segment::new(-2, -1)));
    }

    #[test]
    fn repeated_growth_stacks_on_same_cell() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0)]);
        for n in 1..=5 {
            s.grow().unwrap();
            assert_eq!(s.len(), 3 + n);
        }
        assert!(s.segments()[3..].iter().all(|seg| *seg == Segment::new(-2, -1)));
    }

    #[test]
    fn grow_on_short_snake_is_refused() {
        let mut s = snake(&[(0, 0), (-1, 0)]);
        assert_eq!(s.grow(), Err(GrowError::TooShort { len: 2 }));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn grown_segment_follows_after_advance() {
        let mut s = snake(&[(0, 0), (-1, 0), (-2, 0)]);
        s.grow().unwrap();
        s.advance(Direction::Right);
        assert_eq!(cells(&s), vec![(1, 0), (0, 0), (-1, 0), (-2, 0)]);
    }

    #[test]
    fn grow_error_message_names_length() {
        let msg = GrowError::TooShort { len: 1 }.to_string();
        assert!(msg.contains("1 segment"));
    }
}
