use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Span {
        Span { start, end }
    }

    pub fn at_range(source: &Arc<Source>, range: std::ops::Range<usize>) -> Span {
        Span::new(
            Location::at_offset(source, range.start),
            Location::at_offset(source, range.end),
        )
    }

    pub fn at_end_of(source: &Arc<Source>) -> Span {
        let end = Location::at_end_of(source);
        Span::new(end.clone(), end)
    }

    pub fn len(&self) -> usize {
        if self.end.offset < self.start.offset {
            0
        } else {
            self.end.offset - self.start.offset
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
