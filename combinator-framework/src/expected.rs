use common_framework::Location;
use indexmap::IndexSet;
use std::cmp::Ordering;

/// What the parser was looking for at the furthest point it reached.
///
/// Names are kept in the order they were first seen, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected<P> {
    position: P,
    names: IndexSet<String>,
}

impl<P: Location> Expected<P> {
    pub fn new<N, It>(position: P, names: It) -> Self
    where
        N: Into<String>,
        It: IntoIterator<Item = N>,
    {
        Self {
            position,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn position(&self) -> P {
        self.position
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names.into_iter().collect()
    }

    /// Combines this set with one produced by a later attempt.
    ///
    /// Whichever got further wins outright. On a tie the names are unioned,
    /// keeping this set's names first.
    pub fn absorb(mut self, later: Self) -> Self {
        match later.position.offset().cmp(&self.position.offset()) {
            Ordering::Greater => later,
            Ordering::Equal => {
                self.names.extend(later.names);
                self
            }
            Ordering::Less => self,
        }
    }

    /// [`Expected::absorb`] lifted over optional sets, where `None` means no
    /// failure has been seen yet.
    pub fn merge(earlier: Option<Self>, later: Option<Self>) -> Option<Self> {
        match (earlier, later) {
            (Some(earlier), Some(later)) => Some(earlier.absorb(later)),
            (earlier, None) => earlier,
            (None, later) => later,
        }
    }
}
